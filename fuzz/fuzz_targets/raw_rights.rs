#![no_main]

// Harness: raw_rights
// Strict and lossy decoding of native access-rights words must agree on the masked bits.

use libfuzzer_sys::fuzz_target;
use ca_access::{rights::AccessRights, types::CA_ACCESS_MASK};

fuzz_target!(|raw: u32| {
    let lossy = AccessRights::from_raw_lossy(raw);
    assert_eq!(lossy.raw(), raw & CA_ACCESS_MASK);
    match AccessRights::try_from(raw) {
        Ok(strict) => assert_eq!(strict, lossy),
        Err(_) => assert_ne!(raw & !CA_ACCESS_MASK, 0),
    }
});
