#![no_main]

// Harness: access_table
// Arbitrary tables survive a JSON round trip and lookups never panic.

use arbitrary::Arbitrary;
use ca_access::{AccessRights, AccessTable};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct TableFrame {
    default: (bool, bool),
    channels: Vec<(String, bool, bool)>,
    probe: String,
}

fuzz_target!(|frame: TableFrame| {
    let mut table = AccessTable::new(AccessRights::new(frame.default.0, frame.default.1));
    for (name, read, write) in frame.channels {
        table.insert(name, AccessRights::new(read, write));
    }
    let _ = table.channel(&frame.probe).check_read();

    let json = table.to_json_string().expect("table serializes");
    let back = AccessTable::from_json_str(&json).expect("table deserializes");
    assert_eq!(back, table);
});
