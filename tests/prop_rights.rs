use proptest::prelude::*;
use ca_access::rights::{canonical_access_rights, AccessRights};
use ca_access::types::{AccessLevel, CA_ACCESS_MASK};

fn arb_rights() -> impl Strategy<Value = AccessRights> {
    (any::<bool>(), any::<bool>()).prop_map(|(r, w)| AccessRights::new(r, w))
}

proptest! {
    /// Strict conversion accepts exactly the words with no bits outside the mask.
    #[test]
    fn prop_try_from_accepts_only_masked_words(raw in any::<u32>()) {
        let result = AccessRights::try_from(raw);
        prop_assert_eq!(result.is_ok(), raw & !CA_ACCESS_MASK == 0);
    }

    /// Lossy conversion keeps exactly the masked bits.
    #[test]
    fn prop_lossy_keeps_masked_bits(raw in any::<u32>()) {
        prop_assert_eq!(AccessRights::from_raw_lossy(raw).raw(), raw & CA_ACCESS_MASK);
    }

    /// `sufficient` agrees with the set intersection: have & need == need.
    #[test]
    fn prop_sufficient_matches_intersection(have in arb_rights(), need in arb_rights()) {
        prop_assert_eq!(have.sufficient(need), (have & need) == need);
        prop_assert_eq!(have.missing(need) == AccessRights::NONE, have.sufficient(need));
    }

    /// Every value classifies into a level that maps back to the same value.
    #[test]
    fn prop_level_round_trip(rights in arb_rights()) {
        let level: AccessLevel = rights.into();
        prop_assert_eq!(AccessRights::from(level), rights);
    }

    /// The factory holds no state: any number of calls return the same four values.
    #[test]
    fn prop_canonical_idempotent(calls in 1usize..16) {
        let first = canonical_access_rights();
        for _ in 0..calls {
            prop_assert_eq!(canonical_access_rights(), first);
        }
    }
}
