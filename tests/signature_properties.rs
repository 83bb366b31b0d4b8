//! Property-based tests for signature matching.
//!
//! Arbitrary buffers must classify without panicking, and the table must
//! behave as an ordered first-match list.

use proptest::prelude::*;

use filetype_probe::matcher::{find_pattern, first_match};
use filetype_probe::{Classifier, SignatureTable};

// =============================================================================
// Classifier
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Buffer classification never panics and never fails.
    #[test]
    fn classify_bytes_never_fails(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let classifier = Classifier::default();
        prop_assert!(classifier.classify_bytes(&data).is_ok());
    }

    /// Classification is deterministic.
    #[test]
    fn classify_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let classifier = Classifier::default();
        let first = classifier.classify_bytes(&data).unwrap();
        let second = classifier.classify_bytes(&data).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The first matching entry matches, and no earlier entry does.
    #[test]
    fn first_match_is_earliest(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let table = SignatureTable::builtin();
        let entries = table.entries();

        match first_match(&data, &table) {
            Some(found) => {
                let index = entries
                    .iter()
                    .position(|e| std::ptr::eq(e, found))
                    .unwrap();
                prop_assert!(found.matches(&data));
                prop_assert!(entries[..index].iter().all(|e| !e.matches(&data)));
            }
            None => prop_assert!(entries.iter().all(|e| !e.matches(&data))),
        }
    }

    /// A valid signature with arbitrary trailing bytes keeps matching something.
    #[test]
    fn signature_prefix_always_matches(
        index in 0usize..64,
        tail in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let table = SignatureTable::builtin();
        let entry = &table.entries()[index % table.len()];

        let mut data = vec![0u8; entry.offset];
        data.extend_from_slice(&entry.pattern);
        data.extend_from_slice(&tail);

        prop_assert!(first_match(&data, &table).is_some());
    }
}

// =============================================================================
// Forward search
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// find_pattern agrees with a naive window scan.
    #[test]
    fn find_pattern_matches_naive_scan(
        data in prop::collection::vec(0u8..4, 0..128),
        pattern in prop::collection::vec(0u8..4, 1..4),
        start in 0usize..160
    ) {
        let naive = if start > data.len() {
            None
        } else {
            data[start..]
                .windows(pattern.len())
                .position(|w| w == pattern.as_slice())
                .map(|pos| start + pos)
        };
        prop_assert_eq!(find_pattern(&data, &pattern, start), naive);
    }
}
