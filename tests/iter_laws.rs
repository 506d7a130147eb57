#![cfg(all(feature = "iter", feature = "sort"))]
//! Property-based tests for the iterator combinators and comparators.

use proptest::prelude::*;
use utilkit::iter::{
    all_duplicates, chunk, chunk_iter, duplicates, first_index_of_last_group, frequency_table,
    last_index_of_first_group, partition, unique,
};
use utilkit::sort::{ascending, descending, is_sorted};

// =============================================================================
// Chunk Laws
// Description: concatenation reproduces the input; all chunks but the last
// have exactly `size` elements
// =============================================================================

proptest! {
    #[test]
    fn prop_chunk_concat_law(values in prop::collection::vec(any::<i16>(), 0..60), size in 1_usize..10) {
        let chunks = chunk(&values, size).unwrap();
        prop_assert_eq!(chunks.concat(), values.clone());

        if let Some((last, rest)) = chunks.split_last() {
            prop_assert!(rest.iter().all(|piece| piece.len() == size));
            prop_assert!(!last.is_empty() && last.len() <= size);
        } else {
            prop_assert!(values.is_empty());
        }
    }

    #[test]
    fn prop_chunk_iter_matches_chunk(values in prop::collection::vec(any::<i16>(), 0..60), size in 1_usize..10) {
        let lazy: Vec<Vec<i16>> = chunk_iter(values.clone(), size).unwrap().collect();
        prop_assert_eq!(lazy, chunk(&values, size).unwrap());
    }
}

// =============================================================================
// Partition Law
// Description: every element lands in exactly one side, in input order
// =============================================================================

proptest! {
    #[test]
    fn prop_partition_law(values in prop::collection::vec(any::<i32>(), 0..60), modulus in 1_i32..5) {
        let (matching, rest) = partition(values.clone(), |value, _| value.rem_euclid(modulus) == 0);

        prop_assert_eq!(matching.len() + rest.len(), values.len());
        let expected_matching: Vec<i32> =
            values.iter().copied().filter(|value| value.rem_euclid(modulus) == 0).collect();
        let expected_rest: Vec<i32> =
            values.iter().copied().filter(|value| value.rem_euclid(modulus) != 0).collect();
        prop_assert_eq!(matching, expected_matching);
        prop_assert_eq!(rest, expected_rest);
    }

    #[test]
    fn prop_partition_by_index_law(values in prop::collection::vec(any::<u8>(), 0..40)) {
        let (even, odd) = partition(values.clone(), |_, index| index % 2 == 0);
        prop_assert_eq!(even.len(), values.len().div_ceil(2));
        prop_assert_eq!(odd.len(), values.len() / 2);
    }
}

// =============================================================================
// Duplicate Laws
// Description: unique + all_duplicates account for every element;
// frequency counts sum to the length
// =============================================================================

proptest! {
    #[test]
    fn prop_duplicate_accounting_law(values in prop::collection::vec(0_u8..10, 0..50)) {
        let distinct = unique(values.iter().copied());
        let repeated = all_duplicates(values.iter().copied());
        prop_assert_eq!(distinct.len() + repeated.len(), values.len());

        let table = frequency_table(values.iter().copied());
        prop_assert_eq!(table.values().sum::<usize>(), values.len());
        prop_assert_eq!(table.len(), distinct.len());

        let repeated_set = duplicates(values.iter().copied());
        for (value, count) in &table {
            prop_assert_eq!(repeated_set.contains(value), *count > 1);
        }
    }
}

// =============================================================================
// Run Boundary Laws
// Description: the reported index delimits a maximal run of `target` at the
// end (or start) of the slice
// =============================================================================

proptest! {
    #[test]
    fn prop_trailing_run_boundary(values in prop::collection::vec(0_u8..3, 0..30), target in 0_u8..3) {
        match first_index_of_last_group(&values, &target) {
            Some(start) => {
                prop_assert!(values[start..].iter().all(|value| *value == target));
                prop_assert!(start == 0 || values[start - 1] != target);
            }
            None => prop_assert_ne!(values.last(), Some(&target)),
        }
    }

    #[test]
    fn prop_leading_run_boundary(values in prop::collection::vec(0_u8..3, 0..30), target in 0_u8..3) {
        match last_index_of_first_group(&values, &target) {
            Some(end) => {
                prop_assert!(values[..=end].iter().all(|value| *value == target));
                prop_assert!(end + 1 == values.len() || values[end + 1] != target);
            }
            None => prop_assert_ne!(values.first(), Some(&target)),
        }
    }
}

// =============================================================================
// Comparator Laws
// Description: sorting with a comparator yields a sequence it accepts
// =============================================================================

proptest! {
    #[test]
    fn prop_sorted_by_comparator_is_sorted(mut values in prop::collection::vec(any::<i64>(), 0..60)) {
        values.sort_by(ascending);
        prop_assert!(is_sorted(&values, ascending));
        values.sort_by(descending);
        prop_assert!(is_sorted(&values, descending));
    }
}
