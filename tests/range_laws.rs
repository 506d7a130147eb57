#![cfg(feature = "range")]
//! Property-based tests for `Range` and the sorted-slice searches.

use proptest::prelude::*;
use utilkit::range::{Range, equal_range, indices_within, lower_bound, upper_bound};

// =============================================================================
// Construction Law
// Description: a <= b builds a range containing both ends; a > b always fails
// =============================================================================

proptest! {
    #[test]
    fn prop_construction_law(a: i32, b: i32) {
        match Range::new(a, b) {
            Ok(range) => {
                prop_assert!(a <= b);
                prop_assert!(range.has(&a));
                prop_assert!(range.has(&b));
            }
            Err(_) => prop_assert!(a > b),
        }
    }
}

// =============================================================================
// Relation Laws
// Description: subrange is the converse of superrange; nested ranges intersect
// =============================================================================

proptest! {
    #[test]
    fn prop_relation_laws(mut bounds in prop::array::uniform4(-100_i32..100)) {
        bounds.sort_unstable();
        let outer = Range::new(bounds[0], bounds[3]).unwrap();
        let inner = Range::new(bounds[1], bounds[2]).unwrap();

        prop_assert!(inner.is_subrange(&outer));
        prop_assert!(outer.is_superrange(&inner));
        prop_assert!(inner.intersects(&outer));
        prop_assert!(outer.intersects(&inner));
        prop_assert_eq!(inner.equals(&outer), inner == outer);
    }

    #[test]
    fn prop_membership_matches_bounds(lower in -50_i32..50, width in 0_i32..50, value in -120_i32..120) {
        let range = Range::new(lower, lower + width).unwrap();
        prop_assert_eq!(range.has(&value), (lower..=lower + width).contains(&value));
    }
}

// =============================================================================
// Search Laws
// Description: bounds match the standard partition points
// =============================================================================

proptest! {
    #[test]
    fn prop_bounds_match_partition_point(mut values in prop::collection::vec(0_i32..20, 0..50), target in -2_i32..22) {
        values.sort_unstable();
        prop_assert_eq!(lower_bound(&values, &target), values.partition_point(|value| *value < target));
        prop_assert_eq!(upper_bound(&values, &target), values.partition_point(|value| *value <= target));

        let span = equal_range(&values, &target);
        prop_assert!(values[span].iter().all(|value| *value == target));
    }

    #[test]
    fn prop_indices_within_selects_members(
        mut values in prop::collection::vec(0_i32..40, 0..50),
        lower in 0_i32..40,
        width in 0_i32..20,
    ) {
        values.sort_unstable();
        let range = Range::new(lower, lower + width).unwrap();
        let selected = &values[indices_within(&values, &range)];
        let expected: Vec<i32> = values.iter().copied().filter(|value| range.has(value)).collect();
        prop_assert_eq!(selected.to_vec(), expected);
    }
}
