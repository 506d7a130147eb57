#![cfg(feature = "set")]
//! Property-based tests for the set algebra laws.

use std::collections::HashSet;

use proptest::prelude::*;
use utilkit::set::{
    difference, intersection, is_disjoint, is_subset, is_superset, jaccard_index,
    symmetric_difference, union,
};

fn small_set() -> impl Strategy<Value = HashSet<u8>> {
    prop::collection::hash_set(0_u8..32, 0..20)
}

// =============================================================================
// Union Size Law
// Description: |a ∪ b| <= |a| + |b|, and both sides are contained
// =============================================================================

proptest! {
    #[test]
    fn prop_union_size_law(a in small_set(), b in small_set()) {
        let combined = union(&a, &b);
        prop_assert!(combined.len() <= a.len() + b.len());
        prop_assert!(is_superset(&combined, &a));
        prop_assert!(is_superset(&combined, &b));
    }
}

// =============================================================================
// Intersection Containment Law
// Description: a ∩ b ⊆ a ∪ b, a ∩ b ⊆ a and a ∩ b ⊆ b
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_containment_law(a in small_set(), b in small_set()) {
        let common = intersection(&a, &b);
        prop_assert!(is_subset(&common, &union(&a, &b)));
        prop_assert!(is_subset(&common, &a));
        prop_assert!(is_subset(&common, &b));
    }
}

// =============================================================================
// Partition Law
// Description: (a \ b) ∪ (b \ a) ∪ (a ∩ b) = a ∪ b, and the parts are disjoint
// =============================================================================

proptest! {
    #[test]
    fn prop_partition_law(a in small_set(), b in small_set()) {
        let only_a = difference(&a, &b);
        let only_b = difference(&b, &a);
        let common = intersection(&a, &b);

        let rebuilt = union(&union(&only_a, &only_b), &common);
        prop_assert_eq!(rebuilt, union(&a, &b));
        prop_assert!(is_disjoint(&only_a, &only_b));
        prop_assert!(is_disjoint(&only_a, &common));
        prop_assert!(is_disjoint(&only_b, &common));
    }
}

// =============================================================================
// Symmetric Difference Law
// Description: a △ b = (a ∪ b) \ (a ∩ b)
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_difference_law(a in small_set(), b in small_set()) {
        let expected = difference(&union(&a, &b), &intersection(&a, &b));
        prop_assert_eq!(symmetric_difference(&a, &b), expected.clone());
        prop_assert_eq!(symmetric_difference(&b, &a), expected);
    }
}

// =============================================================================
// Agreement With std
// Description: results match the standard library's lazy set operations
// =============================================================================

proptest! {
    #[test]
    fn prop_agrees_with_std(a in small_set(), b in small_set()) {
        prop_assert_eq!(union(&a, &b), a.union(&b).copied().collect::<HashSet<_>>());
        prop_assert_eq!(
            intersection(&a, &b),
            a.intersection(&b).copied().collect::<HashSet<_>>()
        );
        prop_assert_eq!(difference(&a, &b), a.difference(&b).copied().collect::<HashSet<_>>());
        prop_assert_eq!(is_subset(&a, &b), a.is_subset(&b));
        prop_assert_eq!(is_disjoint(&a, &b), a.is_disjoint(&b));
    }
}

// =============================================================================
// Jaccard Index Laws
// Description: reflexive, symmetric, bounded, and zero exactly for disjoint sets
// =============================================================================

proptest! {
    #[test]
    fn prop_jaccard_reflexive_law(a in small_set()) {
        prop_assert!((jaccard_index(&a, &a) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn prop_jaccard_symmetric_and_bounded_law(a in small_set(), b in small_set()) {
        let forward = jaccard_index(&a, &b);
        prop_assert!((0.0..=1.0).contains(&forward));
        prop_assert!((forward - jaccard_index(&b, &a)).abs() < f64::EPSILON);
    }

    #[test]
    fn prop_jaccard_zero_iff_disjoint_law(a in small_set(), b in small_set()) {
        let both_empty = a.is_empty() && b.is_empty();
        let zero = jaccard_index(&a, &b) == 0.0;
        prop_assert_eq!(zero, is_disjoint(&a, &b) && !both_empty);
    }
}
