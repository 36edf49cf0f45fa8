//! Property-based tests for OrderedSet laws.
//!
//! These tests verify uniqueness, order preservation and the set algebra
//! identities relating `union`, `intersect` and `difference`.

use orderedset::OrderedSet;
use proptest::prelude::*;

fn first_occurrences(values: &[i16]) -> Vec<i16> {
    let mut seen = std::collections::HashSet::new();
    values
        .iter()
        .copied()
        .filter(|value| seen.insert(*value))
        .collect()
}

// =============================================================================
// Uniqueness Law
// Description: Length equals the number of distinct values added, in
// first-occurrence order
// =============================================================================

proptest! {
    #[test]
    fn prop_uniqueness_law(values in prop::collection::vec(any::<i16>(), 0..100)) {
        let set = OrderedSet::new();
        for value in &values {
            set.add(*value);
        }
        prop_assert_eq!(set.values(), first_occurrences(&values));
    }
}

// =============================================================================
// Order Preservation Law
// Description: a added before b stays before b until one is removed
// =============================================================================

proptest! {
    #[test]
    fn prop_order_preservation_law(
        values in prop::collection::vec(0..50_i16, 2..60),
        removed in prop::collection::vec(0..50_i16, 0..20)
    ) {
        let set: OrderedSet<i16> = values.iter().copied().collect();
        for value in &removed {
            set.remove(value);
        }
        let expected: Vec<i16> = first_occurrences(&values)
            .into_iter()
            .filter(|value| !removed.contains(value))
            .collect();
        prop_assert_eq!(set.values(), expected);
    }
}

// =============================================================================
// Remove/RemoveAt Duality
// Description: remove_at(index_of(x)) removes exactly x
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_at_index_of_duality(
        values in prop::collection::vec(0..30_i16, 1..40),
        target in 0..30_i16
    ) {
        let by_position: OrderedSet<i16> = values.iter().copied().collect();
        let by_value = by_position.clone();

        match by_position.index_of(&target) {
            Some(position) => {
                prop_assert_eq!(by_position.remove_at(position), Some(target));
                by_value.remove(&target);
                prop_assert_eq!(by_position.values(), by_value.values());
            }
            None => {
                let before = by_value.len();
                by_value.remove(&target);
                prop_assert_eq!(by_value.len(), before);
            }
        }
    }
}

// =============================================================================
// Slice Validation Law
// Description: slice fails exactly when to > len or from > to; otherwise it
// matches values()[from..to]
// =============================================================================

proptest! {
    #[test]
    fn prop_slice_law(
        values in prop::collection::vec(any::<i16>(), 0..30),
        from in 0..35_usize,
        to in 0..35_usize
    ) {
        let set: OrderedSet<i16> = values.into_iter().collect();
        let snapshot = set.values();
        match set.slice(from, to) {
            Ok(sliced) => {
                prop_assert!(to <= snapshot.len() && from <= to);
                prop_assert_eq!(sliced.len(), to - from);
                prop_assert_eq!(sliced.values(), snapshot[from..to].to_vec());
            }
            Err(_) => prop_assert!(to > snapshot.len() || from > to),
        }
    }
}

// =============================================================================
// Set Algebra Laws
// Description: membership of derived sets follows the boolean definitions,
// and |A ∪ B| = |A| + |B \ A|
// =============================================================================

proptest! {
    #[test]
    fn prop_set_algebra_membership_law(
        left in prop::collection::vec(0..40_i16, 0..30),
        right in prop::collection::vec(0..40_i16, 0..30)
    ) {
        let left: OrderedSet<i16> = left.into_iter().collect();
        let right: OrderedSet<i16> = right.into_iter().collect();
        let union = left.union(&right);
        let intersection = left.intersect(&right);
        let difference = left.difference(&right);

        for value in 0..40_i16 {
            let in_left = left.has(&value);
            let in_right = right.has(&value);
            prop_assert_eq!(union.has(&value), in_left || in_right);
            prop_assert_eq!(intersection.has(&value), in_left && in_right);
            prop_assert_eq!(difference.has(&value), in_left && !in_right);
        }
        prop_assert_eq!(union.len(), left.len() + right.difference(&left).len());
    }
}

proptest! {
    #[test]
    fn prop_union_identity_law(values in prop::collection::vec(any::<i16>(), 0..50)) {
        let set: OrderedSet<i16> = values.into_iter().collect();
        let empty: OrderedSet<i16> = OrderedSet::new();

        prop_assert_eq!(set.union(&empty), set.clone());
        prop_assert_eq!(empty.union(&set), set);
    }
}

// =============================================================================
// Sort Law
// Description: sorting permutes the sequence without changing membership
// =============================================================================

proptest! {
    #[test]
    fn prop_sort_preserves_membership_law(values in prop::collection::vec(any::<i16>(), 0..60)) {
        let set: OrderedSet<i16> = values.iter().copied().collect();
        let mut expected = set.values();
        expected.sort_unstable();

        set.sort_by(|left, right| left < right);

        prop_assert_eq!(set.values(), expected);
        for value in &values {
            prop_assert!(set.has(value));
        }
    }
}
