//! Property-based tests for combination laws.
//!
//! These tests verify the aliasing and mutability guarantees of each
//! combination strategy over arbitrary inputs.

#![cfg(feature = "combine")]

use std::collections::HashSet;

use combiner::collection::{Collection, FrozenSequence, FrozenSet, Mutability, Sequence, UniqueSet};
use combiner::combine::{
    materializing_merge, merged_frozen, mutating_merge, read_only_view, view_merge,
};
use proptest::prelude::*;

fn mutability_strategy() -> impl Strategy<Value = Mutability> {
    prop_oneof![Just(Mutability::Mutable), Just(Mutability::Immutable)]
}

// =============================================================================
// Mutating Merge Length Law
// Description: len(r) after merge = len(r) before + len(x); identity kept
// =============================================================================

proptest! {
    #[test]
    fn prop_mutating_merge_length_law(
        receiver_elements in prop::collection::vec(any::<i32>(), 0..50),
        addition_elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let receiver: Sequence<i32> = receiver_elements.iter().copied().collect();
        let alias = receiver.clone();
        let addition: FrozenSequence<i32> = addition_elements.iter().copied().collect();

        mutating_merge(&receiver, &addition).unwrap();

        prop_assert_eq!(receiver.len(), receiver_elements.len() + addition_elements.len());
        prop_assert!(receiver.ptr_eq(&alias));
    }
}

// =============================================================================
// Concatenation Order Law
// Description: every element of A in order, then every element of B in order
// =============================================================================

proptest! {
    #[test]
    fn prop_concatenation_order_law(
        first_elements in prop::collection::vec(any::<i32>(), 0..30),
        second_elements in prop::collection::vec(any::<i32>(), 0..30),
        mutability in mutability_strategy()
    ) {
        let first: Sequence<i32> = first_elements.iter().copied().collect();
        let second: Sequence<i32> = second_elements.iter().copied().collect();
        let expected: Vec<i32> = first_elements.iter().chain(&second_elements).copied().collect();

        let materialized = materializing_merge(&first, &second, mutability);
        let view = view_merge(&first, &second);

        prop_assert_eq!(materialized.to_vec(), expected.clone());
        prop_assert_eq!(view.to_vec(), expected);
    }
}

// =============================================================================
// Union Law
// Description: unique merges contain exactly the set union, without duplicates
// =============================================================================

proptest! {
    #[test]
    fn prop_union_law(
        first_elements in prop::collection::vec(0..40i32, 0..30),
        second_elements in prop::collection::vec(0..40i32, 0..30)
    ) {
        let first: UniqueSet<i32> = first_elements.iter().copied().collect();
        let second: UniqueSet<i32> = second_elements.iter().copied().collect();
        let expected: HashSet<i32> = first_elements.iter().chain(&second_elements).copied().collect();

        let materialized = merged_frozen(&first, &second);
        let view = view_merge(&first, &second);

        for combined in [materialized.to_vec(), view.to_vec()] {
            let as_set: HashSet<i32> = combined.iter().copied().collect();
            prop_assert_eq!(combined.len(), expected.len());
            prop_assert_eq!(&as_set, &expected);
        }
        prop_assert_eq!(view.len(), expected.len());
    }
}

// =============================================================================
// Materialization Independence Law
// Description: mutating an input after the call never changes the result
// =============================================================================

proptest! {
    #[test]
    fn prop_materialization_independence_law(
        first_elements in prop::collection::vec(any::<i32>(), 0..30),
        second_elements in prop::collection::vec(any::<i32>(), 0..30),
        extra in any::<i32>(),
        mutability in mutability_strategy()
    ) {
        let first: Sequence<i32> = first_elements.iter().copied().collect();
        let second: Sequence<i32> = second_elements.iter().copied().collect();

        let merged = materializing_merge(&first, &second, mutability);
        let before = merged.to_vec();

        first.insert(extra);
        second.clear();

        prop_assert_eq!(merged.to_vec(), before);
    }
}

// =============================================================================
// View Freshness Law
// Description: a mutation of an input is visible on the very next read
// =============================================================================

proptest! {
    #[test]
    fn prop_view_freshness_law(
        first_elements in prop::collection::vec(0..100i32, 0..30),
        second_elements in prop::collection::vec(0..100i32, 0..30),
        extra in 100..200i32
    ) {
        let first: UniqueSet<i32> = first_elements.iter().copied().collect();
        let second: UniqueSet<i32> = second_elements.iter().copied().collect();
        let view = view_merge(&first, &second);
        let length_before = view.len();

        first.insert(extra);

        prop_assert!(view.contains(&extra));
        prop_assert_eq!(view.len(), length_before + 1);
    }
}

// =============================================================================
// Frozen Permanence Law
// Description: no sequence of operations makes a later insert succeed
// =============================================================================

proptest! {
    #[test]
    fn prop_frozen_permanence_law(
        elements in prop::collection::vec(any::<i32>(), 0..30),
        attempts in prop::collection::vec(any::<i32>(), 1..20)
    ) {
        let source: UniqueSet<i32> = elements.iter().copied().collect();
        let frozen = materializing_merge(&source, &FrozenSet::empty(), Mutability::Immutable);
        let expected = frozen.to_vec();

        for attempt in attempts {
            source.insert(attempt);
            prop_assert!(frozen.try_insert(attempt).is_err());
            prop_assert!(frozen.try_remove(&attempt).is_err());
            prop_assert!(frozen.try_clear().is_err());
        }
        prop_assert_eq!(frozen.to_vec(), expected);
    }
}

// =============================================================================
// Facade Rejection Law
// Description: facades reject mutation even over mutable sources
// =============================================================================

proptest! {
    #[test]
    fn prop_facade_rejection_law(
        elements in prop::collection::vec(any::<i32>(), 0..30),
        attempt in any::<i32>()
    ) {
        let source: Sequence<i32> = elements.iter().copied().collect();
        let single = read_only_view(&source);
        let pair = view_merge(&source, &source);

        prop_assert!(single.try_insert(attempt).is_err());
        prop_assert!(pair.try_insert(attempt).is_err());
        prop_assert!(single.try_clear().is_err());
        prop_assert_eq!(source.len(), elements.len());
    }
}
