//! Tests for fast hash feature flags.
//!
//! Unique-element containers hash with the `BuildHasher` chosen by the
//! `fxhash` and `ahash` feature flags. Whatever the hasher, membership,
//! deduplication and insertion order must behave identically.

#![cfg(feature = "combine")]

use combiner::collection::{Collection, DefaultHashBuilder, FrozenSet, UniqueSet};
use combiner::combine::{merged_frozen, view_merge};
use rstest::rstest;
use std::hash::BuildHasher;

// =============================================================================
// Hasher Selection Tests
// =============================================================================

/// The same value hashes identically through one builder.
#[rstest]
fn test_same_value_produces_same_hash() {
    let builder = DefaultHashBuilder::default();
    assert_eq!(builder.hash_one("key"), builder.hash_one("key"));
    assert_eq!(builder.hash_one(42_i32), builder.hash_one(42_i32));
}

#[cfg(feature = "fxhash")]
#[rstest]
fn test_fxhash_is_selected() {
    let name = std::any::type_name::<DefaultHashBuilder>();
    assert!(name.contains("rustc_hash"), "{name}");
}

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
#[rstest]
fn test_ahash_is_selected() {
    let name = std::any::type_name::<DefaultHashBuilder>();
    assert!(name.contains("ahash"), "{name}");
}

// =============================================================================
// Behaviour Under Any Hasher
// =============================================================================

#[rstest]
fn test_string_set_deduplicates() {
    let set: UniqueSet<String> = ["alpha", "beta", "alpha", "gamma"]
        .into_iter()
        .map(String::from)
        .collect();

    assert_eq!(set.len(), 3);
    assert!(set.contains(&"beta".to_string()));
    assert_eq!(
        set.to_vec(),
        vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()]
    );
}

#[rstest]
fn test_union_is_hasher_independent() {
    let first: UniqueSet<i64> = (0..500).collect();
    let second: UniqueSet<i64> = (250..750).collect();

    let merged = merged_frozen(&first, &second);
    let view = view_merge(&first, &second);

    assert_eq!(merged.len(), 750);
    assert_eq!(view.len(), 750);
    assert_eq!(merged, FrozenSet::from_iter(0..750_i64));
    assert_eq!(view.to_vec(), (0..750).collect::<Vec<i64>>());
}
