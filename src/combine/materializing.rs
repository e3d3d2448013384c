//! Merge into freshly allocated storage.

use super::Strategy;
use crate::collection::{Collection, Materialized, Mutability, Shared, Snapshot, Storage};

/// Combines `first` and `second` into a new, independent container.
///
/// `first` is visited completely, then `second`. Sequences are
/// concatenated. Unique sets are unioned; when `second` holds an element
/// equal to one already taken from `first`, the element from `first` is
/// kept (first-seen-wins).
///
/// The result never shares storage with either input: later mutation of an
/// input is invisible through it, and mutating a
/// [`Materialized::Mutable`] result never affects the inputs. A
/// [`Materialized::Frozen`] result rejects every mutation for its entire
/// lifetime.
///
/// # Examples
///
/// ```rust
/// use combiner::collection::{Collection, FrozenSet, Mutability, UniqueSet};
/// use combiner::combine::materializing_merge;
///
/// let first = UniqueSet::from([1, 2, 3]);
/// let second = FrozenSet::from([4, 5, 6]);
///
/// let merged = materializing_merge(&first, &second, Mutability::Immutable);
/// assert_eq!(merged, FrozenSet::from([1, 2, 3, 4, 5, 6]));
/// assert!(merged.try_insert(7).is_err());
///
/// first.insert(10);
/// assert!(!merged.contains(&10));
/// ```
#[must_use]
pub fn materializing_merge<A, B>(
    first: &A,
    second: &B,
    mutability: Mutability,
) -> Materialized<A::Storage>
where
    A: Collection + ?Sized,
    B: Collection<Storage = A::Storage> + ?Sized,
{
    let storage = merge_into_storage(first, second);
    log_materialized(first, second, &storage, mutability);
    match mutability {
        Mutability::Mutable => Materialized::Mutable(Shared::from_storage(storage)),
        Mutability::Immutable => Materialized::Frozen(Snapshot::from_storage(storage)),
    }
}

/// Combines `first` and `second` into a new mutable container.
///
/// Shorthand for [`materializing_merge`] with [`Mutability::Mutable`].
#[must_use]
pub fn merged_mutable<A, B>(first: &A, second: &B) -> Shared<A::Storage>
where
    A: Collection + ?Sized,
    B: Collection<Storage = A::Storage> + ?Sized,
{
    let storage = merge_into_storage(first, second);
    log_materialized(first, second, &storage, Mutability::Mutable);
    Shared::from_storage(storage)
}

/// Combines `first` and `second` into a new snapshot.
///
/// Shorthand for [`materializing_merge`] with [`Mutability::Immutable`].
#[must_use]
pub fn merged_frozen<A, B>(first: &A, second: &B) -> Snapshot<A::Storage>
where
    A: Collection + ?Sized,
    B: Collection<Storage = A::Storage> + ?Sized,
{
    let storage = merge_into_storage(first, second);
    log_materialized(first, second, &storage, Mutability::Immutable);
    Snapshot::from_storage(storage)
}

fn merge_into_storage<A, B>(first: &A, second: &B) -> A::Storage
where
    A: Collection + ?Sized,
    B: Collection<Storage = A::Storage> + ?Sized,
{
    let mut storage = <A::Storage as Storage>::with_capacity(first.len() + second.len());
    let mut accumulate = |element: &<A::Storage as Storage>::Element| {
        storage.insert(element.clone());
    };
    first.for_each_element(&mut accumulate);
    second.for_each_element(&mut accumulate);
    storage
}

fn log_materialized<A, B>(first: &A, second: &B, storage: &A::Storage, mutability: Mutability)
where
    A: Collection + ?Sized,
    B: Collection<Storage = A::Storage> + ?Sized,
{
    tracing::debug!(
        strategy = ?Strategy::MaterializingMerge,
        shape = ?first.shape(),
        first_length = first.len(),
        second_length = second.len(),
        length = storage.len(),
        ?mutability,
        "Materialized merge into fresh storage"
    );
}
