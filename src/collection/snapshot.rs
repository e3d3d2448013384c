//! Independent, permanently immutable containers.
//!
//! A [`Snapshot`] owns its storage and offers no way to change it: the
//! inherent API is read-only and every `try_*` mutation from
//! [`Collection`] fails with
//! [`CombineError::UnsupportedOperation`]. Cloning a snapshot shares the
//! frozen storage, which is safe because nothing can write to it.

use std::fmt;
use std::iter::FromIterator;

use super::{Collection, Outcome, ReferenceCounter, Storage, debug_collection, display_collection};
use crate::error::{CombineError, UnsupportedOperationError};

const CONTAINER_NAME: &str = "Snapshot";

/// An immutable copy that never observes later changes to its origin.
///
/// # Examples
///
/// ```rust
/// use combiner::collection::{Collection, FrozenSet, UniqueSet};
///
/// let source = UniqueSet::from([1, 2, 3]);
/// let snapshot = FrozenSet::copy_of(&source);
///
/// source.insert(4);
/// assert_eq!(snapshot, FrozenSet::from([1, 2, 3]));
/// assert!(snapshot.try_insert(4).is_err());
/// ```
pub struct Snapshot<S> {
    storage: ReferenceCounter<S>,
}

impl<S: Storage> Snapshot<S> {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_storage(S::default())
    }

    /// Freezes existing storage.
    #[must_use]
    pub fn from_storage(storage: S) -> Self {
        Self {
            storage: ReferenceCounter::new(storage),
        }
    }

    /// Takes an immutable copy of the current contents of `source`.
    ///
    /// Later mutation of `source` is never observable through the copy.
    #[must_use]
    pub fn copy_of<C>(source: &C) -> Self
    where
        C: Collection<Storage = S> + ?Sized,
    {
        let mut storage = S::with_capacity(source.len());
        source.for_each_element(&mut |element| {
            storage.insert(element.clone());
        });
        tracing::debug!(
            shape = ?S::SHAPE,
            length = storage.len(),
            "Copied collection into snapshot"
        );
        Self::from_storage(storage)
    }

    /// Iterates the frozen elements in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combiner::collection::FrozenSequence;
    ///
    /// let snapshot = FrozenSequence::from([1, 2, 3]);
    /// let doubled: Vec<i32> = snapshot.iter().map(|value| value * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &S::Element> {
        self.storage.elements()
    }

    /// Returns the frozen storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: Storage> Collection for Snapshot<S> {
    type Storage = S;

    fn len(&self) -> usize {
        self.storage.len()
    }

    fn contains(&self, element: &S::Element) -> bool {
        self.storage.contains(element)
    }

    fn for_each_element(&self, visitor: &mut dyn FnMut(&S::Element)) {
        self.storage.elements().for_each(visitor);
    }

    fn outcome(&self) -> Outcome {
        Outcome::Frozen
    }

    fn try_insert(&self, _element: S::Element) -> Result<bool, CombineError> {
        Err(UnsupportedOperationError::reject(CONTAINER_NAME, "insert").into())
    }

    fn try_remove(&self, _element: &S::Element) -> Result<bool, CombineError> {
        Err(UnsupportedOperationError::reject(CONTAINER_NAME, "remove").into())
    }

    fn try_clear(&self) -> Result<(), CombineError> {
        Err(UnsupportedOperationError::reject(CONTAINER_NAME, "clear").into())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<S> Clone for Snapshot<S> {
    fn clone(&self) -> Self {
        Self {
            storage: ReferenceCounter::clone(&self.storage),
        }
    }
}

impl<S: Storage> Default for Snapshot<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: Storage> FromIterator<S::Element> for Snapshot<S> {
    fn from_iter<I: IntoIterator<Item = S::Element>>(iter: I) -> Self {
        let iterator = iter.into_iter();
        let mut storage = S::with_capacity(iterator.size_hint().0);
        for element in iterator {
            storage.insert(element);
        }
        Self::from_storage(storage)
    }
}

impl<S: Storage, const N: usize> From<[S::Element; N]> for Snapshot<S> {
    fn from(elements: [S::Element; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<'a, S: Storage> IntoIterator for &'a Snapshot<S> {
    type Item = &'a S::Element;
    type IntoIter = Box<dyn Iterator<Item = &'a S::Element> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<S, C> PartialEq<C> for Snapshot<S>
where
    S: Storage,
    C: Collection<Storage = S>,
{
    fn eq(&self, other: &C) -> bool {
        self.content_eq(other)
    }
}

impl<S: Storage> fmt::Debug for Snapshot<S>
where
    S::Element: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_collection(self, formatter)
    }
}

impl<S: Storage> fmt::Display for Snapshot<S>
where
    S::Element: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_collection(self, formatter)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<S> serde::Serialize for Snapshot<S>
where
    S: Storage,
    S::Element: serde::Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        super::serialize_collection(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, S> serde::Deserialize<'de> for Snapshot<S>
where
    S: Storage,
    S::Element: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = <Vec<S::Element> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::super::{FrozenSequence, FrozenSet, Sequence, UniqueSet};
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_copy_of_is_independent_of_source() {
        let source = Sequence::from([1, 2, 3]);
        let snapshot = FrozenSequence::copy_of(&source);

        source.insert(4);
        source.remove(&1);

        assert_eq!(snapshot.to_vec(), vec![1, 2, 3]);
        assert_eq!(source.to_vec(), vec![2, 3, 4]);
    }

    #[rstest]
    fn test_every_mutation_is_rejected() {
        let snapshot = FrozenSet::from([1, 2, 3]);

        for result in [
            snapshot.try_insert(7).map(|_| ()),
            snapshot.try_remove(&1).map(|_| ()),
            snapshot.try_clear(),
        ] {
            assert!(result.is_err_and(|error| error.is_unsupported_operation()));
        }
        assert_eq!(snapshot, FrozenSet::from([1, 2, 3]));
    }

    #[rstest]
    fn test_rejection_names_container_and_operation() {
        let snapshot = FrozenSequence::from([1]);
        let error = snapshot.try_insert(2).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Snapshot::insert: unsupported operation on a read-only collection"
        );
    }

    #[rstest]
    fn test_clone_shares_frozen_storage() {
        let snapshot = FrozenSet::from([1, 2]);
        let clone = snapshot.clone();
        assert!(std::ptr::eq(snapshot.storage(), clone.storage()));
    }

    #[rstest]
    fn test_empty_snapshot() {
        let snapshot: FrozenSet<i32> = Snapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.outcome(), Outcome::Frozen);
    }

    #[rstest]
    fn test_compares_with_other_containers() {
        let snapshot = FrozenSet::from([3, 2, 1]);
        assert_eq!(snapshot, UniqueSet::from([1, 2, 3]));
    }

    #[rstest]
    fn test_iterates_by_reference() {
        let snapshot = FrozenSequence::from([1, 2, 3]);
        let mut total = 0;
        for value in &snapshot {
            total += value;
        }
        assert_eq!(total, 6);
    }
}
