//! Mutable, aliasable containers.
//!
//! A [`Shared`] value is a *handle*: cloning it creates another reference
//! to the same storage rather than a copy. This mirrors how a mutable
//! collection held in several places (for example as a map value and as a
//! local variable) behaves, and makes the aliasing hazard of in-place
//! merges observable.
//!
//! ```rust
//! use std::collections::HashMap;
//! use combiner::collection::{Collection, Sequence};
//!
//! let mut registry = HashMap::new();
//! registry.insert("a", Sequence::from([1, 2, 3]));
//!
//! let local = registry["a"].clone();
//! local.insert(4);
//!
//! // The map entry was never reassigned, yet its contents changed.
//! assert_eq!(registry["a"].to_vec(), vec![1, 2, 3, 4]);
//! ```

use std::fmt;
use std::iter::FromIterator;

use super::cell::{self, SharedCell};
use super::{Collection, Outcome, ReferenceCounter, Storage, debug_collection, display_collection};
use crate::error::CombineError;

/// A mutable container whose clones alias the same storage.
///
/// Use [`Snapshot::copy_of`](super::Snapshot::copy_of) or a materializing
/// merge to obtain an independent copy.
///
/// # Panics
///
/// Without the `arc` feature, storage lives in a `RefCell`. Mutating a
/// `Shared` from inside a visitor passed to
/// [`Collection::for_each_element`] of the same storage (directly or
/// through a facade) panics.
pub struct Shared<S> {
    storage: ReferenceCounter<SharedCell<S>>,
}

impl<S: Storage> Shared<S> {
    /// Creates a new, empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combiner::collection::{Collection, Sequence};
    ///
    /// let sequence: Sequence<i32> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_storage(S::default())
    }

    /// Wraps existing storage.
    #[must_use]
    pub fn from_storage(storage: S) -> Self {
        Self {
            storage: ReferenceCounter::new(SharedCell::new(storage)),
        }
    }

    /// Inserts an element, returning whether the contents changed.
    ///
    /// Sequences append; unique sets ignore an element equal to one already
    /// present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combiner::collection::UniqueSet;
    ///
    /// let set = UniqueSet::from([1, 2]);
    /// assert!(set.insert(3));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&self, element: S::Element) -> bool {
        cell::write(&self.storage).insert(element)
    }

    /// Removes one occurrence of `element`, returning whether it was present.
    pub fn remove(&self, element: &S::Element) -> bool {
        cell::write(&self.storage).remove(element)
    }

    /// Removes every element.
    pub fn clear(&self) {
        cell::write(&self.storage).clear();
    }

    /// Inserts every element of `elements`, in order.
    pub fn extend<I: IntoIterator<Item = S::Element>>(&self, elements: I) {
        let mut storage = cell::write(&self.storage);
        for element in elements {
            storage.insert(element);
        }
    }

    /// Runs `function` with read access to the underlying storage.
    pub fn with_storage<R>(&self, function: impl FnOnce(&S) -> R) -> R {
        function(&cell::read(&self.storage))
    }
}

impl<S> Shared<S> {
    /// Returns `true` if both handles refer to the same storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combiner::collection::Sequence;
    ///
    /// let sequence = Sequence::from([1, 2, 3]);
    /// let alias = sequence.clone();
    /// let copy = Sequence::from([1, 2, 3]);
    ///
    /// assert!(sequence.ptr_eq(&alias));
    /// assert!(!sequence.ptr_eq(&copy));
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.storage, &other.storage)
    }

    /// Returns the number of handles referring to this storage.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        ReferenceCounter::strong_count(&self.storage)
    }
}

impl<S: Storage> Collection for Shared<S> {
    type Storage = S;

    fn len(&self) -> usize {
        cell::read(&self.storage).len()
    }

    fn contains(&self, element: &S::Element) -> bool {
        cell::read(&self.storage).contains(element)
    }

    fn for_each_element(&self, visitor: &mut dyn FnMut(&S::Element)) {
        cell::read(&self.storage).elements().for_each(visitor);
    }

    fn outcome(&self) -> Outcome {
        Outcome::Mutable
    }

    fn try_insert(&self, element: S::Element) -> Result<bool, CombineError> {
        Ok(self.insert(element))
    }

    fn try_remove(&self, element: &S::Element) -> Result<bool, CombineError> {
        Ok(self.remove(element))
    }

    fn try_clear(&self) -> Result<(), CombineError> {
        self.clear();
        Ok(())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Clones the handle, not the storage.
impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Self {
            storage: ReferenceCounter::clone(&self.storage),
        }
    }
}

impl<S: Storage> Default for Shared<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Storage> FromIterator<S::Element> for Shared<S> {
    fn from_iter<I: IntoIterator<Item = S::Element>>(iter: I) -> Self {
        let iterator = iter.into_iter();
        let mut storage = S::with_capacity(iterator.size_hint().0);
        for element in iterator {
            storage.insert(element);
        }
        Self::from_storage(storage)
    }
}

impl<S: Storage, const N: usize> From<[S::Element; N]> for Shared<S> {
    fn from(elements: [S::Element; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<S, C> PartialEq<C> for Shared<S>
where
    S: Storage,
    C: Collection<Storage = S>,
{
    fn eq(&self, other: &C) -> bool {
        self.content_eq(other)
    }
}

impl<S: Storage> fmt::Debug for Shared<S>
where
    S::Element: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_collection(self, formatter)
    }
}

impl<S: Storage> fmt::Display for Shared<S>
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
impl<S> serde::Serialize for Shared<S>
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
impl<'de, S> serde::Deserialize<'de> for Shared<S>
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
