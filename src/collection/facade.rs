//! Read-only live views.
//!
//! A [`Facade`] owns no storage. It borrows one or more sources and
//! recomputes every read from their *current* contents, combining them with
//! the rule of the storage [`Shape`]:
//!
//! - sequences are concatenated: every element of the first source, in
//!   order, then every element of the next;
//! - unique sets are unioned: an element is reported by the first source
//!   that contains it and skipped by every later one.
//!
//! Mutation through a facade always fails, but mutation of a source through
//! any other handle is visible on the next read. The borrow ties the facade
//! to its sources, so a facade can never outlive them.
//!
//! # Concurrency
//!
//! Facades take no locks across reads. With the `arc` feature, sources may
//! be mutated from other threads between two reads of the same facade, and
//! the facade makes no attempt to present a consistent cut; callers that
//! need one must serialize access themselves.

use std::fmt;

use smallvec::SmallVec;

use super::{
    Collection, Materialized, Mutability, Outcome, Shape, Shared, Snapshot, Storage,
    debug_collection, display_collection,
};
use crate::error::{CombineError, UnsupportedOperationError};

const CONTAINER_NAME: &str = "Facade";

/// Inline capacity: a facade has one source (read-only view) or two (merge).
const INLINE_SOURCES: usize = 2;

type Sources<'a, S> = SmallVec<[&'a (dyn Collection<Storage = S> + 'a); INLINE_SOURCES]>;

/// A read-only view over borrowed collections.
///
/// # Examples
///
/// ```rust
/// use combiner::collection::{Collection, Facade, UniqueSet};
///
/// let left = UniqueSet::from([1, 2, 3]);
/// let right = UniqueSet::from([3, 4]);
/// let view = Facade::over_pair(&left, &right);
///
/// assert_eq!(view.to_vec(), vec![1, 2, 3, 4]);
///
/// left.insert(9);
/// assert!(view.contains(&9));
/// assert!(view.try_insert(10).is_err());
/// ```
pub struct Facade<'a, S: Storage> {
    sources: Sources<'a, S>,
}

impl<'a, S: Storage> Facade<'a, S> {
    /// Creates a read-only view of a single source.
    #[must_use]
    pub fn over<C>(source: &'a C) -> Self
    where
        C: Collection<Storage = S> + 'a,
    {
        let mut sources = Sources::new();
        sources.push(source as &dyn Collection<Storage = S>);
        Self { sources }
    }

    /// Creates a read-only view combining `first` and `second`.
    #[must_use]
    pub fn over_pair<A, B>(first: &'a A, second: &'a B) -> Self
    where
        A: Collection<Storage = S> + 'a,
        B: Collection<Storage = S> + 'a,
    {
        let mut sources = Sources::new();
        sources.push(first as &dyn Collection<Storage = S>);
        sources.push(second as &dyn Collection<Storage = S>);
        Self { sources }
    }

    /// Returns the number of borrowed sources.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Copies the current contents into fresh storage.
    ///
    /// The result is disconnected from the sources: later source mutation
    /// is not observable through it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combiner::collection::{Collection, Facade, Mutability, Sequence};
    ///
    /// let source = Sequence::from([1, 2]);
    /// let view = Facade::over(&source);
    /// let copy = view.materialize(Mutability::Immutable);
    ///
    /// source.insert(3);
    /// assert_eq!(view.len(), 3);
    /// assert_eq!(copy.len(), 2);
    /// ```
    #[must_use]
    pub fn materialize(&self, mutability: Mutability) -> Materialized<S> {
        let storage = self.collect_storage();
        match mutability {
            Mutability::Mutable => Materialized::Mutable(Shared::from_storage(storage)),
            Mutability::Immutable => Materialized::Frozen(Snapshot::from_storage(storage)),
        }
    }

    /// Inserts the current contents into `receiver`, in iteration order.
    ///
    /// Returns how many insertions changed the receiver.
    ///
    /// # Errors
    ///
    /// Returns [`CombineError::UnsupportedOperation`] if `receiver` is not
    /// [`Outcome::Mutable`]; nothing is inserted in that case.
    pub fn copy_into<C>(&self, receiver: &C) -> Result<usize, CombineError>
    where
        C: Collection<Storage = S> + ?Sized,
    {
        if !receiver.outcome().accepts_mutation() {
            let container = receiver.outcome().container_name();
            return Err(UnsupportedOperationError::reject(container, "copy_into").into());
        }
        let mut changed = 0;
        for element in self.to_vec() {
            if receiver.try_insert(element)? {
                changed += 1;
            }
        }
        Ok(changed)
    }

    fn collect_storage(&self) -> S {
        let mut storage = S::with_capacity(self.len());
        self.for_each_element(&mut |element| {
            storage.insert(element.clone());
        });
        storage
    }

    /// Returns `true` if an element is shadowed by a source before `index`.
    fn shadowed(&self, index: usize, element: &S::Element) -> bool {
        self.sources[..index]
            .iter()
            .any(|source| source.contains(element))
    }
}

impl<S: Storage> Collection for Facade<'_, S> {
    type Storage = S;

    fn len(&self) -> usize {
        match S::SHAPE {
            Shape::Sequence => self.sources.iter().map(|source| source.len()).sum(),
            Shape::Unique => {
                let mut length = 0;
                self.for_each_element(&mut |_| length += 1);
                length
            }
        }
    }

    fn contains(&self, element: &S::Element) -> bool {
        self.sources.iter().any(|source| source.contains(element))
    }

    fn for_each_element(&self, visitor: &mut dyn FnMut(&S::Element)) {
        for (index, source) in self.sources.iter().enumerate() {
            if S::SHAPE.deduplicates() && index > 0 {
                source.for_each_element(&mut |element| {
                    if !self.shadowed(index, element) {
                        visitor(element);
                    }
                });
            } else {
                source.for_each_element(visitor);
            }
        }
    }

    fn outcome(&self) -> Outcome {
        Outcome::ReadOnlyLive
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

impl<S, C> PartialEq<C> for Facade<'_, S>
where
    S: Storage,
    C: Collection<Storage = S>,
{
    fn eq(&self, other: &C) -> bool {
        self.content_eq(other)
    }
}

impl<S: Storage> fmt::Debug for Facade<'_, S>
where
    S::Element: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_collection(self, formatter)
    }
}

impl<S: Storage> fmt::Display for Facade<'_, S>
where
    S::Element: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_collection(self, formatter)
    }
}

#[cfg(feature = "serde")]
impl<S> serde::Serialize for Facade<'_, S>
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

// =============================================================================
// Tests
// =============================================================================
