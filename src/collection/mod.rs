//! Containers with explicit aliasing and mutability contracts.
//!
//! Every container in this module implements [`Collection`], and reports
//! through [`Collection::outcome`] which of three behaviours it follows:
//!
//! - [`Shared`]: a mutable handle. Cloning the handle creates a second
//!   reference to the *same* storage, so mutation through one handle is
//!   visible through every other.
//! - [`Snapshot`]: independent storage that never changes after
//!   construction. Every mutation attempt fails.
//! - [`Facade`]: no storage of its own. Every read is recomputed from the
//!   borrowed sources, so source mutation is visible on the next read, but
//!   mutation through the facade itself always fails.
//!
//! Each container comes in two shapes selected by its [`Storage`]:
//! sequences (`Vec<T>`, ordered, duplicates kept) and unique-element sets
//! (`IndexSet<T>`, insertion-ordered, duplicates collapsed).
//!
//! # Examples
//!
//! ```rust
//! use combiner::collection::{Collection, FrozenSet, Sequence, UniqueSet};
//!
//! let sequence = Sequence::from([1, 2, 3]);
//! let alias = sequence.clone();
//! alias.insert(4);
//! assert_eq!(sequence.to_vec(), vec![1, 2, 3, 4]); // Same storage
//!
//! let set = UniqueSet::from([1, 2, 3]);
//! let frozen = FrozenSet::copy_of(&set);
//! set.insert(4);
//! assert_eq!(frozen.len(), 3);                     // Independent storage
//! assert!(frozen.try_insert(5).is_err());
//! ```

use std::fmt;

use crate::error::CombineError;

mod facade;
mod materialized;
mod shared;
mod snapshot;
mod storage;

pub use facade::Facade;
pub use materialized::Materialized;
pub use shared::Shared;
pub use snapshot::Snapshot;
pub use storage::{DefaultHashBuilder, Storage};

// =============================================================================
// Reference Counter and Shared Cell
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Interior mutability for [`Shared`] storage.
#[cfg(not(feature = "arc"))]
pub(crate) mod cell {
    use std::cell::{Ref, RefCell, RefMut};

    pub(crate) type SharedCell<T> = RefCell<T>;

    /// # Panics
    ///
    /// Panics if the cell is currently borrowed for writing.
    pub(crate) fn read<T>(cell: &SharedCell<T>) -> Ref<'_, T> {
        cell.borrow()
    }

    /// # Panics
    ///
    /// Panics if the cell is currently borrowed.
    pub(crate) fn write<T>(cell: &SharedCell<T>) -> RefMut<'_, T> {
        cell.borrow_mut()
    }
}

/// Interior mutability for [`Shared`] storage.
#[cfg(feature = "arc")]
pub(crate) mod cell {
    use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

    pub(crate) type SharedCell<T> = RwLock<T>;

    // Recursive reads: a facade over the same source twice reads it nested.
    pub(crate) fn read<T>(cell: &SharedCell<T>) -> RwLockReadGuard<'_, T> {
        cell.read_recursive()
    }

    pub(crate) fn write<T>(cell: &SharedCell<T>) -> RwLockWriteGuard<'_, T> {
        cell.write()
    }
}

// =============================================================================
// Shape, Outcome, Mutability
// =============================================================================

/// The combination rule of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Ordered, duplicates kept. Combination is concatenation.
    Sequence,
    /// Duplicates collapsed under `Eq`/`Hash`. Combination is union.
    Unique,
}

impl Shape {
    /// Returns the opening and closing delimiters used by `Display`.
    #[must_use]
    pub const fn delimiters(self) -> (char, char) {
        match self {
            Self::Sequence => ('[', ']'),
            Self::Unique => ('{', '}'),
        }
    }

    /// Returns `true` if combination collapses duplicates.
    #[must_use]
    pub const fn deduplicates(self) -> bool {
        matches!(self, Self::Unique)
    }
}

/// The mutability and visibility a container guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Accepts mutation; owns (possibly aliased) storage.
    Mutable,
    /// Rejects mutation; owns independent storage that never changes.
    Frozen,
    /// Rejects mutation; owns no storage and follows its sources.
    ReadOnlyLive,
}

impl Outcome {
    /// All outcomes, in declaration order.
    pub const ALL: [Self; 3] = [Self::Mutable, Self::Frozen, Self::ReadOnlyLive];

    /// Returns `true` if `try_insert` and friends can succeed.
    #[must_use]
    pub const fn accepts_mutation(self) -> bool {
        matches!(self, Self::Mutable)
    }

    /// Returns `true` if later mutation of an input is observable through
    /// a container with this outcome.
    #[must_use]
    pub const fn reflects_source_mutation(self) -> bool {
        matches!(self, Self::ReadOnlyLive)
    }

    /// Returns the name of the container kind that guarantees this outcome.
    #[must_use]
    pub const fn container_name(self) -> &'static str {
        match self {
            Self::Mutable => "Shared",
            Self::Frozen => "Snapshot",
            Self::ReadOnlyLive => "Facade",
        }
    }
}

/// Whether a materialized result accepts mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mutability {
    /// The result is a [`Shared`] container.
    Mutable,
    /// The result is a [`Snapshot`].
    #[default]
    Immutable,
}

impl Mutability {
    /// Returns the outcome a result materialized with this mutability has.
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        match self {
            Self::Mutable => Outcome::Mutable,
            Self::Immutable => Outcome::Frozen,
        }
    }
}

// =============================================================================
// Collection
// =============================================================================

/// The element type of a [`Collection`].
pub type Element<C> = <<C as Collection>::Storage as Storage>::Element;

/// Common read and (fallible) write interface of every container.
///
/// The trait is object safe: facades hold their sources as
/// `&dyn Collection<Storage = S>`.
pub trait Collection {
    /// The storage backend, which fixes element type and [`Shape`].
    type Storage: Storage;

    /// Returns the number of elements currently observable.
    fn len(&self) -> usize;

    /// Returns `true` if no element is currently observable.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `element` is currently observable.
    fn contains(&self, element: &Element<Self>) -> bool;

    /// Visits every observable element in iteration order.
    ///
    /// The visitor must not mutate the collection being visited.
    fn for_each_element(&self, visitor: &mut dyn FnMut(&Element<Self>));

    /// Reports which behaviour this container follows.
    fn outcome(&self) -> Outcome;

    /// Inserts an element, returning whether the contents changed.
    ///
    /// # Errors
    ///
    /// Returns [`CombineError::UnsupportedOperation`] if the container is
    /// not [`Outcome::Mutable`].
    fn try_insert(&self, element: Element<Self>) -> Result<bool, CombineError>;

    /// Removes one occurrence of an element, returning whether it was present.
    ///
    /// # Errors
    ///
    /// Returns [`CombineError::UnsupportedOperation`] if the container is
    /// not [`Outcome::Mutable`].
    fn try_remove(&self, element: &Element<Self>) -> Result<bool, CombineError>;

    /// Removes every element.
    ///
    /// # Errors
    ///
    /// Returns [`CombineError::UnsupportedOperation`] if the container is
    /// not [`Outcome::Mutable`].
    fn try_clear(&self) -> Result<(), CombineError>;

    /// Returns the [`Shape`] of this container.
    fn shape(&self) -> Shape {
        <Self::Storage as Storage>::SHAPE
    }

    /// Copies the observable elements into a `Vec`, in iteration order.
    fn to_vec(&self) -> Vec<Element<Self>> {
        let mut elements = Vec::with_capacity(self.len());
        self.for_each_element(&mut |element| elements.push(element.clone()));
        elements
    }

    /// Compares observable contents according to the shape.
    ///
    /// Sequences compare element-wise in order; unique containers compare
    /// as sets.
    fn content_eq(&self, other: &dyn Collection<Storage = Self::Storage>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        match self.shape() {
            Shape::Sequence => self.to_vec() == other.to_vec(),
            Shape::Unique => {
                let mut all_contained = true;
                self.for_each_element(&mut |element| {
                    all_contained = all_contained && other.contains(element);
                });
                all_contained
            }
        }
    }
}

/// Writes the observable contents using the shape's delimiters.
pub(crate) fn display_collection<C>(collection: &C, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
where
    C: Collection + ?Sized,
    Element<C>: fmt::Display,
{
    let (open, close) = collection.shape().delimiters();
    let mut result = write!(formatter, "{open}");
    let mut first = true;
    collection.for_each_element(&mut |element| {
        if result.is_err() {
            return;
        }
        result = if first {
            write!(formatter, "{element}")
        } else {
            write!(formatter, ", {element}")
        };
        first = false;
    });
    result?;
    write!(formatter, "{close}")
}

/// Writes the observable contents as a debug list or set.
pub(crate) fn debug_collection<C>(collection: &C, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
where
    C: Collection + ?Sized,
    Element<C>: fmt::Debug,
{
    let elements = collection.to_vec();
    match collection.shape() {
        Shape::Sequence => formatter.debug_list().entries(elements.iter()).finish(),
        Shape::Unique => formatter.debug_set().entries(elements.iter()).finish(),
    }
}

/// Serializes the observable contents as a sequence.
#[cfg(feature = "serde")]
pub(crate) fn serialize_collection<C, S>(collection: &C, serializer: S) -> Result<S::Ok, S::Error>
where
    C: Collection + ?Sized,
    Element<C>: serde::Serialize,
    S: serde::Serializer,
{
    use serde::ser::SerializeSeq;
    let mut sequence = serializer.serialize_seq(Some(collection.len()))?;
    let mut result = Ok(());
    collection.for_each_element(&mut |element| {
        if result.is_ok() {
            result = sequence.serialize_element(element);
        }
    });
    result?;
    sequence.end()
}

// =============================================================================
// Type Aliases
// =============================================================================

/// A mutable, aliasable, ordered sequence.
pub type Sequence<T> = Shared<Vec<T>>;

/// A mutable, aliasable, insertion-ordered unique-element set.
pub type UniqueSet<T> = Shared<indexmap::IndexSet<T, DefaultHashBuilder>>;

/// An independent, permanently immutable sequence.
pub type FrozenSequence<T> = Snapshot<Vec<T>>;

/// An independent, permanently immutable unique-element set.
pub type FrozenSet<T> = Snapshot<indexmap::IndexSet<T, DefaultHashBuilder>>;

/// A read-only live view producing a sequence.
pub type SequenceView<'a, T> = Facade<'a, Vec<T>>;

/// A read-only live view producing a unique-element set.
pub type SetView<'a, T> = Facade<'a, indexmap::IndexSet<T, DefaultHashBuilder>>;

// =============================================================================
// Static Assertions
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(FrozenSet<i32>: Send, Sync, Clone);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Sequence<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(SetView<'static, i32>: Send, Clone);

// =============================================================================
// Tests
// =============================================================================
