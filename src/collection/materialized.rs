//! Result of materializing a combination into fresh storage.

use std::fmt;

use super::{
    Collection, Mutability, Outcome, Shared, Snapshot, Storage, debug_collection,
    display_collection,
};
use crate::error::CombineError;

/// Freshly allocated storage, either mutable or frozen.
///
/// Neither variant shares storage with the inputs it was built from.
///
/// # Examples
///
/// ```rust
/// use combiner::collection::{Collection, Materialized, Mutability};
///
/// let result: Materialized<Vec<i32>> =
///     Materialized::from_elements([1, 2, 3], Mutability::Immutable);
/// assert!(result.is_frozen());
/// assert!(result.try_insert(4).is_err());
/// ```
pub enum Materialized<S> {
    /// A mutable result; its handle is the only one at creation time.
    Mutable(Shared<S>),
    /// A permanently immutable result.
    Frozen(Snapshot<S>),
}

impl<S> Clone for Materialized<S> {
    fn clone(&self) -> Self {
        match self {
            Self::Mutable(shared) => Self::Mutable(shared.clone()),
            Self::Frozen(snapshot) => Self::Frozen(snapshot.clone()),
        }
    }
}

impl<S: Storage> Materialized<S> {
    /// Builds fresh storage from `elements` with the requested mutability.
    pub fn from_elements<I>(elements: I, mutability: Mutability) -> Self
    where
        I: IntoIterator<Item = S::Element>,
    {
        match mutability {
            Mutability::Mutable => Self::Mutable(elements.into_iter().collect()),
            Mutability::Immutable => Self::Frozen(elements.into_iter().collect()),
        }
    }

    /// Returns the mutability this result was built with.
    #[must_use]
    pub const fn mutability(&self) -> Mutability {
        match self {
            Self::Mutable(_) => Mutability::Mutable,
            Self::Frozen(_) => Mutability::Immutable,
        }
    }

    /// Returns `true` if this is a [`Materialized::Frozen`] result.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        matches!(self, Self::Frozen(_))
    }

    /// Returns the mutable container, if this result is mutable.
    #[must_use]
    pub fn into_mutable(self) -> Option<Shared<S>> {
        match self {
            Self::Mutable(shared) => Some(shared),
            Self::Frozen(_) => None,
        }
    }

    /// Returns the snapshot, if this result is frozen.
    #[must_use]
    pub fn into_frozen(self) -> Option<Snapshot<S>> {
        match self {
            Self::Mutable(_) => None,
            Self::Frozen(snapshot) => Some(snapshot),
        }
    }

    fn as_collection(&self) -> &dyn Collection<Storage = S> {
        match self {
            Self::Mutable(shared) => shared,
            Self::Frozen(snapshot) => snapshot,
        }
    }
}

impl<S: Storage> Collection for Materialized<S> {
    type Storage = S;

    fn len(&self) -> usize {
        self.as_collection().len()
    }

    fn contains(&self, element: &S::Element) -> bool {
        self.as_collection().contains(element)
    }

    fn for_each_element(&self, visitor: &mut dyn FnMut(&S::Element)) {
        self.as_collection().for_each_element(visitor);
    }

    fn outcome(&self) -> Outcome {
        self.mutability().outcome()
    }

    fn try_insert(&self, element: S::Element) -> Result<bool, CombineError> {
        self.as_collection().try_insert(element)
    }

    fn try_remove(&self, element: &S::Element) -> Result<bool, CombineError> {
        self.as_collection().try_remove(element)
    }

    fn try_clear(&self) -> Result<(), CombineError> {
        self.as_collection().try_clear()
    }
}

impl<S, C> PartialEq<C> for Materialized<S>
where
    S: Storage,
    C: Collection<Storage = S>,
{
    fn eq(&self, other: &C) -> bool {
        self.content_eq(other)
    }
}

impl<S: Storage> fmt::Debug for Materialized<S>
where
    S::Element: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mutable(_) => "Mutable",
            Self::Frozen(_) => "Frozen",
        };
        write!(formatter, "{name}(")?;
        debug_collection(self, formatter)?;
        write!(formatter, ")")
    }
}

impl<S: Storage> fmt::Display for Materialized<S>
where
    S::Element: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_collection(self, formatter)
    }
}
