//! Storage backends.
//!
//! [`Storage`] is implemented for `Vec<T>` (sequence shape) and for
//! `IndexSet<T, H>` (unique shape). Containers are generic over the
//! backend, so the shape of a container is fixed by its type.

use std::hash::{BuildHasher, Hash};

use indexmap::IndexSet;

use super::Shape;

/// The `BuildHasher` used by unique-element containers.
///
/// Selected at compile time: `fxhash` uses `rustc_hash::FxBuildHasher`,
/// `ahash` uses `ahash::RandomState`, otherwise the standard library's
/// `RandomState` is used.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used by unique-element containers.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The `BuildHasher` used by unique-element containers.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;

/// Backing store of a container.
///
/// Iteration order of [`Storage::elements`] is the order in which a
/// combination visits the elements.
pub trait Storage: Default {
    /// The element type.
    type Element: Clone + PartialEq;

    /// The combination rule of this backend.
    const SHAPE: Shape;

    /// Creates empty storage with room for `capacity` elements.
    fn with_capacity(capacity: usize) -> Self;

    /// Inserts an element, returning whether the contents changed.
    ///
    /// Sequences always append. Unique storage keeps the resident element
    /// when an equal one is inserted (first-seen-wins).
    fn insert(&mut self, element: Self::Element) -> bool;

    /// Removes one occurrence of `element`, returning whether it was present.
    fn remove(&mut self, element: &Self::Element) -> bool;

    /// Removes every element.
    fn clear(&mut self);

    /// Returns `true` if an element equal to `element` is stored.
    fn contains(&self, element: &Self::Element) -> bool;

    /// Returns the number of stored elements.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the stored elements in order.
    fn elements(&self) -> impl Iterator<Item = &Self::Element>;
}

impl<T: Clone + PartialEq> Storage for Vec<T> {
    type Element = T;

    const SHAPE: Shape = Shape::Sequence;

    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    fn insert(&mut self, element: T) -> bool {
        self.push(element);
        true
    }

    fn remove(&mut self, element: &T) -> bool {
        match self.iter().position(|stored| stored == element) {
            Some(index) => {
                Self::remove(self, index);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn contains(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, H> Storage for IndexSet<T, H>
where
    T: Clone + Hash + Eq,
    H: BuildHasher + Default,
{
    type Element = T;

    const SHAPE: Shape = Shape::Unique;

    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, H::default())
    }

    fn insert(&mut self, element: T) -> bool {
        Self::insert(self, element)
    }

    fn remove(&mut self, element: &T) -> bool {
        self.shift_remove(element)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Set<T> = IndexSet<T, DefaultHashBuilder>;

    /// Equal under `Eq`/`Hash` when ids match; `tag` tells copies apart.
    #[derive(Debug, Clone)]
    struct Tagged {
        id: i32,
        tag: &'static str,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl Eq for Tagged {}

    impl Hash for Tagged {
        fn hash<S: std::hash::Hasher>(&self, state: &mut S) {
            self.id.hash(state);
        }
    }

    #[rstest]
    fn test_vec_insert_appends_duplicates() {
        let mut storage: Vec<i32> = Storage::with_capacity(4);
        assert!(Storage::insert(&mut storage, 1));
        assert!(Storage::insert(&mut storage, 1));
        assert_eq!(storage, vec![1, 1]);
    }

    #[rstest]
    fn test_vec_remove_first_occurrence() {
        let mut storage = vec![1, 2, 1, 3];
        assert!(Storage::remove(&mut storage, &1));
        assert_eq!(storage, vec![2, 1, 3]);
        assert!(!Storage::remove(&mut storage, &9));
    }

    #[rstest]
    fn test_set_insert_duplicate_is_rejected() {
        let mut storage: Set<i32> = Storage::with_capacity(4);
        assert!(Storage::insert(&mut storage, 1));
        assert!(!Storage::insert(&mut storage, 1));
        assert_eq!(Storage::len(&storage), 1);
    }

    #[rstest]
    fn test_set_keeps_first_seen_representative() {
        let mut storage: IndexSet<Tagged, DefaultHashBuilder> = Storage::with_capacity(2);
        Storage::insert(&mut storage, Tagged { id: 1, tag: "first" });
        Storage::insert(&mut storage, Tagged { id: 1, tag: "second" });

        let tags: Vec<&str> = storage.elements().map(|element| element.tag).collect();
        assert_eq!(tags, vec!["first"]);
    }

    #[rstest]
    fn test_set_remove_preserves_order() {
        let mut storage: Set<i32> = [1, 2, 3, 4].into_iter().collect();
        assert!(Storage::remove(&mut storage, &2));
        let remaining: Vec<i32> = storage.elements().copied().collect();
        assert_eq!(remaining, vec![1, 3, 4]);
    }

    #[rstest]
    #[case(Vec::<i32>::SHAPE, Shape::Sequence)]
    #[case(Set::<i32>::SHAPE, Shape::Unique)]
    fn test_shape_of_backend(#[case] actual: Shape, #[case] expected: Shape) {
        assert_eq!(actual, expected);
    }
}
