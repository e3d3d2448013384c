//! Read-only live views.

use super::Strategy;
use crate::collection::{Collection, Facade};

/// Combines `first` and `second` into a read-only facade.
///
/// The facade has no storage of its own. Every read consults both inputs
/// at call time and combines them with the same rule as
/// [`materializing_merge`](super::materializing_merge): concatenation for
/// sequences, first-seen-wins union for unique sets. Mutating either input
/// through any other handle is visible on the next read; mutating the
/// facade itself always fails.
///
/// The facade borrows its inputs, so it cannot outlive either of them:
///
/// ```compile_fail
/// use combiner::collection::{Collection, UniqueSet};
/// use combiner::combine::view_merge;
///
/// let first = UniqueSet::from([1, 2, 3]);
/// let view = {
///     let second = UniqueSet::from([4, 5]);
///     view_merge(&first, &second)
/// };
/// assert_eq!(view.len(), 5);
/// ```
///
/// # Examples
///
/// ```rust
/// use combiner::collection::{Collection, FrozenSet, UniqueSet};
/// use combiner::combine::view_merge;
///
/// let first = UniqueSet::from([1, 2, 3]);
/// let second = UniqueSet::from([4, 5]);
/// let view = view_merge(&first, &second);
/// assert_eq!(view, FrozenSet::from([1, 2, 3, 4, 5]));
///
/// first.insert(6);
/// assert_eq!(view, FrozenSet::from([1, 2, 3, 4, 5, 6]));
/// assert!(view.try_insert(7).is_err());
/// ```
#[must_use]
pub fn view_merge<'a, A, B>(first: &'a A, second: &'a B) -> Facade<'a, A::Storage>
where
    A: Collection + 'a,
    B: Collection<Storage = A::Storage> + 'a,
{
    tracing::debug!(
        strategy = ?Strategy::ViewMerge,
        shape = ?first.shape(),
        first_length = first.len(),
        second_length = second.len(),
        "Created merged read-only view"
    );
    Facade::over_pair(first, second)
}

/// Wraps a single collection in a read-only facade.
///
/// The minimal facade: it rejects mutation but follows every change made to
/// `source` through other handles. The source cannot be dropped while the
/// facade is still in use:
///
/// ```compile_fail
/// use combiner::collection::{Collection, Sequence};
/// use combiner::combine::read_only_view;
///
/// let source = Sequence::from([1, 2, 3]);
/// let view = read_only_view(&source);
/// drop(source);
/// assert_eq!(view.len(), 3);
/// ```
///
/// # Examples
///
/// ```rust
/// use combiner::collection::{Collection, FrozenSet, UniqueSet};
/// use combiner::combine::read_only_view;
///
/// let source = UniqueSet::from([1, 2, 3]);
/// let view = read_only_view(&source);
/// assert!(view.try_insert(4).is_err());
///
/// source.insert(4);
/// assert_eq!(view, FrozenSet::from([1, 2, 3, 4]));
/// ```
#[must_use]
pub fn read_only_view<'a, C>(source: &'a C) -> Facade<'a, C::Storage>
where
    C: Collection + 'a,
{
    tracing::debug!(
        strategy = ?Strategy::ViewMerge,
        shape = ?source.shape(),
        length = source.len(),
        "Created read-only view"
    );
    Facade::over(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{FrozenSequence, FrozenSet, Outcome, Sequence, UniqueSet};
    use rstest::rstest;

    #[rstest]
    fn test_view_merge_follows_both_inputs() {
        let first = Sequence::from([1, 2]);
        let second = Sequence::from([3]);
        let view = view_merge(&first, &second);

        first.insert(9);
        second.insert(4);

        assert_eq!(view.to_vec(), vec![1, 2, 9, 3, 4]);
    }

    #[rstest]
    fn test_view_merge_over_frozen_input() {
        let first = UniqueSet::from([1]);
        let second = FrozenSet::from([1, 2]);
        let view = view_merge(&first, &second);

        first.clear();

        assert_eq!(view, FrozenSet::from([1, 2]));
        assert_eq!(view.to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_read_only_view_over_frozen_source() {
        let source = FrozenSequence::from([1, 2]);
        let view = read_only_view(&source);

        assert!(view.try_insert(3).is_err());
        assert_eq!(view.outcome(), Outcome::ReadOnlyLive);
        assert_eq!(view, source);
    }

    #[rstest]
    fn test_read_only_view_rejects_even_when_source_is_mutable() {
        let source = Sequence::from([1]);
        let view = read_only_view(&source);

        assert!(view.try_clear().is_err());
        assert!(source.try_clear().is_ok());
        assert!(view.is_empty());
    }
}
