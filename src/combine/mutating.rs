//! In-place merge.

use super::Strategy;
use crate::collection::{Collection, Element, Storage};
use crate::error::{CombineError, UnsupportedOperationError};

/// Appends every element of `addition` into `receiver`, in order.
///
/// The receiver keeps its identity, so every other handle to its storage
/// observes the new elements. This includes handles held inside larger
/// aggregates: a sequence stored as a map value changes even though the map
/// entry is never reassigned.
///
/// `addition` is read completely before the first insertion, so merging a
/// container into itself (or into a view over itself) is well defined.
///
/// # Errors
///
/// Returns [`CombineError::UnsupportedOperation`] if `receiver` is not
/// mutable. The receiver is not modified in that case.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use combiner::collection::{Collection, FrozenSequence, Sequence};
/// use combiner::combine::mutating_merge;
///
/// let mut registry = HashMap::new();
/// registry.insert("a", Sequence::from([1, 2, 3]));
///
/// let receiver = registry["a"].clone();
/// mutating_merge(&receiver, &FrozenSequence::from([4, 5, 6])).unwrap();
///
/// assert_eq!(registry["a"].to_vec(), vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn mutating_merge<R, A>(receiver: &R, addition: &A) -> Result<(), CombineError>
where
    R: Collection + ?Sized,
    A: Collection + ?Sized,
    A::Storage: Storage<Element = Element<R>>,
{
    let outcome = receiver.outcome();
    if !outcome.accepts_mutation() {
        return Err(UnsupportedOperationError::reject(outcome.container_name(), "insert").into());
    }

    let prior_length = receiver.len();
    let additions = addition.to_vec();
    let appended = additions.len();
    for element in additions {
        receiver.try_insert(element)?;
    }

    tracing::debug!(
        strategy = ?Strategy::MutatingMerge,
        shape = ?receiver.shape(),
        prior_length,
        appended,
        length = receiver.len(),
        "Merged addition into receiver in place"
    );
    Ok(())
}
