//! Combining two collections.
//!
//! Three independent strategies operate over the same pair of inputs:
//!
//! - [`mutating_merge`]: appends into an existing receiver, in place.
//! - [`materializing_merge`]: copies both inputs into fresh storage, either
//!   mutable or permanently frozen.
//! - [`view_merge`]: borrows both inputs and recomputes on every read.
//!
//! [`read_only_view`] is the single-source form of `view_merge`.
//!
//! Which guarantees each strategy gives is tabulated by [`Behavior`].
//!
//! # Examples
//!
//! ```rust
//! use combiner::collection::{Collection, FrozenSequence, Mutability, Sequence};
//! use combiner::combine::{materializing_merge, mutating_merge, view_merge};
//!
//! let first = Sequence::from([1, 2, 3]);
//! let second = Sequence::from([4, 5, 6]);
//!
//! let copy = materializing_merge(&first, &second, Mutability::Immutable);
//! let view = view_merge(&first, &second);
//!
//! mutating_merge(&first, &FrozenSequence::from([7])).unwrap();
//!
//! assert_eq!(first.to_vec(), vec![1, 2, 3, 7]);
//! assert_eq!(copy.to_vec(), vec![1, 2, 3, 4, 5, 6]);        // Disconnected
//! assert_eq!(view.to_vec(), vec![1, 2, 3, 7, 4, 5, 6]);     // Live
//! ```

mod behavior;
mod materializing;
mod mutating;
mod view;

pub use behavior::{Behavior, Strategy};
pub use materializing::{materializing_merge, merged_frozen, merged_mutable};
pub use mutating::mutating_merge;
pub use view::{read_only_view, view_merge};
