//! # combiner
//!
//! Combining two collections with explicit control over three properties:
//!
//! - whether the result is freshly materialized or a live view,
//! - whether the result is mutable or permanently read-only,
//! - whether mutating an input afterwards is observable through the result.
//!
//! ## Overview
//!
//! - **Containers**: [`Sequence`](collection::Sequence) and
//!   [`UniqueSet`](collection::UniqueSet) are mutable handles whose clones
//!   alias storage. [`Snapshot`](collection::Snapshot) owns frozen storage.
//!   [`Facade`](collection::Facade) owns nothing and borrows its sources.
//! - **Combinations**: [`mutating_merge`](combine::mutating_merge),
//!   [`materializing_merge`](combine::materializing_merge),
//!   [`view_merge`](combine::view_merge) and
//!   [`read_only_view`](combine::read_only_view).
//!
//! ## Feature Flags
//!
//! - `collection`: Containers and facades
//! - `combine`: Combination operations and the behaviour table
//! - `arc`: Thread-safe shared storage (`Arc` + `parking_lot::RwLock`)
//! - `serde`: Serialization of containers
//! - `fxhash` / `ahash`: Alternative hashers for unique-element containers
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use combiner::prelude::*;
//!
//! let first = UniqueSet::from([1, 2, 3]);
//! let second = UniqueSet::from([4, 5]);
//!
//! let snapshot = materializing_merge(&first, &second, Mutability::Immutable);
//! let view = view_merge(&first, &second);
//!
//! first.insert(6);
//!
//! assert_eq!(snapshot, FrozenSet::from([1, 2, 3, 4, 5]));
//! assert_eq!(view, FrozenSet::from([1, 2, 3, 4, 5, 6]));
//! assert!(snapshot.try_insert(7).is_err());
//! assert!(view.try_insert(7).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use combiner::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "combine")]
    pub use crate::combine::*;

    pub use crate::error::*;
}

pub mod error;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "combine")]
pub mod combine;
