//! The combination behaviour table.
//!
//! A combination is characterised by *how* it produces its result
//! ([`Strategy`]) and by *what* the result guarantees ([`Outcome`]). Of the
//! nine pairs only four are coherent:
//!
//! | Strategy             | Mutable | Frozen | ReadOnlyLive |
//! |----------------------|---------|--------|--------------|
//! | `MutatingMerge`      | yes     | -      | -            |
//! | `MaterializingMerge` | yes     | yes    | -            |
//! | `ViewMerge`          | -       | -      | yes          |
//!
//! An in-place merge returns its receiver, which must be mutable. Fresh
//! storage cannot follow its inputs. A view has no storage to mutate or to
//! freeze.

use crate::collection::Outcome;

/// How a combination produces its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Appends into an existing receiver.
    MutatingMerge,
    /// Copies both inputs into freshly allocated storage.
    MaterializingMerge,
    /// Borrows both inputs and recomputes on every read.
    ViewMerge,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Self; 3] = [Self::MutatingMerge, Self::MaterializingMerge, Self::ViewMerge];

    /// Returns the outcomes this strategy can produce.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combiner::collection::Outcome;
    /// use combiner::combine::Strategy;
    ///
    /// assert_eq!(
    ///     Strategy::MaterializingMerge.outcomes(),
    ///     &[Outcome::Mutable, Outcome::Frozen]
    /// );
    /// ```
    #[must_use]
    pub const fn outcomes(self) -> &'static [Outcome] {
        match self {
            Self::MutatingMerge => &[Outcome::Mutable],
            Self::MaterializingMerge => &[Outcome::Mutable, Outcome::Frozen],
            Self::ViewMerge => &[Outcome::ReadOnlyLive],
        }
    }

    /// Returns `true` if the result shares storage with an input.
    ///
    /// A mutating merge returns the receiver itself; a view borrows both
    /// inputs. Only a materializing merge allocates.
    #[must_use]
    pub const fn shares_storage_with_inputs(self) -> bool {
        !matches!(self, Self::MaterializingMerge)
    }
}

/// One cell of the strategy × outcome table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Behavior {
    /// How the result is produced.
    pub strategy: Strategy,
    /// What the result guarantees.
    pub outcome: Outcome,
}

impl Behavior {
    /// Every cell of the table, row by row.
    pub const ALL: [Self; 9] = {
        let mut cells = [Self::new(Strategy::MutatingMerge, Outcome::Mutable); 9];
        let mut index = 0;
        while index < 9 {
            cells[index] = Self::new(Strategy::ALL[index / 3], Outcome::ALL[index % 3]);
            index += 1;
        }
        cells
    };

    /// Creates a table cell.
    #[must_use]
    pub const fn new(strategy: Strategy, outcome: Outcome) -> Self {
        Self { strategy, outcome }
    }

    /// Returns `true` if some combination actually produces this behaviour.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combiner::collection::Outcome;
    /// use combiner::combine::{Behavior, Strategy};
    ///
    /// assert!(Behavior::new(Strategy::ViewMerge, Outcome::ReadOnlyLive).is_supported());
    /// assert!(!Behavior::new(Strategy::ViewMerge, Outcome::Frozen).is_supported());
    /// assert_eq!(Behavior::supported().count(), 4);
    /// ```
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(
            (self.strategy, self.outcome),
            (Strategy::MutatingMerge, Outcome::Mutable)
                | (
                    Strategy::MaterializingMerge,
                    Outcome::Mutable | Outcome::Frozen
                )
                | (Strategy::ViewMerge, Outcome::ReadOnlyLive)
        )
    }

    /// Iterates the supported cells.
    pub fn supported() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|behavior| behavior.is_supported())
    }

    /// Returns `true` if mutating an input after the combination is
    /// observable through the result.
    ///
    /// For a mutating merge this concerns the *addition*: the receiver is
    /// the result itself.
    #[must_use]
    pub const fn reflects_input_mutation(self) -> bool {
        self.outcome.reflects_source_mutation()
    }

    /// Returns `true` if the result accepts mutation.
    #[must_use]
    pub const fn accepts_mutation(self) -> bool {
        self.outcome.accepts_mutation()
    }
}
