//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties of [`GameState`] that must hold after
//! every transition. They are testable independently and document what the
//! engine guarantees.

use super::GameState;

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds after every accepted move.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s, so a set is just a type alias.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violated invariant, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [
                    $((<$inv as Invariant<S>>::holds(state), <$inv as Invariant<S>>::description()),)+
                ]
                .into_iter()
                .filter(|(holds, _)| !holds)
                .map(|(_, description)| InvariantViolation::new(description))
                .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

pub mod disjoint_moves;
pub mod move_balance;
pub mod turn_order;

pub use disjoint_moves::DisjointMovesInvariant;
pub use move_balance::MoveBalanceInvariant;
pub use turn_order::TurnOrderInvariant;

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    DisjointMovesInvariant,
    MoveBalanceInvariant,
    TurnOrderInvariant,
);

/// Checks every invariant against a state.
pub fn check_state(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    TicTacToeInvariants::check_all(state)
}
