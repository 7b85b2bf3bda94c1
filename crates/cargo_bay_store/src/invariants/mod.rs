//! First-class invariants for the cargo bay.
//!
//! Invariants are logical properties of a [`GameState`] that every
//! operation must preserve. The store checks them after each dispatched
//! action and they can be tested on their own.

use crate::GameState;

mod count_matches;
mod dense_ids;
mod forward_phase;
mod unique_items;

pub use count_matches::CountMatchesLengthInvariant;
pub use dense_ids::DenseIdsInvariant;
pub use forward_phase::ForwardPhase;
pub use unique_items::UniqueItemsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
/// Implemented for tuples of [`Invariant`]s; every member is checked and
/// all violations are reported, not just the first.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match <(I1, I2) as InvariantSet<S>>::check_all(state) {
            Ok(()) => Vec::new(),
            Err(v) => v,
        };

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All state invariants of the cargo bay as a composable set.
pub type CargoBayInvariants = (
    DenseIdsInvariant,
    CountMatchesLengthInvariant,
    UniqueItemsInvariant,
);

/// Joins violation descriptions into one message.
pub fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Container, GameItem};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(CargoBayInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_initialize() {
        let state = GameState::new().initialize_containers(8).unwrap();
        assert!(CargoBayInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let state = GameState::new().update_containers(vec![
            Container::with_item(2, GameItem::Fuel),
            Container::with_item(3, GameItem::Fuel),
        ]);

        let violations = CargoBayInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(describe(&violations).contains("dense"));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (DenseIdsInvariant, UniqueItemsInvariant);
        let state = GameState::new().initialize_containers(5).unwrap();
        assert!(TwoInvariants::check_all(&state).is_ok());
    }
}
