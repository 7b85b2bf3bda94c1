//! Forward phase property: a transition never moves the phase backward.

use crate::GameState;
use tracing::warn;

/// Transition check: `after.phase >= before.phase`.
///
/// Unlike the state invariants this relates two states, so it is not an
/// [`Invariant`](super::Invariant). Reset is the only action exempt from it.
pub struct ForwardPhase;

impl ForwardPhase {
    /// Checks if the transition keeps the phase moving forward.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let valid = after.phase() >= before.phase();
        if !valid {
            warn!(before = ?before.phase(), after = ?after.phase(), "Phase moved backward");
        }
        valid
    }

    /// Human-readable description of the property.
    pub fn description() -> &'static str {
        "Phase only advances forward"
    }
}
