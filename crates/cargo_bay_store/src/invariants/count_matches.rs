//! Declared bay size matches the container sequence.

use super::Invariant;
use crate::GameState;

/// Invariant: `container_count == containers.len()`.
pub struct CountMatchesLengthInvariant;

impl Invariant<GameState> for CountMatchesLengthInvariant {
    fn holds(state: &GameState) -> bool {
        state.container_count() == state.containers().len()
    }

    fn description() -> &'static str {
        "Container count matches the number of containers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_initialize_and_reset() {
        let state = GameState::new().initialize_containers(10).unwrap();
        assert!(CountMatchesLengthInvariant::holds(&state));
        assert!(CountMatchesLengthInvariant::holds(&state.reset_game()));
    }
}
