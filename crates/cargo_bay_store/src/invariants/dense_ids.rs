//! Dense id invariant: container ids are 1, 2, 3, ... in order.

use super::Invariant;
use crate::GameState;

/// Invariant: `containers[i].id == i + 1` for every slot.
pub struct DenseIdsInvariant;

impl Invariant<GameState> for DenseIdsInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .containers()
            .iter()
            .enumerate()
            .all(|(idx, c)| c.id() as usize == idx + 1)
    }

    fn description() -> &'static str {
        "Container ids are dense, 1-based and in order"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Container;

    #[test]
    fn test_empty_bay_holds() {
        assert!(DenseIdsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_gap_violates() {
        let state = GameState::new().update_containers(vec![Container::new(1), Container::new(3)]);
        assert!(!DenseIdsInvariant::holds(&state));
    }

    #[test]
    fn test_reordered_violates() {
        let state = GameState::new().update_containers(vec![Container::new(2), Container::new(1)]);
        assert!(!DenseIdsInvariant::holds(&state));
    }
}
