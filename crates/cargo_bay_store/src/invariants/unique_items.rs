//! Unique items invariant: no item is loaded twice.

use super::Invariant;
use crate::{GameItem, GameState};

/// Invariant: each [`GameItem`] occupies at most one container.
pub struct UniqueItemsInvariant;

impl Invariant<GameState> for UniqueItemsInvariant {
    fn holds(state: &GameState) -> bool {
        GameItem::ALL.iter().all(|item| {
            state
                .containers()
                .iter()
                .filter(|c| c.item() == Some(*item))
                .count()
                <= 1
        })
    }

    fn description() -> &'static str {
        "Each item is stored in at most one container"
    }
}
