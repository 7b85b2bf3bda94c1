//! First-class actions for the cargo bay store.
//!
//! Every state-changing operation has an [`Action`] variant. Actions are
//! plain data: they can be logged, serialized and replayed against a fresh
//! store to reproduce a session.

use crate::types::{Container, GameItem};
use serde::{Deserialize, Serialize};

/// A state-changing request to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Leave the intro and begin mission 1.
    StartGame,
    /// Declare a bay of `count` empty containers.
    InitializeContainers {
        /// Requested number of containers.
        count: i64,
    },
    /// Load an item into a container.
    PlaceItem {
        /// Target container id.
        container_id: u32,
        /// Item to load.
        item: GameItem,
    },
    /// Empty a container.
    RemoveItem {
        /// Container id to empty.
        container_id: u32,
    },
    /// Replace the whole container sequence.
    UpdateContainers {
        /// New containers, in id order.
        containers: Vec<Container>,
    },
    /// Load every unplaced item into a random empty container.
    RandomlyPlaceItems,
    /// Record a finished mission.
    CompleteMission {
        /// Mission number (1 or 2).
        mission: u32,
    },
    /// Return to the initial state.
    Reset,
}

impl Action {
    /// Short name used in logs and the action history panel.
    pub fn name(&self) -> &'static str {
        match self {
            Action::StartGame => "start_game",
            Action::InitializeContainers { .. } => "initialize_containers",
            Action::PlaceItem { .. } => "place_item",
            Action::RemoveItem { .. } => "remove_item",
            Action::UpdateContainers { .. } => "update_containers",
            Action::RandomlyPlaceItems => "randomly_place_items",
            Action::CompleteMission { .. } => "complete_mission",
            Action::Reset => "reset",
        }
    }

    /// Checks if this action may move the phase backward.
    pub fn is_reset(&self) -> bool {
        matches!(self, Action::Reset)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::InitializeContainers { count } => write!(f, "{}({})", self.name(), count),
            Action::PlaceItem { container_id, item } => {
                write!(f, "{}({}, {})", self.name(), container_id, item)
            }
            Action::RemoveItem { container_id } => write!(f, "{}({})", self.name(), container_id),
            Action::UpdateContainers { containers } => {
                write!(f, "{}(len={})", self.name(), containers.len())
            }
            Action::CompleteMission { mission } => write!(f, "{}({})", self.name(), mission),
            _ => write!(f, "{}()", self.name()),
        }
    }
}
