//! Errors raised by store operations.

use crate::types::{GameItem, Phase};

/// Error that can occur when applying an operation to the game state.
///
/// Every variant is recoverable: the state the operation was applied to
/// is left untouched and the caller may retry.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StoreError {
    /// Requested bay size is below the number of items that must fit.
    #[display(
        "You need at least {} containers to store all items! (requested {})",
        minimum,
        requested
    )]
    InvalidContainerCount {
        /// Count the caller asked for.
        requested: i64,
        /// Smallest accepted count.
        minimum: usize,
    },

    /// Requested bay size is above the largest supported bay.
    #[display(
        "The cargo bay holds at most {} containers! (requested {})",
        maximum,
        requested
    )]
    TooManyContainers {
        /// Count the caller asked for.
        requested: i64,
        /// Largest accepted count.
        maximum: usize,
    },

    /// No container has the given id.
    #[display("Container {} does not exist", _0)]
    ContainerNotFound(u32),

    /// Target container already holds an item.
    #[display("Container {} already contains {}!", id, item)]
    ContainerOccupied {
        /// Container that was targeted.
        id: u32,
        /// Item already stored there.
        item: GameItem,
    },

    /// Item is already loaded into another container.
    #[display("{} is already loaded in container {}", item, id)]
    ItemAlreadyPlaced {
        /// Item that was being placed.
        item: GameItem,
        /// Container that currently holds it.
        id: u32,
    },

    /// Mission has already been completed this session.
    #[display("Mission {} is already complete", _0)]
    MissionAlreadyCompleted(u32),

    /// Mission is not the one currently being played.
    #[display("Mission {} cannot be completed during {}", mission, phase)]
    MissionOutOfOrder {
        /// Mission the caller tried to complete.
        mission: u32,
        /// Phase the session was in.
        phase: Phase,
    },

    /// A state invariant would not hold after the operation.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for StoreError {}
