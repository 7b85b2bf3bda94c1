//! Cargo bay game logic.
//!
//! A small, pure state machine teaching array concepts: declaring a
//! fixed-size array of containers, assigning items into slots and finding
//! them again with a linear search.
//!
//! # Architecture
//!
//! - **Types**: [`GameItem`], [`Container`], [`Phase`]
//! - **State**: [`GameState`] with pure `(state, input) -> state` transitions
//! - **Rules**: linear search and random fill over container slices
//! - **Invariants**: properties every transition must preserve
//! - **Store**: [`GameStore`] dispatching [`Action`]s with undo and replay
//!
//! # Example
//!
//! ```
//! use cargo_bay_store::{Action, GameItem, GameStore};
//!
//! let mut store = GameStore::with_seed(7);
//! store.dispatch(Action::StartGame)?;
//! store.dispatch(Action::InitializeContainers { count: 5 })?;
//! store.dispatch(Action::PlaceItem { container_id: 3, item: GameItem::Fuel })?;
//! assert_eq!(store.search_for_item(GameItem::Fuel), Some(3));
//! # Ok::<(), cargo_bay_store::StoreError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
pub mod invariants;
pub mod rules;
mod state;
mod store;
mod types;

pub use action::Action;
pub use error::StoreError;
pub use invariants::{CargoBayInvariants, Invariant, InvariantSet, InvariantViolation};
pub use rules::SearchTrace;
pub use state::{GameState, MAX_CONTAINERS, MISSION_POINTS};
pub use store::{DEFAULT_HISTORY_LIMIT, GameStore};
pub use types::{Container, GameItem, ITEM_COUNT, Phase};
