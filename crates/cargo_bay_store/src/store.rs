//! The game state store.
//!
//! [`GameStore`] owns the single live [`GameState`], turns [`Action`]s into
//! transitions and checks the invariant set before installing the result.

use std::collections::VecDeque;

use crate::action::Action;
use crate::error::StoreError;
use crate::invariants::{CargoBayInvariants, ForwardPhase, InvariantSet, describe};
use crate::rules::SearchTrace;
use crate::state::GameState;
use crate::types::GameItem;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

/// Default number of snapshots kept for undo.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Owner of the live game state.
///
/// All mutation goes through [`GameStore::dispatch`]. A failed dispatch
/// leaves the state exactly as it was.
#[derive(Debug, Clone)]
pub struct GameStore {
    state: GameState,
    rng: StdRng,
    history: VecDeque<GameState>,
    history_limit: usize,
    applied: Vec<Action>,
}

impl GameStore {
    /// Creates a store in the initial state with an entropy-seeded RNG.
    #[instrument]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates a store whose random fills are reproducible.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            state: GameState::new(),
            rng,
            history: VecDeque::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            applied: Vec::new(),
        }
    }

    /// Sets how many snapshots are kept for undo.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        while self.history.len() > limit {
            self.history.pop_front();
        }
        self
    }

    /// Builds a seeded store and dispatches every action in order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an action.
    #[instrument(skip(actions), fields(count = actions.len()))]
    pub fn replay(actions: &[Action], seed: u64) -> Result<Self, StoreError> {
        let mut store = Self::with_seed(seed);
        for action in actions {
            store.dispatch(action.clone())?;
        }
        Ok(store)
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns successfully applied actions, oldest first.
    pub fn applied(&self) -> &[Action] {
        &self.applied
    }

    /// Number of snapshots available to [`GameStore::undo`].
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Applies an action and installs the resulting state.
    ///
    /// The new state must satisfy [`CargoBayInvariants`] and, unless the
    /// action is a reset, must not move the phase backward.
    ///
    /// # Errors
    ///
    /// Returns the operation's own error, or
    /// [`StoreError::InvariantViolation`] if the result is rejected.
    #[instrument(skip(self, action), fields(action = %action))]
    pub fn dispatch(&mut self, action: Action) -> Result<&GameState, StoreError> {
        let next = self.transition(&action).inspect_err(|e| {
            warn!(error = %e, "Action rejected");
        })?;

        if let Err(violations) = CargoBayInvariants::check_all(&next) {
            let message = describe(&violations);
            warn!(%message, "Postcondition failed");
            return Err(StoreError::InvariantViolation(message));
        }

        if !action.is_reset() && !ForwardPhase::holds(&self.state, &next) {
            return Err(StoreError::InvariantViolation(
                ForwardPhase::description().to_string(),
            ));
        }

        if action.is_reset() {
            self.history.clear();
            self.state = next;
            debug!("History cleared by reset");
        } else if next != self.state {
            let previous = std::mem::replace(&mut self.state, next);
            self.history.push_back(previous);
            if self.history.len() > self.history_limit {
                self.history.pop_front();
            }
            debug!(phase = ?self.state.phase(), score = self.state.score(), "State installed");
        } else {
            debug!("Action left state unchanged");
        }

        self.applied.push(action);
        Ok(&self.state)
    }

    fn transition(&mut self, action: &Action) -> Result<GameState, StoreError> {
        let state = &self.state;
        match action {
            Action::StartGame => Ok(state.start_game()),
            Action::InitializeContainers { count } => state.initialize_containers(*count),
            Action::PlaceItem { container_id, item } => {
                state.place_item_in_container(*container_id, *item)
            }
            Action::RemoveItem { container_id } => {
                Ok(state.remove_item_from_container(*container_id))
            }
            Action::UpdateContainers { containers } => {
                Ok(state.update_containers(containers.clone()))
            }
            Action::RandomlyPlaceItems => Ok(state.randomly_place_items(&mut self.rng)),
            Action::CompleteMission { mission } => state.complete_mission(*mission),
            Action::Reset => {
                info!("Resetting game");
                Ok(state.reset_game())
            }
        }
    }

    /// Restores the state from before the last change.
    ///
    /// Undo only steps back within the current phase. Returns `false` when
    /// there is nothing to undo or the previous snapshot belongs to an
    /// earlier phase; the history is left untouched in that case.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.back() else {
            return false;
        };
        if previous.phase() < self.state.phase() {
            debug!(
                current = ?self.state.phase(),
                previous = ?previous.phase(),
                "Undo refused across a phase boundary"
            );
            return false;
        }
        match self.history.pop_back() {
            Some(previous) => {
                debug!(phase = ?previous.phase(), "Undo");
                self.state = previous;
                true
            }
            None => false,
        }
    }

    /// Linear search over the live state.
    pub fn search_for_item(&self, item: GameItem) -> Option<u32> {
        self.state.search_for_item(item)
    }

    /// Linear search over the live state, recording each probe.
    pub fn search_trace(&self, item: GameItem) -> SearchTrace {
        self.state.search_trace(item)
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Container, Phase};

    fn started(count: i64) -> GameStore {
        let mut store = GameStore::with_seed(17);
        store.dispatch(Action::StartGame).unwrap();
        store
            .dispatch(Action::InitializeContainers { count })
            .unwrap();
        store
    }

    #[test]
    fn test_failed_dispatch_keeps_state() {
        let mut store = started(5);
        let before = store.state().clone();

        let err = store
            .dispatch(Action::InitializeContainers { count: 3 })
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidContainerCount { .. }));
        assert_eq!(store.state(), &before);
        assert_eq!(store.applied().len(), 2);
    }

    #[test]
    fn test_update_breaking_ids_rejected() {
        let mut store = started(5);
        let err = store
            .dispatch(Action::UpdateContainers {
                containers: vec![Container::new(1), Container::new(5)],
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::InvariantViolation(_)));
        assert_eq!(store.state().container_count(), 5);
    }

    #[test]
    fn test_update_keeping_ids_accepted() {
        let mut store = started(5);
        let containers: Vec<Container> = store
            .state()
            .containers()
            .iter()
            .map(|c| {
                if c.id() == 2 {
                    Container::with_item(2, GameItem::Water)
                } else {
                    *c
                }
            })
            .collect();

        store.dispatch(Action::UpdateContainers { containers }).unwrap();
        assert_eq!(store.search_for_item(GameItem::Water), Some(2));
    }

    #[test]
    fn test_undo_restores_previous_snapshot() {
        let mut store = started(5);
        store
            .dispatch(Action::PlaceItem {
                container_id: 1,
                item: GameItem::Fuel,
            })
            .unwrap();
        assert_eq!(store.search_for_item(GameItem::Fuel), Some(1));

        assert!(store.undo());
        assert_eq!(store.search_for_item(GameItem::Fuel), None);
        assert!(store.undo());
        assert!(store.state().containers().is_empty());
        assert_eq!(store.state().phase(), Phase::Mission1);

        // The snapshot left is the intro, an earlier phase.
        assert!(!store.undo());
        assert_eq!(store.state().phase(), Phase::Mission1);
        assert_eq!(store.undo_depth(), 1);
    }

    #[test]
    fn test_undo_refused_after_mission_completion() {
        let mut store = started(6);
        store.dispatch(Action::RandomlyPlaceItems).unwrap();
        store.dispatch(Action::CompleteMission { mission: 1 }).unwrap();
        let completed = store.state().clone();

        assert!(!store.undo());
        assert_eq!(store.state(), &completed);
        assert_eq!(store.state().phase(), Phase::Mission2);
        assert_eq!(store.state().score(), 100);
        assert_eq!(store.state().completed_missions(), &[1]);
    }

    #[test]
    fn test_reset_clears_undo_history() {
        let mut store = started(5);
        store.dispatch(Action::Reset).unwrap();
        assert_eq!(store.undo_depth(), 0);
        assert!(!store.undo());
        assert_eq!(store.state(), &GameState::new());
    }

    #[test]
    fn test_noop_does_not_grow_history() {
        let mut store = started(5);
        let depth = store.undo_depth();
        store.dispatch(Action::RemoveItem { container_id: 2 }).unwrap();
        store.dispatch(Action::StartGame).unwrap();
        assert_eq!(store.undo_depth(), depth);
    }

    #[test]
    fn test_history_limit_bounds_undo() {
        let mut store = GameStore::with_seed(0).history_limit(2);
        store.dispatch(Action::StartGame).unwrap();
        store.dispatch(Action::InitializeContainers { count: 5 }).unwrap();
        store.dispatch(Action::InitializeContainers { count: 6 }).unwrap();
        assert_eq!(store.undo_depth(), 2);
    }

    #[test]
    fn test_reset_allowed_to_go_back() {
        let mut store = started(6);
        store.dispatch(Action::RandomlyPlaceItems).unwrap();
        store.dispatch(Action::CompleteMission { mission: 1 }).unwrap();
        store.dispatch(Action::Reset).unwrap();
        assert_eq!(store.state(), &GameState::new());
    }

    #[test]
    fn test_replay_is_deterministic() {
        let actions = vec![
            Action::StartGame,
            Action::InitializeContainers { count: 9 },
            Action::RandomlyPlaceItems,
        ];
        let a = GameStore::replay(&actions, 99).unwrap();
        let b = GameStore::replay(&actions, 99).unwrap();
        assert_eq!(a.state(), b.state());
        assert!(a.state().all_items_placed());
    }
}
