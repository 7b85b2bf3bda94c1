//! Game state and its pure transitions.
//!
//! Every operation takes `&self` and returns a brand-new [`GameState`]
//! (or a [`StoreError`]); the receiver is never modified. Callers install
//! the returned value themselves, which makes snapshots and undo trivial.

use crate::error::StoreError;
use crate::rules::{SearchTrace, linear_search, linear_search_trace, random_fill};
use crate::types::{Container, GameItem, ITEM_COUNT, Phase};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Points awarded for each completed mission.
pub const MISSION_POINTS: u32 = 100;

/// Largest bay [`GameState::initialize_containers`] accepts.
pub const MAX_CONTAINERS: usize = 100;

/// Complete session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    phase: Phase,
    containers: Vec<Container>,
    container_count: usize,
    current_mission: u32,
    score: u32,
    completed_missions: Vec<u32>,
}

impl GameState {
    /// Creates the initial session state.
    pub fn new() -> Self {
        Self {
            phase: Phase::Intro,
            containers: Vec::new(),
            container_count: 0,
            current_mission: 1,
            score: 0,
            completed_missions: Vec::new(),
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the containers in id order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Returns the declared bay size.
    pub fn container_count(&self) -> usize {
        self.container_count
    }

    /// Returns the mission being played (1-based).
    pub fn current_mission(&self) -> u32 {
        self.current_mission
    }

    /// Returns the accumulated score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns completed mission numbers in completion order.
    pub fn completed_missions(&self) -> &[u32] {
        &self.completed_missions
    }

    /// Looks up a container by id.
    pub fn container(&self, id: u32) -> Option<&Container> {
        self.containers.iter().find(|c| c.id() == id)
    }

    /// Items not yet loaded into any container, in canonical order.
    pub fn unplaced_items(&self) -> Vec<GameItem> {
        GameItem::ALL
            .iter()
            .copied()
            .filter(|item| !self.containers.iter().any(|c| c.item() == Some(*item)))
            .collect()
    }

    /// Checks if every item is loaded into the bay.
    pub fn all_items_placed(&self) -> bool {
        !self.containers.is_empty() && self.unplaced_items().is_empty()
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Leaves the intro and begins mission 1.
    ///
    /// From any other phase this returns the state unchanged so the
    /// phase never moves backward.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn start_game(&self) -> GameState {
        if self.phase != Phase::Intro {
            debug!("Game already started, ignoring");
            return self.clone();
        }
        GameState {
            phase: Phase::Mission1,
            ..self.clone()
        }
    }

    /// Declares a bay of `count` empty containers with ids `1..=count`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidContainerCount`] if `count` is smaller than
    ///   the number of items
    /// - [`StoreError::TooManyContainers`] if `count` exceeds
    ///   [`MAX_CONTAINERS`]
    #[instrument(skip(self))]
    pub fn initialize_containers(&self, count: i64) -> Result<GameState, StoreError> {
        if count < ITEM_COUNT as i64 {
            warn!(count, minimum = ITEM_COUNT, "Rejected container count");
            return Err(StoreError::InvalidContainerCount {
                requested: count,
                minimum: ITEM_COUNT,
            });
        }
        if count > MAX_CONTAINERS as i64 {
            warn!(count, maximum = MAX_CONTAINERS, "Rejected container count");
            return Err(StoreError::TooManyContainers {
                requested: count,
                maximum: MAX_CONTAINERS,
            });
        }
        let size = count as u32;

        let containers: Vec<Container> = (1..=size).map(Container::new).collect();
        debug!(size, "Cargo bay initialized");

        Ok(GameState {
            container_count: containers.len(),
            containers,
            ..self.clone()
        })
    }

    /// Loads `item` into the container with id `container_id`.
    ///
    /// Placing an item into the container that already holds it is a no-op.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ContainerNotFound`] if no container has that id
    /// - [`StoreError::ContainerOccupied`] if it holds a different item
    /// - [`StoreError::ItemAlreadyPlaced`] if the item is loaded elsewhere
    #[instrument(skip(self))]
    pub fn place_item_in_container(
        &self,
        container_id: u32,
        item: GameItem,
    ) -> Result<GameState, StoreError> {
        let target = self
            .container(container_id)
            .ok_or(StoreError::ContainerNotFound(container_id))?;

        match target.item() {
            Some(existing) if existing == item => return Ok(self.clone()),
            Some(existing) => {
                return Err(StoreError::ContainerOccupied {
                    id: container_id,
                    item: existing,
                });
            }
            None => {}
        }

        if let Some(id) = linear_search(&self.containers, item) {
            return Err(StoreError::ItemAlreadyPlaced { item, id });
        }

        let containers = self
            .containers
            .iter()
            .map(|c| {
                if c.id() == container_id {
                    c.filled(item)
                } else {
                    *c
                }
            })
            .collect();

        Ok(GameState {
            containers,
            ..self.clone()
        })
    }

    /// Empties the container with id `container_id`.
    ///
    /// No-op if it is already empty or does not exist.
    #[instrument(skip(self))]
    pub fn remove_item_from_container(&self, container_id: u32) -> GameState {
        let containers = self
            .containers
            .iter()
            .map(|c| if c.id() == container_id { c.emptied() } else { *c })
            .collect();

        GameState {
            containers,
            ..self.clone()
        }
    }

    /// Replaces the whole container sequence.
    ///
    /// The caller is responsible for keeping ids dense and items unique;
    /// this transition does not check either.
    #[instrument(skip(self, containers), fields(len = containers.len()))]
    pub fn update_containers(&self, containers: Vec<Container>) -> GameState {
        GameState {
            container_count: containers.len(),
            containers,
            ..self.clone()
        }
    }

    /// Loads every unplaced item into a random empty container.
    ///
    /// See [`random_fill`] for the exact algorithm.
    #[instrument(skip(self, rng))]
    pub fn randomly_place_items<R: Rng + ?Sized>(&self, rng: &mut R) -> GameState {
        GameState {
            containers: random_fill(&self.containers, rng),
            ..self.clone()
        }
    }

    /// Linear search for `item`, returning the id of the first match.
    pub fn search_for_item(&self, item: GameItem) -> Option<u32> {
        linear_search(&self.containers, item)
    }

    /// Linear search for `item`, recording every container probed.
    pub fn search_trace(&self, item: GameItem) -> SearchTrace {
        linear_search_trace(&self.containers, item)
    }

    /// Records a finished mission, awards points and advances the phase.
    ///
    /// # Errors
    ///
    /// - [`StoreError::MissionAlreadyCompleted`] on a second completion
    /// - [`StoreError::MissionOutOfOrder`] if the mission is not the one
    ///   currently active
    #[instrument(skip(self), fields(phase = ?self.phase, current = self.current_mission))]
    pub fn complete_mission(&self, mission_number: u32) -> Result<GameState, StoreError> {
        if self.completed_missions.contains(&mission_number) {
            warn!("Mission already completed");
            return Err(StoreError::MissionAlreadyCompleted(mission_number));
        }

        if mission_number != self.current_mission
            || Phase::for_mission(mission_number) != Some(self.phase)
        {
            warn!("Mission is not active");
            return Err(StoreError::MissionOutOfOrder {
                mission: mission_number,
                phase: self.phase,
            });
        }

        let mut completed_missions = self.completed_missions.clone();
        completed_missions.push(mission_number);

        let phase = if mission_number == 1 {
            Phase::Mission2
        } else {
            Phase::Complete
        };
        debug!(?phase, "Mission complete");

        Ok(GameState {
            phase,
            completed_missions,
            score: self.score + MISSION_POINTS,
            current_mission: mission_number + 1,
            ..self.clone()
        })
    }

    /// Returns the initial state, whatever the current one is.
    #[instrument(skip(self))]
    pub fn reset_game(&self) -> GameState {
        GameState::new()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn loaded_bay(count: i64) -> GameState {
        GameState::new()
            .start_game()
            .initialize_containers(count)
            .expect("valid count")
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.phase(), Phase::Intro);
        assert!(state.containers().is_empty());
        assert_eq!(state.container_count(), 0);
        assert_eq!(state.current_mission(), 1);
        assert_eq!(state.score(), 0);
        assert!(state.completed_missions().is_empty());
    }

    #[test]
    fn test_start_game_only_from_intro() {
        let started = GameState::new().start_game();
        assert_eq!(started.phase(), Phase::Mission1);

        let mission2 = loaded_bay(5)
            .randomly_place_items(&mut StdRng::seed_from_u64(0))
            .complete_mission(1)
            .unwrap();
        assert_eq!(mission2.start_game().phase(), Phase::Mission2);
    }

    #[test]
    fn test_initialize_creates_dense_empty_bay() {
        for count in [5_i64, 6, 12, 40] {
            let state = loaded_bay(count);
            assert_eq!(state.container_count(), count as usize);
            for (idx, container) in state.containers().iter().enumerate() {
                assert_eq!(container.id() as usize, idx + 1);
                assert!(container.is_empty());
            }
        }
    }

    #[test]
    fn test_initialize_rejects_small_counts() {
        let state = GameState::new().start_game();
        for count in [-3_i64, 0, 1, 4] {
            let err = state.initialize_containers(count).unwrap_err();
            assert_eq!(
                err,
                StoreError::InvalidContainerCount {
                    requested: count,
                    minimum: 5
                }
            );
        }
    }

    #[test]
    fn test_initialize_rejects_oversized_bay() {
        let state = GameState::new().start_game();
        assert!(state.initialize_containers(MAX_CONTAINERS as i64).is_ok());

        for count in [MAX_CONTAINERS as i64 + 1, 5_000_000_000] {
            let err = state.initialize_containers(count).unwrap_err();
            assert_eq!(
                err,
                StoreError::TooManyContainers {
                    requested: count,
                    maximum: MAX_CONTAINERS
                }
            );
            assert!(err.to_string().contains("at most 100 containers"));
        }
    }

    #[test]
    fn test_initialize_last_call_wins() {
        let state = loaded_bay(9)
            .place_item_in_container(2, GameItem::Fuel)
            .unwrap()
            .initialize_containers(6)
            .unwrap();
        assert_eq!(state.container_count(), 6);
        assert!(state.containers().iter().all(Container::is_empty));
    }

    #[test]
    fn test_place_then_remove_round_trip() {
        let before = loaded_bay(6);
        let placed = before.place_item_in_container(4, GameItem::Water).unwrap();
        assert_eq!(placed.container(4).unwrap().item(), Some(GameItem::Water));

        let removed = placed.remove_item_from_container(4);
        assert_eq!(removed, before);
    }

    #[test]
    fn test_place_unknown_container() {
        let err = loaded_bay(5)
            .place_item_in_container(6, GameItem::Fuel)
            .unwrap_err();
        assert_eq!(err, StoreError::ContainerNotFound(6));
    }

    #[test]
    fn test_place_into_occupied_container() {
        let state = loaded_bay(5).place_item_in_container(1, GameItem::Fuel).unwrap();
        let err = state.place_item_in_container(1, GameItem::Water).unwrap_err();
        assert_eq!(
            err,
            StoreError::ContainerOccupied {
                id: 1,
                item: GameItem::Fuel
            }
        );
        assert_eq!(state.place_item_in_container(1, GameItem::Fuel).unwrap(), state);
    }

    #[test]
    fn test_place_duplicate_item() {
        let state = loaded_bay(5).place_item_in_container(1, GameItem::Fuel).unwrap();
        let err = state.place_item_in_container(2, GameItem::Fuel).unwrap_err();
        assert_eq!(
            err,
            StoreError::ItemAlreadyPlaced {
                item: GameItem::Fuel,
                id: 1
            }
        );
    }

    #[test]
    fn test_remove_is_noop_when_missing_or_empty() {
        let state = loaded_bay(5);
        assert_eq!(state.remove_item_from_container(3), state);
        assert_eq!(state.remove_item_from_container(99), state);
    }

    #[test]
    fn test_update_tracks_length() {
        let state = loaded_bay(5).update_containers(vec![
            Container::new(1),
            Container::with_item(2, GameItem::Fuel),
        ]);
        assert_eq!(state.container_count(), 2);
        assert_eq!(state.search_for_item(GameItem::Fuel), Some(2));
    }

    #[test]
    fn test_search_scenario() {
        let state = loaded_bay(5).place_item_in_container(3, GameItem::Fuel).unwrap();
        assert_eq!(state.search_for_item(GameItem::Fuel), Some(3));

        let state = state.remove_item_from_container(3);
        assert_eq!(state.search_for_item(GameItem::Fuel), None);
    }

    #[test]
    fn test_mission_progression() {
        let state = loaded_bay(5).randomly_place_items(&mut StdRng::seed_from_u64(9));
        assert!(state.all_items_placed());

        let state = state.complete_mission(1).unwrap();
        assert_eq!(state.phase(), Phase::Mission2);
        assert_eq!(state.score(), 100);
        assert_eq!(state.current_mission(), 2);

        let state = state.complete_mission(2).unwrap();
        assert_eq!(state.phase(), Phase::Complete);
        assert_eq!(state.score(), 200);
        assert_eq!(state.current_mission(), 3);
        assert_eq!(state.completed_missions(), &[1, 2]);
    }

    #[test]
    fn test_double_completion_rejected() {
        let state = loaded_bay(5).complete_mission(1).unwrap();
        assert_eq!(
            state.complete_mission(1).unwrap_err(),
            StoreError::MissionAlreadyCompleted(1)
        );
        assert_eq!(state.score(), 100);
    }

    #[test]
    fn test_out_of_order_completion_rejected() {
        let intro = GameState::new();
        assert!(matches!(
            intro.complete_mission(1),
            Err(StoreError::MissionOutOfOrder { mission: 1, phase: Phase::Intro })
        ));
        assert!(matches!(
            loaded_bay(5).complete_mission(2),
            Err(StoreError::MissionOutOfOrder { mission: 2, .. })
        ));
    }

    #[test]
    fn test_reset_returns_initial_literal() {
        let state = loaded_bay(7)
            .randomly_place_items(&mut StdRng::seed_from_u64(5))
            .complete_mission(1)
            .unwrap();
        assert_eq!(state.reset_game(), GameState::new());
        assert_eq!(GameState::new().reset_game(), GameState::new());
    }
}
