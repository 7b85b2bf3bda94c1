//! Mission 1: declare the cargo bay and load every item.

use cargo_bay_store::{Action, Container, GameItem, GameState, GameStore, ITEM_COUNT, StoreError};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument, warn};

use super::Feedback;

/// Step within mission 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mission1Step {
    /// Player chooses how many containers to declare.
    Setup,
    /// Player loads items into the declared containers.
    Placement,
}

/// Controller for mission 1.
#[derive(Debug, Clone)]
pub struct Mission1 {
    step: Mission1Step,
    count_input: String,
    selected_item: usize,
    feedback: Option<Feedback>,
}

impl Mission1 {
    /// Creates a controller at the setup step.
    #[instrument]
    pub fn new() -> Self {
        Self {
            step: Mission1Step::Setup,
            count_input: String::new(),
            selected_item: 0,
            feedback: None,
        }
    }

    /// Creates a controller that resumes a bay which already exists.
    #[instrument(skip(state))]
    pub fn resume(state: &GameState) -> Self {
        let mut mission = Self::new();
        if !state.containers().is_empty() {
            mission.step = Mission1Step::Placement;
        }
        mission
    }

    /// Returns the current step.
    pub fn step(&self) -> Mission1Step {
        self.step
    }

    /// Returns the text typed so far for the container count.
    pub fn count_input(&self) -> &str {
        &self.count_input
    }

    /// Returns the latest feedback message.
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Appends a character to the count input.
    pub fn push_input(&mut self, c: char) {
        if c.is_ascii_digit() || (c == '-' && self.count_input.is_empty()) {
            self.count_input.push(c);
        }
    }

    /// Deletes the last character of the count input.
    pub fn pop_input(&mut self) {
        self.count_input.pop();
    }

    /// Replaces the count input.
    pub fn set_count_input(&mut self, input: impl Into<String>) {
        self.count_input = input.into();
    }

    /// Validates the typed count and declares the bay.
    ///
    /// Returns `true` when the bay was created and the mission moved on to
    /// placement. On failure the reason is left in [`Mission1::feedback`].
    #[instrument(skip(self, store), fields(input = %self.count_input))]
    pub fn submit_count(&mut self, store: &mut GameStore) -> bool {
        let count = match self.count_input.trim().parse::<i64>() {
            Ok(n) if n > 0 => n,
            _ => {
                self.feedback = Some(Feedback::error("Please enter a valid positive number!"));
                return false;
            }
        };

        if (count as usize) < ITEM_COUNT {
            self.feedback = Some(Feedback::error(format!(
                "You need at least {} containers to store all items!",
                ITEM_COUNT
            )));
            return false;
        }

        match store.dispatch(Action::InitializeContainers { count }) {
            Ok(_) => {
                info!(count, "Cargo bay declared");
                self.step = Mission1Step::Placement;
                self.selected_item = 0;
                self.feedback = None;
                true
            }
            Err(e) => {
                self.feedback = Some(Feedback::error(e.to_string()));
                false
            }
        }
    }

    /// Items still waiting to be loaded, in canonical order.
    pub fn available_items(&self, state: &GameState) -> Vec<GameItem> {
        state.unplaced_items()
    }

    /// Currently selected item, if any remain.
    pub fn selected_item(&self, state: &GameState) -> Option<GameItem> {
        let available = self.available_items(state);
        available
            .get(self.selected_item.min(available.len().saturating_sub(1)))
            .copied()
    }

    /// Moves the item selection by `delta`, wrapping around.
    pub fn cycle_item(&mut self, state: &GameState, delta: isize) {
        let len = self.available_items(state).len();
        if len == 0 {
            self.selected_item = 0;
            return;
        }
        let current = self.selected_item.min(len - 1) as isize;
        self.selected_item = (current + delta).rem_euclid(len as isize) as usize;
    }

    /// Selects a specific item if it is still available.
    pub fn select_item(&mut self, state: &GameState, item: GameItem) -> bool {
        match self.available_items(state).iter().position(|i| *i == item) {
            Some(idx) => {
                self.selected_item = idx;
                true
            }
            None => false,
        }
    }

    /// Drops the selected item onto a container.
    ///
    /// An occupied container is refused with a message and the store is
    /// not touched.
    #[instrument(skip(self, store))]
    pub fn place_selected(&mut self, store: &mut GameStore, container_id: u32) -> bool {
        let Some(item) = self.selected_item(store.state()) else {
            self.feedback = Some(Feedback::info("All items have been loaded!"));
            return false;
        };

        if let Some(existing) = store.state().container(container_id).and_then(|c| c.item()) {
            self.feedback = Some(Feedback::error(format!(
                "Container {} already contains {}!",
                container_id, existing
            )));
            return false;
        }

        match store.dispatch(Action::PlaceItem { container_id, item }) {
            Ok(_) => {
                debug!(%item, container_id, "Item loaded");
                self.feedback = None;
                true
            }
            Err(e) => {
                self.feedback = Some(Feedback::error(e.to_string()));
                false
            }
        }
    }

    /// Removes whatever is stored in a container.
    #[instrument(skip(self, store))]
    pub fn remove_from(&mut self, store: &mut GameStore, container_id: u32) -> bool {
        let occupied = store
            .state()
            .container(container_id)
            .is_some_and(|c| !c.is_empty());
        if !occupied {
            return false;
        }
        match store.dispatch(Action::RemoveItem { container_id }) {
            Ok(_) => {
                self.feedback = None;
                true
            }
            Err(e) => {
                self.feedback = Some(Feedback::error(e.to_string()));
                false
            }
        }
    }

    /// Clicks a container: removes its item if occupied, otherwise loads the
    /// selected item into it.
    pub fn activate_container(&mut self, store: &mut GameStore, container_id: u32) -> bool {
        let occupied = store
            .state()
            .container(container_id)
            .is_some_and(|c| !c.is_empty());
        if occupied {
            self.remove_from(store, container_id)
        } else {
            self.place_selected(store, container_id)
        }
    }

    /// Loads the remaining items into empty containers in id order, after
    /// shuffling the items.
    #[instrument(skip(self, store, rng))]
    pub fn auto_place_remaining<R: Rng + ?Sized>(
        &mut self,
        store: &mut GameStore,
        rng: &mut R,
    ) -> bool {
        let available = self.available_items(store.state());
        if available.is_empty() {
            return false;
        }
        let containers = auto_place(store.state().containers(), &available, rng);
        self.apply_update(store, containers)
    }

    /// Loads the remaining items using the store's random fill.
    #[instrument(skip(self, store))]
    pub fn randomize(&mut self, store: &mut GameStore) -> bool {
        match store.dispatch(Action::RandomlyPlaceItems) {
            Ok(_) => {
                self.feedback = None;
                true
            }
            Err(e) => {
                self.feedback = Some(Feedback::error(e.to_string()));
                false
            }
        }
    }

    /// Empties every container.
    #[instrument(skip(self, store))]
    pub fn reset_all(&mut self, store: &mut GameStore) -> bool {
        let containers = store
            .state()
            .containers()
            .iter()
            .map(|c| c.emptied())
            .collect();
        self.selected_item = 0;
        self.apply_update(store, containers)
    }

    fn apply_update(&mut self, store: &mut GameStore, containers: Vec<Container>) -> bool {
        match store.dispatch(Action::UpdateContainers { containers }) {
            Ok(_) => {
                self.feedback = None;
                true
            }
            Err(e) => {
                warn!(error = %e, "Bulk update rejected");
                self.feedback = Some(Feedback::error(e.to_string()));
                false
            }
        }
    }

    /// Checks if every item is loaded.
    pub fn is_complete(&self, state: &GameState) -> bool {
        self.step == Mission1Step::Placement && state.all_items_placed()
    }

    /// Completes the mission once every item is loaded.
    ///
    /// # Errors
    ///
    /// Returns the store error if the mission cannot be completed.
    #[instrument(skip(self, store))]
    pub fn finish(&mut self, store: &mut GameStore) -> Result<bool, StoreError> {
        if !self.is_complete(store.state()) {
            self.feedback = Some(Feedback::info("Load every item before completing the mission."));
            return Ok(false);
        }
        store.dispatch(Action::CompleteMission { mission: 1 })?;
        info!("Mission 1 complete");
        Ok(true)
    }
}

impl Default for Mission1 {
    fn default() -> Self {
        Self::new()
    }
}

/// Plans an auto-place: `items` are shuffled and assigned, in order, to
/// the empty containers taken in id order.
///
/// Surplus items beyond the number of empty containers are not placed.
#[instrument(skip(containers, items, rng))]
pub fn auto_place<R: Rng + ?Sized>(
    containers: &[Container],
    items: &[GameItem],
    rng: &mut R,
) -> Vec<Container> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);

    let mut updated = containers.to_vec();
    let empty_slots = updated
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_empty())
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();

    for (slot, item) in empty_slots.into_iter().zip(shuffled) {
        updated[slot] = Container::with_item(updated[slot].id(), item);
    }
    updated
}
