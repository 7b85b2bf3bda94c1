//! Screen trait and transition type for the game state machine.

use cargo_bay_store::{GameState, GameStore};
use crossterm::event::KeyEvent;
use ratatui::Frame;

/// The result of handling a key on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Keep the current screen; the controller still swaps it if the
    /// store's phase changed.
    Stay,
    /// Rebuild the screen for the current phase, discarding its local state.
    Rebuild,
    /// Leave the game.
    Quit,
}

/// A screen in the game state machine.
///
/// Screens own their view-local state. The store is the only shared state.
pub trait Screen {
    /// Renders the screen from the current game state.
    fn render(&self, frame: &mut Frame, state: &GameState);

    /// Handles a key press, dispatching actions to the store as needed.
    fn handle_key(&mut self, key: KeyEvent, store: &mut GameStore) -> ScreenTransition;
}
