//! Terminal front end.
//!
//! One screen per game phase, swapped by [`GameController`] whenever the
//! store's phase moves.

mod controller;
mod screen;
mod screens;
mod widgets;

pub use controller::GameController;
pub use screen::{Screen, ScreenTransition};

use std::io;

use anyhow::{Context, Result};
use cargo_bay_store::GameStore;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::config::GameConfig;

/// Builds the store described by `config`.
pub fn build_store(config: &GameConfig) -> GameStore {
    let store = match config.seed() {
        Some(seed) => GameStore::with_seed(*seed),
        None => GameStore::new(),
    };
    store.history_limit(*config.history_limit())
}

/// Runs the game in the current terminal until the player quits.
#[instrument(skip(config))]
pub fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting cargo bay TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = GameController::new(build_store(&config), config);
    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!(error = %e, "Game loop failed");
    }
    info!(
        score = controller.store().state().score(),
        actions = controller.store().applied().len(),
        "Session ended"
    );
    res
}
