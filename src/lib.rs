//! Cargo Bay - an educational game about arrays.
//!
//! The player declares a fixed-size cargo bay, loads five supplies into its
//! numbered containers and later finds one of them with a linear search.
//! Game rules and state live in [`cargo_bay_store`]; this crate adds the
//! mission controllers, the terminal front end and the command line.
//!
//! # Architecture
//!
//! - **Missions**: view-local state for each mission, turning player input
//!   into store actions
//! - **View**: the bay rendered as an array literal
//! - **TUI**: ratatui screens swapped by [`GameController`]
//! - **Config**: TOML session settings
//!
//! # Example
//!
//! ```
//! use cargo_bay::{Mission1, view};
//! use cargo_bay_store::{Action, GameStore};
//!
//! let mut store = GameStore::with_seed(1);
//! store.dispatch(Action::StartGame)?;
//!
//! let mut mission = Mission1::new();
//! mission.set_count_input("5");
//! assert!(mission.submit_count(&mut store));
//! assert_eq!(view::length_line(store.state().containers()), "Length: 5");
//! # Ok::<(), cargo_bay_store::StoreError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod demo;
mod missions;
mod tui;
pub mod view;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use demo::run_demo;
pub use missions::{
    ArrayOperation, Feedback, FeedbackKind, GuessError, GuessOutcome, Mission1, Mission1Step,
    Mission2, auto_place,
};
pub use tui::{GameController, Screen, ScreenTransition, build_store, run_tui};
