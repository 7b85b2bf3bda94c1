//! Game controller: the event loop that keeps a screen in step with the store.

use std::time::Duration;

use cargo_bay_store::{GameStore, Phase};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Frame, Terminal, backend::Backend};
use tracing::{debug, info, instrument};

use crate::config::GameConfig;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{CompleteScreen, IntroScreen, Mission1Screen, Mission2Screen};

/// Active screen in the game state machine.
#[derive(Debug)]
enum ActiveScreen {
    Intro(IntroScreen),
    Mission1(Mission1Screen),
    Mission2(Mission2Screen),
    Complete(CompleteScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Intro(s) => s,
            ActiveScreen::Mission1(s) => s,
            ActiveScreen::Mission2(s) => s,
            ActiveScreen::Complete(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Intro(s) => s,
            ActiveScreen::Mission1(s) => s,
            ActiveScreen::Mission2(s) => s,
            ActiveScreen::Complete(s) => s,
        }
    }
}

/// Controller that owns the store and swaps screens as the phase changes.
#[derive(Debug)]
pub struct GameController {
    store: GameStore,
    config: GameConfig,
    screen: ActiveScreen,
    shown_phase: Phase,
}

impl GameController {
    /// Creates a controller showing the screen for the store's current phase.
    #[instrument(skip(store, config))]
    pub fn new(store: GameStore, config: GameConfig) -> Self {
        let shown_phase = store.state().phase();
        let screen = Self::screen_for(&store, &config);
        info!(phase = %shown_phase, "Creating GameController");
        Self {
            store,
            config,
            screen,
            shown_phase,
        }
    }

    /// Returns the store.
    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Phase whose screen is currently shown.
    pub fn shown_phase(&self) -> Phase {
        self.shown_phase
    }

    fn screen_for(store: &GameStore, config: &GameConfig) -> ActiveScreen {
        match store.state().phase() {
            Phase::Intro => ActiveScreen::Intro(IntroScreen::new()),
            Phase::Mission1 => {
                let rng = match config.seed() {
                    Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
                    None => StdRng::from_entropy(),
                };
                ActiveScreen::Mission1(Mission1Screen::new(store.state(), rng))
            }
            Phase::Mission2 => ActiveScreen::Mission2(Mission2Screen::new(*config.search_target())),
            Phase::Complete => ActiveScreen::Complete(CompleteScreen::new()),
        }
    }

    /// Renders the active screen.
    pub fn render(&self, frame: &mut Frame) {
        self.screen.as_screen().render(frame, self.store.state());
    }

    /// Routes a key to the active screen and swaps screens if needed.
    ///
    /// Returns `false` when the player quits.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let transition = self.screen.as_screen_mut().handle_key(key, &mut self.store);
        let phase = self.store.state().phase();

        match transition {
            ScreenTransition::Quit => {
                info!("Player quit");
                return false;
            }
            ScreenTransition::Rebuild => {
                debug!(%phase, "Rebuilding screen");
                self.screen = Self::screen_for(&self.store, &self.config);
            }
            ScreenTransition::Stay if phase != self.shown_phase => {
                info!(from = %self.shown_phase, to = %phase, "Phase changed");
                self.screen = Self::screen_for(&self.store, &self.config);
            }
            ScreenTransition::Stay => {}
        }
        self.shown_phase = phase;
        true
    }

    /// Runs the event loop until the player quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game event loop");
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // crossterm reports both press and release on some platforms
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if !self.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}
