//! Closing screen shown after both missions.

use cargo_bay_store::{Action, GameState, GameStore};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::{info, instrument, warn};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::widgets::center_rect;

/// Summary of the finished journey.
#[derive(Debug, Default)]
pub struct CompleteScreen;

impl CompleteScreen {
    /// Creates the closing screen.
    pub fn new() -> Self {
        Self
    }
}

impl Screen for CompleteScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, state: &GameState) {
        let area = center_rect(frame.area(), 60, 14);
        let missions = state
            .completed_missions()
            .iter()
            .map(|m| format!("Mission {}", m))
            .collect::<Vec<_>>()
            .join(", ");

        let lines = vec![
            Line::styled(
                "Mission Accomplished!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw("Every supply is aboard and you found what the crew needed."),
            Line::raw(""),
            Line::raw(format!("Final score: {}", state.score())),
            Line::raw(format!("Completed: {}", missions)),
            Line::raw(format!("Containers used: {}", state.container_count())),
            Line::raw(""),
            Line::styled(
                "Enter: Start New Journey | q: Quit",
                Style::default().fg(Color::Yellow),
            ),
        ];

        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Journey Complete "));
        frame.render_widget(widget, area);
    }

    #[instrument(skip(self, store))]
    fn handle_key(&mut self, key: KeyEvent, store: &mut GameStore) -> ScreenTransition {
        match key.code {
            KeyCode::Enter => match store.dispatch(Action::Reset) {
                Ok(_) => {
                    info!("Starting a new journey");
                    ScreenTransition::Rebuild
                }
                Err(e) => {
                    warn!(error = %e, "Reset failed");
                    ScreenTransition::Stay
                }
            },
            KeyCode::Char('q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
