//! Intro screen.

use cargo_bay_store::{Action, GameItem, GameState, GameStore};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{info, instrument, warn};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::widgets::{center_rect, item_span};

/// Story screen shown before mission 1.
#[derive(Debug, Default)]
pub struct IntroScreen;

impl IntroScreen {
    /// Creates the intro screen.
    pub fn new() -> Self {
        Self
    }
}

impl Screen for IntroScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _state: &GameState) {
        let area = center_rect(frame.area(), 72, 18);

        let mut lines = vec![
            Line::styled(
                "Journey into the Stars",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw("Your ship is about to leave for a long voyage. Before launch,"),
            Line::raw("every supply has to be stowed in the cargo bay, and later you"),
            Line::raw("will have to find one of them again, fast."),
            Line::raw(""),
            Line::raw("The cargo bay is an array: a fixed row of numbered containers."),
            Line::raw(""),
        ];
        lines.extend(GameItem::ALL.iter().map(|item| Line::from(item_span(*item))));
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Press Enter to Begin Your Journey, q to quit",
            Style::default().fg(Color::Yellow),
        ));

        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Cargo Bay "));
        frame.render_widget(widget, area);
    }

    #[instrument(skip(self, store))]
    fn handle_key(&mut self, key: KeyEvent, store: &mut GameStore) -> ScreenTransition {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Err(e) = store.dispatch(Action::StartGame) {
                    warn!(error = %e, "Could not start game");
                } else {
                    info!("Journey started");
                }
                ScreenTransition::Stay
            }
            KeyCode::Char('q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
