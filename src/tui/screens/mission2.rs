//! Mission 2 screen: choose linear search and find the target container.

use cargo_bay_store::{GameItem, GameState, GameStore};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tracing::{debug, error, instrument};

use crate::missions::{ArrayOperation, Mission2};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::widgets::{
    draw_array, draw_bay, draw_feedback, draw_help, draw_title, frame_layout, grid_height,
    item_span,
};

const HELP: &str =
    "↑↓: Operation | Space: Choose | 0-9: Container | Enter: Submit | u: Undo | q: Quit";

/// Screen driving [`Mission2`].
#[derive(Debug)]
pub struct Mission2Screen {
    mission: Mission2,
    list_state: ListState,
}

impl Mission2Screen {
    /// Creates the screen looking for `target`.
    #[instrument]
    pub fn new(target: GameItem) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            mission: Mission2::new(target),
            list_state,
        }
    }

    fn highlighted(&self) -> ArrayOperation {
        ArrayOperation::at(self.list_state.selected().unwrap_or(0))
    }

    fn move_selection(&mut self, delta: isize) {
        let count = ArrayOperation::iter().count() as isize;
        let current = self.list_state.selected().unwrap_or(0) as isize;
        self.list_state
            .select(Some((current + delta).rem_euclid(count) as usize));
    }
}

impl Screen for Mission2Screen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, state: &GameState) {
        let [title, body, help] = frame_layout(frame.area());
        draw_title(frame, title, "Mission 2: Find the Supplies", state.score());

        let bay_height = grid_height(state.containers().len(), body.width);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(bay_height),
                Constraint::Length(5),
                Constraint::Length(2),
                Constraint::Min(4),
            ])
            .split(body);

        let task = Paragraph::new(Line::from(vec![
            Span::raw("An emergency! Find the "),
            item_span(self.mission.target()),
            Span::raw(" in the cargo bay."),
        ]))
        .block(Block::default().borders(Borders::ALL).title(" Task "));
        frame.render_widget(task, chunks[0]);

        draw_bay(
            frame,
            chunks[1],
            state.containers(),
            None,
            self.mission.found(),
        );

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[2]);

        let items: Vec<ListItem> = ArrayOperation::iter()
            .map(|op| {
                let marker = if self.mission.selected() == Some(op) { "* " } else { "  " };
                ListItem::new(format!("{}{}  {}", marker, op, op.description()))
            })
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Operations "))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, controls[0], &mut list_state);

        let guess = Paragraph::new(Line::from(vec![
            Span::raw("Container: "),
            Span::styled(
                format!("{}_", self.mission.guess_input()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL).title(" Guess "));
        frame.render_widget(guess, controls[1]);

        draw_feedback(frame, chunks[3], self.mission.feedback());
        draw_array(frame, chunks[4], state.containers());
        draw_help(frame, help, HELP);
    }

    #[instrument(skip(self, store))]
    fn handle_key(&mut self, key: KeyEvent, store: &mut GameStore) -> ScreenTransition {
        match key.code {
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Char(' ') => self.mission.select_operation(self.highlighted()),
            KeyCode::Char(c) if c.is_ascii_digit() => self.mission.push_input(c),
            KeyCode::Backspace => self.mission.pop_input(),
            KeyCode::Enter => {
                if self.mission.is_complete() {
                    if let Err(e) = self.mission.finish(store) {
                        error!(error = %e, "Mission 2 completion failed");
                    }
                } else if let Err(e) = self.mission.submit_guess(store.state()) {
                    debug!(error = %e, "Guess not evaluated");
                }
            }
            KeyCode::Char('u') => {
                if store.undo() {
                    return ScreenTransition::Rebuild;
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => return ScreenTransition::Quit,
            _ => {}
        }
        ScreenTransition::Stay
    }
}
