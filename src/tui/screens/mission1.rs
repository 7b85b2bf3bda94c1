//! Mission 1 screen: declare the bay and load the supplies.

use cargo_bay_store::{GameState, GameStore};
use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{error, instrument};

use crate::missions::{Mission1, Mission1Step};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::widgets::{
    draw_array, draw_bay, draw_feedback, draw_help, draw_title, frame_layout, grid_height,
    item_color, item_span,
};

const SETUP_HELP: &str = "0-9: Type count | Enter: Declare array | Esc: Quit";
const PLACEMENT_HELP: &str = "←→: Container | ↑↓: Item | Enter: Load/Unload | a: Auto-place | r: Randomize | x: Reset all | u: Undo | n: Next mission | q: Quit";

/// Screen driving [`Mission1`].
#[derive(Debug)]
pub struct Mission1Screen {
    mission: Mission1,
    cursor: u32,
    rng: StdRng,
}

impl Mission1Screen {
    /// Creates the screen, resuming placement if the bay already exists.
    #[instrument(skip(state, rng))]
    pub fn new(state: &GameState, rng: StdRng) -> Self {
        Self {
            mission: Mission1::resume(state),
            cursor: 1,
            rng,
        }
    }

    fn move_cursor(&mut self, state: &GameState, delta: i64) {
        let count = state.container_count() as i64;
        if count == 0 {
            return;
        }
        let zero_based = (self.cursor as i64 - 1 + delta).rem_euclid(count);
        self.cursor = zero_based as u32 + 1;
    }

    fn render_setup(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::raw("Mission 1: Declare the Cargo Bay"),
            Line::raw(""),
            Line::raw("An array has a fixed size chosen when it is declared."),
            Line::raw("How many containers should the cargo bay have?"),
            Line::raw(""),
            Line::from(vec![
                Span::raw("Containers: "),
                Span::styled(
                    format!("{}_", self.mission.count_input()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Setup "));
        frame.render_widget(widget, chunks[0]);
        draw_feedback(frame, chunks[1], self.mission.feedback());
    }

    fn render_placement(&self, frame: &mut Frame, area: Rect, state: &GameState) {
        let bay_height = grid_height(state.containers().len(), area.width);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(bay_height),
                Constraint::Length(2),
                Constraint::Min(4),
            ])
            .split(area);

        let mut items = vec![Span::raw("Items to load: ")];
        let selected = self.mission.selected_item(state);
        for item in self.mission.available_items(state) {
            if Some(item) == selected {
                items.push(Span::styled(
                    format!("[{}]", item),
                    Style::default()
                        .fg(item_color(item))
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                ));
            } else {
                items.push(item_span(item));
            }
            items.push(Span::raw("  "));
        }
        if selected.is_none() {
            items.push(Span::styled(
                "all loaded, press n to continue",
                Style::default().fg(Color::Green),
            ));
        }
        let picker = Paragraph::new(Line::from(items))
            .block(Block::default().borders(Borders::ALL).title(" Supplies "));
        frame.render_widget(picker, chunks[0]);

        draw_bay(frame, chunks[1], state.containers(), Some(self.cursor), None);
        draw_feedback(frame, chunks[2], self.mission.feedback());
        draw_array(frame, chunks[3], state.containers());
    }

    fn handle_setup_key(&mut self, key: KeyEvent, store: &mut GameStore) -> ScreenTransition {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => self.mission.push_input(c),
            KeyCode::Backspace => self.mission.pop_input(),
            KeyCode::Enter => {
                if self.mission.submit_count(store) {
                    self.cursor = 1;
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => return ScreenTransition::Quit,
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn handle_placement_key(&mut self, key: KeyEvent, store: &mut GameStore) -> ScreenTransition {
        match key.code {
            KeyCode::Left => self.move_cursor(store.state(), -1),
            KeyCode::Right => self.move_cursor(store.state(), 1),
            KeyCode::Up => self.mission.cycle_item(store.state(), -1),
            KeyCode::Down | KeyCode::Tab => self.mission.cycle_item(store.state(), 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.mission.activate_container(store, self.cursor);
            }
            KeyCode::Char('a') => {
                self.mission.auto_place_remaining(store, &mut self.rng);
            }
            KeyCode::Char('r') => {
                self.mission.randomize(store);
            }
            KeyCode::Char('x') => {
                self.mission.reset_all(store);
            }
            KeyCode::Char('u') => {
                if store.undo() {
                    return ScreenTransition::Rebuild;
                }
            }
            KeyCode::Char('n') => {
                if let Err(e) = self.mission.finish(store) {
                    error!(error = %e, "Mission 1 completion failed");
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => return ScreenTransition::Quit,
            _ => {}
        }
        ScreenTransition::Stay
    }
}

impl Screen for Mission1Screen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, state: &GameState) {
        let [title, body, help] = frame_layout(frame.area());
        draw_title(frame, title, "Mission 1: Load the Cargo Bay", state.score());
        match self.mission.step() {
            Mission1Step::Setup => {
                self.render_setup(frame, body);
                draw_help(frame, help, SETUP_HELP);
            }
            Mission1Step::Placement => {
                self.render_placement(frame, body, state);
                draw_help(frame, help, PLACEMENT_HELP);
            }
        }
    }

    #[instrument(skip(self, store))]
    fn handle_key(&mut self, key: KeyEvent, store: &mut GameStore) -> ScreenTransition {
        match self.mission.step() {
            Mission1Step::Setup => self.handle_setup_key(key, store),
            Mission1Step::Placement => self.handle_placement_key(key, store),
        }
    }
}
