//! Shared drawing helpers for the cargo bay screens.

use cargo_bay_store::{Container, GameItem};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::missions::{Feedback, FeedbackKind};
use crate::view;

const CELL_WIDTH: u16 = 14;
const CELL_HEIGHT: u16 = 4;

/// Short tag drawn inside a container box.
pub fn item_glyph(item: GameItem) -> &'static str {
    match item {
        GameItem::Fuel => "FUEL",
        GameItem::FoodAndRation => "FOOD",
        GameItem::Water => "H2O",
        GameItem::MedicalSupplies => "MED",
        GameItem::ToolsAndEquipment => "TOOLS",
    }
}

/// Color used for an item everywhere it is drawn.
pub fn item_color(item: GameItem) -> Color {
    match item {
        GameItem::Fuel => Color::Red,
        GameItem::FoodAndRation => Color::Green,
        GameItem::Water => Color::Blue,
        GameItem::MedicalSupplies => Color::Magenta,
        GameItem::ToolsAndEquipment => Color::Yellow,
    }
}

/// Styled span for an item label.
pub fn item_span(item: GameItem) -> Span<'static> {
    Span::styled(
        item.label(),
        Style::default()
            .fg(item_color(item))
            .add_modifier(Modifier::BOLD),
    )
}

/// Splits the screen into title, body and help rows.
pub fn frame_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Draws a bordered, centered title bar.
pub fn draw_title(frame: &mut Frame, area: Rect, title: &str, score: u32) {
    let line = Line::from(vec![
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(format!("Score: {}", score), Style::default().fg(Color::Green)),
    ]);
    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// Draws the key help bar.
pub fn draw_help(frame: &mut Frame, area: Rect, help: &str) {
    let widget = Paragraph::new(help.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// Draws a feedback line, or nothing when there is none.
pub fn draw_feedback(frame: &mut Frame, area: Rect, feedback: Option<&Feedback>) {
    let Some(feedback) = feedback else {
        return;
    };
    let color = match feedback.kind {
        FeedbackKind::Info => Color::Cyan,
        FeedbackKind::Success => Color::Green,
        FeedbackKind::Error => Color::Red,
    };
    let widget = Paragraph::new(feedback.text.clone())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

/// Rows needed to draw `count` containers in `width` columns.
pub fn grid_height(count: usize, width: u16) -> u16 {
    let per_row = (width / CELL_WIDTH).max(1) as usize;
    let rows = count.div_ceil(per_row).max(1) as u16;
    rows * CELL_HEIGHT
}

/// Draws the containers as numbered boxes.
///
/// `cursor` gets a yellow border, `highlight` a green one.
pub fn draw_bay(
    frame: &mut Frame,
    area: Rect,
    containers: &[Container],
    cursor: Option<u32>,
    highlight: Option<u32>,
) {
    let per_row = (area.width / CELL_WIDTH).max(1);
    for (index, container) in containers.iter().enumerate() {
        let col = index as u16 % per_row;
        let row = index as u16 / per_row;
        let y = area.y + row * CELL_HEIGHT;
        if y + CELL_HEIGHT > area.y + area.height {
            break;
        }
        let cell = Rect::new(area.x + col * CELL_WIDTH, y, CELL_WIDTH, CELL_HEIGHT);
        draw_container(frame, cell, container, cursor, highlight);
    }
}

fn draw_container(
    frame: &mut Frame,
    area: Rect,
    container: &Container,
    cursor: Option<u32>,
    highlight: Option<u32>,
) {
    let border = if highlight == Some(container.id()) {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else if cursor == Some(container.id()) {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let contents = match container.item() {
        Some(item) => Line::from(Span::styled(
            item_glyph(item),
            Style::default().fg(item_color(item)),
        )),
        None => Line::from(Span::styled(
            view::EMPTY_SLOT,
            Style::default().fg(Color::DarkGray),
        )),
    };

    let widget = Paragraph::new(contents)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" #{} ", container.id())),
        );
    frame.render_widget(widget, area);
}

/// Draws the array literal panel.
pub fn draw_array(frame: &mut Frame, area: Rect, containers: &[Container]) {
    let text = vec![
        Line::from(view::array_literal(containers)),
        Line::from(Span::styled(
            view::length_line(containers),
            Style::default().fg(Color::Gray),
        )),
    ];
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Array Representation "),
        );
    frame.render_widget(widget, area);
}

/// Centers a `width` x `height` rect in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_height_wraps_rows() {
        assert_eq!(grid_height(5, 70), CELL_HEIGHT);
        assert_eq!(grid_height(6, 70), 2 * CELL_HEIGHT);
        assert_eq!(grid_height(0, 70), CELL_HEIGHT);
        assert_eq!(grid_height(3, 5), 3 * CELL_HEIGHT);
    }

    #[test]
    fn test_center_rect_is_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let centered = center_rect(area, 40, 10);
        assert_eq!(centered, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_every_item_has_a_glyph() {
        for item in GameItem::ALL {
            assert!(!item_glyph(item).is_empty());
        }
    }
}
