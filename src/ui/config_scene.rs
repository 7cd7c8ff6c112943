//! Resolution lists: the settings screen and the startup selector.

use super::game_common::{centered_rect, render_status_bar};
use crate::resolution::ResolutionSelector;
use crate::settings::ResolutionConfig;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const LIST_WIDTH: u16 = 36;

/// Draw the options with the highlighted one marked, and the active one tagged.
fn render_options(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    selector: &ResolutionSelector,
    active: Option<&ResolutionConfig>,
) {
    let options = selector.options();
    let list_area = centered_rect(LIST_WIDTH, options.len() as u16 + 2, area);
    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(list_area);
    frame.render_widget(block, list_area);

    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let selected = i == selector.selected_index();
            let marker = if selected { "> " } else { "  " };
            let tag = if active == Some(&option.config) {
                " *"
            } else {
                ""
            };
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(
                format!("{}{}{}", marker, option.label, tag),
                style,
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn split_with_status(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(area);
    (chunks[0], chunks[1])
}

pub fn render_config(
    frame: &mut Frame,
    area: Rect,
    selector: &ResolutionSelector,
    current: &ResolutionConfig,
) {
    let (body, status) = split_with_status(area);
    render_options(frame, body, " Settings ", selector, Some(current));
    render_status_bar(
        frame,
        status,
        "* active resolution",
        Color::DarkGray,
        &[("[Up/Down]", "Move"), ("[Enter]", "Apply"), ("[Esc]", "Back")],
    );
}

/// Startup selector, drawn on the whole terminal.
pub fn render_resolution_selector(frame: &mut Frame, area: Rect, selector: &ResolutionSelector) {
    let (body, status) = split_with_status(area);
    render_options(frame, body, " Choose a resolution ", selector, None);
    render_status_bar(
        frame,
        status,
        "Traveling Dragon",
        Color::Yellow,
        &[("[Up/Down]", "Move"), ("[Enter]", "Start"), ("[Esc]", "Quit")],
    );
}
