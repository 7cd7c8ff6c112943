//! Ranking table.

use super::game_common::{centered_rect, render_status_bar};
use crate::engine::RankingView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TABLE_WIDTH: u16 = 48;

pub fn render_ranking(frame: &mut Frame, area: Rect, view: &RankingView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(area);

    let table_height = view.rows.len().max(1) as u16 + 6;
    let table_area = centered_rect(TABLE_WIDTH, table_height, chunks[0]);
    let block = Block::default()
        .title(" Ranking - Top 10 ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(table_area);
    frame.render_widget(block, table_area);

    let header = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{:>4}  {:<16} {:>7} {:>8}", "#", "Nickname", "Score", "Matches"),
            header,
        )),
        Line::from(""),
    ];

    if view.rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "No players yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for row in &view.rows {
        let style = if row.is_current {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{:>4}  {:<16} {:>7} {:>8}",
                row.position, row.nickname, row.best_score, row.matches
            ),
            style,
        )));
    }

    lines.push(Line::from(""));
    let footer_color = if view.footer.is_positive() {
        Color::Green
    } else {
        Color::Red
    };
    lines.push(Line::from(Span::styled(
        view.footer.message(),
        Style::default().fg(footer_color),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

    render_status_bar(
        frame,
        chunks[1],
        "",
        Color::DarkGray,
        &[("[Any key]", "Back")],
    );
}
