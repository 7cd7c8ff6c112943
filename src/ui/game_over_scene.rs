//! Results screen after a crash.

use super::game_common::{button_span, centered_rect, render_status_bar};
use crate::engine::{GameOverChoice, GameOverScreen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_game_over(frame: &mut Frame, area: Rect, screen: &GameOverScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(2)])
        .split(area);

    let summary = screen.summary();
    let mut lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        stat_line("Your score", summary.score, Color::White),
        stat_line("Personal record", summary.personal_record, Color::Cyan),
        stat_line("Overall record", summary.overall_record, Color::Magenta),
        Line::from(""),
    ];

    if summary.beat_personal {
        lines.push(badge("New personal record!"));
    }
    if summary.beat_overall {
        lines.push(badge("New overall record!"));
    }
    lines.push(Line::from(""));

    let mut buttons = Vec::new();
    for (i, choice) in [GameOverChoice::Replay, GameOverChoice::Menu]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            buttons.push(Span::raw("    "));
        }
        buttons.push(button_span(choice.label(), screen.selected() == choice));
    }
    lines.push(Line::from(buttons));

    let height = lines.len() as u16;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_rect(chunks[0].width, height, chunks[0]),
    );

    render_status_bar(
        frame,
        chunks[1],
        "",
        Color::DarkGray,
        &[
            ("[Left/Right]", "Choose"),
            ("[Enter]", "Confirm"),
            ("[R]", "Replay"),
            ("[M]", "Menu"),
        ],
    );
}

fn stat_line(label: &str, value: u32, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn badge(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {} ", text),
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}
