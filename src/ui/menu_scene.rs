//! Main menu and goodbye screen.

use super::game_common::{button_span, centered_rect, render_status_bar};
use crate::engine::{Menu, MenuAction, MenuFocus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE_ART: [&str; 2] = [
    "~~>  T R A V E L I N G   D R A G O N  <~~",
    "fly through the gaps",
];
const PLACEHOLDER: &str = "Type your nickname";

pub fn render_menu(frame: &mut Frame, area: Rect, menu: &Menu) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_ART.len() as u16 + 1),
            Constraint::Length(3), // Nickname field
            Constraint::Length(1), // Warning
            Constraint::Min(MenuAction::BUTTONS.len() as u16),
            Constraint::Length(2),
        ])
        .split(area);

    let title: Vec<Line> = TITLE_ART
        .iter()
        .map(|l| {
            Line::from(Span::styled(
                *l,
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        chunks[0],
    );

    render_nickname_field(frame, chunks[1], menu);

    if let Some(warning) = menu.warning() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                warning.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            chunks[2],
        );
    }

    let buttons: Vec<Line> = MenuAction::BUTTONS
        .iter()
        .map(|&action| {
            let selected = menu.focus() == MenuFocus::Button(action);
            Line::from(button_span(action.label(), selected))
        })
        .collect();
    let buttons_area = centered_rect(
        chunks[3].width,
        MenuAction::BUTTONS.len() as u16,
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Center),
        buttons_area,
    );

    render_status_bar(
        frame,
        chunks[4],
        "",
        Color::DarkGray,
        &[
            ("[Type]", "Nickname"),
            ("[Up/Down]", "Move"),
            ("[Enter]", "Select"),
        ],
    );
}

fn render_nickname_field(frame: &mut Frame, area: Rect, menu: &Menu) {
    let field_area = centered_rect(30, 3, area);
    let focused = menu.is_input_active();
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(field_area);
    frame.render_widget(block, field_area);

    let line = if menu.nickname().is_empty() && !focused {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::styled(
            menu.nickname().to_string(),
            Style::default().fg(Color::White),
        )];
        if focused && menu.cursor_visible() {
            spans.push(Span::styled("▏", Style::default().fg(Color::White)));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), inner);
}

pub fn render_exiting(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Goodbye!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Thanks for flying with the dragon.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_rect(area.width, 3, area),
    );
}
