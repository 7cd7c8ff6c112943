//! Shared UI pieces for the game's screens.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Overlay alpha from which the field is dimmed.
pub const DIM_ALPHA: f32 = 0.4;
/// Overlay alpha from which the field is blanked.
pub const BLANK_ALPHA: f32 = 0.85;

/// A `width` × `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render a status bar (2 lines: status message + controls).
///
/// `controls` are (key, action) pairs, e.g. `[("[Enter]", "Select"), ("[Esc]", "Back")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let controls_line = Paragraph::new(controls_line(controls)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

fn controls_line(controls: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// A button label, highlighted when selected.
pub fn button_span(label: &str, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            format!("▶ {} ◀", label),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!("  {}  ", label), Style::default().fg(Color::White))
    }
}

/// Darken `area` according to a fade `alpha` (0 = untouched, 1 = black).
pub fn apply_fade(buf: &mut Buffer, area: Rect, alpha: f32) {
    if alpha >= BLANK_ALPHA {
        buf.set_style(area, Style::default().fg(Color::Black).bg(Color::Black));
    } else if alpha >= DIM_ALPHA {
        buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
    }
}

/// Convert an RGB triple to a terminal color.
pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}
