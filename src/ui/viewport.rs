//! Where the game is drawn inside the terminal, per display mode.

use crate::constants::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::settings::{DisplayMode, ResolutionConfig};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 16;

const TITLE: &str = " Traveling Dragon ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Area including the border, if any.
    pub outer: Rect,
    pub bordered: bool,
}

impl Viewport {
    /// Lay out the game for `resolution` inside `terminal`.
    pub fn for_resolution(terminal: Rect, resolution: &ResolutionConfig) -> Self {
        match resolution.mode {
            DisplayMode::Windowed => {
                let cols = (resolution.width / CELL_WIDTH_PX).min(u16::MAX as u32) as u16;
                let rows = (resolution.height / CELL_HEIGHT_PX).min(u16::MAX as u32) as u16;
                let width = cols.clamp(MIN_COLS, terminal.width.max(MIN_COLS)).min(terminal.width);
                let height = rows
                    .clamp(MIN_ROWS, terminal.height.max(MIN_ROWS))
                    .min(terminal.height);
                Self {
                    outer: Rect::new(
                        terminal.x + (terminal.width - width) / 2,
                        terminal.y + (terminal.height - height) / 2,
                        width,
                        height,
                    ),
                    bordered: true,
                }
            }
            DisplayMode::Fullscreen => Self {
                outer: terminal,
                bordered: true,
            },
            DisplayMode::Borderless => Self {
                outer: terminal,
                bordered: false,
            },
        }
    }

    /// Area the screens draw into.
    pub fn inner(&self) -> Rect {
        if self.bordered {
            Block::default().borders(Borders::ALL).inner(self.outer)
        } else {
            self.outer
        }
    }

    /// Clear the terminal and draw the window frame; returns the inner area.
    pub fn render_frame(&self, frame: &mut Frame) -> Rect {
        frame.render_widget(Clear, frame.size());
        if self.bordered {
            let block = Block::default()
                .title(TITLE)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan));
            frame.render_widget(block, self.outer);
        }
        self.inner()
    }
}

pub fn is_too_small(area: Rect) -> bool {
    area.width < MIN_COLS || area.height < MIN_ROWS
}

/// Render a "terminal too small" message.
pub fn render_too_small(frame: &mut Frame) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                MIN_COLS, MIN_ROWS, area.width, area.height
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Please resize your terminal.",
            Style::default().fg(Color::White),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}
