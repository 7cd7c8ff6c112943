//! Play field rendering: sky, scrolling backdrop, pipes and the dragon.
//!
//! The field is rasterized into a grid of styled cells, one per terminal
//! cell, by mapping virtual pixels onto the play area.

use super::game_common::{apply_fade, render_status_bar, rgb};
use crate::game::{Bird, GameObject, Pipe, Scenario};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Wing glyph per animation frame.
const WING_FRAMES: [char; 3] = ['^', '-', 'v'];
/// Backdrop glyphs repeat every this many columns.
const BACKDROP_SPACING: i32 = 11;

/// Maps virtual pixels to cells of a `cols` × `rows` area.
#[derive(Debug, Clone, Copy)]
pub struct WorldMapper {
    pub cols: u16,
    pub rows: u16,
    cell_w: f32,
    cell_h: f32,
}

impl WorldMapper {
    pub fn new(world_width: f32, world_height: f32, cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cell_w: world_width / cols.max(1) as f32,
            cell_h: world_height / rows.max(1) as f32,
        }
    }

    /// Column containing world x (may be off the grid).
    pub fn col(&self, x: f32) -> i32 {
        (x / self.cell_w).floor() as i32
    }

    pub fn row(&self, y: f32) -> i32 {
        (y / self.cell_h).floor() as i32
    }

    /// Columns covered by the span `[x, right)`, at least one.
    pub fn col_span(&self, x: f32, right: f32) -> (i32, i32) {
        let first = self.col(x);
        let last = ((right / self.cell_w).ceil() as i32 - 1).max(first);
        (first, last)
    }

    pub fn row_span(&self, y: f32, bottom: f32) -> (i32, i32) {
        let first = self.row(y);
        let last = ((bottom / self.cell_h).ceil() as i32 - 1).max(first);
        (first, last)
    }

    /// World y at the middle of `row`.
    pub fn row_center(&self, row: u16) -> f32 {
        (row as f32 + 0.5) * self.cell_h
    }
}

/// A grid of styled cells that becomes paragraph lines.
pub struct CellGrid {
    width: u16,
    height: u16,
    cells: Vec<(char, Style)>,
}

impl CellGrid {
    pub fn new(width: u16, height: u16, fill: Style) -> Self {
        Self {
            width,
            height,
            cells: vec![(' ', fill); width as usize * height as usize],
        }
    }

    /// Set a cell; positions off the grid are ignored.
    pub fn put(&mut self, col: i32, row: i32, ch: char, style: Style) {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return;
        }
        self.cells[row as usize * self.width as usize + col as usize] = (ch, style);
    }

    pub fn get(&self, col: u16, row: u16) -> Option<(char, Style)> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[row as usize * self.width as usize + col as usize])
    }

    /// One line per row; runs of equal style share a span.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        let width = self.width.max(1) as usize;
        self.cells
            .chunks(width)
            .take(self.height as usize)
            .map(|row| {
                let mut spans = Vec::new();
                let mut run = String::new();
                let mut run_style = row.first().map(|c| c.1).unwrap_or_default();
                for &(ch, style) in row {
                    if style != run_style && !run.is_empty() {
                        spans.push(Span::styled(std::mem::take(&mut run), run_style));
                    }
                    run_style = style;
                    run.push(ch);
                }
                if !run.is_empty() {
                    spans.push(Span::styled(run, run_style));
                }
                Line::from(spans)
            })
            .collect()
    }
}

/// Rasterize the scenario into a grid the size of the play area.
pub fn rasterize(scenario: &Scenario, cols: u16, rows: u16) -> CellGrid {
    let (world_w, world_h) = scenario.screen_size();
    let mapper = WorldMapper::new(world_w, world_h, cols, rows);
    let theme = scenario.level();
    let sky = Style::default().bg(rgb(theme.sky));
    let mut grid = CellGrid::new(cols, rows, sky);

    draw_backdrop(&mut grid, &mapper, scenario, sky);
    for pipe in scenario.pipes() {
        draw_pipe(&mut grid, &mapper, pipe, sky.fg(rgb(theme.pipe)));
    }
    draw_bird(&mut grid, &mapper, scenario.bird(), sky);
    grid
}

fn draw_backdrop(grid: &mut CellGrid, mapper: &WorldMapper, scenario: &Scenario, sky: Style) {
    let theme = scenario.level();
    let style = sky.fg(Color::Gray).add_modifier(Modifier::DIM);
    let shift = mapper.col(-scenario.background_offset());
    for row in (1..mapper.rows).step_by(3) {
        for col in 0..mapper.cols as i32 {
            let phase = (col + shift + row as i32 * 4).rem_euclid(BACKDROP_SPACING);
            if phase == 0 {
                grid.put(col, row as i32, theme.backdrop, style);
            }
        }
    }
}

fn draw_pipe(grid: &mut CellGrid, mapper: &WorldMapper, pipe: &Pipe, style: Style) {
    let bounds = pipe.bounds();
    let (first, last) = mapper.col_span(bounds.x, bounds.right());
    let top_end = pipe.top_pipe_bottom_y();
    let bottom_start = pipe.bottom_pipe_top_y();

    for row in 0..mapper.rows {
        let y = mapper.row_center(row);
        if y >= top_end && y <= bottom_start {
            continue;
        }
        // Rim rows next to the gap
        let rim = (y < top_end && mapper.row_center(row + 1) >= top_end)
            || (y > bottom_start && row > 0 && mapper.row_center(row - 1) <= bottom_start);
        let ch = if rim { '▓' } else { '█' };
        for col in first..=last {
            grid.put(col, row as i32, ch, style);
        }
    }
}

fn draw_bird(grid: &mut CellGrid, mapper: &WorldMapper, bird: &Bird, sky: Style) {
    let bounds = bird.bounds();
    let (first_col, last_col) = mapper.col_span(bounds.x, bounds.right());
    let (first_row, last_row) = mapper.row_span(bounds.y, bounds.bottom());
    let style = sky.fg(Color::LightRed).add_modifier(Modifier::BOLD);
    let wing = WING_FRAMES[bird.current_frame() % WING_FRAMES.len()];

    for row in first_row..=last_row {
        for col in first_col..=last_col {
            let ch = if col == last_col {
                '>'
            } else if col == first_col && first_col != last_col {
                '~'
            } else {
                wing
            };
            grid.put(col, row, ch, style);
        }
    }
    // A dragon narrower than two cells still shows its wing
    if first_col == last_col {
        grid.put(first_col - 1, first_row, wing, style);
    }
}

/// Render a match: field, score, level and controls.
pub fn render_game(
    frame: &mut Frame,
    area: Rect,
    scenario: &Scenario,
    fade_alpha: f32,
    in_transition: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(area);
    let field = chunks[0];

    let grid = rasterize(scenario, field.width, field.height);
    frame.render_widget(Paragraph::new(grid.into_lines()), field);

    let theme = scenario.level();
    let level_text = format!(" Level {} · {} ", theme.number(), theme.name);
    frame.render_widget(
        Paragraph::new(Span::styled(
            level_text,
            Style::default().fg(Color::White).bg(Color::Black),
        )),
        Rect { height: 1, ..field },
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {} ", scenario.score()),
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Rect { height: 1, ..field },
    );

    apply_fade(frame.buffer_mut(), field, fade_alpha);

    if in_transition && field.height > 2 {
        let banner = Rect {
            y: field.y + field.height / 2,
            height: 1,
            ..field
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("Level {} complete!", theme.number()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            banner,
        );
    }

    let status = if scenario.has_infinite_pipes() {
        "Final level: the pipes never end"
    } else {
        "Fly through the gaps!"
    };
    render_status_bar(
        frame,
        chunks[1],
        status,
        Color::Green,
        &[("[Space/Up]", "Flap"), ("[Esc]", "Menu")],
    );
}
