//! A pipe obstacle: a top and a bottom column with a gap between them.

use super::object::{Bounds, GameObject};
use crate::constants::DESIGN_WIDTH;

#[derive(Debug, Clone)]
pub struct Pipe {
    x: f32,
    width: f32,
    screen_height: f32,
    /// Vertical center of the gap.
    gap_y: f32,
    gap_height: f32,
    /// Horizontal speed in virtual pixels per second (negative = leftward).
    speed_x: f32,
    scored: bool,
}

impl Pipe {
    /// Width of the pipe sprite the dimensions were authored against.
    pub const SPRITE_WIDTH: f32 = 538.0;
    /// Scale the sprite is drawn at.
    pub const SPRITE_SCALE: f32 = 0.25;
    /// Speed a pipe is created with at design scale, in pixels per second.
    pub const DEFAULT_SPEED: f32 = -150.0;

    pub fn new(x: f32, gap_y: f32, gap_height: f32, screen_width: f32, screen_height: f32) -> Self {
        let scale_x = screen_width / DESIGN_WIDTH;
        Self {
            x,
            width: Self::SPRITE_WIDTH * Self::SPRITE_SCALE * scale_x,
            screen_height,
            gap_y,
            gap_height,
            speed_x: Self::DEFAULT_SPEED * scale_x,
            scored: false,
        }
    }

    pub fn gap_y(&self) -> f32 {
        self.gap_y
    }

    pub fn gap_height(&self) -> f32 {
        self.gap_height
    }

    /// Lowest y covered by the top column.
    pub fn top_pipe_bottom_y(&self) -> f32 {
        self.gap_y - self.gap_height / 2.0
    }

    /// Highest y covered by the bottom column.
    pub fn bottom_pipe_top_y(&self) -> f32 {
        self.gap_y + self.gap_height / 2.0
    }

    pub fn has_scored(&self) -> bool {
        self.scored
    }

    pub fn set_scored(&mut self, scored: bool) {
        self.scored = scored;
    }

    pub fn speed(&self) -> f32 {
        self.speed_x
    }

    pub fn set_speed(&mut self, speed_x: f32) {
        self.speed_x = speed_x;
    }

    /// True once the whole pipe has left through the left edge.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

impl GameObject for Pipe {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, 0.0, self.width, self.screen_height)
    }

    fn update(&mut self, dt: f32) {
        self.x += self.speed_x * dt;
    }

    fn move_by(&mut self, dx: f32, _dy: f32) {
        // Pipes span the full height; only horizontal movement applies.
        self.x += dx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DESIGN_HEIGHT, FRAME_DT};

    fn pipe_at(x: f32) -> Pipe {
        Pipe::new(x, 360.0, 250.0, DESIGN_WIDTH, DESIGN_HEIGHT)
    }

    #[test]
    fn test_gap_edges() {
        let pipe = pipe_at(500.0);
        assert_eq!(pipe.top_pipe_bottom_y(), 235.0);
        assert_eq!(pipe.bottom_pipe_top_y(), 485.0);
    }

    #[test]
    fn test_width_follows_sprite_scale() {
        let pipe = pipe_at(0.0);
        assert!((pipe.width() - 134.5).abs() < 0.001);
        let wide = Pipe::new(0.0, 360.0, 250.0, DESIGN_WIDTH * 1.5, DESIGN_HEIGHT);
        assert!((wide.width() - 134.5 * 1.5).abs() < 0.001);
    }

    #[test]
    fn test_moves_left_over_time() {
        let mut pipe = pipe_at(500.0);
        pipe.update(FRAME_DT);
        assert!((pipe.x() - (500.0 - 150.0 / 60.0)).abs() < 0.001);
    }

    #[test]
    fn test_set_speed_changes_motion() {
        let mut pipe = pipe_at(500.0);
        pipe.set_speed(-300.0);
        pipe.update(1.0);
        assert_eq!(pipe.x(), 200.0);
    }

    #[test]
    fn test_off_screen_after_fully_leaving() {
        let mut pipe = pipe_at(-100.0);
        assert!(!pipe.is_off_screen());
        pipe.move_by(-40.0, 0.0);
        assert!(pipe.is_off_screen());
    }

    #[test]
    fn test_scored_flag() {
        let mut pipe = pipe_at(0.0);
        assert!(!pipe.has_scored());
        pipe.set_scored(true);
        assert!(pipe.has_scored());
    }

    #[test]
    fn test_bounds_span_full_height() {
        let pipe = pipe_at(10.0);
        let b = pipe.bounds();
        assert_eq!(b.y, 0.0);
        assert_eq!(b.height, DESIGN_HEIGHT);
    }
}
