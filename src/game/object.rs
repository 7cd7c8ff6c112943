//! Shared capability of everything that lives in the play field.

/// Axis-aligned box in virtual pixels (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Strict overlap test; touching edges do not count.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// A movable, updatable entity of the play field (the bird and the pipes).
pub trait GameObject {
    fn bounds(&self) -> Bounds;

    /// Advance one simulation step of `dt` seconds.
    fn update(&mut self, dt: f32);

    fn move_by(&mut self, dx: f32, dy: f32);

    fn x(&self) -> f32 {
        self.bounds().x
    }

    fn y(&self) -> f32 {
        self.bounds().y
    }

    fn width(&self) -> f32 {
        self.bounds().width
    }

    fn height(&self) -> f32 {
        self.bounds().height
    }
}
