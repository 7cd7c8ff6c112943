//! The dragon the player steers through the pipes.
//!
//! Physics is per update step (one step per 1/60 s): gravity is added to the
//! velocity, the velocity to the position. A flap overrides the velocity
//! rather than adding to it.

use super::object::{Bounds, GameObject};
use crate::constants::{DESIGN_HEIGHT, DESIGN_WIDTH};

#[derive(Debug, Clone)]
pub struct Bird {
    bounds: Bounds,
    screen_width: f32,
    screen_height: f32,
    velocity_y: f32,
    gravity: f32,
    flap_force: f32,
    max_fall_velocity: f32,
    current_frame: usize,
    frame_timer: u32,
    rotation: f32,
    target_rotation: f32,
    rotate: bool,
}

impl Bird {
    /// Gravity per step at design scale.
    pub const GRAVITY: f32 = 0.2;
    /// Velocity set by a flap at design scale (negative = upward).
    pub const FLAP_FORCE: f32 = -6.0;
    pub const MAX_FALL_VELOCITY: f32 = 10.0;

    pub const BASE_WIDTH: f32 = 34.0;
    pub const BASE_HEIGHT: f32 = 24.0;
    pub const SIZE_FACTOR: f32 = 1.2;

    /// Fraction of the screen height where the bird starts.
    pub const INITIAL_Y_RATIO: f32 = 0.4;
    /// Horizontal offset from the screen center, as a fraction of the width.
    pub const CENTER_X_OFFSET_RATIO: f32 = 0.0;

    pub const ANIMATION_FRAMES: usize = 3;
    /// Steps each animation frame stays on screen.
    pub const ANIMATION_SPEED: u32 = 8;

    pub const MAX_UP_ROTATION: f32 = -30.0 * std::f32::consts::PI / 180.0;
    pub const MAX_DOWN_ROTATION: f32 = 70.0 * std::f32::consts::PI / 180.0;
    pub const ROTATION_EASING: f32 = 0.25;

    // Hitbox insets relative to the sprite size
    pub const HITBOX_SIDE_MARGIN: f32 = 0.2;
    pub const HITBOX_TOP_MARGIN: f32 = 0.35;
    pub const HITBOX_BOTTOM_MARGIN: f32 = 0.13;

    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        let scale_x = screen_width / DESIGN_WIDTH;
        let scale_y = screen_height / DESIGN_HEIGHT;
        let width = Self::BASE_WIDTH * scale_x * Self::SIZE_FACTOR;
        let height = Self::BASE_HEIGHT * scale_y * Self::SIZE_FACTOR;

        let mut bird = Self {
            bounds: Bounds::new(0.0, 0.0, width, height),
            screen_width,
            screen_height,
            velocity_y: 0.0,
            gravity: Self::GRAVITY * scale_y,
            flap_force: Self::FLAP_FORCE * scale_y,
            max_fall_velocity: Self::MAX_FALL_VELOCITY * scale_y,
            current_frame: 0,
            frame_timer: 0,
            rotation: 0.0,
            target_rotation: 0.0,
            rotate: true,
        };
        bird.reset();
        bird
    }

    fn start_x(&self) -> f32 {
        self.screen_width / 2.0 - self.bounds.width / 2.0
            + self.screen_width * Self::CENTER_X_OFFSET_RATIO
    }

    /// Put the bird back at its starting spot, at rest.
    pub fn reset(&mut self) {
        self.bounds.x = self.start_x();
        self.bounds.y = self.screen_height * Self::INITIAL_Y_RATIO;
        self.velocity_y = 0.0;
        self.current_frame = 0;
        self.frame_timer = 0;
        self.rotation = 0.0;
        self.target_rotation = 0.0;
    }

    pub fn flap(&mut self) {
        self.velocity_y = self.flap_force;
        self.frame_timer = 0;
        self.current_frame = 0;
    }

    pub fn set_rotation_enabled(&mut self, on: bool) {
        self.rotate = on;
    }

    pub fn is_rotation_enabled(&self) -> bool {
        self.rotate
    }

    pub fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Current tilt in radians (0 when rotation is disabled).
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// The part of the sprite that counts for collisions.
    pub fn hitbox(&self) -> Bounds {
        let side = self.bounds.width * Self::HITBOX_SIDE_MARGIN;
        let top = self.bounds.height * Self::HITBOX_TOP_MARGIN;
        let bottom = self.bounds.height * Self::HITBOX_BOTTOM_MARGIN;
        Bounds::new(
            self.bounds.x + side,
            self.bounds.y + top,
            self.bounds.width - 2.0 * side,
            self.bounds.height - top - bottom,
        )
    }

    pub fn set_y(&mut self, y: f32) {
        self.bounds.y = y;
    }

    pub fn set_velocity_y(&mut self, velocity: f32) {
        self.velocity_y = velocity;
    }
}

impl GameObject for Bird {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn update(&mut self, _dt: f32) {
        self.velocity_y += self.gravity;
        self.bounds.y += self.velocity_y;
        if self.velocity_y > self.max_fall_velocity {
            self.velocity_y = self.max_fall_velocity;
        }

        self.frame_timer += 1;
        if self.frame_timer >= Self::ANIMATION_SPEED {
            self.current_frame = (self.current_frame + 1) % Self::ANIMATION_FRAMES;
            self.frame_timer = 0;
        }

        if self.rotate {
            self.target_rotation = if self.velocity_y < 0.0 {
                Self::MAX_UP_ROTATION
            } else {
                Self::MAX_DOWN_ROTATION
            };
            self.rotation += (self.target_rotation - self.rotation) * Self::ROTATION_EASING;
            self.rotation = self
                .rotation
                .clamp(Self::MAX_UP_ROTATION, Self::MAX_DOWN_ROTATION);
        } else {
            self.rotation = 0.0;
        }
    }

    fn move_by(&mut self, dx: f32, dy: f32) {
        self.bounds.x += dx;
        self.bounds.y += dy;
    }
}
