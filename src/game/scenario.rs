//! A play session: the bird, the pipes of the current level and the score.
//!
//! All lengths are virtual pixels of a `screen_width` × `screen_height` field;
//! design values are authored for 1280×720 and scaled on construction.

use super::bird::Bird;
use super::level::LevelTheme;
use super::object::GameObject;
use super::pipe::Pipe;
use super::score::ScoreManager;
use crate::constants::{DESIGN_HEIGHT, DESIGN_WIDTH};
use rand::Rng;

/// Something that happened during a scenario update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioEvent {
    /// The bird passed a pipe; `score` is the new total.
    Scored { score: u32 },
    Crashed(CrashCause),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Pipe,
    Floor,
    Ceiling,
}

#[derive(Debug, Clone)]
pub struct Scenario {
    screen_width: f32,
    screen_height: f32,
    scale_x: f32,
    scale_y: f32,
    bird: Bird,
    pipes: Vec<Pipe>,
    score: ScoreManager,
    game_over: bool,
    background_offset: f32,
    /// Pipe speed in virtual pixels per second (negative = leftward).
    pipe_speed: f32,
    pipes_spawned_this_level: usize,
    infinite_pipes: bool,
    level: LevelTheme,
}

impl Scenario {
    /// Pipes laid out per level (unless the level is endless).
    pub const MAX_PIPES: usize = 15;
    pub const PIPE_SPACING: f32 = 420.0;
    pub const INITIAL_PIPE_SPEED: f32 = -150.0;
    pub const GAP_HEIGHT: f32 = 250.0;
    /// Gap centers stay this far from the top and bottom edges.
    pub const GAP_MARGIN: f32 = 200.0;
    /// Random extra offset applied to spawned gaps.
    pub const GAP_JITTER: f32 = 80.0;
    /// First pipe position as a fraction of the screen width.
    pub const FIRST_PIPE_X_RATIO: f32 = 0.75;
    /// Background scroll per update step, in pixels.
    pub const BACKGROUND_SCROLL: f32 = -1.0;

    pub fn new<R: Rng + ?Sized>(screen_width: f32, screen_height: f32, rng: &mut R) -> Self {
        let scale_x = screen_width / DESIGN_WIDTH;
        let scale_y = screen_height / DESIGN_HEIGHT;

        let mut bird = Bird::new(screen_width, screen_height);
        bird.set_rotation_enabled(false);

        let mut scenario = Self {
            screen_width,
            screen_height,
            scale_x,
            scale_y,
            bird,
            pipes: Vec::with_capacity(Self::MAX_PIPES),
            score: ScoreManager::new(),
            game_over: false,
            background_offset: 0.0,
            pipe_speed: Self::INITIAL_PIPE_SPEED * scale_x,
            pipes_spawned_this_level: 0,
            infinite_pipes: false,
            level: LevelTheme::for_level(0),
        };
        scenario.lay_out_pipes(rng);
        scenario
    }

    /// Restart the current level: bird back at the start, fresh pipes.
    ///
    /// Score, speed and level are kept.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.bird.reset();
        self.game_over = false;
        self.background_offset = 0.0;
        self.lay_out_pipes(rng);
    }

    fn lay_out_pipes<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pipes.clear();
        self.pipes_spawned_this_level = 0;

        let start_x = self.screen_width * Self::FIRST_PIPE_X_RATIO;
        let spacing = self.pipe_spacing();
        for i in 0..Self::MAX_PIPES {
            let (min_gap, max_gap) = self.gap_range();
            let gap_y = rng.gen_range(min_gap..=max_gap);
            self.push_pipe(start_x + i as f32 * spacing, gap_y);
        }
    }

    fn push_pipe(&mut self, x: f32, gap_y: f32) {
        let mut pipe = Pipe::new(
            x,
            gap_y,
            Self::GAP_HEIGHT * self.scale_y,
            self.screen_width,
            self.screen_height,
        );
        pipe.set_speed(self.pipe_speed);
        self.pipes.push(pipe);
        self.pipes_spawned_this_level += 1;
    }

    fn gap_range(&self) -> (f32, f32) {
        let margin = Self::GAP_MARGIN * self.scale_y;
        (margin, self.screen_height - margin)
    }

    fn pipe_spacing(&self) -> f32 {
        Self::PIPE_SPACING * self.scale_x
    }

    /// Add a pipe behind the last one. Returns false when the level is out of pipes.
    pub fn spawn_pipe<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.infinite_pipes && self.pipes_spawned_this_level >= Self::MAX_PIPES {
            return false;
        }

        let (min_gap, max_gap) = self.gap_range();
        let jitter = Self::GAP_JITTER * self.scale_y;
        let gap_y = (rng.gen_range(min_gap..=max_gap) + rng.gen_range(-jitter..=jitter))
            .clamp(min_gap, max_gap);

        let x = match self.pipes.last() {
            Some(last) => last.x() + self.pipe_spacing(),
            None => self.screen_width,
        };
        self.push_pipe(x, gap_y);
        true
    }

    /// Whether the bird's hitbox overlaps either column of `pipe`.
    pub fn check_collision(bird: &Bird, pipe: &Pipe) -> bool {
        let hit = bird.hitbox();
        let pipe_bounds = pipe.bounds();

        let overlaps_column = hit.x < pipe_bounds.right() && hit.right() > pipe_bounds.x;
        if !overlaps_column {
            return false;
        }
        hit.y < pipe.top_pipe_bottom_y() || hit.bottom() > pipe.bottom_pipe_top_y()
    }

    /// Advance the session by one step.
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> Vec<ScenarioEvent> {
        let mut events = Vec::new();
        if self.game_over {
            return events;
        }

        self.bird.update(dt);

        // Keep one pipe queued past the right edge
        let needs_pipe = self
            .pipes
            .last()
            .map_or(true, |last| last.x() <= self.screen_width);
        if needs_pipe {
            self.spawn_pipe(rng);
        }

        let bird_x = self.bird.x();
        for pipe in &mut self.pipes {
            pipe.set_speed(self.pipe_speed);
            pipe.update(dt);

            if !pipe.has_scored() && bird_x > pipe.bounds().center_x() {
                pipe.set_scored(true);
                self.score.increment();
                tracing::debug!(score = self.score.score(), "pipe passed");
                events.push(ScenarioEvent::Scored {
                    score: self.score.score(),
                });
            }

            if Self::check_collision(&self.bird, pipe) {
                return self.crash(events, CrashCause::Pipe);
            }
        }

        let bird_bounds = self.bird.bounds();
        if bird_bounds.bottom() >= self.screen_height {
            return self.crash(events, CrashCause::Floor);
        }
        if self.bird.hitbox().y <= 0.0 {
            return self.crash(events, CrashCause::Ceiling);
        }

        self.pipes.retain(|p| !p.is_off_screen());

        self.background_offset += Self::BACKGROUND_SCROLL;
        while self.background_offset <= -self.screen_width {
            self.background_offset += self.screen_width;
        }

        events
    }

    fn crash(&mut self, mut events: Vec<ScenarioEvent>, cause: CrashCause) -> Vec<ScenarioEvent> {
        self.game_over = true;
        tracing::debug!(?cause, score = self.score.score(), "bird crashed");
        events.push(ScenarioEvent::Crashed(cause));
        events
    }

    pub fn increase_speed_by_percent(&mut self, percent: f32) {
        self.pipe_speed *= 1.0 + percent / 100.0;
        for pipe in &mut self.pipes {
            pipe.set_speed(self.pipe_speed);
        }
    }

    /// Move to `level`'s scenery and rules and restart the field.
    pub fn change_level<R: Rng + ?Sized>(&mut self, level: usize, rng: &mut R) {
        self.level = LevelTheme::for_level(level);
        self.infinite_pipes = self.level.is_endless();
        self.reset(rng);
    }

    pub fn set_infinite_pipes(&mut self, infinite: bool) {
        self.infinite_pipes = infinite;
    }

    pub fn has_infinite_pipes(&self) -> bool {
        self.infinite_pipes
    }

    pub fn level(&self) -> LevelTheme {
        self.level
    }

    pub fn current_level(&self) -> usize {
        self.level.index
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    /// Replace the pipes on the field (used to stage specific layouts).
    pub fn set_pipes(&mut self, pipes: Vec<Pipe>) {
        self.pipes_spawned_this_level = pipes.len();
        self.pipes = pipes;
    }

    pub fn pipe_speed(&self) -> f32 {
        self.pipe_speed
    }

    pub fn background_offset(&self) -> f32 {
        self.background_offset
    }

    pub fn screen_size(&self) -> (f32, f32) {
        (self.screen_width, self.screen_height)
    }
}
