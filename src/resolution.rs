//! The list of resolutions a player can pick, and the selector over it.

use crate::input::GameInput;
use crate::settings::{DisplayMode, ResolutionConfig};

/// Message printed when the startup selector is dismissed.
pub const NOT_SELECTED_MESSAGE: &str = "Resolution not selected";

const SIZES: [(u32, u32); 3] = [(1280, 720), (1600, 900), (1920, 1080)];

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOption {
    pub config: ResolutionConfig,
    pub label: String,
}

/// Every size in every display mode, grouped by mode.
pub fn resolution_options() -> Vec<ResolutionOption> {
    DisplayMode::ALL
        .iter()
        .flat_map(|&mode| {
            SIZES.iter().map(move |&(w, h)| {
                let config = ResolutionConfig::new(w, h, mode);
                ResolutionOption {
                    label: config.label(),
                    config,
                }
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorOutcome {
    Chosen(ResolutionConfig),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct ResolutionSelector {
    options: Vec<ResolutionOption>,
    selected: usize,
}

impl Default for ResolutionSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionSelector {
    pub fn new() -> Self {
        Self {
            options: resolution_options(),
            selected: 0,
        }
    }

    /// A selector with `current` highlighted (first entry if it isn't listed).
    pub fn with_current(current: &ResolutionConfig) -> Self {
        let mut selector = Self::new();
        selector.select(current);
        selector
    }

    pub fn select(&mut self, config: &ResolutionConfig) {
        self.selected = self
            .options
            .iter()
            .position(|o| o.config == *config)
            .unwrap_or(0);
    }

    pub fn options(&self) -> &[ResolutionOption] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn move_up(&mut self) {
        self.selected = (self.selected + self.options.len() - 1) % self.options.len();
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn confirm(&self) -> ResolutionConfig {
        self.options[self.selected].config
    }

    pub fn handle_input(&mut self, input: GameInput) -> Option<SelectorOutcome> {
        match input {
            GameInput::Up => self.move_up(),
            GameInput::Down | GameInput::Tab => self.move_down(),
            GameInput::Enter => return Some(SelectorOutcome::Chosen(self.confirm())),
            GameInput::Esc | GameInput::Interrupt => return Some(SelectorOutcome::Cancelled),
            _ => {}
        }
        None
    }
}
