//! Display settings and the remembered nickname, stored as `settings.json`.

use crate::constants::{DESIGN_HEIGHT, DESIGN_WIDTH};
use crate::error::{GameError, Result};
use crate::utils::persistence::{load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// A bordered window sized from the resolution.
    #[default]
    Windowed,
    /// The whole terminal, with a border.
    Fullscreen,
    /// The whole terminal, no border.
    Borderless,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [
        DisplayMode::Windowed,
        DisplayMode::Fullscreen,
        DisplayMode::Borderless,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Windowed => "Windowed",
            DisplayMode::Fullscreen => "Fullscreen",
            DisplayMode::Borderless => "Borderless",
        }
    }
}

/// Resolution of the play field in virtual pixels, plus how it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub mode: DisplayMode,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            width: DESIGN_WIDTH as u32,
            height: DESIGN_HEIGHT as u32,
            mode: DisplayMode::Windowed,
        }
    }
}

impl ResolutionConfig {
    pub fn new(width: u32, height: u32, mode: DisplayMode) -> Self {
        Self {
            width,
            height,
            mode,
        }
    }

    /// Horizontal and vertical scale against the 1280×720 design resolution.
    pub fn scale(&self) -> (f32, f32) {
        (
            self.width as f32 / DESIGN_WIDTH,
            self.height as f32 / DESIGN_HEIGHT,
        )
    }

    pub fn label(&self) -> String {
        format!("{}x{} ({})", self.width, self.height, self.mode.name())
    }
}

impl fmt::Display for ResolutionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parses `WIDTHxHEIGHT`, windowed.
impl FromStr for ResolutionConfig {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GameError::InvalidResolution(s.to_string());
        let (w, h) = s
            .trim()
            .split_once(|c: char| c == 'x' || c == 'X')
            .ok_or_else(invalid)?;
        let width: u32 = w.trim().parse().map_err(|_| invalid())?;
        let height: u32 = h.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self::new(width, height, DisplayMode::Windowed))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub resolution: ResolutionConfig,
    #[serde(default)]
    pub last_nickname: String,
}

impl Settings {
    /// Missing or unreadable settings fall back to the defaults.
    pub fn load(path: &Path) -> Self {
        let settings: Settings = load_json_or_default(path);
        if settings.resolution.width == 0 || settings.resolution.height == 0 {
            tracing::warn!("stored resolution is empty, using default");
            return Settings {
                resolution: ResolutionConfig::default(),
                ..settings
            };
        }
        settings
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        save_json(path, self)
    }
}
