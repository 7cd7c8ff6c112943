//! Level progression: seven stages, each with its own scenery.

use crate::constants::{LEVEL_COUNT, POINTS_PER_LEVEL};

/// Scenery and rules of one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelTheme {
    pub index: usize,
    pub name: &'static str,
    /// Sky color as RGB.
    pub sky: (u8, u8, u8),
    /// Pipe color as RGB.
    pub pipe: (u8, u8, u8),
    /// Glyph scattered over the scrolling backdrop.
    pub backdrop: char,
}

type Palette = (&'static str, (u8, u8, u8), (u8, u8, u8), char);

const THEMES: [Palette; LEVEL_COUNT] = [
    ("Emerald Meadows", (92, 180, 230), (60, 170, 70), ','),
    ("Amber Dunes", (240, 190, 110), (190, 120, 40), '~'),
    ("Frostpeak Pass", (170, 210, 240), (120, 170, 200), '*'),
    ("Sunken Grove", (30, 90, 110), (40, 130, 90), 'o'),
    ("Ashen Caldera", (90, 40, 30), (160, 60, 30), '^'),
    ("Storm Citadel", (50, 50, 80), (110, 110, 140), '/'),
    ("Starfall Abyss", (10, 10, 30), (150, 90, 200), '.'),
];

impl LevelTheme {
    /// Theme of level `index`, clamped to the last level.
    pub fn for_level(index: usize) -> Self {
        let index = index.min(LEVEL_COUNT - 1);
        let (name, sky, pipe, backdrop) = THEMES[index];
        Self {
            index,
            name,
            sky,
            pipe,
            backdrop,
        }
    }

    /// Number shown to the player (1-based).
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// The last stage never runs out of pipes.
    pub fn is_endless(&self) -> bool {
        is_last_level(self.index)
    }
}

pub fn is_last_level(index: usize) -> bool {
    index + 1 >= LEVEL_COUNT
}

/// Level a run with `score` points should be at.
pub fn expected_level(score: u32) -> usize {
    (score / POINTS_PER_LEVEL) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_level_clamps() {
        assert_eq!(LevelTheme::for_level(0).name, "Emerald Meadows");
        assert_eq!(LevelTheme::for_level(99).index, LEVEL_COUNT - 1);
    }

    #[test]
    fn test_each_level_looks_different() {
        for i in 1..LEVEL_COUNT {
            assert_ne!(LevelTheme::for_level(i).sky, LevelTheme::for_level(i - 1).sky);
        }
    }

    #[test]
    fn test_only_last_level_is_endless() {
        for i in 0..LEVEL_COUNT - 1 {
            assert!(!LevelTheme::for_level(i).is_endless());
        }
        assert!(LevelTheme::for_level(LEVEL_COUNT - 1).is_endless());
    }

    #[test]
    fn test_expected_level() {
        assert_eq!(expected_level(0), 0);
        assert_eq!(expected_level(14), 0);
        assert_eq!(expected_level(15), 1);
        assert_eq!(expected_level(44), 2);
    }

    #[test]
    fn test_number_is_one_based() {
        assert_eq!(LevelTheme::for_level(2).number(), 3);
    }
}
