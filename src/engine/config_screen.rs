//! Settings screen: pick the play field resolution and display mode.

use crate::input::GameInput;
use crate::resolution::{ResolutionSelector, SelectorOutcome};
use crate::settings::ResolutionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOutcome {
    Apply(ResolutionConfig),
    Back,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigScreen {
    selector: ResolutionSelector,
    current: ResolutionConfig,
}

impl ConfigScreen {
    pub fn new(current: ResolutionConfig) -> Self {
        Self {
            selector: ResolutionSelector::with_current(&current),
            current,
        }
    }

    /// Reopen with the active resolution highlighted.
    pub fn reset_state(&mut self, current: ResolutionConfig) {
        self.current = current;
        self.selector.select(&current);
    }

    pub fn selector(&self) -> &ResolutionSelector {
        &self.selector
    }

    pub fn current(&self) -> ResolutionConfig {
        self.current
    }

    pub fn handle_input(&mut self, input: GameInput) -> Option<ConfigOutcome> {
        match self.selector.handle_input(input)? {
            SelectorOutcome::Chosen(config) => {
                self.current = config;
                Some(ConfigOutcome::Apply(config))
            }
            SelectorOutcome::Cancelled => Some(ConfigOutcome::Back),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DisplayMode;

    #[test]
    fn test_preselects_current() {
        let current = ResolutionConfig::new(1920, 1080, DisplayMode::Borderless);
        let screen = ConfigScreen::new(current);
        assert_eq!(screen.selector().confirm(), current);
    }

    #[test]
    fn test_apply_choice() {
        let mut screen = ConfigScreen::new(ResolutionConfig::default());
        screen.handle_input(GameInput::Down);
        let outcome = screen.handle_input(GameInput::Enter);
        let expected = ResolutionConfig::new(1600, 900, DisplayMode::Windowed);
        assert_eq!(outcome, Some(ConfigOutcome::Apply(expected)));
        assert_eq!(screen.current(), expected);
    }

    #[test]
    fn test_esc_goes_back_unchanged() {
        let mut screen = ConfigScreen::new(ResolutionConfig::default());
        screen.handle_input(GameInput::Down);
        assert_eq!(screen.handle_input(GameInput::Esc), Some(ConfigOutcome::Back));
        assert_eq!(screen.current(), ResolutionConfig::default());
    }

    #[test]
    fn test_reset_state_moves_highlight() {
        let mut screen = ConfigScreen::new(ResolutionConfig::default());
        let other = ResolutionConfig::new(1280, 720, DisplayMode::Fullscreen);
        screen.reset_state(other);
        assert_eq!(screen.selector().selected_index(), 3);
    }
}
