//! Results screen shown after a crash.

use crate::input::GameInput;

/// Outcome of a finished match, as shown on the game over screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    /// The player's best before this match.
    pub personal_record: u32,
    /// Best of all players before this match.
    pub overall_record: u32,
    pub beat_personal: bool,
    pub beat_overall: bool,
}

impl GameSummary {
    /// Compare `score` against the records as they stood before the match.
    pub fn new(score: u32, personal_record: u32, overall_record: u32) -> Self {
        Self {
            score,
            personal_record,
            overall_record,
            beat_personal: score > personal_record,
            beat_overall: score > overall_record,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverChoice {
    Replay,
    Menu,
}

impl GameOverChoice {
    pub fn label(self) -> &'static str {
        match self {
            GameOverChoice::Replay => "Play again",
            GameOverChoice::Menu => "Back to menu",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameOverScreen {
    summary: GameSummary,
    selected: GameOverChoice,
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl GameOverScreen {
    pub fn new() -> Self {
        Self {
            summary: GameSummary::default(),
            selected: GameOverChoice::Replay,
        }
    }

    /// Show a new result with the Replay button selected.
    pub fn show(&mut self, summary: GameSummary) {
        self.summary = summary;
        self.selected = GameOverChoice::Replay;
    }

    pub fn summary(&self) -> &GameSummary {
        &self.summary
    }

    pub fn selected(&self) -> GameOverChoice {
        self.selected
    }

    /// Returns the chosen button once one is activated.
    pub fn handle_input(&mut self, input: GameInput) -> Option<GameOverChoice> {
        match input {
            GameInput::Left | GameInput::Right | GameInput::Tab => {
                self.selected = match self.selected {
                    GameOverChoice::Replay => GameOverChoice::Menu,
                    GameOverChoice::Menu => GameOverChoice::Replay,
                };
                None
            }
            GameInput::Enter => Some(self.selected),
            GameInput::Char('r') | GameInput::Char('R') => Some(GameOverChoice::Replay),
            GameInput::Char('m') | GameInput::Char('M') | GameInput::Esc => {
                Some(GameOverChoice::Menu)
            }
            _ => None,
        }
    }
}
