//! Terminal key events mapped to game inputs.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input actions, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Char(char),
    Backspace,
    Enter,
    Esc,
    Up,
    Down,
    Left,
    Right,
    Tab,
    /// Ctrl+C: leave right away.
    Interrupt,
    Other,
}

impl GameInput {
    /// Space or Up make the dragon flap.
    pub fn is_flap(self) -> bool {
        matches!(self, GameInput::Char(' ') | GameInput::Up)
    }
}

/// Map a key event. Releases and repeats are ignored.
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let input = match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            GameInput::Interrupt
        }
        KeyCode::Char(c) => GameInput::Char(c),
        KeyCode::Backspace => GameInput::Backspace,
        KeyCode::Enter => GameInput::Enter,
        KeyCode::Esc => GameInput::Esc,
        KeyCode::Up => GameInput::Up,
        KeyCode::Down => GameInput::Down,
        KeyCode::Left => GameInput::Left,
        KeyCode::Right => GameInput::Right,
        KeyCode::Tab | KeyCode::BackTab => GameInput::Tab,
        _ => GameInput::Other,
    };
    Some(input)
}
