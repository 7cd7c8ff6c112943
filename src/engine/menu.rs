//! Main menu: the nickname field and the four buttons below it.

use crate::constants::{CURSOR_BLINK_SECONDS, NICKNAME_MAX_LEN, WARNING_DURATION};
use crate::input::GameInput;

pub const EMPTY_NICKNAME_WARNING: &str = "Nickname can't be empty!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Ranking,
    Settings,
    Quit,
}

impl MenuAction {
    /// Buttons top to bottom.
    pub const BUTTONS: [MenuAction; 4] = [
        MenuAction::Play,
        MenuAction::Ranking,
        MenuAction::Settings,
        MenuAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Play => "Play",
            MenuAction::Ranking => "Ranking",
            MenuAction::Settings => "Settings",
            MenuAction::Quit => "Quit",
        }
    }
}

/// What has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFocus {
    Nickname,
    Button(MenuAction),
}

impl MenuFocus {
    const ORDER: [MenuFocus; 5] = [
        MenuFocus::Nickname,
        MenuFocus::Button(MenuAction::Play),
        MenuFocus::Button(MenuAction::Ranking),
        MenuFocus::Button(MenuAction::Settings),
        MenuFocus::Button(MenuAction::Quit),
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    nickname: String,
    focus: MenuFocus,
    selected_action: Option<MenuAction>,
    cursor_visible: bool,
    cursor_timer: f32,
    warning: Option<String>,
    warning_timer: f32,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    pub fn new() -> Self {
        Self {
            nickname: String::new(),
            focus: MenuFocus::Nickname,
            selected_action: None,
            cursor_visible: true,
            cursor_timer: 0.0,
            warning: None,
            warning_timer: 0.0,
        }
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Prefill the field, keeping only characters the field would accept.
    pub fn set_nickname(&mut self, nickname: &str) {
        self.nickname.clear();
        for c in nickname.chars() {
            self.push_char(c);
        }
        self.trim_nickname();
    }

    pub fn focus(&self) -> MenuFocus {
        self.focus
    }

    pub fn is_input_active(&self) -> bool {
        self.focus == MenuFocus::Nickname
    }

    pub fn set_input_active(&mut self, active: bool) {
        self.focus = if active {
            MenuFocus::Nickname
        } else {
            MenuFocus::Button(MenuAction::Play)
        };
    }

    pub fn selected_action(&self) -> Option<MenuAction> {
        self.selected_action
    }

    pub fn reset_action(&mut self) {
        self.selected_action = None;
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// The warning currently on screen, if any.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn display_warning(&mut self, message: impl Into<String>) {
        self.warning = Some(message.into());
        self.warning_timer = WARNING_DURATION;
    }

    fn clear_warning(&mut self) {
        self.warning = None;
        self.warning_timer = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        if self.is_input_active() {
            self.cursor_timer += dt;
            if self.cursor_timer >= CURSOR_BLINK_SECONDS {
                self.cursor_visible = !self.cursor_visible;
                self.cursor_timer = 0.0;
            }
        } else {
            self.cursor_visible = false;
            self.cursor_timer = 0.0;
        }

        if self.warning.is_some() {
            self.warning_timer -= dt;
            if self.warning_timer <= 0.0 {
                self.clear_warning();
            }
        }
    }

    pub fn handle_input(&mut self, input: GameInput) {
        match input {
            GameInput::Up => self.move_focus(self.focus.prev()),
            GameInput::Down | GameInput::Tab => self.move_focus(self.focus.next()),
            GameInput::Esc => self.move_focus(MenuFocus::Button(MenuAction::Quit)),
            GameInput::Enter => match self.focus {
                MenuFocus::Nickname => self.try_play(),
                MenuFocus::Button(MenuAction::Play) => self.try_play(),
                MenuFocus::Button(action) => {
                    self.trim_nickname();
                    self.selected_action = Some(action);
                }
            },
            GameInput::Backspace if self.is_input_active() => {
                self.clear_warning();
                self.nickname.pop();
            }
            GameInput::Char(c) if self.is_input_active() => {
                self.clear_warning();
                self.push_char(c);
            }
            _ => {}
        }
    }

    fn move_focus(&mut self, focus: MenuFocus) {
        self.focus = focus;
        if focus == MenuFocus::Nickname {
            self.cursor_visible = true;
            self.cursor_timer = 0.0;
        }
    }

    fn push_char(&mut self, c: char) {
        if self.nickname.chars().count() >= NICKNAME_MAX_LEN {
            return;
        }
        if !(c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == ' ') {
            return;
        }
        // No leading or doubled spaces
        if c == ' ' && self.nickname.chars().last().map_or(true, |last| last == ' ') {
            return;
        }
        self.nickname.push(c);
    }

    fn trim_nickname(&mut self) {
        let trimmed = self.nickname.trim_end().len();
        self.nickname.truncate(trimmed);
    }

    fn try_play(&mut self) {
        self.trim_nickname();
        if self.nickname.is_empty() {
            self.display_warning(EMPTY_NICKNAME_WARNING);
        } else {
            self.selected_action = Some(MenuAction::Play);
        }
    }
}
