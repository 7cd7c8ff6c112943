// Design resolution: every length in the simulation is authored against it
pub const DESIGN_WIDTH: f32 = 1280.0;
pub const DESIGN_HEIGHT: f32 = 720.0;

// Game timing constants
pub const UPDATES_PER_SECOND: u32 = 60;
pub const FRAME_DT: f32 = 1.0 / UPDATES_PER_SECOND as f32;
pub const MAX_CATCH_UP_UPDATES: u32 = 5;
pub const INPUT_POLL_MS: u64 = 8;

// Progression constants
pub const LEVEL_COUNT: usize = 7;
pub const POINTS_PER_LEVEL: u32 = 15;
pub const LEVEL_SPEEDUP_PERCENT: f32 = 10.0;
pub const TRANSITION_DURATION: f32 = 1.5;

// Menu constants
pub const NICKNAME_MAX_LEN: usize = 15;
pub const WARNING_DURATION: f32 = 3.0;
pub const CURSOR_BLINK_SECONDS: f32 = 0.5;
pub const EXIT_DELAY: f32 = 1.0;

// Ranking constants
pub const RANKING_TOP: usize = 10;

// Save system constants
pub const DATA_DIR_NAME: &str = ".traveling-dragon";
pub const DATA_DIR_ENV: &str = "TRAVELING_DRAGON_HOME";
pub const PLAYERS_FILE: &str = "players.json";
pub const LEGACY_PLAYERS_FILE: &str = "players.txt";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "game.log";

// Terminal rendering: virtual pixels covered by one cell in windowed mode
pub const CELL_WIDTH_PX: u32 = 16;
pub const CELL_HEIGHT_PX: u32 = 32;
