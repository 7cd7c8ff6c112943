//! The game engine: a state machine over the menu, a match and the
//! screens around it.
//!
//! Input and time are fed in from outside (`handle_input`, `update`), so the
//! whole flow runs without a terminal.

pub mod config_screen;
pub mod game_over;
pub mod menu;
pub mod ranking;

pub use config_screen::{ConfigOutcome, ConfigScreen};
pub use game_over::{GameOverChoice, GameOverScreen, GameSummary};
pub use menu::{Menu, MenuAction, MenuFocus};
pub use ranking::{RankingFooter, RankingRow, RankingScreen, RankingView};

use crate::constants::{EXIT_DELAY, LEVEL_COUNT, LEVEL_SPEEDUP_PERCENT, TRANSITION_DURATION};
use crate::game::level::{expected_level, is_last_level};
use crate::game::{Scenario, ScenarioEvent};
use crate::input::GameInput;
use crate::player::PlayerManager;
use crate::settings::{ResolutionConfig, Settings};
use rand::rngs::StdRng;
use rand::Rng;
use std::path::PathBuf;

pub const NICKNAME_REQUIRED_WARNING: &str = "Type your nickname to play!";
const SAVE_FAILED_WARNING: &str = "Could not save player records";
const SETTINGS_FAILED_WARNING: &str = "Could not save settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    /// Fade-in before the first frame of a match.
    StartingGame,
    Playing,
    GameOver,
    Ranking,
    Config,
    /// Goodbye screen shown briefly before the program ends.
    Exiting,
}

pub struct Engine<R: Rng = StdRng> {
    state: GameState,
    menu: Menu,
    scenario: Option<Scenario>,
    game_over: GameOverScreen,
    ranking: RankingScreen,
    config: ConfigScreen,
    players: PlayerManager,
    current_player: Option<String>,
    settings: Settings,
    settings_path: Option<PathBuf>,
    rng: R,
    start_timer: f32,
    /// Time into a level transition, when one is running.
    transition: Option<f32>,
    exit_timer: f32,
    quit: bool,
}

impl<R: Rng> Engine<R> {
    pub fn new(players: PlayerManager, settings: Settings, rng: R) -> Self {
        let mut menu = Menu::new();
        menu.set_nickname(&settings.last_nickname);
        Self {
            state: GameState::Menu,
            menu,
            scenario: None,
            game_over: GameOverScreen::new(),
            ranking: RankingScreen::new(),
            config: ConfigScreen::new(settings.resolution),
            players,
            current_player: None,
            settings,
            settings_path: None,
            rng,
            start_timer: 0.0,
            transition: None,
            exit_timer: 0.0,
            quit: false,
        }
    }

    /// Persist settings changes (resolution, last nickname) to `path`.
    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = Some(path.into());
        self
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn scenario(&self) -> Option<&Scenario> {
        self.scenario.as_ref()
    }

    pub fn scenario_mut(&mut self) -> Option<&mut Scenario> {
        self.scenario.as_mut()
    }

    pub fn game_over_screen(&self) -> &GameOverScreen {
        &self.game_over
    }

    pub fn ranking_view(&self) -> RankingView {
        self.ranking.view(&self.players)
    }

    pub fn config_screen(&self) -> &ConfigScreen {
        &self.config
    }

    pub fn players(&self) -> &PlayerManager {
        &self.players
    }

    pub fn current_player(&self) -> Option<&str> {
        self.current_player.as_deref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn resolution(&self) -> ResolutionConfig {
        self.settings.resolution
    }

    pub fn in_level_transition(&self) -> bool {
        self.transition.is_some()
    }

    /// Darkness of the play field overlay, 0 (clear) to 1 (black).
    pub fn fade_alpha(&self) -> f32 {
        let alpha = match (self.state, self.transition) {
            (GameState::StartingGame, _) => 1.0 - self.start_timer / TRANSITION_DURATION,
            (GameState::Playing, Some(t)) => t / TRANSITION_DURATION,
            _ => 0.0,
        };
        alpha.clamp(0.0, 1.0)
    }

    pub fn handle_input(&mut self, input: GameInput) {
        if input == GameInput::Interrupt {
            tracing::info!(state = ?self.state, "interrupted");
            self.quit = true;
            return;
        }

        match self.state {
            GameState::Menu => self.handle_menu_input(input),
            GameState::StartingGame => {
                if input == GameInput::Esc {
                    self.back_to_menu();
                }
            }
            GameState::Playing => self.handle_playing_input(input),
            GameState::GameOver => match self.game_over.handle_input(input) {
                Some(GameOverChoice::Replay) => self.replay(),
                Some(GameOverChoice::Menu) => self.back_to_menu(),
                None => {}
            },
            GameState::Ranking => self.back_to_menu(),
            GameState::Config => match self.config.handle_input(input) {
                Some(ConfigOutcome::Apply(resolution)) => {
                    tracing::info!(resolution = %resolution, "resolution changed");
                    self.settings.resolution = resolution;
                    self.persist_settings();
                    self.back_to_menu();
                }
                Some(ConfigOutcome::Back) => self.back_to_menu(),
                None => {}
            },
            GameState::Exiting => {}
        }
    }

    fn handle_menu_input(&mut self, input: GameInput) {
        self.menu.handle_input(input);
        let Some(action) = self.menu.selected_action() else {
            return;
        };
        self.menu.reset_action();

        match action {
            MenuAction::Play => self.start_game(),
            MenuAction::Ranking => {
                let nickname = self.menu.nickname();
                let current = self.players.find(nickname).map(|p| p.nickname.clone());
                self.ranking.open(current);
                self.set_state(GameState::Ranking);
            }
            MenuAction::Settings => {
                self.config.reset_state(self.settings.resolution);
                self.set_state(GameState::Config);
            }
            MenuAction::Quit => {
                self.exit_timer = EXIT_DELAY;
                self.set_state(GameState::Exiting);
            }
        }
    }

    fn handle_playing_input(&mut self, input: GameInput) {
        if input == GameInput::Esc {
            tracing::info!("match abandoned");
            self.back_to_menu();
            return;
        }
        if input.is_flap() && self.transition.is_none() {
            if let Some(scenario) = self.scenario.as_mut() {
                scenario.bird_mut().flap();
            }
        }
    }

    fn start_game(&mut self) {
        let nickname = self.menu.nickname().to_string();
        if nickname.is_empty() {
            self.menu.display_warning(NICKNAME_REQUIRED_WARNING);
            return;
        }

        self.players.find_or_register(&nickname);
        if self.settings.last_nickname != nickname {
            self.settings.last_nickname = nickname.clone();
            self.persist_settings();
        }
        self.current_player = Some(nickname);

        self.scenario = Some(self.new_scenario());
        self.start_timer = 0.0;
        self.transition = None;
        self.set_state(GameState::StartingGame);
    }

    fn replay(&mut self) {
        self.scenario = Some(self.new_scenario());
        self.transition = None;
        self.set_state(GameState::Playing);
    }

    fn new_scenario(&mut self) -> Scenario {
        let res = self.settings.resolution;
        Scenario::new(res.width as f32, res.height as f32, &mut self.rng)
    }

    fn back_to_menu(&mut self) {
        self.scenario = None;
        self.transition = None;
        self.menu.reset_action();
        self.menu.set_input_active(true);
        self.set_state(GameState::Menu);
    }

    fn set_state(&mut self, state: GameState) {
        if self.state != state {
            tracing::info!(from = ?self.state, to = ?state, "state change");
            self.state = state;
        }
    }

    pub fn update(&mut self, dt: f32) {
        match self.state {
            GameState::Menu => self.menu.update(dt),
            GameState::StartingGame => {
                self.start_timer += dt;
                if self.start_timer >= TRANSITION_DURATION {
                    self.start_timer = 0.0;
                    self.set_state(GameState::Playing);
                }
            }
            GameState::Playing => self.update_playing(dt),
            GameState::Exiting => {
                self.exit_timer -= dt;
                if self.exit_timer <= 0.0 {
                    self.quit = true;
                }
            }
            GameState::GameOver | GameState::Ranking | GameState::Config => {}
        }
    }

    fn update_playing(&mut self, dt: f32) {
        if let Some(elapsed) = self.transition.as_mut() {
            *elapsed += dt;
            if *elapsed >= TRANSITION_DURATION {
                self.finish_level_transition();
            }
            return;
        }

        let Some(scenario) = self.scenario.as_mut() else {
            tracing::error!("playing without a scenario");
            self.back_to_menu();
            return;
        };

        let events = scenario.update(dt, &mut self.rng);
        for event in events {
            if let ScenarioEvent::Scored { score } = event {
                let level = scenario.current_level();
                if expected_level(score) > level && !is_last_level(level) {
                    tracing::info!(level = level + 1, score, "level complete");
                    self.transition = Some(0.0);
                }
            }
        }

        if scenario.is_game_over() {
            self.finish_match();
        }
    }

    fn finish_level_transition(&mut self) {
        self.transition = None;
        if let Some(scenario) = self.scenario.as_mut() {
            let next = (scenario.current_level() + 1).min(LEVEL_COUNT - 1);
            scenario.increase_speed_by_percent(LEVEL_SPEEDUP_PERCENT);
            scenario.change_level(next, &mut self.rng);
            tracing::info!(
                level = next + 1,
                theme = scenario.level().name,
                speed = scenario.pipe_speed(),
                "entering level"
            );
        }
    }

    fn finish_match(&mut self) {
        let score = self.scenario.as_ref().map_or(0, Scenario::score);
        let nickname = self.current_player.clone().unwrap_or_default();

        let personal_record = self.players.find(&nickname).map_or(0, |p| p.best_score);
        let overall_record = self.players.best_overall();
        let summary = GameSummary::new(score, personal_record, overall_record);

        if !self.players.record_match(&nickname, score) {
            tracing::warn!(nickname = %nickname, "match finished for an unknown player");
        }
        if let Err(e) = self.players.save() {
            tracing::error!(error = %e, "failed to save players");
            self.menu.display_warning(SAVE_FAILED_WARNING);
        }

        tracing::info!(
            nickname = %nickname,
            score,
            beat_personal = summary.beat_personal,
            beat_overall = summary.beat_overall,
            "match finished"
        );
        self.game_over.show(summary);
        self.set_state(GameState::GameOver);
    }

    fn persist_settings(&mut self) {
        let Some(path) = self.settings_path.as_ref() else {
            return;
        };
        if let Err(e) = self.settings.save(path) {
            tracing::error!(error = %e, "failed to save settings");
            self.menu.display_warning(SETTINGS_FAILED_WARNING);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FRAME_DT;
    use crate::game::object::GameObject;
    use crate::game::Pipe;
    use crate::utils::persistence::scratch_path;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn engine(name: &str) -> Engine<ChaCha8Rng> {
        let players = PlayerManager::new(scratch_path(&format!("engine-{}/players.json", name)));
        Engine::new(players, Settings::default(), ChaCha8Rng::seed_from_u64(3))
    }

    fn type_nickname(engine: &mut Engine<ChaCha8Rng>, nickname: &str) {
        for c in nickname.chars() {
            engine.handle_input(GameInput::Char(c));
        }
    }

    fn run(engine: &mut Engine<ChaCha8Rng>, seconds: f32) {
        let steps = (seconds / FRAME_DT).ceil() as usize;
        for _ in 0..steps {
            engine.update(FRAME_DT);
        }
    }

    fn start_playing(engine: &mut Engine<ChaCha8Rng>, nickname: &str) {
        type_nickname(engine, nickname);
        engine.handle_input(GameInput::Enter);
        run(engine, TRANSITION_DURATION + 0.1);
        assert_eq!(engine.state(), GameState::Playing);
    }

    #[test]
    fn test_play_requires_nickname() {
        let mut engine = engine("empty-nick");
        engine.handle_input(GameInput::Enter);
        assert_eq!(engine.state(), GameState::Menu);
        assert!(engine.menu().warning().is_some());
    }

    #[test]
    fn test_play_registers_and_fades_in() {
        let mut engine = engine("fade-in");
        type_nickname(&mut engine, "kai");
        engine.handle_input(GameInput::Enter);

        assert_eq!(engine.state(), GameState::StartingGame);
        assert!(engine.players().find("kai").is_some());
        assert_eq!(engine.current_player(), Some("kai"));
        assert_eq!(engine.fade_alpha(), 1.0);

        run(&mut engine, TRANSITION_DURATION + 0.1);
        assert_eq!(engine.state(), GameState::Playing);
        assert_eq!(engine.fade_alpha(), 0.0);
    }

    #[test]
    fn test_esc_while_playing_discards_match() {
        let mut engine = engine("esc");
        start_playing(&mut engine, "kai");
        engine.handle_input(GameInput::Esc);
        assert_eq!(engine.state(), GameState::Menu);
        assert!(engine.scenario().is_none());
        assert_eq!(engine.players().find("kai").unwrap().matches, 0);
    }

    #[test]
    fn test_crash_records_match() {
        let mut engine = engine("crash");
        start_playing(&mut engine, "kai");

        let scenario = engine.scenario_mut().unwrap();
        scenario.set_pipes(Vec::new());
        scenario.bird_mut().set_y(10_000.0);
        engine.update(FRAME_DT);

        assert_eq!(engine.state(), GameState::GameOver);
        let player = engine.players().find("kai").unwrap();
        assert_eq!(player.matches, 1);
        let summary = engine.game_over_screen().summary();
        assert_eq!(summary.score, 0);
        assert!(!summary.beat_personal);

        std::fs::remove_dir_all(scratch_path("engine-crash")).ok();
    }

    #[test]
    fn test_replay_goes_straight_to_playing() {
        let mut engine = engine("replay");
        start_playing(&mut engine, "kai");
        engine.scenario_mut().unwrap().bird_mut().set_y(10_000.0);
        engine.update(FRAME_DT);
        assert_eq!(engine.state(), GameState::GameOver);

        engine.handle_input(GameInput::Char('r'));
        assert_eq!(engine.state(), GameState::Playing);
        let scenario = engine.scenario().unwrap();
        assert_eq!(scenario.current_level(), 0);
        assert_eq!(scenario.score(), 0);

        std::fs::remove_dir_all(scratch_path("engine-replay")).ok();
    }

    #[test]
    fn test_level_transition_after_fifteen_points() {
        let mut engine = engine("levels");
        start_playing(&mut engine, "kai");

        let base_speed = engine.scenario().unwrap().pipe_speed();
        // Fifteen pipes already behind the bird, one scored per update
        {
            let scenario = engine.scenario_mut().unwrap();
            let gap_y = scenario.bird().hitbox().y + scenario.bird().hitbox().height / 2.0;
            let pipes = (0..15)
                .map(|i| Pipe::new(100.0 - i as f32 * 200.0, gap_y, 250.0, 1280.0, 720.0))
                .collect();
            scenario.set_pipes(pipes);
        }
        for _ in 0..5 {
            engine.scenario_mut().unwrap().bird_mut().set_velocity_y(-0.2);
            engine.update(FRAME_DT);
            if engine.in_level_transition() {
                break;
            }
        }
        assert!(engine.in_level_transition());
        assert_eq!(engine.scenario().unwrap().score(), 15);

        // The field is frozen during the fade
        let y = engine.scenario().unwrap().bird().y();
        engine.handle_input(GameInput::Char(' '));
        engine.update(FRAME_DT);
        assert_eq!(engine.scenario().unwrap().bird().y(), y);
        assert!(engine.fade_alpha() > 0.0);

        run(&mut engine, TRANSITION_DURATION);
        assert!(!engine.in_level_transition());
        let scenario = engine.scenario().unwrap();
        assert_eq!(scenario.current_level(), 1);
        assert_eq!(scenario.score(), 15);
        assert!((scenario.pipe_speed() - base_speed * 1.1).abs() < 0.001);
    }

    #[test]
    fn test_ranking_and_back() {
        let mut engine = engine("ranking");
        engine.handle_input(GameInput::Down);
        engine.handle_input(GameInput::Down);
        engine.handle_input(GameInput::Enter);
        assert_eq!(engine.state(), GameState::Ranking);
        assert_eq!(engine.ranking_view().footer, RankingFooter::NotPlayedYet);

        engine.handle_input(GameInput::Char('x'));
        assert_eq!(engine.state(), GameState::Menu);
    }

    #[test]
    fn test_ranking_finds_player_despite_trailing_space() {
        let mut engine = engine("ranking-space");
        start_playing(&mut engine, "kai");
        engine.scenario_mut().unwrap().bird_mut().set_y(10_000.0);
        engine.update(FRAME_DT);
        engine.handle_input(GameInput::Char('m'));
        assert_eq!(engine.state(), GameState::Menu);

        engine.handle_input(GameInput::Char(' '));
        engine.handle_input(GameInput::Down);
        engine.handle_input(GameInput::Down);
        engine.handle_input(GameInput::Enter);
        assert_eq!(engine.state(), GameState::Ranking);
        assert_eq!(engine.ranking_view().footer, RankingFooter::Position(1));

        std::fs::remove_dir_all(scratch_path("engine-ranking-space")).ok();
    }

    #[test]
    fn test_quit_waits_before_exiting() {
        let mut engine = engine("quit");
        engine.handle_input(GameInput::Up);
        engine.handle_input(GameInput::Enter);
        assert_eq!(engine.state(), GameState::Exiting);
        assert!(!engine.should_quit());

        run(&mut engine, EXIT_DELAY + 0.05);
        assert!(engine.should_quit());
    }

    #[test]
    fn test_interrupt_quits_immediately() {
        let mut engine = engine("interrupt");
        engine.handle_input(GameInput::Interrupt);
        assert!(engine.should_quit());
    }

    #[test]
    fn test_config_changes_resolution() {
        let path = scratch_path("engine-config/settings.json");
        let mut engine = engine("config").with_settings_path(&path);
        engine.handle_input(GameInput::Up);
        engine.handle_input(GameInput::Up);
        engine.handle_input(GameInput::Enter);
        assert_eq!(engine.state(), GameState::Config);

        engine.handle_input(GameInput::Down);
        engine.handle_input(GameInput::Enter);
        assert_eq!(engine.state(), GameState::Menu);
        assert_eq!(engine.resolution().width, 1600);
        assert_eq!(Settings::load(&path).resolution.width, 1600);

        type_nickname(&mut engine, "kai");
        engine.handle_input(GameInput::Tab);
        engine.handle_input(GameInput::Enter);
        assert_eq!(engine.scenario().unwrap().screen_size(), (1600.0, 900.0));

        std::fs::remove_dir_all(scratch_path("engine-config")).ok();
    }
}
