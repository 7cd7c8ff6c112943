//! Integration test: full matches through the engine
//!
//! Drives the engine with inputs and fixed steps the way the main loop does,
//! and checks what ends up on disk.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};
use traveling_dragon::constants::{FRAME_DT, TRANSITION_DURATION};
use traveling_dragon::engine::{Engine, GameState, RankingFooter};
use traveling_dragon::input::GameInput;
use traveling_dragon::player::PlayerManager;
use traveling_dragon::settings::Settings;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "traveling-dragon-it-{}-{}",
        name,
        std::process::id()
    ))
}

fn new_engine(dir: &Path, seed: u64) -> Engine<ChaCha8Rng> {
    let mut players = PlayerManager::new(dir.join("players.json"));
    players.load().unwrap();
    let settings = Settings::load(&dir.join("settings.json"));
    Engine::new(players, settings, ChaCha8Rng::seed_from_u64(seed))
        .with_settings_path(dir.join("settings.json"))
}

fn step(engine: &mut Engine<ChaCha8Rng>, seconds: f32) {
    let steps = (seconds / FRAME_DT).ceil() as usize;
    for _ in 0..steps {
        engine.update(FRAME_DT);
    }
}

/// Let the dragon fall until the match ends.
fn crash(engine: &mut Engine<ChaCha8Rng>) {
    for _ in 0..600 {
        if engine.state() == GameState::GameOver {
            return;
        }
        engine.update(FRAME_DT);
    }
    panic!("match never ended");
}

#[test]
fn test_free_fall_match_is_recorded_and_persisted() {
    let dir = temp_dir("free-fall");
    let mut engine = new_engine(&dir, 11);

    for c in "ember".chars() {
        engine.handle_input(GameInput::Char(c));
    }
    engine.handle_input(GameInput::Enter);
    assert_eq!(engine.state(), GameState::StartingGame);

    step(&mut engine, TRANSITION_DURATION + 0.1);
    assert_eq!(engine.state(), GameState::Playing);

    crash(&mut engine);
    let summary = *engine.game_over_screen().summary();
    assert_eq!(summary.score, 0);

    // A fresh store sees the match
    let mut reloaded = PlayerManager::new(dir.join("players.json"));
    reloaded.load().unwrap();
    let player = reloaded.find("ember").unwrap();
    assert_eq!(player.matches, 1);
    assert!(player.last_played.is_some());

    // The nickname is remembered for the next start
    assert_eq!(Settings::load(&dir.join("settings.json")).last_nickname, "ember");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_second_session_starts_with_saved_nickname() {
    let dir = temp_dir("second-session");
    {
        let mut engine = new_engine(&dir, 1);
        for c in "wyrm".chars() {
            engine.handle_input(GameInput::Char(c));
        }
        engine.handle_input(GameInput::Enter);
        step(&mut engine, TRANSITION_DURATION + 0.1);
        crash(&mut engine);
    }

    let mut engine = new_engine(&dir, 2);
    assert_eq!(engine.menu().nickname(), "wyrm");

    // Play straight away and crash twice more, using replay in between
    engine.handle_input(GameInput::Enter);
    step(&mut engine, TRANSITION_DURATION + 0.1);
    crash(&mut engine);
    engine.handle_input(GameInput::Char('r'));
    assert_eq!(engine.state(), GameState::Playing);
    crash(&mut engine);

    assert_eq!(engine.players().find("wyrm").unwrap().matches, 3);
    assert_eq!(engine.players().players().len(), 1);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_ranking_shows_position_after_playing() {
    let dir = temp_dir("ranking");
    let mut engine = new_engine(&dir, 5);

    for c in "scale".chars() {
        engine.handle_input(GameInput::Char(c));
    }
    engine.handle_input(GameInput::Enter);
    step(&mut engine, TRANSITION_DURATION + 0.1);
    crash(&mut engine);

    engine.handle_input(GameInput::Char('m'));
    assert_eq!(engine.state(), GameState::Menu);

    engine.handle_input(GameInput::Down);
    engine.handle_input(GameInput::Down);
    engine.handle_input(GameInput::Enter);
    assert_eq!(engine.state(), GameState::Ranking);

    let view = engine.ranking_view();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.footer, RankingFooter::Position(1));

    std::fs::remove_dir_all(&dir).ok();
}
