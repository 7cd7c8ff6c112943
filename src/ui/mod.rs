pub mod config_scene;
pub mod game_common;
pub mod game_over_scene;
pub mod game_scene;
pub mod menu_scene;
pub mod ranking_scene;
pub mod viewport;

use crate::engine::{Engine, GameState};
use crate::resolution::ResolutionSelector;
use rand::Rng;
use ratatui::Frame;
use viewport::Viewport;

/// Draw the current engine state.
pub fn draw<R: Rng>(frame: &mut Frame, engine: &Engine<R>) {
    let size = frame.size();
    if viewport::is_too_small(size) {
        viewport::render_too_small(frame);
        return;
    }

    let area = Viewport::for_resolution(size, &engine.resolution()).render_frame(frame);

    match engine.state() {
        GameState::Menu => menu_scene::render_menu(frame, area, engine.menu()),
        GameState::StartingGame | GameState::Playing => match engine.scenario() {
            Some(scenario) => game_scene::render_game(
                frame,
                area,
                scenario,
                engine.fade_alpha(),
                engine.in_level_transition(),
            ),
            None => menu_scene::render_menu(frame, area, engine.menu()),
        },
        GameState::GameOver => {
            game_over_scene::render_game_over(frame, area, engine.game_over_screen())
        }
        GameState::Ranking => ranking_scene::render_ranking(frame, area, &engine.ranking_view()),
        GameState::Config => {
            let config = engine.config_screen();
            config_scene::render_config(frame, area, config.selector(), &config.current())
        }
        GameState::Exiting => menu_scene::render_exiting(frame, area),
    }
}

/// Draw the startup resolution selector.
pub fn draw_resolution_selector(frame: &mut Frame, selector: &ResolutionSelector) {
    let size = frame.size();
    if viewport::is_too_small(size) {
        viewport::render_too_small(frame);
        return;
    }
    let viewport = Viewport {
        outer: size,
        bordered: true,
    };
    let area = viewport.render_frame(frame);
    config_scene::render_resolution_selector(frame, area, selector);
}
