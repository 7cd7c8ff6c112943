use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use traveling_dragon::constants::*;
use traveling_dragon::engine::Engine;
use traveling_dragon::input::map_key;
use traveling_dragon::player::PlayerManager;
use traveling_dragon::resolution::{ResolutionSelector, SelectorOutcome, NOT_SELECTED_MESSAGE};
use traveling_dragon::settings::{ResolutionConfig, Settings};
use traveling_dragon::ui;
use traveling_dragon::utils::logging::init_tracing;
use traveling_dragon::utils::persistence::{data_dir, legacy_save_file};

fn print_help() {
    println!("Traveling Dragon - terminal arcade game\n");
    println!("Usage: traveling-dragon [command]\n");
    println!("Commands:");
    println!("  ranking          Print the player ranking and exit");
    println!("  --skip-selector  Start with the saved resolution");
    println!("  --resolution WxH Start windowed at WxH, skipping the selector");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
    println!("\nData is kept in ~/{} (override with ${}).", DATA_DIR_NAME, DATA_DIR_ENV);
}

/// Player store in `dir`, importing an older `players.txt` from the data
/// directory or from `data/` beside the executable.
fn open_players(dir: &Path) -> traveling_dragon::Result<PlayerManager> {
    let mut players = PlayerManager::new(dir.join(PLAYERS_FILE));
    let beside_store = dir.join(LEGACY_PLAYERS_FILE);
    if !beside_store.exists() {
        if let Ok(path) = legacy_save_file() {
            players = players.with_legacy_path(Some(path));
        }
    }
    players.load_or_recover()?;
    Ok(players)
}

fn main() -> traveling_dragon::Result<()> {
    let mut skip_selector = false;
    let mut print_ranking = false;
    let mut forced_resolution: Option<ResolutionConfig> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("traveling-dragon {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--skip-selector" => skip_selector = true,
            "--resolution" => {
                let value = args.next().unwrap_or_default();
                match value.parse::<ResolutionConfig>() {
                    Ok(resolution) => forced_resolution = Some(resolution),
                    Err(e) => {
                        eprintln!("{}", e);
                        eprintln!("Expected a size like 1600x900.");
                        std::process::exit(1);
                    }
                }
            }
            "ranking" => print_ranking = true,
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'traveling-dragon --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let dir = data_dir()?;
    init_tracing(&dir)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let players = open_players(&dir)?;
    if print_ranking {
        players.print_ranking()?;
        return Ok(());
    }

    let settings_path = dir.join(SETTINGS_FILE);
    let mut settings = Settings::load(&settings_path);
    if let Some(resolution) = forced_resolution {
        settings.resolution = resolution;
        skip_selector = true;
        if let Err(e) = settings.save(&settings_path) {
            tracing::warn!(error = %e, "could not save settings");
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = (|| -> traveling_dragon::Result<bool> {
        if !skip_selector {
            match select_resolution(&mut terminal, &settings.resolution)? {
                Some(resolution) => settings.resolution = resolution,
                None => return Ok(false),
            }
            if let Err(e) = settings.save(&settings_path) {
                tracing::warn!(error = %e, "could not save settings");
            }
        }
        tracing::info!(resolution = %settings.resolution, "resolution chosen");

        let engine = Engine::new(players, settings, StdRng::from_entropy())
            .with_settings_path(&settings_path);
        run_game(&mut terminal, engine)?;
        Ok(true)
    })();

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result {
        Ok(true) => {
            tracing::info!("clean exit");
            Ok(())
        }
        Ok(false) => {
            tracing::info!("resolution not selected");
            eprintln!("{}", NOT_SELECTED_MESSAGE);
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "game aborted");
            Err(e)
        }
    }
}

/// Show the startup selector until a resolution is chosen or it is dismissed.
fn select_resolution<B: Backend>(
    terminal: &mut Terminal<B>,
    current: &ResolutionConfig,
) -> traveling_dragon::Result<Option<ResolutionConfig>> {
    let mut selector = ResolutionSelector::with_current(current);
    loop {
        terminal.draw(|f| ui::draw_resolution_selector(f, &selector))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                let Some(input) = map_key(key_event) else {
                    continue;
                };
                match selector.handle_input(input) {
                    Some(SelectorOutcome::Chosen(config)) => return Ok(Some(config)),
                    Some(SelectorOutcome::Cancelled) => return Ok(None),
                    None => {}
                }
            }
        }
    }
}

/// Fixed-timestep loop: input between steps, one draw per iteration.
fn run_game<B: Backend>(
    terminal: &mut Terminal<B>,
    mut engine: Engine<StdRng>,
) -> traveling_dragon::Result<()> {
    let step = Duration::from_secs_f32(FRAME_DT);
    let mut accumulator = Duration::ZERO;
    let mut last = Instant::now();

    while !engine.should_quit() {
        terminal.draw(|f| ui::draw(f, &engine))?;

        while event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(input) = map_key(key_event) {
                    engine.handle_input(input);
                }
            }
            if engine.should_quit() {
                return Ok(());
            }
        }

        let now = Instant::now();
        accumulator += now - last;
        last = now;

        let mut updates = 0;
        while accumulator >= step && updates < MAX_CATCH_UP_UPDATES {
            engine.update(FRAME_DT);
            accumulator -= step;
            updates += 1;
        }
        // Drop time we couldn't catch up on
        if updates == MAX_CATCH_UP_UPDATES {
            accumulator = Duration::ZERO;
        }
    }
    Ok(())
}
