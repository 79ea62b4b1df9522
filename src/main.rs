//! Tilewalk: a player square on an infinite checkerboard
//!
//! Arrow keys / WASD move the player. Holding the mouse on the button cross
//! in the lower-left corner pans the camera. Escape exits.
//!
//! Usage:
//!   tilewalk [settings.ron]
//!   tilewalk --write-settings <path>   # write the defaults and exit

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod game;
mod input;
mod ui;

use std::path::{Path, PathBuf};
use macroquad::prelude::*;
use tracing::{error, info, warn};
use config::{Settings, WindowSettings, DEFAULT_SETTINGS_FILE};
use game::{GameState, MacroquadSink, TickOutcome};
use input::InputState;

fn window_conf(window: &WindowSettings) -> Conf {
    Conf {
        window_title: format!("{} v{}", window.title, VERSION),
        window_width: window.width as i32,
        window_height: window.height as i32,
        // The logical screen size is fixed; layout and projection assume it
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load settings, falling back to defaults when the file is missing or bad
fn load_settings(path: &Path) -> Settings {
    match Settings::load(path) {
        Ok(settings) => {
            info!(path = %path.display(), "loaded settings");
            settings
        }
        Err(e) if e.is_not_found() => {
            info!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load settings, using defaults");
            Settings::default()
        }
    }
}

fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings_path = match args.as_slice() {
        [flag, path] if flag == "--write-settings" => {
            match Settings::default().save(path) {
                Ok(()) => info!(path = %path, "wrote default settings"),
                Err(e) => {
                    error!(path = %path, error = %e, "failed to write settings");
                    std::process::exit(1);
                }
            }
            return;
        }
        [path] => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_SETTINGS_FILE),
    };

    let settings = load_settings(&settings_path);
    let conf = window_conf(&settings.window);
    macroquad::Window::from_config(conf, run(settings));
}

async fn run(settings: Settings) {
    let tick_period = settings.tick_period();
    let input = InputState::new();
    let mut game = GameState::new(settings);
    let mut sink = MacroquadSink;

    let (w, h) = game.screen_size();
    info!(width = w, height = h, tick_period, "=== TILEWALK v{} ===", VERSION);

    loop {
        let frame_start = get_time();

        let snapshot = input.poll();
        if game.update(&snapshot) == TickOutcome::Terminate {
            break;
        }

        clear_background(BLACK);
        game.draw(&snapshot, &mut sink);

        pace_frame(frame_start, tick_period);
        next_frame().await;
    }
}

/// Hold the frame until one tick period has passed since `frame_start`
fn pace_frame(frame_start: f64, target_frame_time: f64) {
    let remaining = target_frame_time - (get_time() - frame_start);
    if remaining <= 0.0 {
        return;
    }

    // Native: use sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: the browser's animation frame already paces us
}
