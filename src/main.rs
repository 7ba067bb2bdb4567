//! tracklog - Terminal Workout Tracker
//!
//! Log outdoor workouts (running or cycling) at a location picked on a
//! map panel. Metrics are derived once at creation and the workout list
//! persists across sessions as a JSON snapshot.

use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use directories::ProjectDirs;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing_subscriber::EnvFilter;

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::App;
use domain::WorkoutStore;
use infrastructure::{EnvLocationProvider, JsonFileStorage};
use presentation::{render_ui, InputHandler};

/// Resolves where the workout snapshot lives: an explicit path from
/// the first CLI argument, else the platform data directory, else the
/// working directory.
fn snapshot_path() -> PathBuf {
    if let Some(arg) = std::env::args().nth(1) {
        return PathBuf::from(arg);
    }

    if let Some(dirs) = ProjectDirs::from("", "", "tracklog") {
        let dir = dirs.data_dir();
        if std::fs::create_dir_all(dir).is_ok() {
            return dir.join("workouts.json");
        }
    }

    PathBuf::from("workouts.json")
}

/// Entry point for the tracklog terminal workout tracker.
///
/// Initializes logging, wires the storage and location collaborators,
/// boots the application state (position acquisition plus snapshot
/// restore), and runs the main event loop until the user quits.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let path = snapshot_path();
    tracing::debug!(path = %path.display(), "using snapshot file");

    let store = WorkoutStore::new(Box::new(JsonFileStorage::new(&path)));
    let mut app = App::new(store);
    app.bootstrap(&EnvLocationProvider::new());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// One key event is processed to completion (including any persistence
/// write it triggers) before the next is read. Quits on 'q' in normal
/// mode.
///
/// # Arguments
///
/// * `terminal` - Terminal interface for rendering
/// * `app` - Mutable reference to application state
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q')
                        if matches!(app.mode, application::AppMode::Normal) =>
                    {
                        return Ok(())
                    }
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
