use crossterm::ExecutableCommand;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::time::Duration;

use crate::config::{HexhelpConfig, TuiConfig};
use crate::tui::model::AppState;
use crate::tui::view::draw_ui;

pub mod key_bindings;
pub mod logger;
pub mod message;
pub mod model;
mod update;
pub mod view;

/// Run the interactive shell until the user quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or restored.
pub fn run_tui(config: &TuiConfig) -> Result<(), String> {
    if config.log
        && let Some(path) = HexhelpConfig::get_log_path()
    {
        logger::init_log(&path);
    }
    logger::logln(&format!(
        "starting interactive shell, initial value {}",
        config.initial_value
    ));

    // Terminal initialization
    enable_raw_mode().map_err(|e| format!("Failed to enable raw mode: {e}"))?;
    let mut stdout = io::stdout();
    stdout
        .execute(EnterAlternateScreen)
        .map_err(|e| format!("Failed to enter alternate screen: {e}"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Failed to create terminal: {e}"))?;

    let mut app = AppState::new(config.initial_value);
    let poll_interval = Duration::from_millis(config.poll_interval_ms);

    let result = run_app(&mut terminal, &mut app, poll_interval);

    // Clean up
    disable_raw_mode().map_err(|e| format!("Failed to disable raw mode: {e}"))?;
    terminal
        .backend_mut()
        .execute(LeaveAlternateScreen)
        .map_err(|e| format!("Failed to leave alternate screen: {e}"))?;
    terminal
        .show_cursor()
        .map_err(|e| format!("Failed to show cursor: {e}"))?;

    result
}

// Keystrokes are handled one at a time, so the report always matches the
// latest input.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    poll_interval: Duration,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| draw_ui(f, app))
            .map_err(|e| format!("Failed to draw: {e}"))?;

        if event::poll(poll_interval).map_err(|e| format!("Failed to poll events: {e}"))?
            && let Event::Key(key) =
                event::read().map_err(|e| format!("Failed to read event: {e}"))?
            && let Some(msg) = key_bindings::handle_key_event(key)
            && !app.update(msg)
        {
            logger::logln("quitting interactive shell");
            return Ok(());
        }
    }
}
