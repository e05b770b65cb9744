//! TUDASH - Terminal User Dashboard
//!
//! A terminal-based user management dashboard: a landing page, a searchable
//! user listing backed by a public endpoint, and a multi-step add-user form
//! with a simulated submission.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{App, View};
use infrastructure::UsersApi;
use presentation::{render_ui, InputHandler};

/// Poll timeout of the event loop; bounds how late a submit deadline fires.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Rows of chrome around the user table (title, search bar, table frame,
/// status bar), used to size the scrolling viewport.
const DASHBOARD_CHROME_ROWS: u16 = 10;

/// Entry point for the TUDASH terminal dashboard application.
///
/// Sets up logging and the terminal interface, initializes the application
/// state, and runs the main event loop until the user quits from the
/// landing view.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting tudash");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();
    let api = UsersApi::new();
    let res = run_app(&mut terminal, &mut app, &api);

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

/// Initializes file-based tracing.
///
/// Logs go to daily-rotated files under the user's config directory
/// (`<config_dir>/tudash/logs`, falling back to `./logs`). Output never
/// goes to stdout, which belongs to the terminal UI. The default `info`
/// filter can be overridden through the standard env-filter variable.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = dirs::config_dir()
        .map(|dir| dir.join("tudash").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: failed to create log directory: {e}");
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "tudash.log");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file_appender).with_ansi(false))
        .init();
}

/// Main application event loop.
///
/// Renders the current view, performs the pending users fetch between
/// frames so the loading state stays visible, dispatches keyboard input,
/// and advances the submit-phase deadlines on every pass. Quits when the
/// user presses 'q' on the landing view.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    api: &UsersApi,
) -> io::Result<()> {
    loop {
        let size = terminal.size()?;
        app.update_viewport_rows(size.height.saturating_sub(DASHBOARD_CHROME_ROWS) as usize);

        terminal.draw(|f| render_ui(f, app))?;

        // The loading frame above has rendered; now do the blocking call
        if app.fetch_pending() {
            let result = api.fetch_users();
            app.set_fetch_result(result);
            continue;
        }

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if matches!(app.view, View::Home) => return Ok(()),
                        _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                    }
                }
            }
        }

        app.tick(Instant::now());
    }
}
