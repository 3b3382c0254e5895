//! Terminal User Interface (TUI) module
//!
//! Provides the interactive terminal front-end: the shortener form,
//! the statistics screen, and screen-local popups.

use std::io;
use std::time::{Duration, Instant};

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

pub mod app;
pub mod constants;
mod event_handler;
mod input_handler;
mod ui;

use app::App;
use ui::ui;

/// 事件轮询间隔，空闲时也以这个节奏驱动 tick
const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Run the TUI application
pub async fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Main application loop
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()>
where
    io::Error: From<B::Error>,
{
    loop {
        // Render UI
        terminal.draw(|f| ui(f, app))?;

        // Handle events; poll with a timeout so timed messages clear
        // even while the user is idle
        if event::poll(TICK_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            let should_exit = event_handler::handle_key_event(app, key.code)?;

            if should_exit {
                return Ok(());
            }
        }

        app.tick(Instant::now());
    }
}
