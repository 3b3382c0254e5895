// UI submodules
mod common;
mod exiting;
mod help;
mod shortener;
mod statistics;

// Re-export common utilities
pub use common::{centered_rect, draw_footer, draw_status_bar, draw_title_bar, truncate_url};

// Re-export screen drawing functions
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use shortener::draw_shortener_screen;
pub use statistics::draw_statistics_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    match app.current_screen {
        CurrentScreen::Shortener => draw_shortener_screen(frame, app, main_chunks[1]),
        CurrentScreen::Statistics => draw_statistics_screen(frame, app, main_chunks[1]),
        // Help 和退出确认以弹窗形式盖在表单屏幕上
        CurrentScreen::Help => {
            draw_shortener_screen(frame, app, main_chunks[1]);
            draw_help_screen(frame, app, frame.area());
        }
        CurrentScreen::Exiting => {
            draw_shortener_screen(frame, app, main_chunks[1]);
            draw_exiting_screen(frame, app, frame.area());
        }
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
