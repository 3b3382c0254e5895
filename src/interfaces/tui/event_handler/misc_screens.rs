//! Event handlers for the Statistics, Help and Exiting screens

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle statistics screen input
pub fn handle_statistics_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_result_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_result_down(),
        KeyCode::Esc | KeyCode::Char('1') | KeyCode::Char('s') | KeyCode::Char('S') => {
            app.current_screen = CurrentScreen::Shortener;
        }
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
    Ok(false)
}

/// Handle help screen input
pub fn handle_help_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Enter => {
            app.current_screen = CurrentScreen::Shortener;
        }
        _ => {}
    }
    Ok(false)
}

/// Handle exit confirmation screen input
pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Shortener;
        }
        _ => {}
    }
    Ok(false)
}
