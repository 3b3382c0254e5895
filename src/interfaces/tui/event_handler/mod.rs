//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - shortener_screen: the form + results screen
//! - misc_screens: Statistics, Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

mod misc_screens;
mod shortener_screen;

use misc_screens::*;
use shortener_screen::*;

/// Handle keyboard input based on current screen
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match app.current_screen {
        CurrentScreen::Shortener => handle_shortener_screen(app, key_code),
        CurrentScreen::Statistics => handle_statistics_screen(app, key_code),
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}
