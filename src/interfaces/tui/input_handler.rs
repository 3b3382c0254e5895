//! Input handling utilities
//!
//! Provides unified input handling for the form's text fields

use super::app::App;

/// Handle text character input
pub fn handle_text_input(app: &mut App, c: char) {
    app.form.push_char(c);
}

/// Handle backspace input
pub fn handle_backspace(app: &mut App) {
    app.form.pop_char();
}

/// Handle tab key for field navigation
pub fn handle_tab_navigation(app: &mut App) {
    app.form.toggle_field();
}

/// Handle back-tab key for reverse field navigation
pub fn handle_back_tab_navigation(app: &mut App) {
    app.form.toggle_field_back();
}
