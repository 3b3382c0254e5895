//! Event handler for the shortener form screen
//!
//! 未进入编辑状态时按键是命令；进入编辑状态后所有可打印字符
//! 都进入当前字段，Esc 退出编辑。

use std::time::Instant;

use ratatui::crossterm::event::KeyCode;
use serde_json::Map;

use crate::interfaces::tui::app::{App, CurrentScreen, EditingField};
use crate::interfaces::tui::input_handler::{
    handle_back_tab_navigation, handle_backspace, handle_tab_navigation, handle_text_input,
};

/// Handle shortener screen input
pub fn handle_shortener_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    if app.form.currently_editing.is_some() {
        match key_code {
            KeyCode::Esc => app.form.currently_editing = None,
            KeyCode::Tab => handle_tab_navigation(app),
            KeyCode::BackTab => handle_back_tab_navigation(app),
            KeyCode::Up => app.move_entry_up(),
            KeyCode::Down => app.move_entry_down(),
            KeyCode::Enter => {
                app.shorten_all(Instant::now());
            }
            KeyCode::Backspace => handle_backspace(app),
            KeyCode::Char(c) => handle_text_input(app, c),
            _ => {}
        }
        return Ok(false);
    }

    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_entry_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_entry_down(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.add_entry_row(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.remove_selected_row(),
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => {
            app.form.currently_editing = Some(EditingField::Url);
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.shorten_all(Instant::now());
        }
        // Result list selection
        KeyCode::Char('[') => app.move_result_up(),
        KeyCode::Char(']') => app.move_result_down(),
        // Copy selected short URL to clipboard
        KeyCode::Char('y') | KeyCode::Char('Y') => copy_selected(app),
        // Open selected short URL in the browser (mock, never resolves)
        KeyCode::Char('o') | KeyCode::Char('O') => open_selected(app),
        KeyCode::Char('2') | KeyCode::Char('t') | KeyCode::Char('T') => {
            app.current_screen = CurrentScreen::Statistics;
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

fn copy_selected(app: &mut App) {
    if let Some(link) = app.get_selected_result()
        && let Ok(mut clipboard) = arboard::Clipboard::new()
    {
        let url = link.short_url.clone();
        if clipboard.set_text(&url).is_ok() {
            app.set_status(format!("Copied: {}", url));
            app.log_event("debug", "Short URL copied", Map::new());
        }
    }
}

fn open_selected(app: &mut App) {
    if let Some(link) = app.get_selected_result() {
        let url = link.short_url.clone();
        match open::that(&url) {
            Ok(()) => {
                app.set_status(format!("Opened {} (mock URL, does not resolve)", url));
                app.log_event("debug", "Short URL opened", Map::new());
            }
            Err(e) => app.set_error(format!("Failed to open browser: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chars_are_commands_when_not_editing() {
        let mut app = App::new();
        handle_shortener_screen(&mut app, KeyCode::Char('a')).unwrap();
        assert_eq!(app.form.entries.len(), 2);
        assert!(app.form.entries[0].url.is_empty());
    }

    #[test]
    fn test_chars_go_to_field_when_editing() {
        let mut app = App::new();
        handle_shortener_screen(&mut app, KeyCode::Enter).unwrap();
        assert_eq!(app.form.currently_editing, Some(EditingField::Url));

        handle_shortener_screen(&mut app, KeyCode::Char('a')).unwrap();
        assert_eq!(app.form.entries[0].url, "a");
        assert_eq!(app.form.entries.len(), 1);
    }

    #[test]
    fn test_enter_submits_while_editing() {
        let mut app = App::new();
        handle_shortener_screen(&mut app, KeyCode::Enter).unwrap();
        for c in "https://example.com".chars() {
            handle_shortener_screen(&mut app, KeyCode::Char(c)).unwrap();
        }

        handle_shortener_screen(&mut app, KeyCode::Enter).unwrap();

        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].original_url, "https://example.com");
        assert!(app.form.currently_editing.is_none());
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut app = App::new();
        handle_shortener_screen(&mut app, KeyCode::Enter).unwrap();
        handle_shortener_screen(&mut app, KeyCode::Tab).unwrap();
        assert_eq!(app.form.currently_editing, Some(EditingField::Validity));
        handle_shortener_screen(&mut app, KeyCode::Tab).unwrap();
        assert_eq!(app.form.currently_editing, Some(EditingField::CustomCode));
        handle_shortener_screen(&mut app, KeyCode::BackTab).unwrap();
        assert_eq!(app.form.currently_editing, Some(EditingField::Validity));
    }

    #[test]
    fn test_q_requests_exit_confirmation() {
        let mut app = App::new();
        let should_exit = handle_shortener_screen(&mut app, KeyCode::Char('q')).unwrap();
        assert!(!should_exit);
        assert_eq!(app.current_screen, CurrentScreen::Exiting);
    }
}
