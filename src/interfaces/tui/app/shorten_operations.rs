//! Shorten form operations

use std::time::Instant;

use serde_json::{Map, json};

use super::state::App;
use crate::interfaces::tui::constants::{MAX_URL_ENTRIES, MIN_URL_ENTRIES, SUCCESS_MESSAGE};
use crate::links::shorten_entries;

impl App {
    /// 提交表单：每行输入生成一条记录，表单重置为单个空白行，
    /// 并显示限时 3 秒的成功提示
    pub fn shorten_all(&mut self, now: Instant) -> usize {
        let newly = shorten_entries(&self.form.entries, &self.domain, self.code_length);
        let count = newly.len();

        self.results.extend(newly);
        self.form.reset();
        self.show_success(SUCCESS_MESSAGE.to_string(), now);

        let mut extra = Map::new();
        extra.insert("count".to_string(), json!(count));
        self.log_event("info", "URLs shortened", extra);

        count
    }

    /// 追加一个空白行，已到上限时只提示不追加
    pub fn add_entry_row(&mut self) {
        if self.form.add_entry() {
            self.set_status(format!(
                "Added entry {}/{}",
                self.form.entries.len(),
                MAX_URL_ENTRIES
            ));
        } else {
            self.set_status(format!("Entry limit reached ({})", MAX_URL_ENTRIES));
        }
    }

    /// 删除当前选中的行，只剩一行时只提示不删除
    pub fn remove_selected_row(&mut self) {
        let index = self.form.selected_entry;
        if self.form.remove_entry(index) {
            self.set_status(format!("Removed entry {}", index + 1));
        } else {
            self.set_status(format!("At least {} entry required", MIN_URL_ENTRIES));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::tui::app::EditingField;

    #[test]
    fn test_shorten_all_appends_one_record_per_entry() {
        let mut app = App::new();
        app.form.add_entry();
        app.form.add_entry();
        app.form.entries[0].url = "https://a.example".to_string();
        app.form.entries[1].url = "https://b.example".to_string();
        app.form.entries[2].url = "https://c.example".to_string();

        let count = app.shorten_all(Instant::now());

        assert_eq!(count, 3);
        assert_eq!(app.results.len(), 3);
        assert_eq!(app.results[0].original_url, "https://a.example");
    }

    #[test]
    fn test_shorten_all_resets_form_to_single_blank_entry() {
        let mut app = App::new();
        app.form.add_entry();
        app.form.currently_editing = Some(EditingField::Url);
        app.form.push_char('x');

        app.shorten_all(Instant::now());

        assert_eq!(app.form.entries.len(), 1);
        assert!(app.form.entries[0].url.is_empty());
        assert!(app.form.currently_editing.is_none());
    }

    #[test]
    fn test_shorten_all_shows_success_message() {
        let mut app = App::new();
        let now = Instant::now();

        app.shorten_all(now);

        assert_eq!(app.status_message, SUCCESS_MESSAGE);
        assert!(app.message_deadline.is_some());
    }

    #[test]
    fn test_shorten_all_accumulates_across_submits() {
        let mut app = App::new();
        app.shorten_all(Instant::now());
        app.form.add_entry();
        app.shorten_all(Instant::now());
        assert_eq!(app.results.len(), 3);
    }

    #[test]
    fn test_shorten_uses_custom_code_and_domain() {
        let mut app = App::new();
        app.domain = "https://short.ly/".to_string();
        app.form.entries[0].custom_code = "mine".to_string();

        app.shorten_all(Instant::now());

        assert_eq!(app.results[0].short_code, "mine");
        assert_eq!(app.results[0].short_url, "https://short.ly/mine");
    }

    #[test]
    fn test_add_and_remove_row_messages() {
        let mut app = App::new();
        app.remove_selected_row();
        assert!(app.status_message.contains("At least"), "got: {}", app.status_message);

        app.add_entry_row();
        assert_eq!(app.form.entries.len(), 2);

        for _ in 0..5 {
            app.add_entry_row();
        }
        assert_eq!(app.form.entries.len(), MAX_URL_ENTRIES);
        assert!(app.status_message.contains("limit"), "got: {}", app.status_message);
    }
}
