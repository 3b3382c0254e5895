//! Navigation and selection logic

use super::state::App;

impl App {
    /// 表单行向上移动选择
    pub fn move_entry_up(&mut self) {
        if self.form.selected_entry > 0 {
            self.form.selected_entry -= 1;
        }
    }

    /// 表单行向下移动选择
    pub fn move_entry_down(&mut self) {
        if self.form.selected_entry < self.form.entries.len().saturating_sub(1) {
            self.form.selected_entry += 1;
        }
    }

    /// 结果列表向上移动选择
    pub fn move_result_up(&mut self) {
        if self.selected_result > 0 {
            self.selected_result -= 1;
        }
    }

    /// 结果列表向下移动选择
    pub fn move_result_down(&mut self) {
        if self.selected_result < self.results.len().saturating_sub(1) {
            self.selected_result += 1;
        }
    }
}
