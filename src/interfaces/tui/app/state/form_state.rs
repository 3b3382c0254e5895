//! 表单状态管理
//!
//! 管理待缩短 URL 的多行输入（1 到 5 行）和按 字段+行号 键控的
//! 校验错误槽位。槽位可以设置、读取、独立清除，但目前没有任何
//! 校验规则会写入它们；编辑某个字段会清掉该字段所在行的槽位。

use std::collections::HashMap;

use crate::interfaces::tui::constants::{MAX_URL_ENTRIES, MIN_URL_ENTRIES};
use crate::links::UrlEntry;

/// 当前正在编辑的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingField {
    #[default]
    Url,
    Validity,
    CustomCode,
}

impl EditingField {
    /// 所有字段的顺序
    const ALL: [Self; 3] = [Self::Url, Self::Validity, Self::CustomCode];

    /// 切换到下一个字段
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// 切换到上一个字段
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }

    /// 获取字段名称（用于错误槽位的 key）
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Validity => "validity",
            Self::CustomCode => "custom_code",
        }
    }

    /// 获取字段显示标题
    pub fn display_title(&self) -> &'static str {
        match self {
            Self::Url => "Long URL",
            Self::Validity => "Validity (minutes)",
            Self::CustomCode => "Custom Code",
        }
    }
}

/// 表单状态
#[derive(Debug)]
pub struct FormState {
    /// 待缩短的输入行，始终保持 1..=5 行
    pub entries: Vec<UrlEntry>,
    /// 当前选中的行
    pub selected_entry: usize,
    /// 当前编辑的字段
    pub currently_editing: Option<EditingField>,
    /// 校验错误槽位 (field_name_index -> error_message)
    pub validation_errors: HashMap<String, String>,
}

impl FormState {
    /// 创建新的表单状态，初始为单个空白行
    pub fn new() -> Self {
        FormState {
            entries: vec![UrlEntry::blank()],
            selected_entry: 0,
            currently_editing: None,
            validation_errors: HashMap::new(),
        }
    }

    /// 追加一个空白行，已有 5 行时为 no-op，返回是否追加成功
    pub fn add_entry(&mut self) -> bool {
        if self.entries.len() >= MAX_URL_ENTRIES {
            return false;
        }
        self.entries.push(UrlEntry::blank());
        true
    }

    /// 按下标删除一行，只剩 1 行时为 no-op，返回是否删除成功
    pub fn remove_entry(&mut self, index: usize) -> bool {
        if self.entries.len() <= MIN_URL_ENTRIES || index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        for field in EditingField::ALL {
            self.clear_error(field, index);
        }
        if self.selected_entry >= self.entries.len() {
            self.selected_entry = self.entries.len() - 1;
        }
        true
    }

    /// 重置为单个空白行
    pub fn reset(&mut self) {
        self.entries = vec![UrlEntry::blank()];
        self.selected_entry = 0;
        self.currently_editing = None;
        self.validation_errors.clear();
    }

    /// 切换到下一个编辑字段
    pub fn toggle_field(&mut self) {
        self.currently_editing = Some(match &self.currently_editing {
            Some(field) => field.next(),
            None => EditingField::default(),
        });
    }

    /// 切换到上一个编辑字段
    pub fn toggle_field_back(&mut self) {
        self.currently_editing = Some(match &self.currently_editing {
            Some(field) => field.prev(),
            None => EditingField::default(),
        });
    }

    /// 获取当前编辑字段的输入引用
    pub fn current_input(&self) -> Option<&String> {
        let entry = self.entries.get(self.selected_entry)?;
        self.currently_editing.as_ref().map(|field| match field {
            EditingField::Url => &entry.url,
            EditingField::Validity => &entry.validity,
            EditingField::CustomCode => &entry.custom_code,
        })
    }

    /// 获取当前编辑字段的输入可变引用
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        let index = self.selected_entry;
        let entry = self.entries.get_mut(index)?;
        match self.currently_editing {
            Some(EditingField::Url) => Some(&mut entry.url),
            Some(EditingField::Validity) => Some(&mut entry.validity),
            Some(EditingField::CustomCode) => Some(&mut entry.custom_code),
            None => None,
        }
    }

    /// 向当前编辑字段添加字符，并清除该字段所在行的错误槽位
    pub fn push_char(&mut self, c: char) {
        if let Some(input) = self.current_input_mut() {
            input.push(c);
            self.clear_current_error();
        }
    }

    /// 从当前编辑字段删除最后一个字符，并清除该字段所在行的错误槽位
    pub fn pop_char(&mut self) {
        if let Some(input) = self.current_input_mut() {
            input.pop();
            self.clear_current_error();
        }
    }

    fn clear_current_error(&mut self) {
        if let Some(field) = self.currently_editing {
            self.clear_error(field, self.selected_entry);
        }
    }

    /// 错误槽位的 key： `<field>_<row>`
    pub fn error_key(field: EditingField, index: usize) -> String {
        format!("{}_{}", field.field_name(), index)
    }

    /// 获取指定行指定字段的错误
    pub fn get_error(&self, field: EditingField, index: usize) -> Option<&String> {
        self.validation_errors.get(&Self::error_key(field, index))
    }

    /// 设置错误槽位
    pub fn set_error(&mut self, field: EditingField, index: usize, error: String) {
        self.validation_errors
            .insert(Self::error_key(field, index), error);
    }

    /// 独立清除某个错误槽位
    pub fn clear_error(&mut self, field: EditingField, index: usize) {
        self.validation_errors.remove(&Self::error_key(field, index));
    }

    /// 清除所有错误槽位
    pub fn clear_errors(&mut self) {
        self.validation_errors.clear();
    }

    /// 检查是否有错误
    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
