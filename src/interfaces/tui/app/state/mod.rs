//! App state definition and basic state management
//!
//! 包含核心 App 结构和基础状态管理，以及拆分后的表单子状态

mod form_state;

pub use form_state::{EditingField, FormState};

use std::time::Instant;

use crate::collector::LogClient;
use crate::interfaces::tui::constants::SUCCESS_MESSAGE_TTL;
use crate::links::ShortenedUrl;

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Shortener,
    Statistics,
    Help,
    Exiting,
}

pub struct App {
    pub current_screen: CurrentScreen,

    // Shortener form state
    pub form: FormState,

    // Session-local results, never persisted
    pub results: Vec<ShortenedUrl>,
    pub selected_result: usize,

    // UI state
    pub status_message: String,
    pub error_message: String,
    /// 提交成功提示的过期时刻，tick 时清除
    pub message_deadline: Option<Instant>,

    // Shortener settings, read from config once at startup
    pub domain: String,
    pub code_length: usize,

    // Remote collector client
    pub collector: LogClient,
    pub collector_enabled: bool,
}

impl App {
    pub fn new() -> App {
        let config = crate::config::get_config();

        App {
            current_screen: CurrentScreen::Shortener,
            form: FormState::new(),
            results: Vec::new(),
            selected_result: 0,
            status_message: String::new(),
            error_message: String::new(),
            message_deadline: None,
            domain: config.shortener.domain.clone(),
            code_length: config.shortener.code_length,
            collector: crate::collector::global().clone(),
            collector_enabled: config.collector.enabled,
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
        self.message_deadline = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
        self.message_deadline = None;
    }

    /// 显示一条限时的成功提示，在 `now + 3s` 时由 tick 清除
    pub fn show_success(&mut self, message: String, now: Instant) {
        self.status_message = message;
        self.error_message.clear();
        self.message_deadline = Some(now + SUCCESS_MESSAGE_TTL);
    }

    /// 定时器 tick，到期的成功提示在这里被清掉
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.message_deadline
            && now >= deadline
        {
            self.status_message.clear();
            self.message_deadline = None;
        }
    }

    pub fn get_selected_result(&self) -> Option<&ShortenedUrl> {
        self.results.get(self.selected_result)
    }

    /// 向收集器发送一条 fire-and-forget 日志事件
    pub fn log_event(&self, level: &str, message: &str, extra: serde_json::Map<String, serde_json::Value>) {
        if self.collector_enabled {
            self.collector
                .submit_with(level, message, crate::collector::DEFAULT_PACKAGE, extra);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
