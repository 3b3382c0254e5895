//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

use std::time::Duration;

/// 表单最多同时存在的输入行数
pub const MAX_URL_ENTRIES: usize = 5;

/// 表单最少保留的输入行数
pub const MIN_URL_ENTRIES: usize = 1;

/// 提交成功提示的存活时间
pub const SUCCESS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// 提交成功提示文本
pub const SUCCESS_MESSAGE: &str = "URLs shortened successfully!";

/// URL 显示截断长度
pub const URL_TRUNCATE_LENGTH: usize = 50;

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(80, 80);
    /// 退出确认
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
}

/// 短链接状态文本（仅展示，不做任何强制）
pub mod status_text {
    /// 未过期
    pub const ACTIVE: &str = "ACTIVE";
    /// 已过期
    pub const EXPIRED: &str = "EXPIRED";
}
