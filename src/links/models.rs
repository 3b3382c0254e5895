use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 有效期默认值（分钟）
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// 表单中待缩短的一行输入
///
/// 只在编辑期间存在，提交后被消费并重置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub id: Uuid,
    pub url: String,
    /// 原始输入，按分钟解析；空或非法时回退到默认值
    pub validity: String,
    /// 可选的自定义短码，空串表示未填写
    pub custom_code: String,
}

impl UrlEntry {
    pub fn blank() -> Self {
        UrlEntry {
            id: Uuid::new_v4(),
            url: String::new(),
            validity: DEFAULT_VALIDITY_MINUTES.to_string(),
            custom_code: String::new(),
        }
    }

    /// 解析有效期输入，空或非法时回退到默认 30 分钟
    pub fn validity_minutes(&self) -> i64 {
        self.validity
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|m| *m > 0)
            .unwrap_or(DEFAULT_VALIDITY_MINUTES)
    }
}

impl Default for UrlEntry {
    fn default() -> Self {
        Self::blank()
    }
}

/// 单次点击记录
///
/// 类型存在且参与渲染，但没有任何代码路径会构造它 ——
/// 点击数据始终为空，open 操作也不会产生记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickRecord {
    pub timestamp: DateTime<Utc>,
    pub location: String,
}

/// 提交后生成的（模拟）短链接记录，仅存活于当前会话内存
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenedUrl {
    pub id: Uuid,
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: usize,
    pub clicks: Vec<ClickRecord>,
}

impl ShortenedUrl {
    /// 过期状态仅用于展示，不做任何强制
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}
