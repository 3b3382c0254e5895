//! Mock shorten operation
//!
//! 短码在客户端随机生成，不做唯一性检查，也不会在任何地方解析回原始 URL。

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::models::{ShortenedUrl, UrlEntry};
use crate::utils::generate_random_code;

/// 将一行输入变成一条（模拟）短链接记录
///
/// 自定义短码非空时直接使用，否则生成随机短码；
/// `short_url` 始终是 `domain + 实际使用的短码`。
pub fn shorten_entry(
    entry: &UrlEntry,
    domain: &str,
    code_length: usize,
    now: DateTime<Utc>,
) -> ShortenedUrl {
    let short_code = if entry.custom_code.is_empty() {
        generate_random_code(code_length)
    } else {
        entry.custom_code.clone()
    };

    ShortenedUrl {
        id: Uuid::new_v4(),
        original_url: entry.url.clone(),
        short_url: format!("{}{}", domain, short_code),
        short_code,
        created_at: now,
        expires_at: now + Duration::minutes(entry.validity_minutes()),
        click_count: 0,
        clicks: Vec::new(),
    }
}

/// 批量缩短，每行输入恰好产生一条记录
pub fn shorten_entries(entries: &[UrlEntry], domain: &str, code_length: usize) -> Vec<ShortenedUrl> {
    let now = Utc::now();
    entries
        .iter()
        .map(|entry| shorten_entry(entry, domain, code_length, now))
        .collect()
}
