//! 日志载荷与允许值
//!
//! level 和 package 是固定允许列表，在边界处解析为枚举，
//! 未知值在任何网络调用之前就被拒绝。

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::ShortlyError;

/// Stack 标签，固定为 "frontend"，用于在远端区分客户端日志
pub const STACK_TAG: &str = "frontend";

/// 默认 package 标签
pub const DEFAULT_PACKAGE: &str = "component";

/// 日志级别允许列表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ShortlyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|level| level.as_str() == s)
            .copied()
            .ok_or_else(|| ShortlyError::validation(format!("Invalid log level: {}", s)))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 前端 package 标签允许列表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogPackage {
    Api,
    Component,
    Hook,
    Page,
    State,
    Style,
}

impl LogPackage {
    pub const ALL: [Self; 6] = [
        Self::Api,
        Self::Component,
        Self::Hook,
        Self::Page,
        Self::State,
        Self::Style,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Component => "component",
            Self::Hook => "hook",
            Self::Page => "page",
            Self::State => "state",
            Self::Style => "style",
        }
    }
}

impl FromStr for LogPackage {
    type Err = ShortlyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|pkg| pkg.as_str() == s)
            .copied()
            .ok_or_else(|| ShortlyError::validation(format!("Invalid frontend package: {}", s)))
    }
}

impl fmt::Display for LogPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 发送给远端收集器的 JSON 载荷，构造一次、发送一次、随即丢弃
#[derive(Debug, Clone, Serialize)]
pub struct LogPayload {
    pub stack: &'static str,
    pub level: LogLevel,
    pub package: LogPackage,
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LogPayload {
    /// 在字符串边界上构造载荷，未知 level/package 立即失败
    pub fn build(
        level: &str,
        message: &str,
        package: &str,
        extra: Map<String, Value>,
    ) -> crate::errors::Result<Self> {
        Ok(LogPayload {
            stack: STACK_TAG,
            level: level.parse()?,
            package: package.parse()?,
            message: message.to_string(),
            extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_round_trip() {
        for level in LogLevel::ALL {
            assert_eq!(level.as_str().parse::<LogLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_level_rejects_unknown() {
        let err = "bogus-level".parse::<LogLevel>().unwrap_err();
        assert!(err.message().contains("bogus-level"), "got: {}", err);
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_package_round_trip() {
        for pkg in LogPackage::ALL {
            assert_eq!(pkg.as_str().parse::<LogPackage>().unwrap(), pkg);
        }
    }

    #[test]
    fn test_package_rejects_unknown() {
        let err = "backend".parse::<LogPackage>().unwrap_err();
        assert!(err.message().contains("backend"), "got: {}", err);
    }

    #[test]
    fn test_payload_serializes_flat() {
        let mut extra = Map::new();
        extra.insert("extra".to_string(), serde_json::json!(1));

        let payload = LogPayload::build("info", "hello", "page", extra).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "stack": "frontend",
                "level": "info",
                "package": "page",
                "message": "hello",
                "extra": 1,
            })
        );
    }

    #[test]
    fn test_payload_build_rejects_bad_level() {
        let err = LogPayload::build("loud", "x", "component", Map::new()).unwrap_err();
        assert!(err.message().contains("Invalid log level"), "got: {}", err);
    }
}
