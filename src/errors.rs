use std::fmt;

#[derive(Debug, Clone)]
pub enum ShortlyError {
    Validation(String),
    Config(String),
    Clipboard(String),
    Browser(String),
    Collector(String),
    Terminal(String),
    Serialization(String),
}

impl ShortlyError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortlyError::Validation(_) => "E001",
            ShortlyError::Config(_) => "E002",
            ShortlyError::Clipboard(_) => "E003",
            ShortlyError::Browser(_) => "E004",
            ShortlyError::Collector(_) => "E005",
            ShortlyError::Terminal(_) => "E006",
            ShortlyError::Serialization(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortlyError::Validation(_) => "Validation Error",
            ShortlyError::Config(_) => "Configuration Error",
            ShortlyError::Clipboard(_) => "Clipboard Error",
            ShortlyError::Browser(_) => "Browser Error",
            ShortlyError::Collector(_) => "Collector Error",
            ShortlyError::Terminal(_) => "Terminal Error",
            ShortlyError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortlyError::Validation(msg) => msg,
            ShortlyError::Config(msg) => msg,
            ShortlyError::Clipboard(msg) => msg,
            ShortlyError::Browser(msg) => msg,
            ShortlyError::Collector(msg) => msg,
            ShortlyError::Terminal(msg) => msg,
            ShortlyError::Serialization(msg) => msg,
        }
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortlyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortlyError {}

// 便捷的构造函数
impl ShortlyError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Validation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Config(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Clipboard(msg.into())
    }

    pub fn browser<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Browser(msg.into())
    }

    pub fn collector<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Collector(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Terminal(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Serialization(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for ShortlyError {
    fn from(err: std::io::Error) -> Self {
        ShortlyError::Terminal(err.to_string())
    }
}

impl From<serde_json::Error> for ShortlyError {
    fn from(err: serde_json::Error) -> Self {
        ShortlyError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ShortlyError {
    fn from(err: toml::de::Error) -> Self {
        ShortlyError::Config(err.to_string())
    }
}

impl From<ureq::Error> for ShortlyError {
    fn from(err: ureq::Error) -> Self {
        ShortlyError::Collector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortlyError>;
