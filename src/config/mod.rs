//! Configuration management
//!
//! TOML 文件 + 环境变量覆盖，启动时加载一次，存入 OnceLock。

use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::errors::Result;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 初始化全局配置，应在启动早期调用一次
pub fn init_config(config: AppConfig) {
    let _ = CONFIG.set(config);
}

/// 获取全局配置，未初始化时按默认路径加载
pub fn get_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::load)
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub shortener: ShortenerConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 短链接展示配置，域名前缀只是装饰，从不解析
#[derive(Debug, Clone, Deserialize)]
pub struct ShortenerConfig {
    #[serde(default = "default_domain")]
    pub domain: String,
    #[serde(default = "default_code_length")]
    pub code_length: usize,
}

/// 远端日志收集器配置
#[derive(Debug, Clone, Deserialize)]
pub struct CollectorConfig {
    #[serde(default = "default_collector_url")]
    pub url: String,
    #[serde(default = "default_collector_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// 本地 tracing 日志配置
///
/// TUI 占用了终端，默认写入文件而不是 stdout。
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub enable_rotation: bool,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
}

fn default_domain() -> String {
    "https://short.ly/".to_string()
}

fn default_code_length() -> usize {
    6
}

fn default_collector_url() -> String {
    "http://20.244.56.144/evaluation-service/logs".to_string()
}

fn default_collector_timeout() -> u64 {
    2
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> Option<String> {
    Some("shortly.log".to_string())
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_max_backups() -> u32 {
    7
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        ShortenerConfig {
            domain: default_domain(),
            code_length: default_code_length(),
        }
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        CollectorConfig {
            url: default_collector_url(),
            timeout_secs: default_collector_timeout(),
            enabled: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            file: default_log_file(),
            format: default_log_format(),
            enable_rotation: false,
            max_backups: default_max_backups(),
        }
    }
}

impl AppConfig {
    /// 按默认搜索路径加载，再用环境变量覆盖
    pub fn load() -> Self {
        let mut config = Self::load_from_search_path();
        config.override_with_env();
        config
    }

    /// 从指定文件加载（`--config` 路径），再用环境变量覆盖
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.override_with_env();
        Ok(config)
    }

    fn load_from_search_path() -> Self {
        let config_paths = ["config.toml", "shortly.toml", "config/shortly.toml"];

        for path in &config_paths {
            if Path::new(path).exists() {
                debug!("Loading config from: {}", path);
                match fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<AppConfig>(&content) {
                        Ok(config) => return config,
                        Err(e) => {
                            warn!("Failed to parse config file {}: {}", path, e);
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file {}: {}", path, e);
                    }
                }
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    /// 环境变量覆盖文件配置
    fn override_with_env(&mut self) {
        if let Ok(domain) = env::var("SHORTLY_DOMAIN") {
            self.shortener.domain = domain;
        }
        if let Ok(length) = env::var("SHORTLY_CODE_LENGTH") {
            if let Ok(length) = length.parse() {
                self.shortener.code_length = length;
            } else {
                error!("Invalid SHORTLY_CODE_LENGTH: {}", length);
            }
        }

        if let Ok(url) = env::var("COLLECTOR_URL") {
            self.collector.url = url;
        }
        if let Ok(timeout) = env::var("COLLECTOR_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.collector.timeout_secs = t;
            } else {
                error!("Invalid COLLECTOR_TIMEOUT: {}", timeout);
            }
        }
        if let Ok(enabled) = env::var("COLLECTOR_ENABLED") {
            if let Ok(e) = enabled.parse() {
                self.collector.enabled = e;
            } else {
                error!("Invalid COLLECTOR_ENABLED: {}", enabled);
            }
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(file) = env::var("LOG_FILE") {
            self.logging.file = if file.is_empty() { None } else { Some(file) };
        }
        if let Ok(format) = env::var("LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}
