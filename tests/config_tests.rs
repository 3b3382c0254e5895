//! 配置加载的集成测试

use std::fs;
use std::path::Path;

use shortly::config::AppConfig;
use tempfile::TempDir;

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("shortly.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_defaults_when_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "");

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.shortener.domain, "https://short.ly/");
    assert_eq!(config.shortener.code_length, 6);
    assert_eq!(
        config.collector.url,
        "http://20.244.56.144/evaluation-service/logs"
    );
    assert_eq!(config.collector.timeout_secs, 2);
    assert!(config.collector.enabled);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file.as_deref(), Some("shortly.log"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[shortener]
domain = "https://sho.rt/"

[collector]
enabled = false
"#,
    );

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.shortener.domain, "https://sho.rt/");
    // 未出现的键回落到默认值
    assert_eq!(config.shortener.code_length, 6);
    assert!(!config.collector.enabled);
    assert_eq!(config.collector.timeout_secs, 2);
}

#[test]
fn test_full_file_round_trips_all_sections() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[shortener]
domain = "https://s.example/"
code_length = 8

[collector]
url = "http://127.0.0.1:8080/logs"
timeout_secs = 5
enabled = true

[logging]
level = "debug"
file = "out/app.log"
format = "json"
enable_rotation = true
max_backups = 3
"#,
    );

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.shortener.domain, "https://s.example/");
    assert_eq!(config.shortener.code_length, 8);
    assert_eq!(config.collector.url, "http://127.0.0.1:8080/logs");
    assert_eq!(config.collector.timeout_secs, 5);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file.as_deref(), Some("out/app.log"));
    assert_eq!(config.logging.format, "json");
    assert!(config.logging.enable_rotation);
    assert_eq!(config.logging.max_backups, 3);
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "[shortener\ndomain = ");
    assert!(AppConfig::load_from(&path).is_err());
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    assert!(AppConfig::load_from(&dir.path().join("nope.toml")).is_err());
}

// 环境变量覆盖集中在一个测试里，避免并行测试间的 env 竞争
#[test]
fn test_env_overrides_file_values() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[shortener]
domain = "https://from-file/"
code_length = 4

[collector]
timeout_secs = 9
"#,
    );

    // SAFETY: 本进程的测试不会并发读取这些变量
    unsafe {
        std::env::set_var("SHORTLY_DOMAIN", "https://from-env/");
        std::env::set_var("SHORTLY_CODE_LENGTH", "not-a-number");
        std::env::set_var("COLLECTOR_ENABLED", "false");
        std::env::set_var("LOG_FILE", "");
    }

    let config = AppConfig::load_from(&path).unwrap();

    unsafe {
        std::env::remove_var("SHORTLY_DOMAIN");
        std::env::remove_var("SHORTLY_CODE_LENGTH");
        std::env::remove_var("COLLECTOR_ENABLED");
        std::env::remove_var("LOG_FILE");
    }

    assert_eq!(config.shortener.domain, "https://from-env/");
    // 非法的数值覆盖被忽略，保留文件值
    assert_eq!(config.shortener.code_length, 4);
    assert_eq!(config.collector.timeout_secs, 9);
    assert!(!config.collector.enabled);
    // 空字符串关闭文件日志
    assert_eq!(config.logging.file, None);
}
