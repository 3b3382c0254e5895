use shortly::errors::{Result, ShortlyError};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = ShortlyError::validation("URL 为空");

        assert!(matches!(error, ShortlyError::Validation(_)));
        assert_eq!(error.code(), "E001");
        assert!(error.to_string().contains("Validation Error"));
        assert!(error.to_string().contains("URL 为空"));
    }

    #[test]
    fn test_config_error() {
        let error = ShortlyError::config("配置文件损坏");

        assert!(matches!(error, ShortlyError::Config(_)));
        assert_eq!(error.code(), "E002");
        assert!(error.to_string().contains("Configuration Error"));
    }

    #[test]
    fn test_clipboard_error() {
        let error = ShortlyError::clipboard("剪贴板不可用");

        assert!(matches!(error, ShortlyError::Clipboard(_)));
        assert_eq!(error.code(), "E003");
        assert_eq!(error.message(), "剪贴板不可用");
    }

    #[test]
    fn test_browser_error() {
        let error = ShortlyError::browser("无法打开浏览器");

        assert!(matches!(error, ShortlyError::Browser(_)));
        assert_eq!(error.code(), "E004");
    }

    #[test]
    fn test_collector_error() {
        let error = ShortlyError::collector("收集器超时");

        assert!(matches!(error, ShortlyError::Collector(_)));
        assert_eq!(error.code(), "E005");
        assert!(error.format_simple().contains("Collector Error"));
    }

    #[test]
    fn test_terminal_error() {
        let error = ShortlyError::terminal("终端初始化失败");

        assert!(matches!(error, ShortlyError::Terminal(_)));
        assert_eq!(error.code(), "E006");
    }

    #[test]
    fn test_serialization_error() {
        let error = ShortlyError::serialization("序列化失败");

        assert!(matches!(error, ShortlyError::Serialization(_)));
        assert_eq!(error.code(), "E007");
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "设备不存在");
        let shortly_error: ShortlyError = io_error.into();

        assert!(matches!(shortly_error, ShortlyError::Terminal(_)));
        assert!(shortly_error.to_string().contains("设备不存在"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        // 创建一个无效的 JSON 来触发错误
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid json").unwrap_err();
        let shortly_error: ShortlyError = json_error.into();

        assert!(matches!(shortly_error, ShortlyError::Serialization(_)));
        assert!(shortly_error.to_string().contains("Serialization Error"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("key = ").unwrap_err();
        let shortly_error: ShortlyError = toml_error.into();

        assert!(matches!(shortly_error, ShortlyError::Config(_)));
        assert!(shortly_error.to_string().contains("Configuration Error"));
    }
}

#[cfg(test)]
mod error_trait_tests {
    use super::*;

    #[test]
    fn test_error_trait_implementation() {
        let error = ShortlyError::validation("测试错误");

        let error_trait: &dyn Error = &error;
        assert!(!error_trait.to_string().is_empty());
        assert!(error_trait.source().is_none());
    }

    #[test]
    fn test_debug_implementation() {
        let error = ShortlyError::collector("调试测试");
        let debug_string = format!("{:?}", error);

        assert!(debug_string.contains("Collector"));
        assert!(debug_string.contains("调试测试"));
    }

    #[test]
    fn test_clone_implementation() {
        let original = ShortlyError::clipboard("克隆测试");
        let cloned = original.clone();

        assert_eq!(original.to_string(), cloned.to_string());
        assert!(matches!(cloned, ShortlyError::Clipboard(_)));
    }

    #[test]
    fn test_send_sync_traits() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<ShortlyError>();
        assert_sync::<ShortlyError>();
    }
}

#[cfg(test)]
mod result_type_tests {
    use super::*;

    #[test]
    fn test_result_ok() {
        let result: Result<String> = Ok("成功".to_string());
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "成功");
    }

    #[test]
    fn test_result_err() {
        let result: Result<String> = Err(ShortlyError::validation("失败"));
        assert!(result.is_err());

        let error = result.unwrap_err();
        assert!(matches!(error, ShortlyError::Validation(_)));
    }

    #[test]
    fn test_result_propagation() {
        fn operation_that_fails() -> Result<String> {
            Err(ShortlyError::collector("底层错误"))
        }

        fn higher_level_operation() -> Result<String> {
            operation_that_fails()
                .map_err(|e| ShortlyError::validation(format!("高层错误: {}", e)))
        }

        let error = higher_level_operation().unwrap_err();
        assert!(matches!(error, ShortlyError::Validation(_)));
        assert!(error.to_string().contains("高层错误"));
        assert!(error.to_string().contains("Collector Error"));
    }
}

#[cfg(test)]
mod error_message_tests {
    use super::*;

    #[test]
    fn test_error_message_format() {
        let test_cases = vec![
            (
                ShortlyError::validation("格式错误"),
                "Validation Error: 格式错误",
            ),
            (
                ShortlyError::config("缺少字段"),
                "Configuration Error: 缺少字段",
            ),
            (
                ShortlyError::collector("连接超时"),
                "Collector Error: 连接超时",
            ),
            (
                ShortlyError::terminal("读取失败"),
                "Terminal Error: 读取失败",
            ),
        ];

        for (error, expected_message) in test_cases {
            assert_eq!(error.to_string(), expected_message);
        }
    }

    #[test]
    fn test_empty_error_message() {
        let error = ShortlyError::validation("");
        assert!(error.to_string().contains("Validation Error"));
    }

    #[test]
    fn test_unicode_error_message() {
        let unicode_message = "错误信息包含中文和emoji 🚫";
        let error = ShortlyError::validation(unicode_message);

        assert!(error.to_string().contains(unicode_message));
    }
}
