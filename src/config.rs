//! 记录器配置
//!
//! 控制记录操作的 tracing 遥测：
//! - 是否在每次记录/清空时发送事件
//! - 宿主订阅端过滤指令使用的级别标签
//!
//! 配置可使用内置默认值，也可从 TOML 文件装载并验证。

use crate::error::{RecorderError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::{Validate, ValidationError};

/// 级别标签模式（与常见订阅端过滤指令保持一致）
static TRACE_LEVEL_REGEX: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"^(?i)(trace|debug|info|warn|error)$").unwrap());

/// 记录器配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RecorderConfig {
    /// 是否在记录/清空时发送 tracing 事件
    pub trace_enabled: bool,

    /// 过滤指令使用的级别标签
    #[validate(length(min = 1, max = 16, message = "Trace level must be 1-16 characters"))]
    #[validate(custom(function = "validate_trace_level"))]
    pub trace_level: String,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            trace_enabled: false,
            trace_level: "trace".to_string(),
        }
    }
}

impl RecorderConfig {
    /// 从 TOML 文件装载并验证配置
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RecorderError::ConfigNotFound(path.to_path_buf()));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .map_err(|e| RecorderError::config_format(e.to_string()))?;

        let loaded: Self = settings
            .try_deserialize()
            .map_err(|e| RecorderError::config_format(e.to_string()))?;

        loaded
            .validate()
            .map_err(|e| RecorderError::config_validation(e.to_string()))?;

        Ok(loaded)
    }

    /// 生成宿主订阅端的过滤指令（例如传给 EnvFilter）
    pub fn trace_filter(&self) -> String {
        format!("diag_recorder={}", self.trace_level.to_lowercase())
    }

    /// 以 TOML 文本导出配置（便于宿主生成样例配置文件）
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RecorderError::config_format(e.to_string()))
    }
}

/// 验证级别标签
fn validate_trace_level(level: &str) -> std::result::Result<(), ValidationError> {
    if !TRACE_LEVEL_REGEX.is_match(level) {
        return Err(ValidationError::new("invalid trace level"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RecorderConfig::default();
        assert!(!config.trace_enabled);
        assert_eq!(config.trace_level, "trace");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_trace_level_validation() {
        let mut config = RecorderConfig::default();

        for level in ["trace", "debug", "info", "warn", "error", "DEBUG"] {
            config.trace_level = level.to_string();
            assert!(config.validate().is_ok(), "level {} should be valid", level);
        }

        for level in ["", "verbose", "warning!", "trace level"] {
            config.trace_level = level.to_string();
            assert!(
                config.validate().is_err(),
                "level {:?} should be rejected",
                level
            );
        }
    }

    #[test]
    fn test_trace_filter_directive() {
        let config = RecorderConfig {
            trace_enabled: true,
            trace_level: "DEBUG".to_string(),
        };
        assert_eq!(config.trace_filter(), "diag_recorder=debug");
    }

    #[test]
    fn test_to_toml_keeps_field_names() {
        let config = RecorderConfig::default();
        let rendered = config.to_toml().expect("serialize default config");
        assert!(rendered.contains("trace_enabled"));
        assert!(rendered.contains("trace_level"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = RecorderConfig::load("/nonexistent/recorder.toml");
        assert!(matches!(
            result,
            Err(crate::error::RecorderError::ConfigNotFound(_))
        ));
    }
}
