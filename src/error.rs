use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/**
 * 记录器错误类型 - 使用 miette 提供用户友好的错误诊断
 *
 * 仅配置装载层会产生错误；记录/回读/清空操作是全函数，
 * 不经过该类型
 */
#[derive(Error, Debug, Diagnostic)]
pub enum RecorderError {
    #[error("Config file not found: {0}")]
    #[diagnostic(
        code(recorder::config_not_found),
        help("Check that the config path exists and is readable")
    )]
    ConfigNotFound(PathBuf),

    #[error("Config format error: {0}")]
    #[diagnostic(
        code(recorder::config_format),
        help("The config file must be valid TOML matching the recorder schema")
    )]
    ConfigFormat(String),

    #[error("Config validation error: {0}")]
    #[diagnostic(
        code(recorder::config_validation),
        help("Check the trace level label against the supported set")
    )]
    ConfigValidation(String),
}

impl RecorderError {
    /**
     * 创建格式错误
     */
    pub fn config_format(message: impl Into<String>) -> Self {
        RecorderError::ConfigFormat(message.into())
    }

    /**
     * 创建验证错误
     */
    pub fn config_validation(message: impl Into<String>) -> Self {
        RecorderError::ConfigValidation(message.into())
    }
}

/**
 * 统一结果类型
 */
pub type Result<T> = std::result::Result<T, RecorderError>;
