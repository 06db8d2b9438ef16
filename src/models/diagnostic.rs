//! 诊断消息模型
//!
//! 定义宿主处理过程中产生的诊断模型：
//! - 两类严重程度（警告/错误）
//! - 携带消息文本的诊断事件
//! - 只读快照与计数摘要

use serde::{Deserialize, Serialize};

/// 诊断严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// 警告（宿主可继续处理）
    Warning,
    /// 错误（宿主处理失败的标志）
    Error,
}

impl Severity {
    /// 检查是否为错误
    pub fn is_error(&self) -> bool {
        *self == Severity::Error
    }
}

/// 诊断事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    /// 严重程度
    pub severity: Severity,

    /// 消息文本（内容不受限制，允许为空）
    pub message: String,
}

impl DiagnosticEvent {
    /// 创建新的诊断事件
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// 创建警告事件
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// 创建错误事件
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }
}

/// 诊断快照
///
/// 两个列表都按记录顺序排列，与内部存储相互独立，
/// 修改快照不会影响记录器。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsReport {
    /// 警告列表（按记录排序）
    pub warnings: Vec<String>,

    /// 错误列表（按记录排序）
    pub errors: Vec<String>,
}

impl DiagnosticsReport {
    /// 检查是否有警告
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// 检查是否有错误
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 检查是否没有任何诊断消息
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }

    /// 生成摘要
    pub fn summary(&self) -> DiagnosticsSummary {
        DiagnosticsSummary {
            warning_count: self.warnings.len(),
            error_count: self.errors.len(),
        }
    }
}

/// 诊断摘要
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsSummary {
    pub warning_count: usize,
    pub error_count: usize,
}

impl DiagnosticsSummary {
    /// 获取消息总数
    pub fn total(&self) -> usize {
        self.warning_count + self.error_count
    }
}
