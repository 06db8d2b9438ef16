//! 诊断记录器
//!
//! 收集宿主处理过程中的警告与错误：
//! - 两个独立的有序序列
//! - 借用回读、显式清空
//! - 可选的 tracing 操作遥测

use crate::config::RecorderConfig;
use crate::models::{DiagnosticsReport, DiagnosticsSummary};
use crate::recorder::handler::DiagnosticsLog;
use tracing::trace;

/// 诊断记录器
///
/// 设计为单一逻辑调用方独占使用，所有操作都是即时完成的内存追加
/// 或读取。多线程宿主请使用
/// [`SharedDiagnosticsRecorder`](crate::recorder::SharedDiagnosticsRecorder)。
///
/// 不限制保存的消息数量；长时间运行的宿主负责自己的清空节奏。
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsRecorder {
    /// 警告列表（按记录排序）
    warnings: Vec<String>,

    /// 错误列表（按记录排序）
    errors: Vec<String>,

    /// 是否发送 tracing 事件
    trace_enabled: bool,
}

impl DiagnosticsRecorder {
    /// 创建空的记录器
    pub fn new() -> Self {
        Self::default()
    }

    /// 按配置创建空的记录器
    pub fn with_config(config: &RecorderConfig) -> Self {
        Self {
            warnings: Vec::new(),
            errors: Vec::new(),
            trace_enabled: config.trace_enabled,
        }
    }

    /// 检查是否有警告
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// 检查是否有错误
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 生成只读快照（两个列表的独立副本）
    pub fn report(&self) -> DiagnosticsReport {
        DiagnosticsReport {
            warnings: self.warnings.clone(),
            errors: self.errors.clone(),
        }
    }

    /// 生成计数摘要
    pub fn summary(&self) -> DiagnosticsSummary {
        DiagnosticsSummary {
            warning_count: self.warnings.len(),
            error_count: self.errors.len(),
        }
    }
}

impl DiagnosticsLog for DiagnosticsRecorder {
    fn record_warning(&mut self, message: &str) {
        if self.trace_enabled {
            trace!(severity = "warning", text = %message, "diagnostic recorded");
        }
        self.warnings.push(message.to_string());
    }

    fn record_error(&mut self, message: &str) {
        if self.trace_enabled {
            trace!(severity = "error", text = %message, "diagnostic recorded");
        }
        self.errors.push(message.to_string());
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }

    fn clear(&mut self) {
        if self.trace_enabled {
            trace!(
                warnings = self.warnings.len(),
                errors = self.errors.len(),
                "diagnostics cleared"
            );
        }
        self.warnings.clear();
        self.errors.clear();
    }
}
