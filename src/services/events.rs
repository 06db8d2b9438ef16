//! 诊断事件分流
//!
//! 宿主的校验或计算步骤通常一次产出一批带严重程度的事件。
//! 这里把事件批量分流为两个有序消息序列，或路由进任意
//! 记录能力实现。

use crate::models::{DiagnosticEvent, Severity};
use crate::recorder::handler::DiagnosticsLog;

/// 将事件切分为（警告, 错误）两个有序序列
///
/// 各序列保持事件在输入中的相对顺序；不丢弃任何事件。
pub fn partition_messages(events: &[DiagnosticEvent]) -> (Vec<String>, Vec<String>) {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    for event in events {
        match event.severity {
            Severity::Warning => warnings.push(event.message.clone()),
            Severity::Error => errors.push(event.message.clone()),
        }
    }

    (warnings, errors)
}

/// 将事件批量路由进记录能力实现
pub fn record_events(log: &mut dyn DiagnosticsLog, events: &[DiagnosticEvent]) {
    for event in events {
        match event.severity {
            Severity::Warning => log.record_warning(&event.message),
            Severity::Error => log.record_error(&event.message),
        }
    }
}
