//! 诊断记录器核心库
//!
//! 为宿主系统（例如输入校验或计算流程）收集诊断消息：
//! - 按记录顺序保存警告与错误两个独立序列
//! - 只读回读、显式清空
//! - 可替换的记录能力抽象（宿主面向 trait 编程）
//! - 多线程宿主的互斥扩展

pub mod config;
pub mod error;
pub mod models;
pub mod recorder;
pub mod services;

// 重新导出核心类型
pub use config::RecorderConfig;
pub use error::{RecorderError, Result};
pub use models::{DiagnosticEvent, DiagnosticsReport, DiagnosticsSummary, Severity};
pub use recorder::{
    DiagnosticsLog, DiagnosticsRecorder, NoopDiagnosticsLog, SharedDiagnosticsRecorder,
};
pub use services::events::{partition_messages, record_events};
