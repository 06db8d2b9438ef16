pub mod diagnostic;

// 重新导出核心类型
pub use diagnostic::{DiagnosticEvent, DiagnosticsReport, DiagnosticsSummary, Severity};
