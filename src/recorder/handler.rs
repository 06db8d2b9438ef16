//! 诊断记录能力抽象
//!
//! 宿主系统面向该 trait 编程而不依赖具体记录器，
//! 以便替换不同实现（例如丢弃一切的空实现）。

/// 诊断记录能力
///
/// 调用方约定：记录器本身不划分"会话"。宿主应在两次逻辑会话之间
/// 调用 [`clear`](DiagnosticsLog::clear)，否则上一会话的消息会与
/// 新会话的消息一同被回读。
pub trait DiagnosticsLog {
    /// 追加一条警告消息（内容不受限制，总是成功）
    fn record_warning(&mut self, message: &str);

    /// 追加一条错误消息（独立于警告序列，总是成功）
    fn record_error(&mut self, message: &str);

    /// 按记录顺序回读警告
    fn warnings(&self) -> &[String];

    /// 按记录顺序回读错误
    fn errors(&self) -> &[String];

    /// 清空两个序列；对空记录器是幂等的空操作
    fn clear(&mut self);
}

/// 丢弃一切的空实现
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnosticsLog;

impl DiagnosticsLog for NoopDiagnosticsLog {
    fn record_warning(&mut self, _message: &str) {}

    fn record_error(&mut self, _message: &str) {}

    fn warnings(&self) -> &[String] {
        &[]
    }

    fn errors(&self) -> &[String] {
        &[]
    }

    fn clear(&mut self) {}
}
