//! 共享诊断记录器
//!
//! 多线程宿主的互斥扩展：以读写锁保护同一个记录器，
//! 句柄可克隆，回读返回拥有所有权的快照。

use crate::config::RecorderConfig;
use crate::models::{DiagnosticsReport, DiagnosticsSummary};
use crate::recorder::diagnostics_recorder::DiagnosticsRecorder;
use crate::recorder::handler::DiagnosticsLog;
use parking_lot::RwLock;
use std::sync::Arc;

/// 共享诊断记录器
///
/// 克隆句柄共享同一份存储。借用回读无法越过锁保护，
/// 因此该类型不实现 [`DiagnosticsLog`]，而是以拥有所有权的
/// 快照镜像同一组操作。
#[derive(Debug, Clone, Default)]
pub struct SharedDiagnosticsRecorder {
    inner: Arc<RwLock<DiagnosticsRecorder>>,
}

impl SharedDiagnosticsRecorder {
    /// 创建空的共享记录器
    pub fn new() -> Self {
        Self::default()
    }

    /// 按配置创建空的共享记录器
    pub fn with_config(config: &RecorderConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(DiagnosticsRecorder::with_config(config))),
        }
    }

    /// 追加一条警告消息
    pub fn record_warning(&self, message: &str) {
        self.inner.write().record_warning(message);
    }

    /// 追加一条错误消息
    pub fn record_error(&self, message: &str) {
        self.inner.write().record_error(message);
    }

    /// 回读警告快照（按记录顺序）
    pub fn warnings(&self) -> Vec<String> {
        self.inner.read().warnings().to_vec()
    }

    /// 回读错误快照（按记录顺序）
    pub fn errors(&self) -> Vec<String> {
        self.inner.read().errors().to_vec()
    }

    /// 在单次读锁内生成两个列表相互一致的快照
    pub fn report(&self) -> DiagnosticsReport {
        self.inner.read().report()
    }

    /// 生成计数摘要
    pub fn summary(&self) -> DiagnosticsSummary {
        self.inner.read().summary()
    }

    /// 在单次写锁内清空两个序列，读取方不会观察到只清了一半的状态
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_handles_share_storage() {
        let recorder = SharedDiagnosticsRecorder::new();
        let other = recorder.clone();

        recorder.record_warning("from first handle");
        other.record_error("from second handle");

        assert_eq!(recorder.warnings(), ["from first handle"]);
        assert_eq!(recorder.errors(), ["from second handle"]);
    }

    #[test]
    fn test_clear_empties_both_atomically() {
        let recorder = SharedDiagnosticsRecorder::new();
        recorder.record_warning("w1");
        recorder.record_error("e1");

        recorder.clear();

        let report = recorder.report();
        assert!(report.is_clean());
    }

    #[test]
    fn test_concurrent_writers_keep_per_thread_order() {
        let recorder = SharedDiagnosticsRecorder::new();
        let mut handles = Vec::new();

        for worker in 0..4 {
            let recorder = recorder.clone();
            handles.push(thread::spawn(move || {
                for i in 0..50 {
                    recorder.record_warning(&format!("{}:{}", worker, i));
                }
            }));
        }
        for handle in handles {
            handle.join().expect("writer thread panicked");
        }

        let warnings = recorder.warnings();
        assert_eq!(warnings.len(), 200);

        // 每个线程自己的消息保持其记录顺序
        for worker in 0..4 {
            let prefix = format!("{}:", worker);
            let own: Vec<_> = warnings
                .iter()
                .filter(|m| m.starts_with(&prefix))
                .collect();
            for (i, message) in own.iter().enumerate() {
                assert_eq!(**message, format!("{}:{}", worker, i));
            }
        }
    }

    #[test]
    fn test_report_is_consistent_pair() {
        let recorder = SharedDiagnosticsRecorder::new();
        recorder.record_warning("w1");
        recorder.record_error("e1");

        let report = recorder.report();
        assert_eq!(report.warnings, ["w1"]);
        assert_eq!(report.errors, ["e1"]);
        assert_eq!(report.summary().total(), 2);
    }
}
