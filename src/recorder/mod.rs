pub mod diagnostics_recorder;
pub mod handler;
pub mod shared;


pub use diagnostics_recorder::DiagnosticsRecorder;
pub use handler::{DiagnosticsLog, NoopDiagnosticsLog};
pub use shared::SharedDiagnosticsRecorder;
