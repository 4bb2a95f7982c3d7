#![allow(dead_code)]
pub mod builders;
pub mod log_capture;
pub mod mock_writer;

pub use builders::*;
pub use log_capture::CapturedLogs;
pub use mock_writer::{RecordingWriter, ScriptedEntropy, StaticAnswerHandler};
