//! 应用服务 - 回复管线
//!
//! TextGenerator -> ResponseOrchestrator

mod orchestrator;
mod text_generator;

pub use orchestrator::{AudioOutcome, ResponseOrchestrator};
pub use text_generator::{TextBackend, TextGenerator};
