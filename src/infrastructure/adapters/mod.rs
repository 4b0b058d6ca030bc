//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod download;
pub mod llm;
pub mod storage;
pub mod tts;

#[cfg(test)]
pub(crate) mod test_support;

pub use download::*;
pub use llm::*;
pub use storage::*;
pub use tts::*;
