//! 应用层 - 查询（读操作）

mod audio_queries;
mod status_queries;

pub mod handlers;

pub use audio_queries::*;
pub use status_queries::*;
