//! 应用层 - 命令（写操作）

mod chat_commands;

pub mod handlers;

pub use chat_commands::*;
