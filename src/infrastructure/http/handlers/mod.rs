//! HTTP Handlers

mod audio;
mod chat;
mod ping;
mod status;

pub use audio::*;
pub use chat::*;
pub use ping::*;
pub use status::*;
