//! Query Handlers

mod audio_handlers;
mod status_handlers;

pub use audio_handlers::*;
pub use status_handlers::*;
