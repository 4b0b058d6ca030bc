//! Status Query Handlers

use std::sync::Arc;

use crate::application::queries::status_queries::*;
use crate::application::services::ResponseOrchestrator;
use crate::domain::EXAMPLE_QUESTIONS;

/// GetStatus Handler
pub struct GetStatusHandler {
    orchestrator: Arc<ResponseOrchestrator>,
}

impl GetStatusHandler {
    pub fn new(orchestrator: Arc<ResponseOrchestrator>) -> Self {
        Self { orchestrator }
    }

    pub fn handle(&self, _query: GetStatusQuery) -> GetStatusResponse {
        let backend = self.orchestrator.text_generator().backend();
        let llm_enabled = backend.is_language_model();
        let tts_enabled = self.orchestrator.speech_enabled();

        let mut notes = Vec::new();
        if !llm_enabled {
            notes.push("Running in fallback mode. Some features may be limited.".to_string());
        }
        if !tts_enabled {
            notes.push("Murf AI API key not configured. Audio responses disabled.".to_string());
        }

        GetStatusResponse {
            llm_enabled,
            tts_enabled,
            text_backend: backend.describe().to_string(),
            notes,
        }
    }
}

/// ListExamples Handler
pub struct ListExamplesHandler;

impl ListExamplesHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, _query: ListExamplesQuery) -> Vec<String> {
        EXAMPLE_QUESTIONS.iter().map(|q| q.to_string()).collect()
    }
}

impl Default for ListExamplesHandler {
    fn default() -> Self {
        Self::new()
    }
}
