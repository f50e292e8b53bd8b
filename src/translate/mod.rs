pub mod groq;
pub mod interface;

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::TranslateError;
use interface::CompletionBackend;

/// One submission's worth of input. Constructed fresh per submit, never
/// persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationRequest {
    pub origin: String,
    pub destination: String,
    pub text: String,
}

pub fn instruction(origin: &str, destination: &str) -> String {
    format!("Translate the following text from {origin} to {destination} with just one version.")
}

/// The translation request cycle: validate, dispatch, report. Each call
/// runs the full cycle with no state carried over from earlier calls.
pub struct Translator {
    backend: Option<Arc<dyn CompletionBackend>>,
}

impl Translator {
    /// `None` means no credential was configured; every submission will
    /// fail with a configuration error without dispatching.
    pub fn new(backend: Option<Arc<dyn CompletionBackend>>) -> Self {
        if backend.is_none() {
            warn!("No API key configured; translations will be rejected at submit time");
        }
        Self { backend }
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let backend = self.backend.as_ref().ok_or(TranslateError::MissingApiKey)?;
        if request.text.trim().is_empty() {
            return Err(TranslateError::EmptyText);
        }

        let system = instruction(&request.origin, &request.destination);
        info!(
            "Translating {} -> {} ({} chars)",
            request.origin,
            request.destination,
            request.text.len()
        );
        backend
            .complete(&system, &request.text)
            .await
            .map_err(|e| TranslateError::Dispatch(e.to_string()))
    }
}
