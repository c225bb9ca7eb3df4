use async_trait::async_trait;
use tracing::debug;

use crate::engine::{OcrError, RecognitionRequest, TextRecognizer};
use crate::region::{Source, TextObservation};

use super::ffi;

pub struct AppleVisionRecognizer;

impl AppleVisionRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AppleVisionRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextRecognizer for AppleVisionRecognizer {
    async fn recognize(
        &self,
        request: &RecognitionRequest,
    ) -> Result<Vec<Option<TextObservation>>, OcrError> {
        debug!(bytes = request.image.len(), "Processing entire page OCR with Apple Vision...");
        let request = request.clone();
        tokio::task::spawn_blocking(move || ffi::recognize(&request))
            .await
            .map_err(|e| OcrError::EngineError(e.to_string()))?
    }

    fn source(&self) -> Source {
        Source::OcrApple
    }
}
