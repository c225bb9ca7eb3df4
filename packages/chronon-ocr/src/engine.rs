use async_trait::async_trait;
use thiserror::Error;

use crate::region::{Source, TextObservation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecognitionLevel {
    Fast,
    #[default]
    Accurate,
}

/// Everything a recognizer needs for one page.
#[derive(Debug, Clone)]
pub struct RecognitionRequest {
    /// Encoded image bytes (JPEG).
    pub image: Vec<u8>,
    pub languages: Vec<String>,
    pub level: RecognitionLevel,
    pub uses_language_correction: bool,
}

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("unsupported: {0}")]
    Unsupported(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("engine error: {0}")]
    EngineError(String),
}

/// A text recognition backend. Implementations return observations in
/// recognition order with boxes normalized to a bottom-left origin.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(
        &self,
        request: &RecognitionRequest,
    ) -> Result<Vec<Option<TextObservation>>, OcrError>;

    /// Tag attached to every region this backend produces.
    fn source(&self) -> Source;
}
