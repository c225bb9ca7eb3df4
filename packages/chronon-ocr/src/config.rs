//! Backend selection and recognition options.
use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::engine::{OcrError, RecognitionLevel, TextRecognizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcrBackend {
    /// Apple Vision framework, macOS only.
    #[default]
    Apple,
}

impl FromStr for OcrBackend {
    type Err = OcrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apple" | "vision" | "apple-vision" => Ok(OcrBackend::Apple),
            other => Err(OcrError::Unsupported(format!("unknown OCR backend '{other}'"))),
        }
    }
}

impl fmt::Display for OcrBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OcrBackend::Apple => write!(f, "apple"),
        }
    }
}

impl OcrBackend {
    /// Checks that the backend can run here and hands back a recognizer.
    pub fn load(self, config: &OcrConfig) -> Result<Box<dyn TextRecognizer>, OcrError> {
        match self {
            OcrBackend::Apple => load_apple(config),
        }
    }
}

#[cfg(target_os = "macos")]
fn load_apple(config: &OcrConfig) -> Result<Box<dyn TextRecognizer>, OcrError> {
    info!("Loading Apple Vision OCR on language={}...", config.language);
    Ok(Box::new(crate::apple::AppleVisionRecognizer::new()))
}

#[cfg(not(target_os = "macos"))]
fn load_apple(config: &OcrConfig) -> Result<Box<dyn TextRecognizer>, OcrError> {
    info!("Apple Vision OCR requested for language={}", config.language);
    Err(OcrError::Unsupported(
        "Apple Vision framework is only available on macOS.".into(),
    ))
}

#[derive(Debug, Clone)]
pub struct OcrConfig {
    pub language: String,
    pub backend: OcrBackend,
    pub level: RecognitionLevel,
    pub uses_language_correction: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            backend: OcrBackend::default(),
            level: RecognitionLevel::Accurate,
            uses_language_correction: true,
        }
    }
}

impl OcrConfig {
    /// Recognizer language list. The short `en` code is widened to the
    /// region-qualified tag Vision expects; anything else passes through.
    pub fn languages(&self) -> Vec<String> {
        if self.language == "en" {
            vec!["en-US".to_string()]
        } else {
            vec![self.language.clone()]
        }
    }
}
