use thiserror::Error;

use crate::audio::AudioSegment;

#[derive(Debug, Error)]
pub enum TtsError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("engine error: {0}")]
    Engine(String),
    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One unit of streamed synthesis output.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedChunk {
    /// Source text this audio was produced from.
    pub graphemes: String,
    /// Phoneme string, when the engine reports one.
    pub phonemes: Option<String>,
    pub audio: AudioSegment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: String,
    pub speed: f32,
    pub lang_code: String,
}

impl Default for SynthesisRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            voice: "af_heart".to_string(),
            speed: 1.15,
            lang_code: "a".to_string(),
        }
    }
}

impl SynthesisRequest {
    pub fn validate(&self) -> Result<(), TtsError> {
        if self.voice.trim().is_empty() {
            return Err(TtsError::InvalidRequest("voice is empty".into()));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(TtsError::InvalidRequest(format!(
                "speed must be a positive number, got {}",
                self.speed
            )));
        }
        Ok(())
    }
}

/// Lazily produced chunks. Each `next()` blocks until that chunk is ready.
pub type ChunkStream<'a> = Box<dyn Iterator<Item = Result<SynthesizedChunk, TtsError>> + 'a>;

/// A streaming text-to-speech backend.
pub trait SpeechSynthesizer {
    fn synthesize<'a>(&'a self, request: &'a SynthesisRequest) -> Result<ChunkStream<'a>, TtsError>;
}
