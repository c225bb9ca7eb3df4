//! Client for Kokoro servers exposing the OpenAI-compatible speech endpoint.
//!
//! Text is chunked locally and each chunk is rendered with its own blocking
//! request, so audio for chunk `n + 1` is only requested once the caller has
//! pulled chunk `n`.

use reqwest::blocking::Client;
use serde::Serialize;
use tracing::debug;

use crate::audio::AudioSegment;
use crate::engine::{ChunkStream, SpeechSynthesizer, SynthesisRequest, SynthesizedChunk, TtsError};
use crate::text_chunker::{chunk_text, ChunkerConfig, TextChunk};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8880";
const SPEECH_PATH: &str = "/v1/audio/speech";

#[derive(Debug, Serialize)]
struct SpeechBody<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    speed: f32,
    response_format: &'a str,
    lang_code: &'a str,
    stream: bool,
}

pub struct KokoroEngine {
    client: Client,
    base_url: String,
    model: String,
    chunker: ChunkerConfig,
}

impl KokoroEngine {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TtsError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: "kokoro".to_string(),
            chunker: ChunkerConfig::default(),
        })
    }

    pub fn with_chunker(mut self, chunker: ChunkerConfig) -> Self {
        self.chunker = chunker;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn render(&self, request: &SynthesisRequest, text: &str) -> Result<AudioSegment, TtsError> {
        let body = SpeechBody {
            model: &self.model,
            input: text,
            voice: &request.voice,
            speed: request.speed,
            response_format: "pcm",
            lang_code: &request.lang_code,
            stream: false,
        };
        let url = format!("{}{}", self.base_url, SPEECH_PATH);
        debug!(%url, chars = text.len(), "requesting chunk");

        let response = self.client.post(&url).json(&body).send()?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(TtsError::Engine(format!(
                "{} returned {}: {}",
                url,
                status,
                detail.trim()
            )));
        }

        let bytes = response.bytes()?;
        Ok(AudioSegment(decode_pcm16(&bytes)?))
    }
}

impl SpeechSynthesizer for KokoroEngine {
    fn synthesize<'a>(&'a self, request: &'a SynthesisRequest) -> Result<ChunkStream<'a>, TtsError> {
        let chunks = chunk_text(&request.text, &self.chunker);
        debug!(chunks = chunks.len(), voice = %request.voice, "starting synthesis");
        Ok(Box::new(KokoroStream {
            engine: self,
            request,
            chunks: chunks.into_iter(),
        }))
    }
}

struct KokoroStream<'a> {
    engine: &'a KokoroEngine,
    request: &'a SynthesisRequest,
    chunks: std::vec::IntoIter<TextChunk>,
}

impl Iterator for KokoroStream<'_> {
    type Item = Result<SynthesizedChunk, TtsError>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        let result = self
            .engine
            .render(self.request, &chunk.content)
            .map(|audio| SynthesizedChunk {
                graphemes: chunk.content,
                phonemes: None,
                audio,
            });
        if result.is_err() {
            // Nothing after a failed chunk is worth requesting.
            self.chunks = Vec::new().into_iter();
        }
        Some(result)
    }
}

/// Converts signed 16-bit little-endian PCM into `[-1, 1)` floats.
pub fn decode_pcm16(bytes: &[u8]) -> Result<Vec<f32>, TtsError> {
    if bytes.len() % 2 != 0 {
        return Err(TtsError::Engine(format!(
            "pcm payload has odd length {}",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|b| f32::from(i16::from_le_bytes([b[0], b[1]])) / 32768.0)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pcm16() {
        let bytes = [0x00, 0x00, 0x00, 0x40, 0x00, 0x80, 0xFF, 0x7F];
        let samples = decode_pcm16(&bytes).unwrap();
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[1], 0.5);
        assert_eq!(samples[2], -1.0);
        assert!((samples[3] - 32767.0 / 32768.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        assert!(matches!(decode_pcm16(&[1, 2, 3]), Err(TtsError::Engine(_))));
    }

    #[test]
    fn test_body_shape() {
        let body = SpeechBody {
            model: "kokoro",
            input: "Hi",
            voice: "af_heart",
            speed: 1.5,
            response_format: "pcm",
            lang_code: "a",
            stream: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["voice"], "af_heart");
        assert_eq!(json["response_format"], "pcm");
        assert_eq!(json["lang_code"], "a");
        assert_eq!(json["speed"], 1.5);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let engine = KokoroEngine::new("http://example.test:8880/").unwrap();
        assert_eq!(engine.base_url(), "http://example.test:8880");
    }

    #[test]
    fn test_blank_text_yields_no_chunks() {
        let engine = KokoroEngine::new(DEFAULT_ENDPOINT).unwrap();
        let request = SynthesisRequest {
            text: " \n\n ".into(),
            ..Default::default()
        };
        assert_eq!(engine.synthesize(&request).unwrap().count(), 0);
    }
}
