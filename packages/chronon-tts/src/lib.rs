//! # chronon-tts
//!
//! Streams text through a speech synthesizer chunk by chunk and stitches the
//! resulting audio into one 24 kHz mono WAV file.
//!
//! ```ignore
//! use chronon_tts::prelude::*;
//!
//! let engine = KokoroEngine::new("http://localhost:8880")?;
//! let request = SynthesisRequest { text: "Hello there.".into(), ..Default::default() };
//! match synthesize_to_file(&engine, &request, "hello.wav", |i, text| println!("{i}: {text}"))? {
//!     AssemblyOutcome::Saved { path, .. } => println!("wrote {}", path.display()),
//!     AssemblyOutcome::NoAudio => println!("nothing to say"),
//! }
//! ```

pub mod assembler;
pub mod audio;
pub mod engine;
pub mod kokoro;
pub mod text_chunker;

pub use assembler::{assemble, synthesize_to_file, AssemblyOutcome};
pub use audio::{AssembledAudio, AudioSegment, SAMPLE_RATE};
pub use engine::{ChunkStream, SpeechSynthesizer, SynthesisRequest, SynthesizedChunk, TtsError};
pub use kokoro::{decode_pcm16, KokoroEngine, DEFAULT_ENDPOINT};
pub use text_chunker::{chunk_text, ChunkerConfig, TextChunk};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        assemble, chunk_text, synthesize_to_file, AssembledAudio, AssemblyOutcome, AudioSegment,
        ChunkStream, ChunkerConfig, KokoroEngine, SpeechSynthesizer, SynthesisRequest,
        SynthesizedChunk, TextChunk, TtsError, SAMPLE_RATE,
    };
}
