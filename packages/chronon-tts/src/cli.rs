//! Command line arguments backing the `chronon-tts` binary.
use clap::Parser;
use std::path::PathBuf;

use chronon_tts::{SynthesisRequest, DEFAULT_ENDPOINT};

#[derive(Parser, Debug)]
#[command(
  name = "chronon-tts",
  about = "Generate TTS audio with Kokoro.",
  version
)]
pub struct Args {
  /// Language code (e.g., 'a' for American English)
  #[arg(long = "lang_code", default_value = "a")]
  pub lang_code: String,

  /// Voice name (e.g., 'af_heart')
  #[arg(long, default_value = "af_heart")]
  pub voice: String,

  /// Speech speed (0.5-2.0 is typical; any positive value is passed on)
  #[arg(long, default_value_t = 1.15)]
  pub speed: f32,

  /// Target output WAV file path
  #[arg(long, default_value = "output.wav")]
  pub output: PathBuf,

  /// Input text to synthesize (required)
  #[arg(long)]
  pub text: String,

  /// Base URL of the Kokoro speech server
  #[arg(long, default_value = DEFAULT_ENDPOINT)]
  pub endpoint: String,
}

impl Args {
  pub fn request(&self) -> SynthesisRequest {
    SynthesisRequest {
      text: self.text.clone(),
      voice: self.voice.clone(),
      speed: self.speed,
      lang_code: self.lang_code.clone(),
    }
  }
}
