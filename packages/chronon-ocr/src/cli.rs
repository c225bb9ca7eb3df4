//! Command line arguments backing the `chronon-ocr` binary.
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
  name = "chronon-ocr",
  about = "Extract text regions from an image with a native OCR backend",
  version
)]
pub struct Args {
  /// Image to recognize
  #[arg(long, short = 'i')]
  pub image: PathBuf,

  /// Recognition language ("en" maps to en-US)
  #[arg(long, short = 'l', default_value = "en")]
  pub lang: String,

  /// Recognition backend
  #[arg(long, short = 'b', default_value = "apple")]
  pub backend: String,

  /// Output format
  #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,

  /// Use the fast recognition level instead of accurate
  #[arg(long)]
  pub fast: bool,

  /// Enable debug logging
  #[arg(long, short = 'v')]
  pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  /// Region texts separated by blank lines
  Text,
  /// Regions with pixel coordinates as JSON
  Json,
}
