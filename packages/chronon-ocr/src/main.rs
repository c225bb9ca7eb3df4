mod cli;

use anyhow::{Context, Result};
use chronon_ocr::{OcrAgent, OcrBackend, OcrConfig, RasterImage, RecognitionLevel};
use clap::Parser;
use cli::{Args, OutputFormat};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
  let default = if verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_ansi(false)
    .init();
}

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  init_tracing(args.verbose);

  let config = OcrConfig {
    language: args.lang.clone(),
    backend: args.backend.parse::<OcrBackend>()?,
    level: if args.fast {
      RecognitionLevel::Fast
    } else {
      RecognitionLevel::Accurate
    },
    ..Default::default()
  };

  let agent = OcrAgent::new(config).context("failed to load OCR backend")?;
  let image = RasterImage::open(&args.image)
    .with_context(|| format!("failed to read image {}", args.image.display()))?;

  match args.format {
    OutputFormat::Text => {
      let text = agent.get_text_from_image(&image).await?;
      println!("{}", text);
    }
    OutputFormat::Json => {
      let regions = agent.get_layout_from_image(&image).await?;
      println!("{}", serde_json::to_string_pretty(&regions)?);
    }
  }

  Ok(())
}
