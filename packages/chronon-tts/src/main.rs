mod cli;

use anyhow::{Context, Result};
use chronon_tts::{synthesize_to_file, AssemblyOutcome, KokoroEngine};
use clap::Parser;
use cli::Args;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
  let args = Args::parse();

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_ansi(false)
    .init();

  let request = args.request();
  let engine = KokoroEngine::new(&args.endpoint).context("failed to initialize pipeline")?;

  let outcome = synthesize_to_file(&engine, &request, &args.output, |i, graphemes| {
    println!("Processed segment {}: {}", i, graphemes);
  })
  .with_context(|| format!("failed to synthesize audio via {}", args.endpoint))?;

  match outcome {
    AssemblyOutcome::Saved { path, .. } => {
      println!("Saved combined audio to: {}", path.display());
    }
    AssemblyOutcome::NoAudio => {
      println!("No audio generated.");
    }
  }

  Ok(())
}
