//! Collects streamed synthesis output into a single waveform.
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::audio::{AssembledAudio, AudioSegment, SAMPLE_RATE};
use crate::engine::{SpeechSynthesizer, SynthesisRequest, SynthesizedChunk, TtsError};

#[derive(Debug, Clone, PartialEq)]
pub enum AssemblyOutcome {
    Saved { path: PathBuf, samples: usize },
    /// The engine yielded nothing; no file was written.
    NoAudio,
}

/// Drains `stream` in order. The first error aborts the whole assembly.
/// `on_progress` sees each chunk index with its source text.
///
/// Returns `None` when the stream was empty.
pub fn assemble<I, F>(stream: I, mut on_progress: F) -> Result<Option<AssembledAudio>, TtsError>
where
    I: IntoIterator<Item = Result<SynthesizedChunk, TtsError>>,
    F: FnMut(usize, &str),
{
    let mut segments: Vec<AudioSegment> = Vec::new();

    for (index, chunk) in stream.into_iter().enumerate() {
        let chunk = chunk?;
        debug!(index, samples = chunk.audio.len(), "segment received");
        on_progress(index, &chunk.graphemes);
        segments.push(chunk.audio);
    }

    if segments.is_empty() {
        return Ok(None);
    }

    Ok(Some(AssembledAudio::concat(segments, SAMPLE_RATE)))
}

/// Synthesizes `request` and writes the combined audio to `output`.
pub fn synthesize_to_file<S, F>(
    engine: &S,
    request: &SynthesisRequest,
    output: impl AsRef<Path>,
    on_progress: F,
) -> Result<AssemblyOutcome, TtsError>
where
    S: SpeechSynthesizer + ?Sized,
    F: FnMut(usize, &str),
{
    request.validate()?;
    let output = output.as_ref();

    let stream = engine.synthesize(request)?;
    match assemble(stream, on_progress)? {
        Some(audio) => {
            audio.write_wav(output)?;
            info!(
                path = %output.display(),
                samples = audio.samples.len(),
                seconds = audio.duration_secs(),
                "wrote combined audio"
            );
            Ok(AssemblyOutcome::Saved {
                path: output.to_path_buf(),
                samples: audio.samples.len(),
            })
        }
        None => Ok(AssemblyOutcome::NoAudio),
    }
}
