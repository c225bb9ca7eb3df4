//! Sample buffers and the WAV container they are written to.
use std::path::Path;

use crate::engine::TtsError;

/// Output rate of the Kokoro voice models.
pub const SAMPLE_RATE: u32 = 24_000;

/// Mono samples for one synthesized text chunk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioSegment(pub Vec<f32>);

impl AudioSegment {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn samples(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for AudioSegment {
    fn from(samples: Vec<f32>) -> Self {
        Self(samples)
    }
}

/// Segments stitched back to back into one waveform.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl AssembledAudio {
    /// Concatenates segments verbatim: no resampling, gaps or cross-fades.
    pub fn concat(segments: Vec<AudioSegment>, sample_rate: u32) -> Self {
        let total = segments.iter().map(AudioSegment::len).sum();
        let mut samples = Vec::with_capacity(total);
        for segment in segments {
            samples.extend(segment.0);
        }
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    /// Writes a mono 32-bit float WAV file so samples survive unchanged.
    pub fn write_wav(&self, path: impl AsRef<Path>) -> Result<(), TtsError> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut writer = hound::WavWriter::create(path, spec)?;
        for &sample in &self.samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
        Ok(())
    }

    /// Reads a mono float WAV written by [`AssembledAudio::write_wav`].
    pub fn read_wav(path: impl AsRef<Path>) -> Result<Self, TtsError> {
        let reader = hound::WavReader::open(path)?;
        let spec = reader.spec();
        if spec.channels != 1 || spec.sample_format != hound::SampleFormat::Float {
            return Err(TtsError::InvalidRequest(format!(
                "expected mono float WAV, found {} channel(s) of {:?}",
                spec.channels, spec.sample_format
            )));
        }
        let samples = reader.into_samples::<f32>().collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            samples,
            sample_rate: spec.sample_rate,
        })
    }
}
