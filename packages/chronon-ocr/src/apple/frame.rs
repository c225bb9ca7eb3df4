//! Decoder for the little-endian frame the Swift shim hands back.
//!
//! ```text
//! count: u32
//! repeated count times:
//!   present: u8                  (0 = null observation, nothing follows)
//!   candidates: u32
//!   repeated candidates times:
//!     len: u32, utf8 bytes, confidence: f32
//!   x: f32, y: f32, width: f32, height: f32
//! ```

use crate::engine::OcrError;
use crate::region::{NormalizedBox, RecognizedCandidate, TextObservation};

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize, what: &str) -> Result<&'a [u8], OcrError> {
        if self.pos + n > self.data.len() {
            return Err(OcrError::EngineError(format!("truncated {what}")));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn u8(&mut self, what: &str) -> Result<u8, OcrError> {
        Ok(self.take(1, what)?[0])
    }

    fn u32(&mut self, what: &str) -> Result<u32, OcrError> {
        let bytes = self.take(4, what)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn f32(&mut self, what: &str) -> Result<f32, OcrError> {
        Ok(f32::from_bits(self.u32(what)?))
    }
}

pub fn deserialize_observations(data: &[u8]) -> Result<Vec<Option<TextObservation>>, OcrError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = Reader { data, pos: 0 };
    let count = reader.u32("observation count")? as usize;
    // Each observation takes at least one byte; guards against absurd counts.
    let mut observations = Vec::with_capacity(count.min(data.len()));

    for _ in 0..count {
        if reader.u8("presence flag")? == 0 {
            observations.push(None);
            continue;
        }

        let candidate_count = reader.u32("candidate count")? as usize;
        let mut candidates = Vec::with_capacity(candidate_count.min(data.len()));
        for _ in 0..candidate_count {
            let len = reader.u32("text length")? as usize;
            let text = String::from_utf8_lossy(reader.take(len, "text")?).into_owned();
            let confidence = reader.f32("confidence")?;
            candidates.push(RecognizedCandidate { text, confidence });
        }

        let x = reader.f32("bbox")?;
        let y = reader.f32("bbox")?;
        let width = reader.f32("bbox")?;
        let height = reader.f32("bbox")?;

        observations.push(Some(TextObservation::new(
            candidates,
            NormalizedBox::new(f64::from(x), f64::from(y), f64::from(width), f64::from(height)),
        )));
    }

    Ok(observations)
}
