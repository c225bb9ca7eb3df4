//! Conversion of recognizer observations into pixel-space text regions.
//!
//! Recognizers report boxes normalized to `[0, 1]` with the origin at the
//! bottom-left corner. Downstream layout code wants pixels with the origin at
//! the top-left, so the vertical axis is flipped here.

use crate::region::{NormalizedBox, PixelRect, Source, TextObservation, TextRegion, TextRegions};

/// Maps a normalized bottom-left box onto a `width` x `height` pixel grid with
/// a top-left origin.
pub fn to_pixel_rect(bbox: &NormalizedBox, width: u32, height: u32) -> PixelRect {
    let w = f64::from(width);
    let h = f64::from(height);

    let x1 = bbox.x * w;
    let y1 = h * (1.0 - bbox.y - bbox.height);
    let x2 = x1 + bbox.width * w;
    let y2 = y1 + bbox.height * h;

    PixelRect { x1, y1, x2, y2 }
}

/// Extracts regions tagged as coming from the Apple Vision backend.
pub fn extract<I>(observations: I, width: u32, height: u32) -> TextRegions
where
    I: IntoIterator<Item = Option<TextObservation>>,
{
    extract_with_source(observations, width, height, Source::OcrApple)
}

/// Keeps recognition order. Missing observations and observations whose top
/// candidate is blank are skipped.
pub fn extract_with_source<I>(observations: I, width: u32, height: u32, source: Source) -> TextRegions
where
    I: IntoIterator<Item = Option<TextObservation>>,
{
    observations
        .into_iter()
        .flatten()
        .filter_map(|observation| {
            let candidate = observation.top_candidate()?;
            let rect = to_pixel_rect(&observation.bounding_box, width, height);
            TextRegion::from_coords(rect.x1, rect.y1, rect.x2, rect.y2, &candidate.text, source)
        })
        .collect()
}
