use std::fmt;

use serde::{Deserialize, Serialize};

/// Bounding box in normalized image coordinates, origin at the bottom-left
/// corner with y increasing upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedCandidate {
    pub text: String,
    pub confidence: f32,
}

/// One recognized unit of text as reported by a recognizer. Candidates are
/// ranked best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextObservation {
    pub candidates: Vec<RecognizedCandidate>,
    pub bounding_box: NormalizedBox,
}

impl TextObservation {
    pub fn new(candidates: Vec<RecognizedCandidate>, bounding_box: NormalizedBox) -> Self {
        Self {
            candidates,
            bounding_box,
        }
    }

    /// Convenience for the common single-candidate case.
    pub fn single(text: impl Into<String>, confidence: f32, bounding_box: NormalizedBox) -> Self {
        Self::new(
            vec![RecognizedCandidate {
                text: text.into(),
                confidence,
            }],
            bounding_box,
        )
    }

    pub fn top_candidate(&self) -> Option<&RecognizedCandidate> {
        self.candidates.first()
    }
}

/// Pixel-space rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl PixelRect {
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }
}

/// Which recognition backend produced a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    OcrApple,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::OcrApple => write!(f, "ocr_apple"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRegion {
    pub rect: PixelRect,
    pub text: String,
    pub source: Source,
}

impl TextRegion {
    /// Builds a region from pixel corners. Corners are reordered if needed so
    /// that `x1 <= x2` and `y1 <= y2` always hold. The text is trimmed;
    /// returns `None` when nothing is left.
    pub fn from_coords(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        text: &str,
        source: Source,
    ) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            rect: PixelRect {
                x1: x1.min(x2),
                y1: y1.min(y2),
                x2: x1.max(x2),
                y2: y1.max(y2),
            },
            text: text.to_string(),
            source,
        })
    }
}

/// Regions in the order the recognizer reported them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextRegions(Vec<TextRegion>);

impl TextRegions {
    pub fn texts(&self) -> Vec<&str> {
        self.0.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn element_coords(&self) -> Vec<PixelRect> {
        self.0.iter().map(|r| r.rect).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextRegion> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<TextRegion> {
        self.0
    }
}

impl From<Vec<TextRegion>> for TextRegions {
    fn from(regions: Vec<TextRegion>) -> Self {
        Self(regions)
    }
}

impl FromIterator<TextRegion> for TextRegions {
    fn from_iter<I: IntoIterator<Item = TextRegion>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TextRegions {
    type Item = TextRegion;
    type IntoIter = std::vec::IntoIter<TextRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TextRegions {
    type Item = &'a TextRegion;
    type IntoIter = std::slice::Iter<'a, TextRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
