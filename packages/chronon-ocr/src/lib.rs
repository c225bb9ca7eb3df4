//! # chronon-ocr
//!
//! Turns recognizer observations into pixel-space text regions for layout
//! composition. Recognizers report boxes normalized to `[0, 1]` with a
//! bottom-left origin; regions come out in pixels with a top-left origin.
//!
//! ```ignore
//! use chronon_ocr::{OcrAgent, OcrConfig, RasterImage};
//!
//! let agent = OcrAgent::new(OcrConfig::default())?;
//! let page = RasterImage::open("scan.png")?;
//! let regions = agent.get_layout_from_image(&page).await?;
//! for region in &regions {
//!     println!("{:?} {}", region.rect, region.text);
//! }
//! ```

pub mod agent;
pub mod apple;
pub mod config;
pub mod engine;
pub mod extract;
pub mod layout;
pub mod raster;
pub mod region;

pub use agent::OcrAgent;
pub use config::{OcrBackend, OcrConfig};
pub use engine::{OcrError, RecognitionLevel, RecognitionRequest, TextRecognizer};
pub use extract::{extract, extract_with_source, to_pixel_rect};
pub use layout::{ElementType, LayoutElements};
pub use raster::RasterImage;
pub use region::{
    NormalizedBox, PixelRect, RecognizedCandidate, Source, TextObservation, TextRegion, TextRegions,
};

#[cfg(target_os = "macos")]
pub use apple::AppleVisionRecognizer;
