//! Decoding source images and re-encoding them for native recognizers.
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::engine::OcrError;

/// A decoded page image.
#[derive(Debug, Clone)]
pub struct RasterImage {
    image: DynamicImage,
}

impl RasterImage {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, OcrError> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|e| OcrError::InvalidInput(format!("{}: {e}", path.display())))?;
        Ok(Self { image })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, OcrError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| OcrError::InvalidInput(e.to_string()))?;
        Ok(Self { image })
    }

    pub fn from_image(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Pixel `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// JPEG bytes of the raster. JPEG has no alpha channel, so the image is
    /// flattened to RGB first.
    pub fn encode_jpeg(&self) -> Result<Vec<u8>, OcrError> {
        let rgb = DynamicImage::ImageRgb8(self.image.to_rgb8());
        let mut buf = Cursor::new(Vec::new());
        rgb.write_to(&mut buf, ImageFormat::Jpeg)
            .map_err(|e| OcrError::InvalidInput(format!("jpeg encoding failed: {e}")))?;
        Ok(buf.into_inner())
    }
}
