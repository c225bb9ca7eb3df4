//! Page-level OCR entry point that ties a recognizer to the region extractor.
use tracing::{debug, debug_span, Instrument};

use crate::config::OcrConfig;
use crate::engine::{OcrError, RecognitionRequest, TextRecognizer};
use crate::extract::extract_with_source;
use crate::layout::LayoutElements;
use crate::raster::RasterImage;
use crate::region::TextRegions;

pub struct OcrAgent {
    config: OcrConfig,
    recognizer: Box<dyn TextRecognizer>,
}

impl OcrAgent {
    /// Loads the configured backend. Fails immediately when the backend cannot
    /// run on this platform.
    pub fn new(config: OcrConfig) -> Result<Self, OcrError> {
        let recognizer = config.backend.load(&config)?;
        Ok(Self { config, recognizer })
    }

    pub fn with_recognizer(recognizer: Box<dyn TextRecognizer>, config: OcrConfig) -> Self {
        Self { config, recognizer }
    }

    pub fn config(&self) -> &OcrConfig {
        &self.config
    }

    /// Regions come back in recognition order, not reading order.
    pub fn is_text_sorted(&self) -> bool {
        false
    }

    pub async fn get_layout_from_image(&self, image: &RasterImage) -> Result<TextRegions, OcrError> {
        let (width, height) = image.dimensions();
        let span = debug_span!("page_ocr", width, height, source = %self.recognizer.source());

        async {
            let request = RecognitionRequest {
                image: image.encode_jpeg()?,
                languages: self.config.languages(),
                level: self.config.level,
                uses_language_correction: self.config.uses_language_correction,
            };
            let observations = self.recognizer.recognize(&request).await?;
            debug!(observations = observations.len(), "recognition finished");

            let regions =
                extract_with_source(observations, width, height, self.recognizer.source());
            debug!(regions = regions.len(), "regions extracted");
            Ok(regions)
        }
        .instrument(span)
        .await
    }

    pub async fn get_text_from_image(&self, image: &RasterImage) -> Result<String, OcrError> {
        let regions = self.get_layout_from_image(image).await?;
        Ok(regions.texts().join("\n\n"))
    }

    pub async fn get_layout_elements_from_image(
        &self,
        image: &RasterImage,
    ) -> Result<LayoutElements, OcrError> {
        let regions = self.get_layout_from_image(image).await?;
        Ok(LayoutElements::from(&regions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{NormalizedBox, Source, TextObservation};
    use async_trait::async_trait;
    use image::{DynamicImage, RgbImage};
    use std::sync::{Arc, Mutex};

    struct FixedRecognizer {
        observations: Vec<Option<TextObservation>>,
        seen_languages: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl TextRecognizer for FixedRecognizer {
        async fn recognize(
            &self,
            request: &RecognitionRequest,
        ) -> Result<Vec<Option<TextObservation>>, OcrError> {
            *self.seen_languages.lock().unwrap() = request.languages.clone();
            Ok(self.observations.clone())
        }

        fn source(&self) -> Source {
            Source::OcrApple
        }
    }

    struct FailingRecognizer;

    #[async_trait]
    impl TextRecognizer for FailingRecognizer {
        async fn recognize(
            &self,
            _request: &RecognitionRequest,
        ) -> Result<Vec<Option<TextObservation>>, OcrError> {
            Err(OcrError::EngineError("Error performing Vision request".into()))
        }

        fn source(&self) -> Source {
            Source::OcrApple
        }
    }

    fn page() -> RasterImage {
        RasterImage::from_image(DynamicImage::ImageRgb8(RgbImage::new(200, 100)))
    }

    fn agent(observations: Vec<Option<TextObservation>>) -> OcrAgent {
        OcrAgent::with_recognizer(
            Box::new(FixedRecognizer {
                observations,
                seen_languages: Arc::default(),
            }),
            OcrConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_layout_uses_image_dimensions() {
        let agent = agent(vec![Some(TextObservation::single(
            "Title",
            0.9,
            NormalizedBox::new(0.25, 0.5, 0.5, 0.25),
        ))]);
        let regions = agent.get_layout_from_image(&page()).await.unwrap();
        let rect = regions.iter().next().unwrap().rect;
        assert_eq!((rect.x1, rect.y1, rect.x2, rect.y2), (50.0, 25.0, 150.0, 50.0));
    }

    #[tokio::test]
    async fn test_text_joined_with_blank_lines() {
        let b = NormalizedBox::new(0.0, 0.0, 0.1, 0.1);
        let agent = agent(vec![
            Some(TextObservation::single("first", 1.0, b)),
            Some(TextObservation::single(" ", 1.0, b)),
            Some(TextObservation::single("second", 1.0, b)),
        ]);
        let text = agent.get_text_from_image(&page()).await.unwrap();
        assert_eq!(text, "first\n\nsecond");
    }

    #[tokio::test]
    async fn test_languages_passed_to_recognizer() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recognizer = FixedRecognizer {
            observations: Vec::new(),
            seen_languages: Arc::clone(&seen),
        };
        let agent = OcrAgent::with_recognizer(Box::new(recognizer), OcrConfig::default());
        let regions = agent.get_layout_from_image(&page()).await.unwrap();
        assert!(regions.is_empty());
        assert_eq!(*seen.lock().unwrap(), vec!["en-US".to_string()]);
        assert!(!agent.is_text_sorted());
    }

    #[tokio::test]
    async fn test_recognizer_error_propagates() {
        let agent = OcrAgent::with_recognizer(Box::new(FailingRecognizer), OcrConfig::default());
        let err = agent.get_layout_from_image(&page()).await.unwrap_err();
        assert!(matches!(err, OcrError::EngineError(_)));
    }

    #[tokio::test]
    async fn test_layout_elements() {
        let b = NormalizedBox::new(0.0, 0.0, 0.1, 0.1);
        let agent = agent(vec![Some(TextObservation::single("only", 1.0, b))]);
        let layout = agent.get_layout_elements_from_image(&page()).await.unwrap();
        assert_eq!(layout.texts, vec!["only"]);
        assert_eq!(layout.element_class_ids, vec![0]);
    }
}
