use std::collections::BTreeMap;

use serde::Serialize;

use crate::region::{PixelRect, TextRegions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum ElementType {
    UncategorizedText,
}

/// Parallel arrays describing laid-out page elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutElements {
    pub element_coords: Vec<PixelRect>,
    pub texts: Vec<String>,
    pub element_class_ids: Vec<usize>,
    pub element_class_id_map: BTreeMap<usize, ElementType>,
}

impl LayoutElements {
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl From<&TextRegions> for LayoutElements {
    /// Every region becomes one uncategorized element; no regrouping.
    fn from(regions: &TextRegions) -> Self {
        let texts: Vec<String> = regions.texts().into_iter().map(String::from).collect();
        Self {
            element_coords: regions.element_coords(),
            element_class_ids: vec![0; texts.len()],
            texts,
            element_class_id_map: BTreeMap::from([(0, ElementType::UncategorizedText)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{Source, TextRegion};

    #[test]
    fn test_layout_from_regions() {
        let regions: TextRegions = [
            TextRegion::from_coords(0.0, 0.0, 5.0, 5.0, "one", Source::OcrApple),
            TextRegion::from_coords(1.0, 6.0, 9.0, 8.0, "two", Source::OcrApple),
        ]
        .into_iter()
        .flatten()
        .collect();
        let layout = LayoutElements::from(&regions);
        assert_eq!(layout.len(), 2);
        assert_eq!(layout.texts, vec!["one", "two"]);
        assert_eq!(layout.element_class_ids, vec![0, 0]);
        assert_eq!(layout.element_coords[1].y1, 6.0);
        assert_eq!(
            layout.element_class_id_map.get(&0),
            Some(&ElementType::UncategorizedText)
        );
    }
}
