//! Parsing options and configuration.

use super::StyleMap;

/// Options for importing DOCX documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Whether to decode embedded drawings into images
    pub extract_images: bool,

    /// Named-style resolution table
    pub style_map: StyleMap,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable image extraction.
    pub fn with_images(mut self, extract: bool) -> Self {
        self.extract_images = extract;
        self
    }

    /// Extract text only (drawings are skipped silently).
    pub fn text_only(mut self) -> Self {
        self.extract_images = false;
        self
    }

    /// Set the style resolution table.
    pub fn with_style_map(mut self, style_map: StyleMap) -> Self {
        self.style_map = style_map;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            extract_images: true,
            style_map: StyleMap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Style;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .text_only()
            .with_style_map(StyleMap::default().with_alias("Caption", Style::SubtleEmphasis));

        assert!(!options.extract_images);
        assert_eq!(options.style_map.resolve("Caption"), Style::SubtleEmphasis);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert!(options.extract_images);
        assert_eq!(options.style_map, StyleMap::default());
    }
}
