//! Rendering options and configuration.

use std::path::PathBuf;

/// Default prefix for image references in HTML output.
pub const DEFAULT_IMAGE_PREFIX: &str = "Images/";

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Directory to save extracted images (created on first image)
    pub image_dir: Option<PathBuf>,

    /// Prefix for image paths in output (e.g., "Images/")
    pub image_path_prefix: String,

    /// Fixed metadata id; derived from the document text when unset
    pub document_id: Option<String>,

    /// Write the metadata header line
    pub include_metadata: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image directory.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = Some(dir.into());
        self
    }

    /// Set the image path prefix.
    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.image_path_prefix = prefix.into();
        self
    }

    /// Set a fixed metadata id.
    pub fn with_document_id(mut self, id: impl Into<String>) -> Self {
        self.document_id = Some(id.into());
        self
    }

    /// Enable or disable the metadata header.
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_dir: None,
            image_path_prefix: DEFAULT_IMAGE_PREFIX.to_string(),
            document_id: None,
            include_metadata: true,
        }
    }
}
