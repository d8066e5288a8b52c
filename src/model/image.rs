//! Embedded image values.

use image::DynamicImage;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// An image embedded in a run.
///
/// The bitmap is decoded at import time, so a renderer can re-encode it in
/// whatever format it writes.
#[derive(Debug, Clone)]
pub struct Image {
    name: String,
    bitmap: DynamicImage,
}

impl Image {
    /// Create an image from its logical name and decoded bitmap.
    pub fn new(name: impl Into<String>, bitmap: DynamicImage) -> Self {
        Self {
            name: name.into(),
            bitmap,
        }
    }

    /// Logical name, usually the asset file name without extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The decoded bitmap.
    pub fn bitmap(&self) -> &DynamicImage {
        &self.bitmap
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    /// Output file name: the logical name with `extension` appended.
    ///
    /// Dots already in the name are kept, so `chart.final` becomes
    /// `chart.final.png` rather than colliding with `chart`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.name, extension)
    }
}

// Pixel data is not part of the JSON dump.
impl Serialize for Image {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Image", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("width", &self.width())?;
        state.serialize_field("height", &self.height())?;
        state.end()
    }
}
