//! # undocx
//!
//! Word document (DOCX) content extraction library for Rust.
//!
//! This library imports the body of a DOCX package into a small document
//! model and renders it as HTML fragments with a metadata header, plain
//! text, or JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use undocx::{parse_file, render};
//!
//! fn main() -> undocx::Result<()> {
//!     // Import a DOCX file
//!     let doc = parse_file("Guide.docx")?;
//!
//!     // Convert to HTML, writing images to ./Images
//!     let options = render::RenderOptions::new().with_image_dir("Images");
//!     let html = render::to_html(&doc, &options)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Style-driven import**: paragraph and character styles map to a fixed set
//! - **Metadata harvesting**: title, subtitle and the leading BRIEF section
//! - **Image extraction**: embedded drawings are decoded and saved as PNG
//! - **Visitor traversal**: plug custom renderers into [`render::DocumentVisitor`]

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{convert_file, ConvertOptions, ConvertResult, OutputFormat, OutputPaths};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, PackageFormat};
pub use error::{Error, Result};
pub use model::{Block, Body, Document, Image, Run, RunContent, Style};
pub use parser::{DocxParser, ParseOptions, StyleMap};
pub use render::{
    DocumentStats, DocumentVisitor, HtmlRenderer, JsonFormat, Metadata, PlainTextRenderer,
    RenderOptions,
};

use std::io::Read;
use std::path::{Path, PathBuf};

/// Parse a DOCX file and return a structured document.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_file;
///
/// let doc = parse_file("Guide.docx").unwrap();
/// println!("Blocks: {}", doc.block_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    DocxParser::open(path)?.parse()
}

/// Parse a DOCX file with custom options.
///
/// # Example
///
/// ```no_run
/// use undocx::{parse_file_with_options, ParseOptions};
///
/// let doc = parse_file_with_options("Guide.docx", ParseOptions::new().text_only()).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    DocxParser::open_with_options(path, options)?.parse()
}

/// Parse a DOCX from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    DocxParser::from_bytes(data)?.parse()
}

/// Parse a DOCX from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    DocxParser::from_bytes_with_options(data, options)?.parse()
}

/// Parse a DOCX from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    DocxParser::from_reader(reader)?.parse()
}

/// Parse a DOCX from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    DocxParser::from_reader_with_options(reader, options)?.parse()
}

/// Extract plain text from a DOCX file, one line per block.
///
/// Drawings are not decoded.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file_with_options(path, ParseOptions::new().text_only())?;
    Ok(doc.plain_text())
}

/// Convert a DOCX file to HTML fragments.
///
/// Images are dropped; use [`Undocx::with_image_dir`] or
/// [`convert_file`] to keep them.
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file_with_options(path, ParseOptions::new().text_only())?;
    render::to_html(&doc, &RenderOptions::default())
}

/// Builder for importing and converting DOCX documents.
///
/// # Example
///
/// ```no_run
/// use undocx::Undocx;
///
/// let html = Undocx::new()
///     .with_image_dir("out/Images")
///     .with_document_id("guide")
///     .parse("Guide.docx")?
///     .to_html()?;
/// # Ok::<(), undocx::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Undocx {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Undocx {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable image extraction.
    pub fn with_images(mut self, extract: bool) -> Self {
        self.parse_options = self.parse_options.with_images(extract);
        self
    }

    /// Set image output directory.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.render_options = self.render_options.with_image_dir(dir);
        self
    }

    /// Set the style resolution table.
    pub fn with_style_map(mut self, style_map: StyleMap) -> Self {
        self.parse_options = self.parse_options.with_style_map(style_map);
        self
    }

    /// Set a fixed metadata id.
    pub fn with_document_id(mut self, id: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_document_id(id);
        self
    }

    /// Parse a DOCX file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UndocxResult> {
        let document = DocxParser::open_with_options(path, self.parse_options)?.parse()?;
        Ok(UndocxResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a DOCX from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UndocxResult> {
        let document = DocxParser::from_bytes_with_options(data, self.parse_options)?.parse()?;
        Ok(UndocxResult {
            document,
            render_options: self.render_options,
        })
    }
}

/// Result of importing a DOCX document.
#[derive(Debug)]
pub struct UndocxResult {
    /// The imported document
    pub document: Document,
    render_options: RenderOptions,
}

impl UndocxResult {
    /// Convert to HTML fragments.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Collect statistics.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats::collect(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
