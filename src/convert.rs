//! File-level conversion: import a DOCX, render it, and write the output files.
//!
//! # Example
//!
//! ```no_run
//! use undocx::convert::{convert_file, ConvertOptions, OutputFormat};
//! use std::path::Path;
//!
//! fn main() -> undocx::Result<()> {
//!     let options = ConvertOptions::new().with_format(OutputFormat::Html);
//!     let result = convert_file(Path::new("Guide.docx"), None, &options)?;
//!     println!("{}", result.output_path.display());
//!     Ok(())
//! }
//! ```

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::parser::{DocxParser, ParseOptions};
use crate::render::{to_json, DocumentStats, HtmlRenderer, JsonFormat, PlainTextRenderer, RenderOptions};

/// Name of the image directory created next to HTML output.
pub const IMAGES_DIR_NAME: &str = "Images";

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// HTML fragments with a metadata header
    #[default]
    Html,

    /// Plain text
    Text,

    /// JSON dump of the document tree
    Json,
}

impl OutputFormat {
    /// File extension of the output.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Output format
    pub format: OutputFormat,

    /// Import options
    pub parse: ParseOptions,

    /// Rendering options
    pub render: RenderOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set import options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }
}

/// Where a conversion writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// The rendered output file
    pub file: PathBuf,

    /// Directory for extracted images
    pub images_dir: PathBuf,
}

impl OutputPaths {
    /// Derive output paths from a destination path.
    ///
    /// The destination's extension is replaced by the format's and spaces in
    /// its stem become underscores; images go to an `Images` directory
    /// beside it.
    pub fn new(destination: &Path, format: OutputFormat) -> Self {
        let dir = destination.parent().unwrap_or_else(|| Path::new(""));
        let base = destination
            .file_stem()
            .map(|s| s.to_string_lossy().replace(' ', "_"))
            .unwrap_or_else(|| "output".to_string());

        Self {
            file: dir.join(format!("{}.{}", base, format.extension())),
            images_dir: dir.join(IMAGES_DIR_NAME),
        }
    }
}

/// Result of a file conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// The written output file
    pub output_path: PathBuf,

    /// Image directory of HTML output, if any image was saved
    pub images_dir: Option<PathBuf>,

    /// Statistics of the imported document
    pub stats: DocumentStats,
}

/// Convert a DOCX file.
///
/// `output` defaults to `input`; see [`OutputPaths::new`] for how the
/// written file names are derived. The image directory is created by the
/// renderer on the first saved image. The input is fully imported before
/// any output is created, so an import failure leaves no files behind.
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    options: &ConvertOptions,
) -> Result<ConvertResult> {
    let document = DocxParser::open_with_options(input, options.parse.clone())?.parse()?;
    let stats = DocumentStats::collect(&document);

    let paths = OutputPaths::new(output.unwrap_or(input), options.format);
    if let Some(dir) = paths.file.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let mut images_dir = None;
    match options.format {
        OutputFormat::Html => {
            let mut render = options.render.clone();
            let dir = render
                .image_dir
                .get_or_insert_with(|| paths.images_dir.clone())
                .clone();

            let writer = BufWriter::new(File::create(&paths.file)?);
            HtmlRenderer::new(writer, render).render(&document)?;
            images_dir = dir.is_dir().then_some(dir);
        }
        OutputFormat::Text => {
            let writer = BufWriter::new(File::create(&paths.file)?);
            PlainTextRenderer::new(writer).render(&document)?;
        }
        OutputFormat::Json => {
            fs::write(&paths.file, to_json(&document, JsonFormat::Pretty)?)?;
        }
    }

    log::debug!("Wrote {}", paths.file.display());
    Ok(ConvertResult {
        output_path: paths.file,
        images_dir,
        stats,
    })
}
