//! Error types for undocx library.

use std::io;
use thiserror::Error;

/// Result type alias for undocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during DOCX processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The package container could not be read.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// An XML part is not well-formed.
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The file format is not recognized as a zip package.
    #[error("Unknown file format: not a valid DOCX package")]
    UnknownFormat,

    /// The package is missing something the import cannot do without.
    #[error("DOCX format error: {0}")]
    Format(String),

    /// Error decoding or encoding an embedded bitmap.
    #[error("Image error: {0}")]
    Image(String),

    /// Error during rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a fatal format error.
    pub fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }

    /// Whether this error aborts an import because the package is malformed.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Format(_) | Error::UnknownFormat)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            _ => Error::Image(err.to_string()),
        }
    }
}
