//! DOCX package detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Kind of zip container found at the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFormat {
    /// A zip archive with at least one entry
    Zip,
    /// A zip archive with no entries
    EmptyZip,
}

impl std::fmt::Display for PackageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageFormat::Zip => write!(f, "ZIP package"),
            PackageFormat::EmptyZip => write!(f, "empty ZIP package"),
        }
    }
}

/// Zip local file header magic: PK\x03\x04
const LOCAL_HEADER_MAGIC: &[u8] = b"PK\x03\x04";
/// Zip end-of-central-directory magic, first record of an empty archive
const EMPTY_ARCHIVE_MAGIC: &[u8] = b"PK\x05\x06";

/// Detect the package format from a file path.
///
/// # Example
/// ```no_run
/// use undocx::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("document.docx").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<PackageFormat> {
    let mut header = Vec::with_capacity(4);
    File::open(path)?.take(4).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the package format from bytes.
///
/// # Returns
/// * `Ok(PackageFormat)` if the data starts with a zip signature
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<PackageFormat> {
    if data.starts_with(LOCAL_HEADER_MAGIC) {
        Ok(PackageFormat::Zip)
    } else if data.starts_with(EMPTY_ARCHIVE_MAGIC) {
        Ok(PackageFormat::EmptyZip)
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Check if a file looks like a DOCX package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like a DOCX package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
