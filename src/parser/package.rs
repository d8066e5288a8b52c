//! Access to the parts of a DOCX zip package.

use std::io::{Cursor, Read};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::detect::detect_format_from_bytes;
use crate::error::{Error, Result};

/// Directory holding the WordprocessingML parts.
pub const WORD_DIR: &str = "word/";
/// Main document part.
pub const DOCUMENT_PART: &str = "word/document.xml";
/// Relationship part of the main document.
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

/// Largest entry the importer will inflate.
pub const MAX_ENTRY_SIZE: u64 = 512 * 1024 * 1024;
/// Upper bound on the buffer reserved from a declared entry size.
const MAX_PREALLOC: u64 = 1024 * 1024;

/// An opened zip package, held in memory.
pub struct Package {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl Package {
    /// Open a package from its bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        detect_format_from_bytes(&data)?;
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive })
    }

    /// Number of entries in the package.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Check if the package has no entries.
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Check whether an entry exists.
    pub fn contains(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }

    /// Read an entry's bytes, or `None` if there is no such entry.
    ///
    /// Entries larger than [`MAX_ENTRY_SIZE`] are rejected with a format error.
    pub fn read_entry(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        let file = match self.archive.by_name(name) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let declared = file.size();
        read_capped(file, declared, MAX_ENTRY_SIZE)
            .map(Some)
            .map_err(|e| match e {
                Error::Format(msg) => Error::format(format!("Zip entry '{}': {}", name, msg)),
                other => other,
            })
    }

    /// Read an entry as UTF-8 text, or `None` if there is no such entry.
    pub fn read_text(&mut self, name: &str) -> Result<Option<String>> {
        match self.read_entry(name)? {
            Some(data) => Ok(Some(decode_text(data))),
            None => Ok(None),
        }
    }
}

/// Read at most `limit` bytes. The declared size only sizes the initial
/// buffer; it comes from the archive and is not trusted.
fn read_capped<R: Read>(reader: R, declared: u64, limit: u64) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(declared.min(MAX_PREALLOC).min(limit) as usize);
    reader.take(limit + 1).read_to_end(&mut data)?;
    if data.len() as u64 > limit {
        return Err(Error::format(format!("larger than {} bytes", limit)));
    }
    Ok(data)
}

/// Decode an XML part, dropping a UTF-8 byte order mark if present.
fn decode_text(data: Vec<u8>) -> String {
    let text = match String::from_utf8(data) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    };
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Resolve a relationship target to a package entry name.
///
/// Targets are relative to the `word/` directory unless they start with `/`.
pub fn resolve_target(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("{}{}", WORD_DIR, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_read_entry() {
        let data = build_zip(&[(DOCUMENT_PART, b"<doc/>")]);
        let mut package = Package::from_bytes(data).unwrap();

        assert_eq!(package.len(), 1);
        assert!(package.contains(DOCUMENT_PART));
        assert!(!package.contains(DOCUMENT_RELS_PART));
        assert_eq!(
            package.read_text(DOCUMENT_PART).unwrap().as_deref(),
            Some("<doc/>")
        );
        assert!(package.read_entry(DOCUMENT_RELS_PART).unwrap().is_none());
    }

    #[test]
    fn test_bom_is_stripped() {
        let data = build_zip(&[(DOCUMENT_PART, "\u{feff}<doc/>".as_bytes())]);
        let mut package = Package::from_bytes(data).unwrap();
        assert_eq!(
            package.read_text(DOCUMENT_PART).unwrap().as_deref(),
            Some("<doc/>")
        );
    }

    #[test]
    fn test_not_a_zip() {
        assert!(Package::from_bytes(b"<html></html>".to_vec()).is_err());
    }

    #[test]
    fn test_read_capped() {
        let data = read_capped(Cursor::new(b"hello"), u64::MAX, 16).unwrap();
        assert_eq!(data, b"hello");

        let err = read_capped(Cursor::new(b"hello"), 5, 4).unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_forged_entry_size_does_not_abort() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .large_file(true);
        writer.start_file(DOCUMENT_PART, options).unwrap();
        writer.write_all(b"<doc/>").unwrap();
        let mut data = writer.finish().unwrap().into_inner();

        // Rewrite the uncompressed size in every zip64 extra field.
        let real = 6u64.to_le_bytes();
        let forged = (1u64 << 62).to_le_bytes();
        let mut i = 0;
        while i + 12 <= data.len() {
            if data[i] == 0x01 && data[i + 1] == 0x00 && data[i + 4..i + 12] == real {
                data[i + 4..i + 12].copy_from_slice(&forged);
                i += 12;
            } else {
                i += 1;
            }
        }

        if let Ok(mut package) = Package::from_bytes(data) {
            if let Ok(Some(entry)) = package.read_entry(DOCUMENT_PART) {
                assert!(entry.len() as u64 <= MAX_ENTRY_SIZE);
            }
        }
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(resolve_target("media/image1.png"), "word/media/image1.png");
        assert_eq!(resolve_target("/media/image1.png"), "media/image1.png");
    }
}
