//! Plain text rendering for DOCX documents.

use std::io::Write;

use crate::error::{Error, Result};
use crate::model::{Block, Document};

use super::visitor::{walk_block, DocumentVisitor};

/// Convert a document to plain text.
///
/// Every block is preceded by a line break; images produce no output.
pub fn to_text(doc: &Document) -> Result<String> {
    let mut output = Vec::new();
    PlainTextRenderer::new(&mut output).render(doc)?;
    String::from_utf8(output).map_err(|e| Error::Render(format!("Invalid UTF-8 output: {}", e)))
}

/// Plain text renderer writing to `W`.
pub struct PlainTextRenderer<W: Write> {
    writer: W,
}

impl<W: Write> PlainTextRenderer<W> {
    /// Create a new plain text renderer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Render a whole document and flush the writer.
    pub fn render(mut self, doc: &Document) -> Result<()> {
        self.visit_document(doc)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> DocumentVisitor for PlainTextRenderer<W> {
    fn visit_block(&mut self, block: &Block) -> Result<()> {
        self.writer.write_all(b"\n")?;
        walk_block(self, block)
    }

    fn visit_text(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }
}
