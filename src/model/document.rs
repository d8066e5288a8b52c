//! Document-level types.

use super::{Block, Style};
use serde::Serialize;

/// An imported DOCX document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    /// The document body
    pub body: Body,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from a list of blocks.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self {
            body: Body { blocks },
        }
    }

    /// Number of blocks in the body.
    pub fn block_count(&self) -> usize {
        self.body.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.body.blocks.is_empty()
    }

    /// Get plain text content of the entire document, one line per block.
    pub fn plain_text(&self) -> String {
        self.body
            .blocks
            .iter()
            .map(|block| block.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Iterate over blocks with the given style.
    pub fn blocks_with_style(&self, style: Style) -> impl Iterator<Item = &Block> {
        self.body.blocks.iter().filter(move |b| b.style == style)
    }

    /// Count the images embedded in all runs.
    pub fn image_count(&self) -> usize {
        self.body
            .blocks
            .iter()
            .flat_map(|b| &b.runs)
            .filter(|r| r.image_content().is_some())
            .count()
    }
}

/// The ordered sequence of paragraph-level blocks.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Body {
    /// Blocks in reading order
    pub blocks: Vec<Block>,
}

impl Body {
    /// Create a new empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.block_count(), 0);
        assert_eq!(doc.plain_text(), "");
    }

    #[test]
    fn test_plain_text_joins_blocks() {
        let doc = Document::from_blocks(vec![
            Block::with_text(Style::Heading1, "Intro"),
            Block::with_text(Style::Custom, "Body text"),
        ]);
        assert_eq!(doc.plain_text(), "Intro\nBody text");
    }

    #[test]
    fn test_blocks_with_style() {
        let doc = Document::from_blocks(vec![
            Block::with_text(Style::Heading1, "A"),
            Block::with_text(Style::Custom, "B"),
            Block::with_text(Style::Heading1, "C"),
        ]);
        let headings: Vec<_> = doc
            .blocks_with_style(Style::Heading1)
            .map(|b| b.plain_text())
            .collect();
        assert_eq!(headings, vec!["A", "C"]);
    }
}
