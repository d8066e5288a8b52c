//! Content statistics collected by walking the document.

use serde::Serialize;

use crate::error::Result;
use crate::model::{Block, Document, Image, Run, Style};

use super::visitor::{walk_block, walk_run, DocumentVisitor};

/// Counts of the nodes in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    /// Number of blocks
    pub block_count: usize,

    /// Number of runs
    pub run_count: usize,

    /// Number of image runs
    pub image_count: usize,

    /// Number of runs with a hyperlink target
    pub hyperlink_count: usize,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: usize,

    /// Character count (excluding whitespace)
    pub char_count: usize,

    /// Block count per style, in vocabulary order, zero counts omitted
    pub block_styles: Vec<(Style, usize)>,
}

impl DocumentStats {
    /// Collect statistics for a document.
    pub fn collect(doc: &Document) -> Self {
        let mut stats = Self::default();
        // Counting never fails.
        let _ = stats.visit_document(doc);
        stats
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count();
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count();
    }

    /// Number of blocks with the given style.
    pub fn blocks_with_style(&self, style: Style) -> usize {
        self.block_styles
            .iter()
            .find(|(s, _)| *s == style)
            .map_or(0, |(_, n)| *n)
    }

    fn add_block_style(&mut self, style: Style) {
        match self.block_styles.iter_mut().find(|(s, _)| *s == style) {
            Some((_, n)) => *n += 1,
            None => {
                self.block_styles.push((style, 1));
                self.block_styles
                    .sort_by_key(|(s, _)| Style::ALL.iter().position(|a| a == s));
            }
        }
    }
}

impl DocumentVisitor for DocumentStats {
    fn visit_block(&mut self, block: &Block) -> Result<()> {
        self.block_count += 1;
        self.add_block_style(block.style);
        walk_block(self, block)
    }

    fn visit_run(&mut self, run: &Run) -> Result<()> {
        self.run_count += 1;
        if run.hyperlink.is_some() {
            self.hyperlink_count += 1;
        }
        walk_run(self, run)
    }

    fn visit_text(&mut self, text: &str) -> Result<()> {
        self.count_text(text);
        Ok(())
    }

    fn visit_image(&mut self, _image: &Image) -> Result<()> {
        self.image_count += 1;
        Ok(())
    }
}
