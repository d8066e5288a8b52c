//! Visitor pattern for walking the document tree.
//!
//! [`DocumentVisitor`] has one method per node kind. Every method defaults
//! to descending into its children in document order (through the matching
//! `walk_*` function), and leaf methods default to doing nothing. A renderer
//! overrides only what it needs; an override that does not call the `walk_*`
//! function skips the subtree.
//!
//! # Example
//!
//! ```
//! use undocx::model::{Block, Document, Style};
//! use undocx::render::visitor::{walk_block, DocumentVisitor};
//! use undocx::Result;
//!
//! /// Collects the text of level-1 headings.
//! struct Outline(Vec<String>);
//!
//! impl DocumentVisitor for Outline {
//!     fn visit_block(&mut self, block: &Block) -> Result<()> {
//!         if block.style == Style::Heading1 {
//!             self.0.push(block.plain_text());
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let doc = Document::from_blocks(vec![Block::with_text(Style::Heading1, "Intro")]);
//! let mut outline = Outline(Vec::new());
//! outline.visit_document(&doc)?;
//! assert_eq!(outline.0, vec!["Intro"]);
//! # Ok::<(), undocx::Error>(())
//! ```

use crate::error::Result;
use crate::model::{Block, Body, Document, Image, Run, RunContent, Style};

/// A node that carries a style: blocks and runs.
pub trait Styled {
    /// The node's style.
    fn style(&self) -> Style;
}

impl Styled for Block {
    fn style(&self) -> Style {
        self.style
    }
}

impl Styled for Run {
    fn style(&self) -> Style {
        self.style
    }
}

/// Trait for visiting document nodes, depth-first and pre-order.
pub trait DocumentVisitor {
    /// Called for the document root. Defaults to visiting the body.
    fn visit_document(&mut self, doc: &Document) -> Result<()> {
        walk_document(self, doc)
    }

    /// Called for the body. Defaults to visiting each block in order.
    fn visit_body(&mut self, body: &Body) -> Result<()> {
        walk_body(self, body)
    }

    /// Called for each block. Defaults to the styled hook, then each run.
    fn visit_block(&mut self, block: &Block) -> Result<()> {
        walk_block(self, block)
    }

    /// Called for each run. Defaults to the styled hook, then the content.
    fn visit_run(&mut self, run: &Run) -> Result<()> {
        walk_run(self, run)
    }

    /// Called for the text of a text run.
    fn visit_text(&mut self, text: &str) -> Result<()> {
        let _ = text;
        Ok(())
    }

    /// Called for the image of an image run.
    fn visit_image(&mut self, image: &Image) -> Result<()> {
        let _ = image;
        Ok(())
    }

    /// Called for every block and run before its content.
    fn visit_styled(&mut self, styled: &dyn Styled) -> Result<()> {
        let _ = styled;
        Ok(())
    }
}

/// Visit the body of a document.
pub fn walk_document<V: DocumentVisitor + ?Sized>(visitor: &mut V, doc: &Document) -> Result<()> {
    visitor.visit_body(&doc.body)
}

/// Visit every block of a body in order.
pub fn walk_body<V: DocumentVisitor + ?Sized>(visitor: &mut V, body: &Body) -> Result<()> {
    for block in &body.blocks {
        visitor.visit_block(block)?;
    }
    Ok(())
}

/// Run the styled hook for a block, then visit its runs in order.
pub fn walk_block<V: DocumentVisitor + ?Sized>(visitor: &mut V, block: &Block) -> Result<()> {
    visitor.visit_styled(block)?;
    for run in &block.runs {
        visitor.visit_run(run)?;
    }
    Ok(())
}

/// Run the styled hook for a run, then visit its text or image.
pub fn walk_run<V: DocumentVisitor + ?Sized>(visitor: &mut V, run: &Run) -> Result<()> {
    visitor.visit_styled(run)?;
    match &run.content {
        RunContent::Text(text) => visitor.visit_text(text),
        RunContent::Image(image) => visitor.visit_image(image),
        RunContent::Empty => Ok(()),
    }
}
