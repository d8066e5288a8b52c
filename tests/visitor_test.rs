//! Integration tests for the visitor pattern.

use image::{DynamicImage, RgbaImage};
use undocx::model::{Block, Document, Image, Run, Style};
use undocx::render::visitor::{walk_block, walk_run, DocumentVisitor, Styled};
use undocx::render::DocumentStats;
use undocx::{Error, Result};

/// Custom visitor that tracks visit counts.
#[derive(Default)]
struct CountingVisitor {
    blocks: usize,
    runs: usize,
    texts: usize,
    images: usize,
    styled: Vec<Style>,
}

impl DocumentVisitor for CountingVisitor {
    fn visit_block(&mut self, block: &Block) -> Result<()> {
        self.blocks += 1;
        walk_block(self, block)
    }

    fn visit_run(&mut self, run: &Run) -> Result<()> {
        self.runs += 1;
        walk_run(self, run)
    }

    fn visit_text(&mut self, _text: &str) -> Result<()> {
        self.texts += 1;
        Ok(())
    }

    fn visit_image(&mut self, _image: &Image) -> Result<()> {
        self.images += 1;
        Ok(())
    }

    fn visit_styled(&mut self, styled: &dyn Styled) -> Result<()> {
        self.styled.push(styled.style());
        Ok(())
    }
}

/// Collects only heading text, never descending into other blocks.
#[derive(Default)]
struct HeadingCollector {
    headings: Vec<String>,
    current: Option<String>,
}

impl DocumentVisitor for HeadingCollector {
    fn visit_block(&mut self, block: &Block) -> Result<()> {
        if !block.style.is_heading() {
            return Ok(());
        }
        self.current = Some(String::new());
        walk_block(self, block)?;
        self.headings.extend(self.current.take());
        Ok(())
    }

    fn visit_text(&mut self, text: &str) -> Result<()> {
        if let Some(current) = &mut self.current {
            current.push_str(text);
        }
        Ok(())
    }
}

/// Fails on the first image.
struct NoImages;

impl DocumentVisitor for NoImages {
    fn visit_image(&mut self, image: &Image) -> Result<()> {
        Err(Error::Other(format!("unexpected image '{}'", image.name())))
    }
}

fn sample() -> Document {
    let mut mixed = Block::new(Style::Custom);
    mixed.add_run(Run::text("see ").with_style(Style::Strong));
    mixed.add_run(Run::image(Image::new(
        "pic",
        DynamicImage::ImageRgba8(RgbaImage::new(1, 1)),
    )));
    mixed.add_run(Run::new());

    Document::from_blocks(vec![
        Block::with_text(Style::Heading1, "Intro"),
        mixed,
        Block::with_text(Style::Heading3, "Details"),
    ])
}

#[test]
fn test_default_traversal_reaches_every_node() {
    let mut visitor = CountingVisitor::default();
    visitor.visit_document(&sample()).unwrap();

    assert_eq!(visitor.blocks, 3);
    assert_eq!(visitor.runs, 5);
    assert_eq!(visitor.texts, 3);
    assert_eq!(visitor.images, 1);
    assert_eq!(
        visitor.styled,
        vec![
            Style::Heading1,
            Style::Custom,
            Style::Custom,
            Style::Strong,
            Style::Custom,
            Style::Custom,
            Style::Heading3,
            Style::Custom,
        ]
    );
}

#[test]
fn test_skipping_subtrees() {
    let mut visitor = HeadingCollector::default();
    visitor.visit_document(&sample()).unwrap();
    assert_eq!(visitor.headings, vec!["Intro", "Details"]);
}

#[test]
fn test_errors_stop_traversal() {
    let err = NoImages.visit_document(&sample()).unwrap_err();
    assert!(err.to_string().contains("pic"));
}

#[test]
fn test_stats_visitor() {
    let stats = DocumentStats::collect(&sample());
    assert_eq!(stats.block_count, 3);
    assert_eq!(stats.run_count, 5);
    assert_eq!(stats.image_count, 1);
    assert_eq!(stats.word_count, 3);
    assert_eq!(stats.blocks_with_style(Style::Heading1), 1);
}
