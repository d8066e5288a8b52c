//! Metadata header harvested from the leading "BRIEF" section.
//!
//! A document may open with a level-1 heading reading `BRIEF`. The block
//! after it is the brief; then come optional `Sample Code:` and
//! `Related Articles:` labels, each followed by its value. Blank blocks in
//! between are skipped and the first other non-blank block closes the
//! section. The whole section is consumed and not rendered.

use serde::Serialize;

use super::element::Element;
use crate::model::{Block, Style};

const BRIEF_LABEL: &str = "BRIEF";
const SAMPLE_CODE_LABEL: &str = "Sample Code:";
const RELATED_ARTICLES_LABEL: &str = "Related Articles:";

/// The metadata record written as the first line of HTML output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Document id
    pub id: String,
    /// Text of the Title block
    pub title: String,
    /// Text of the Subtitle block
    pub subtitle: String,
    /// The brief paragraph
    pub brief: String,
    /// Sample code reference
    pub sample_code: String,
    /// Slides reference; never found in documents, kept as a placeholder
    pub slides: String,
    /// Related articles reference
    pub related: String,
}

impl Metadata {
    /// Build the `<meta>` element.
    pub fn to_element(&self) -> Element {
        let resources = Element::new("resources")
            .with_child(Element::new("samplecode").with_text(self.sample_code.as_str()))
            .with_child(Element::new("slides").with_text(self.slides.as_str()));

        Element::new("meta")
            .with_attribute("id", self.id.as_str())
            .with_attribute("title", self.title.as_str())
            .with_attribute("subtitle", self.subtitle.as_str())
            .with_child(Element::new("brief").with_text(self.brief.as_str()))
            .with_child(resources)
            .with_child(Element::new("related").with_text(self.related.as_str()))
    }

    /// Serialize the record on one line.
    pub fn to_xml(&self) -> String {
        self.to_element().to_string()
    }
}

/// Result of scanning for the brief section.
#[derive(Debug)]
pub struct BriefSection<'a> {
    /// Harvested fields; `id`, `title` and `subtitle` are left empty
    pub metadata: Metadata,
    /// Blocks that remain for rendering, in document order
    pub kept: Vec<&'a Block>,
}

impl BriefSection<'_> {
    /// Number of blocks consumed by the section.
    pub fn consumed(&self, total: usize) -> usize {
        total - self.kept.len()
    }
}

/// Find and consume the brief section.
///
/// Blocks before the `BRIEF` heading are kept. Running out of blocks at any
/// point ends the section; fields whose value block is missing stay empty.
pub fn extract_metadata(blocks: &[Block]) -> BriefSection<'_> {
    let mut metadata = Metadata::default();

    let Some(start) = blocks.iter().position(is_brief_heading) else {
        return BriefSection {
            metadata,
            kept: blocks.iter().collect(),
        };
    };

    let mut i = start + 1;
    if let Some(brief) = blocks.get(i) {
        metadata.brief = brief.plain_text();
        i += 1;
    }

    while let Some(block) = blocks.get(i) {
        let text = block.plain_text();
        let label = text.trim();
        i += 1;

        let field = if label.eq_ignore_ascii_case(SAMPLE_CODE_LABEL) {
            &mut metadata.sample_code
        } else if label.eq_ignore_ascii_case(RELATED_ARTICLES_LABEL) {
            &mut metadata.related
        } else if label.is_empty() {
            continue;
        } else {
            break;
        };

        if let Some(value) = blocks.get(i) {
            *field = value.plain_text();
            i += 1;
        }
    }

    let kept = blocks[..start].iter().chain(&blocks[i..]).collect();
    BriefSection { metadata, kept }
}

fn is_brief_heading(block: &Block) -> bool {
    block.style == Style::Heading1 && block.plain_text().trim().eq_ignore_ascii_case(BRIEF_LABEL)
}
