//! HTML fragment rendering.
//!
//! Output is a sequence of lines: the metadata header, then one line per
//! heading, paragraph, or list group. It is not a single well-formed
//! document.

use std::fs;
use std::io::Write;

use image::ImageFormat;

use crate::error::{Error, Result};
use crate::model::{Block, Body, Document, Image, Run, Style};

use super::element::{Element, Node};
use super::metadata::{extract_metadata, Metadata};
use super::visitor::{walk_block, walk_run, DocumentVisitor};
use super::RenderOptions;

/// Convert a document to HTML fragments.
///
/// Images are written to `options.image_dir`; without one they are dropped
/// with a warning.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut output = Vec::new();
    HtmlRenderer::new(&mut output, options.clone()).render(doc)?;
    String::from_utf8(output).map_err(|e| Error::Render(format!("Invalid UTF-8 output: {}", e)))
}

/// Derive a stable, UUID-shaped id from the text of the blocks.
pub fn document_id(blocks: &[Block]) -> String {
    let mut hasher = sha1_smol::Sha1::new();
    for block in blocks {
        hasher.update(block.plain_text().as_bytes());
        hasher.update(b"\n");
    }
    let hex = hasher.digest().to_string();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

/// HTML renderer writing fragment lines to `W`.
///
/// The writer is flushed by [`HtmlRenderer::finish`] and again when the
/// renderer is dropped, so output written before a failure is not lost.
pub struct HtmlRenderer<W: Write> {
    writer: W,
    options: RenderOptions,
    state: RenderState,
    image_dir_created: bool,
}

impl<W: Write> HtmlRenderer<W> {
    /// Create a new HTML renderer.
    pub fn new(writer: W, options: RenderOptions) -> Self {
        Self {
            writer,
            options,
            state: RenderState::default(),
            image_dir_created: false,
        }
    }

    /// Render a whole document and flush the writer.
    pub fn render(mut self, doc: &Document) -> Result<()> {
        self.visit_document(doc)?;
        self.finish()
    }

    /// Flush the underlying writer.
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn write_line(&mut self, element: &Element) -> Result<()> {
        writeln!(self.writer, "{}", element)?;
        Ok(())
    }

    /// Write the metadata header if it is still pending.
    fn write_pending_metadata(&mut self) -> Result<()> {
        match std::mem::take(&mut self.state.header) {
            Header::Pending(metadata) => {
                self.state.header = Header::Written;
                self.write_line(&metadata.to_element())
            }
            other => {
                self.state.header = other;
                Ok(())
            }
        }
    }

    fn flush_group(&mut self) -> Result<()> {
        if let Some(group) = self.state.group.take() {
            self.write_line(&group.element)?;
        }
        Ok(())
    }

    fn add_list_item(&mut self, style: Style, item: Element) -> Result<()> {
        if self.state.group.as_ref().is_some_and(|g| g.style != style) {
            self.flush_group()?;
        }
        self.state
            .group
            .get_or_insert_with(|| ListGroup::new(style))
            .element
            .push(item);
        Ok(())
    }

    /// Encode an image as PNG into the image directory and return its reference.
    fn save_image(&mut self, image: &Image) -> Result<String> {
        let dir = self
            .options
            .image_dir
            .as_ref()
            .ok_or_else(|| Error::Render("no image directory configured".to_string()))?;

        if !self.image_dir_created {
            fs::create_dir_all(dir)?;
            self.image_dir_created = true;
        }

        let file_name = image.file_name("png");
        image
            .bitmap()
            .save_with_format(dir.join(&file_name), ImageFormat::Png)?;
        Ok(format!("{}{}", self.options.image_path_prefix, file_name))
    }
}

impl<W: Write> Drop for HtmlRenderer<W> {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

impl<W: Write> DocumentVisitor for HtmlRenderer<W> {
    fn visit_body(&mut self, body: &Body) -> Result<()> {
        let section = extract_metadata(&body.blocks);
        log::debug!(
            "Brief section consumed {} of {} blocks",
            section.consumed(body.blocks.len()),
            body.blocks.len()
        );

        self.state.header = if self.options.include_metadata {
            let mut metadata = section.metadata;
            metadata.id = self
                .options
                .document_id
                .clone()
                .unwrap_or_else(|| document_id(&body.blocks));
            Header::Pending(metadata)
        } else {
            Header::Disabled
        };

        for block in section.kept {
            self.visit_block(block)?;
        }
        self.flush_group()
    }

    fn visit_block(&mut self, block: &Block) -> Result<()> {
        match block.style {
            Style::Title => {
                self.state.set_title(block.plain_text());
                return Ok(());
            }
            Style::Subtitle => {
                self.state.set_subtitle(block.plain_text());
                return Ok(());
            }
            _ => {}
        }

        let list_style = block.style.is_list().then_some(block.style);
        let name = match block.style.heading_level() {
            Some(level) => {
                self.state.had_first_heading = true;
                heading_name(level)
            }
            None if list_style.is_some() => "li",
            // Leading paragraphs before the first heading are dropped.
            None if !self.state.had_first_heading => return Ok(()),
            None => "p",
        };

        self.write_pending_metadata()?;
        self.state.open_block(Element::new(name))?;
        walk_block(self, block)?;
        let element = self.state.close_block()?;

        match list_style {
            Some(style) => self.add_list_item(style, element),
            None => {
                self.flush_group()?;
                self.write_line(&element)
            }
        }
    }

    fn visit_run(&mut self, run: &Run) -> Result<()> {
        let code = run.style == Style::Code;
        if !code && run.hyperlink.is_none() {
            return walk_run(self, run);
        }

        self.state
            .open_inline(InlineFormat::new(code, run.hyperlink.as_deref()))?;
        walk_run(self, run)?;
        let element = self.state.close_inline()?;
        self.state.push(Node::Element(element))
    }

    fn visit_text(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.state.push(Node::Text(text.to_string()))
    }

    fn visit_image(&mut self, image: &Image) -> Result<()> {
        match self.save_image(image) {
            Ok(src) => self
                .state
                .push(Node::Element(Element::new("img").with_attribute("src", src))),
            Err(e) => {
                log::warn!("Cannot save image '{}': {}", image.name(), e);
                Ok(())
            }
        }
    }
}

fn heading_name(level: u8) -> &'static str {
    match level {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        _ => "h4",
    }
}

/// Where the metadata header stands.
#[derive(Debug, Default)]
enum Header {
    /// Not configured, or no body visited yet
    #[default]
    Disabled,
    /// Waiting for the first rendered block
    Pending(Metadata),
    /// Already written
    Written,
}

/// A batch of consecutive list items of one style.
#[derive(Debug)]
struct ListGroup {
    style: Style,
    element: Element,
}

impl ListGroup {
    fn new(style: Style) -> Self {
        let name = if style == Style::NumberedList { "ol" } else { "ul" };
        Self {
            style,
            element: Element::new(name),
        }
    }
}

/// An open inline element, optionally wrapped in a link when closed.
#[derive(Debug)]
struct InlineFormat {
    element: Element,
    link: Option<String>,
}

impl InlineFormat {
    fn new(code: bool, hyperlink: Option<&str>) -> Self {
        match (code, hyperlink) {
            (true, link) => Self {
                element: Element::new("code"),
                link: link.map(str::to_string),
            },
            (false, link) => Self {
                element: Element::new("a").with_attribute("href", link.unwrap_or_default()),
                link: None,
            },
        }
    }

    fn close(self) -> Element {
        match self.link {
            Some(href) => Element::new("a")
                .with_attribute("href", href)
                .with_child(self.element),
            None => self.element,
        }
    }
}

/// The renderer's state machine: at most one open block and one open
/// inline element, plus the pending list group and header.
#[derive(Debug, Default)]
struct RenderState {
    header: Header,
    block: Option<Element>,
    group: Option<ListGroup>,
    inline: Option<InlineFormat>,
    had_first_heading: bool,
}

impl RenderState {
    fn open_block(&mut self, element: Element) -> Result<()> {
        if self.block.is_some() {
            return Err(Error::Render("a block is already open".to_string()));
        }
        self.block = Some(element);
        Ok(())
    }

    fn close_block(&mut self) -> Result<Element> {
        self.block
            .take()
            .ok_or_else(|| Error::Render("no open block to close".to_string()))
    }

    fn open_inline(&mut self, format: InlineFormat) -> Result<()> {
        if self.inline.is_some() {
            return Err(Error::Render("an inline format is already open".to_string()));
        }
        self.inline = Some(format);
        Ok(())
    }

    fn close_inline(&mut self) -> Result<Element> {
        self.inline
            .take()
            .map(InlineFormat::close)
            .ok_or_else(|| Error::Render("no open inline format to close".to_string()))
    }

    /// Append to the innermost open element.
    fn push(&mut self, node: Node) -> Result<()> {
        let target = match (&mut self.inline, &mut self.block) {
            (Some(inline), _) => &mut inline.element,
            (None, Some(block)) => block,
            (None, None) => return Err(Error::Render("content outside of a block".to_string())),
        };
        target.push_node(node);
        Ok(())
    }

    fn set_title(&mut self, title: String) {
        match &mut self.header {
            Header::Pending(metadata) => metadata.title = title,
            Header::Written => log::warn!("Title '{}' found after content; ignored", title),
            Header::Disabled => {}
        }
    }

    fn set_subtitle(&mut self, subtitle: String) {
        match &mut self.header {
            Header::Pending(metadata) => metadata.subtitle = subtitle,
            Header::Written => log::warn!("Subtitle '{}' found after content; ignored", subtitle),
            Header::Disabled => {}
        }
    }
}
