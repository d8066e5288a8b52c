//! DOCX document importer built on roxmltree.

use std::io::Read;
use std::path::{Path, PathBuf};

use roxmltree::Node;

use crate::error::{Error, Result};
use crate::model::{Block, Body, Document, Image, Run, RunContent, Style};

use super::options::ParseOptions;
use super::package::{resolve_target, Package, DOCUMENT_PART, DOCUMENT_RELS_PART};
use super::relationships::Relationships;

/// WordprocessingML main namespace.
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
/// DrawingML main namespace.
pub const A_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
/// Office document relationships namespace.
pub const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// DOCX document parser.
///
/// Construction opens the package and loads the main part and its
/// relationships; [`DocxParser::parse`] builds the [`Document`].
pub struct DocxParser {
    package: Package,
    document_xml: String,
    relationships: Relationships,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_vec(data, options)
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a DOCX from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        Self::from_vec(data.to_vec(), options)
    }

    /// Parse a DOCX from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a DOCX from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_vec(data, options)
    }

    fn from_vec(data: Vec<u8>, options: ParseOptions) -> Result<Self> {
        let mut package = Package::from_bytes(data)?;

        let document_xml = package.read_text(DOCUMENT_PART)?.ok_or_else(|| {
            Error::format(format!("Zip entry '{}' not found", DOCUMENT_PART))
        })?;

        let relationships = match package.read_text(DOCUMENT_RELS_PART)? {
            Some(xml) => Relationships::parse(&xml)?,
            None => {
                log::debug!("No '{}' in package", DOCUMENT_RELS_PART);
                Relationships::new()
            }
        };

        Ok(Self {
            package,
            document_xml,
            relationships,
            options,
        })
    }

    /// Relationship table of the main part.
    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    /// Parse the document and return a structured Document.
    pub fn parse(self) -> Result<Document> {
        let Self {
            mut package,
            document_xml,
            relationships,
            options,
        } = self;

        let xml = roxmltree::Document::parse(&document_xml)?;
        let body = w_child(xml.root_element(), "body")
            .ok_or_else(|| Error::format("Body element not found"))?;

        let mut importer = Importer {
            package: &mut package,
            rels: &relationships,
            options: &options,
        };

        let mut document = Document::new();
        importer.import_body(&mut document.body, body)?;
        log::debug!("Imported {} blocks", document.block_count());
        Ok(document)
    }
}

/// Per-import state borrowed from the parser.
struct Importer<'a> {
    package: &'a mut Package,
    rels: &'a Relationships,
    options: &'a ParseOptions,
}

impl Importer<'_> {
    fn import_body(&mut self, body: &mut Body, elem: Node) -> Result<()> {
        for p in elem.children().filter(|n| is_w(*n, "p")) {
            body.add_block(self.import_paragraph(p)?);
        }
        Ok(())
    }

    fn import_paragraph(&mut self, elem: Node) -> Result<Block> {
        let mut block = Block::default();

        if let Some(ppr) = w_child(elem, "pPr") {
            if let Some(named) = w_child(ppr, "pStyle") {
                block.style = self.named_style(named);
            }
            // TODO: distinguish numbering formats once numbering.xml is read
            if w_child(ppr, "numPr").is_some() {
                block.style = Style::NumberedList;
            }
        }

        for child in elem.children().filter(|n| n.is_element()) {
            if is_w(child, "hyperlink") {
                let target = self.import_hyperlink(child)?;
                self.import_run(&mut block, child, Some(target));
            } else if is_w(child, "r") {
                self.import_run(&mut block, child, None);
            }
        }

        Ok(block)
    }

    fn import_hyperlink(&self, elem: Node) -> Result<String> {
        let rid = elem
            .attribute((R_NS, "id"))
            .ok_or_else(|| Error::format("No id found on hyperlink"))?;
        let rel = self
            .rels
            .get(rid)
            .ok_or_else(|| Error::format(format!("No relationship found for hyperlink '{}'", rid)))?;
        Ok(rel.target.clone())
    }

    /// Import a `w:r`, or the runs nested in a `w:hyperlink`, into one or two runs.
    fn import_run(&mut self, block: &mut Block, elem: Node, hyperlink: Option<String>) {
        let run_elems: Vec<Node> = if is_w(elem, "hyperlink") {
            elem.children().filter(|n| is_w(*n, "r")).collect()
        } else {
            vec![elem]
        };

        let style = run_elems
            .iter()
            .filter_map(|r| w_child(*r, "rPr").and_then(|rpr| w_child(rpr, "rStyle")))
            .map(|named| self.named_style(named))
            .next()
            .unwrap_or_default();

        let mut text: Option<String> = None;
        let mut image: Option<Image> = None;
        for r in &run_elems {
            for t in r.children().filter(|n| is_w(*n, "t")) {
                text.get_or_insert_with(String::new)
                    .push_str(t.text().unwrap_or_default());
            }
            if image.is_none() {
                if let Some(drawing) = w_child(*r, "drawing") {
                    image = self.import_drawing(drawing);
                }
            }
        }

        let make = |content: RunContent| Run {
            style,
            content,
            hyperlink: hyperlink.clone(),
        };
        match (text, image) {
            (Some(text), Some(image)) => {
                block.add_run(make(RunContent::Text(text)));
                block.add_run(make(RunContent::Image(image)));
            }
            (Some(text), None) => block.add_run(make(RunContent::Text(text))),
            (None, Some(image)) => block.add_run(make(RunContent::Image(image))),
            (None, None) => block.add_run(make(RunContent::Empty)),
        }
    }

    /// Resolve a drawing to an image. Every failure is a warning.
    fn import_drawing(&mut self, elem: Node) -> Option<Image> {
        if !self.options.extract_images {
            return None;
        }

        let Some(blip) = elem
            .descendants()
            .find(|n| n.tag_name().namespace() == Some(A_NS) && n.tag_name().name() == "blip")
        else {
            log::warn!("Cannot import drawing: no embedded picture reference");
            return None;
        };

        let Some(rel) = blip
            .attribute((R_NS, "embed"))
            .and_then(|id| self.rels.get(id))
        else {
            log::warn!("Cannot find embed relation for drawing");
            return None;
        };

        let entry = resolve_target(&rel.target);
        let data = match self.package.read_entry(&entry) {
            Ok(Some(data)) => data,
            Ok(None) => {
                log::warn!("Cannot find zip entry '{}' for drawing", entry);
                return None;
            }
            Err(e) => {
                log::warn!("Cannot read zip entry '{}' for drawing: {}", entry, e);
                return None;
            }
        };

        match image::load_from_memory(&data) {
            Ok(bitmap) => Some(Image::new(asset_name(&rel.target), bitmap)),
            Err(e) => {
                log::warn!("Cannot decode image '{}': {}", entry, e);
                None
            }
        }
    }

    fn named_style(&self, elem: Node) -> Style {
        elem.attribute((W_NS, "val"))
            .map(|name| self.options.style_map.resolve(name))
            .unwrap_or_default()
    }
}

fn is_w(node: Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == Some(W_NS)
}

fn w_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_w(*n, name))
}

/// Asset file name without directory or extension.
fn asset_name(target: &str) -> String {
    PathBuf::from(target)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
