//! Shared helpers for building DOCX packages in memory.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use undocx::parser::{A_NS, R_NS, W_NS};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Builder for a minimal DOCX package.
#[derive(Default)]
pub struct DocxBuilder {
    body: String,
    relationships: Vec<String>,
    media: Vec<(String, Vec<u8>)>,
    document_xml: Option<String>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw body XML.
    pub fn raw(mut self, xml: &str) -> Self {
        self.body.push_str(xml);
        self
    }

    /// Append a paragraph with a named style and a single run.
    pub fn paragraph(self, style: Option<&str>, text: &str) -> Self {
        let ppr = style
            .map(|s| format!(r#"<w:pPr><w:pStyle w:val="{s}"/></w:pPr>"#))
            .unwrap_or_default();
        self.raw(&format!(
            r#"<w:p>{ppr}<w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#
        ))
    }

    /// Append a paragraph with a numbering reference.
    pub fn numbered(self, text: &str) -> Self {
        self.raw(&format!(
            r#"<w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr><w:r><w:t>{text}</w:t></w:r></w:p>"#
        ))
    }

    /// Append a paragraph holding a hyperlink.
    pub fn hyperlink(self, rid: &str, target: &str, text: &str) -> Self {
        self.relationship(rid, target, true).raw(&format!(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading2"/></w:pPr><w:hyperlink r:id="{rid}"><w:r><w:t>{text}</w:t></w:r></w:hyperlink></w:p>"#
        ))
    }

    /// Append a paragraph holding a drawing that references `rid`.
    pub fn drawing(self, style: &str, rid: &str) -> Self {
        self.raw(&format!(
            r#"<w:p><w:pPr><w:pStyle w:val="{style}"/></w:pPr><w:r><w:drawing><wp:inline xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing"><a:graphic><a:graphicData><pic:pic xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:blipFill><a:blip r:embed="{rid}"/></pic:blipFill></pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing></w:r></w:p>"#
        ))
    }

    /// Register a relationship.
    pub fn relationship(mut self, rid: &str, target: &str, external: bool) -> Self {
        let mode = if external { r#" TargetMode="External""# } else { "" };
        self.relationships.push(format!(
            r#"<Relationship Id="{rid}" Type="{R_NS}/relationship" Target="{target}"{mode}/>"#
        ));
        self
    }

    /// Add an image part under `word/media/` with its relationship.
    pub fn image(mut self, rid: &str, file_name: &str, data: Vec<u8>) -> Self {
        self.media.push((format!("word/media/{file_name}"), data));
        self.relationship(rid, &format!("media/{file_name}"), false)
    }

    /// Replace the whole main part.
    pub fn document_xml(mut self, xml: &str) -> Self {
        self.document_xml = Some(xml.to_string());
        self
    }

    /// Serialize the package.
    pub fn build(self) -> Vec<u8> {
        let document = self.document_xml.unwrap_or_else(|| {
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{W_NS}" xmlns:r="{R_NS}" xmlns:a="{A_NS}"><w:body>{}</w:body></w:document>"#,
                self.body
            )
        });
        let rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="{RELS_NS}">{}</Relationships>"#,
            self.relationships.concat()
        );

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer
            .start_file("word/_rels/document.xml.rels", options)
            .unwrap();
        writer.write_all(rels.as_bytes()).unwrap();
        for (name, data) in &self.media {
            writer.start_file(name.as_str(), options).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    /// Serialize the package into `dir/name`.
    pub fn write_to(self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }
}

/// Encode a small solid-color PNG.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([200, 30, 30, 255]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}
