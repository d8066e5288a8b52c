//! Integration tests for plain text and JSON output.

mod common;

use common::{png, DocxBuilder};
use undocx::render::{to_json, to_text, JsonFormat};
use undocx::{extract_text, parse_bytes, Block, Document, Style};

#[test]
fn test_every_block_starts_on_a_new_line() {
    let doc = Document::from_blocks(vec![
        Block::with_text(Style::Title, "Title"),
        Block::with_text(Style::Custom, ""),
        Block::with_text(Style::BulletList, "item"),
    ]);
    assert_eq!(to_text(&doc).unwrap(), "\nTitle\n\nitem");
}

#[test]
fn test_text_ignores_images_and_styles() {
    let data = DocxBuilder::new()
        .image("rId1", "pic.png", png(1, 1))
        .paragraph(Some("Heading1"), "Head")
        .drawing("Custom", "rId1")
        .raw(r#"<w:p><w:r><w:rPr><w:rStyle w:val="Strong"/></w:rPr><w:t>bold</w:t></w:r><w:r><w:t xml:space="preserve"> tail</w:t></w:r></w:p>"#)
        .build();

    let doc = parse_bytes(&data).unwrap();
    assert_eq!(to_text(&doc).unwrap(), "\nHead\n\nbold tail");
}

#[test]
fn test_empty_document() {
    assert_eq!(to_text(&Document::new()).unwrap(), "");
}

#[test]
fn test_extract_text_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = DocxBuilder::new()
        .paragraph(Some("Heading1"), "One")
        .paragraph(None, "Two")
        .write_to(dir.path(), "doc.docx");

    assert_eq!(extract_text(&path).unwrap(), "One\nTwo");
}

#[test]
fn test_json_dump() {
    let data = DocxBuilder::new()
        .image("rId1", "pic.png", png(2, 3))
        .drawing("Heading1", "rId1")
        .build();

    let doc = parse_bytes(&data).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&to_json(&doc, JsonFormat::Compact).unwrap()).unwrap();

    let run = &json["body"]["blocks"][0]["runs"][0];
    assert_eq!(json["body"]["blocks"][0]["style"], "Heading1");
    assert_eq!(run["content"]["type"], "image");
    assert_eq!(run["content"]["value"]["name"], "pic");
    assert_eq!(run["content"]["value"]["width"], 2);
    assert_eq!(run["content"]["value"]["height"], 3);
}
