//! Integration tests for file conversion.

mod common;

use common::{png, DocxBuilder};
use undocx::convert::{convert_file, ConvertOptions, OutputFormat};
use undocx::{ParseOptions, RenderOptions};

fn sample() -> DocxBuilder {
    DocxBuilder::new()
        .image("rId1", "logo.png", png(2, 2))
        .paragraph(Some("Title"), "Handbook")
        .paragraph(Some("Heading1"), "Welcome")
        .drawing("Custom", "rId1")
        .paragraph(None, "Hello.")
}

#[test]
fn test_convert_to_html_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = sample().write_to(dir.path(), "My Handbook.docx");

    let options = ConvertOptions::new()
        .with_render_options(RenderOptions::new().with_document_id("hb"));
    let result = convert_file(&input, None, &options).unwrap();

    assert_eq!(result.output_path, dir.path().join("My_Handbook.html"));
    assert_eq!(result.images_dir, Some(dir.path().join("Images")));
    assert_eq!(result.stats.image_count, 1);

    let html = std::fs::read_to_string(&result.output_path).unwrap();
    let lines: Vec<&str> = html.lines().collect();
    assert!(lines[0].starts_with(r#"<meta id="hb" title="Handbook""#));
    assert_eq!(lines[2], r#"<p><img src="Images/logo.png" /></p>"#);
    assert!(dir.path().join("Images").join("logo.png").exists());
}

#[test]
fn test_convert_to_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = sample().write_to(dir.path(), "in.docx");
    let output = dir.path().join("out").join("result.html");

    let options = ConvertOptions::new().with_format(OutputFormat::Text);
    let result = convert_file(&input, Some(output.as_path()), &options).unwrap();

    assert_eq!(result.output_path, dir.path().join("out").join("result.txt"));
    assert!(result.images_dir.is_none());
    assert_eq!(
        std::fs::read_to_string(&result.output_path).unwrap(),
        "\nHandbook\nWelcome\n\nHello."
    );
}

#[test]
fn test_convert_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = sample().write_to(dir.path(), "doc.docx");

    let options = ConvertOptions::new()
        .with_format(OutputFormat::Json)
        .with_parse_options(ParseOptions::new().text_only());
    let result = convert_file(&input, None, &options).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&result.output_path).unwrap()).unwrap();
    assert_eq!(json["body"]["blocks"].as_array().unwrap().len(), 4);
    assert_eq!(result.stats.image_count, 0);
}

#[test]
fn test_fatal_import_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = DocxBuilder::new()
        .raw(r#"<w:p><w:hyperlink r:id="rIdMissing"><w:r><w:t>x</w:t></w:r></w:hyperlink></w:p>"#)
        .write_to(dir.path(), "bad.docx");

    let err = convert_file(&input, None, &ConvertOptions::default()).unwrap_err();
    assert!(err.is_format_error());
    assert!(!dir.path().join("bad.html").exists());
    assert!(!dir.path().join("Images").exists());
}

#[test]
fn test_images_directory_is_created_on_first_image() {
    let dir = tempfile::tempdir().unwrap();
    let input = DocxBuilder::new()
        .paragraph(Some("Heading1"), "Only text")
        .write_to(dir.path(), "plain.docx");

    let result = convert_file(&input, None, &ConvertOptions::default()).unwrap();
    assert!(dir.path().join("plain.html").exists());
    assert!(!dir.path().join("Images").exists());
    assert!(result.images_dir.is_none());
}

#[test]
fn test_text_output_has_no_images_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = sample().write_to(dir.path(), "doc.docx");

    let options = ConvertOptions::new().with_format(OutputFormat::Text);
    convert_file(&input, None, &options).unwrap();
    assert!(!dir.path().join("Images").exists());
}
