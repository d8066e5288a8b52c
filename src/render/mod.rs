//! Rendering module for converting documents to various output formats.

pub mod element;
mod html;
mod json;
pub mod metadata;
mod options;
mod stats;
mod text;
pub mod visitor;

pub use html::{document_id, to_html, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use metadata::{extract_metadata, BriefSection, Metadata};
pub use options::{RenderOptions, DEFAULT_IMAGE_PREFIX};
pub use stats::DocumentStats;
pub use text::{to_text, PlainTextRenderer};
pub use visitor::{DocumentVisitor, Styled};
