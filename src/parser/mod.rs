//! DOCX parsing module.

mod docx_parser;
mod options;
pub mod package;
mod relationships;
mod style_map;

pub use docx_parser::{DocxParser, A_NS, R_NS, W_NS};
pub use options::ParseOptions;
pub use package::Package;
pub use relationships::{Relationship, Relationships, RELATIONSHIPS_NS};
pub use style_map::StyleMap;
