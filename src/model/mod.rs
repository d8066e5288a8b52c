//! Document model types for DOCX content representation.
//!
//! This module defines the intermediate representation (IR) that bridges
//! DOCX import and content rendering: a [`Document`] owns a [`Body`], the
//! body is an ordered list of paragraph-level [`Block`]s, and each block is
//! an ordered list of inline [`Run`]s.

mod block;
mod document;
mod image;
mod style;

pub use block::{Block, Run, RunContent};
pub use document::{Body, Document};
pub use image::Image;
pub use style::Style;
