//! Paragraph and run-level types.

use super::{Image, Style};
use serde::Serialize;

/// A paragraph-level unit of content.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Block {
    /// Block style
    pub style: Style,

    /// Inline runs in reading order
    pub runs: Vec<Run>,
}

impl Block {
    /// Create a new empty block with the given style.
    pub fn new(style: Style) -> Self {
        Self {
            style,
            runs: Vec::new(),
        }
    }

    /// Create a block holding a single unstyled text run.
    pub fn with_text(style: Style, text: impl Into<String>) -> Self {
        let mut block = Self::new(style);
        block.add_run(Run::text(text));
        block
    }

    /// Append a run.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Concatenated text of all runs. Image runs contribute nothing.
    pub fn plain_text(&self) -> String {
        self.runs.iter().filter_map(Run::text_content).collect()
    }

    /// Check if the block has no visible text.
    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

/// Content carried by a run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RunContent {
    /// No content, e.g. a drawing that could not be resolved
    #[default]
    Empty,

    /// Plain text
    Text(String),

    /// An embedded image
    Image(Image),
}

/// An inline unit of content within a block.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Run {
    /// Run style
    pub style: Style,

    /// Text, image, or nothing
    pub content: RunContent,

    /// Hyperlink target, independent of the content
    pub hyperlink: Option<String>,
}

impl Run {
    /// Create a run with no content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unstyled text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: RunContent::Text(text.into()),
            ..Default::default()
        }
    }

    /// Create an unstyled image run.
    pub fn image(image: Image) -> Self {
        Self {
            content: RunContent::Image(image),
            ..Default::default()
        }
    }

    /// Set the run style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the hyperlink target.
    pub fn with_hyperlink(mut self, target: impl Into<String>) -> Self {
        self.hyperlink = Some(target.into());
        self
    }

    /// Text content, if this is a text run.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            RunContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Image content, if this is an image run.
    pub fn image_content(&self) -> Option<&Image> {
        match &self.content {
            RunContent::Image(image) => Some(image),
            _ => None,
        }
    }

    /// Check if the run carries neither text nor image.
    pub fn is_empty(&self) -> bool {
        matches!(self.content, RunContent::Empty)
    }
}
