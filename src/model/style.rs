//! The closed style vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Style tag of a block or run.
///
/// Variant names match the Word template style names they are imported from,
/// except `NumberedList`, which the importer assigns from numbering properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    /// Anything not in the vocabulary
    #[default]
    Custom,
    Title,
    Subtitle,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    SubtleEmphasis,
    Strong,
    Code,
    UIItem,
    BulletList,
    Hyperlink,
    NumberedList,
}

impl Style {
    /// Every style, in declaration order.
    pub const ALL: [Style; 14] = [
        Style::Custom,
        Style::Title,
        Style::Subtitle,
        Style::Heading1,
        Style::Heading2,
        Style::Heading3,
        Style::Heading4,
        Style::SubtleEmphasis,
        Style::Strong,
        Style::Code,
        Style::UIItem,
        Style::BulletList,
        Style::Hyperlink,
        Style::NumberedList,
    ];

    /// The style name as written in the source template.
    pub fn name(self) -> &'static str {
        match self {
            Style::Custom => "Custom",
            Style::Title => "Title",
            Style::Subtitle => "Subtitle",
            Style::Heading1 => "Heading1",
            Style::Heading2 => "Heading2",
            Style::Heading3 => "Heading3",
            Style::Heading4 => "Heading4",
            Style::SubtleEmphasis => "SubtleEmphasis",
            Style::Strong => "Strong",
            Style::Code => "Code",
            Style::UIItem => "UIItem",
            Style::BulletList => "BulletList",
            Style::Hyperlink => "Hyperlink",
            Style::NumberedList => "NumberedList",
        }
    }

    /// Heading level (1-4) or None.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            Style::Heading1 => Some(1),
            Style::Heading2 => Some(2),
            Style::Heading3 => Some(3),
            Style::Heading4 => Some(4),
            _ => None,
        }
    }

    /// Check if this is one of the heading styles.
    pub fn is_heading(self) -> bool {
        self.heading_level().is_some()
    }

    /// Check if this is a bullet or numbered list style.
    pub fn is_list(self) -> bool {
        matches!(self, Style::BulletList | Style::NumberedList)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
