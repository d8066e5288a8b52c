//! Named-style resolution table.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::Style;

/// Maps named styles found in the source package onto the [`Style`] vocabulary.
///
/// Lookups are exact and case-sensitive. Names missing from the table
/// resolve to [`Style::Custom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleMap {
    entries: HashMap<String, Style>,
}

impl StyleMap {
    /// A table containing only the given entries, without the defaults.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Load aliases from a JSON object of `"StyleName": "Variant"` pairs,
    /// merged over the default table.
    ///
    /// ```
    /// use undocx::parser::StyleMap;
    /// use undocx::model::Style;
    ///
    /// let map = StyleMap::from_json(r#"{ "SourceCode": "Code" }"#).unwrap();
    /// assert_eq!(map.resolve("SourceCode"), Style::Code);
    /// assert_eq!(map.resolve("Heading1"), Style::Heading1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let aliases: HashMap<String, Style> = serde_json::from_str(json)
            .map_err(|e| Error::Other(format!("Invalid style map: {}", e)))?;
        let mut map = Self::default();
        map.entries.extend(aliases);
        Ok(map)
    }

    /// Add or replace a mapping.
    pub fn with_alias(mut self, name: impl Into<String>, style: Style) -> Self {
        self.entries.insert(name.into(), style);
        self
    }

    /// Resolve a named style.
    pub fn resolve(&self, name: &str) -> Style {
        self.entries.get(name).copied().unwrap_or_default()
    }

    /// Number of names in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StyleMap {
    fn default() -> Self {
        let mut entries: HashMap<String, Style> = Style::ALL
            .iter()
            .map(|style| (style.name().to_string(), *style))
            .collect();
        entries.insert("CodeInline".to_string(), Style::Code);
        Self { entries }
    }
}
