//! The relationship table of a package part.

use std::collections::HashMap;

use crate::error::Result;

/// Namespace of package relationship parts.
pub const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// A single relationship entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship id referenced from the part (`r:id`, `r:embed`)
    pub id: String,
    /// Target path or URL
    pub target: String,
    /// Relationship type URI
    pub kind: Option<String>,
    /// Whether the target lives outside the package
    pub external: bool,
}

/// Id to target mapping for one part.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    entries: HashMap<String, Relationship>,
}

impl Relationships {
    /// An empty table; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a relationship part.
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)?;
        let mut entries = HashMap::new();

        for node in doc.root_element().children() {
            if !node.is_element()
                || node.tag_name().name() != "Relationship"
                || node.tag_name().namespace() != Some(RELATIONSHIPS_NS)
            {
                continue;
            }
            let (Some(id), Some(target)) = (node.attribute("Id"), node.attribute("Target")) else {
                continue;
            };
            let rel = Relationship {
                id: id.to_string(),
                target: target.to_string(),
                kind: node.attribute("Type").map(str::to_string),
                external: node.attribute("TargetMode") == Some("External"),
            };
            // The first entry for an id wins.
            entries.entry(rel.id.clone()).or_insert(rel);
        }

        log::debug!("Loaded {} relationships", entries.len());
        Ok(Self { entries })
    }

    /// Look up a relationship by id.
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.entries.get(id)
    }

    /// Number of relationships.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
