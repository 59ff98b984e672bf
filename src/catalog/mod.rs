/// Catalog of declared configuration entities.
///
/// References found in interpolation strings are validated against this
/// catalog; anything it does not know about is a hard error.
mod node_id;

pub use node_id::{NodeId, NodeKind};

use tracing::debug;

/// A catalog entry: the identifier as supplied plus its parsed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub raw: String,
    pub node: Option<NodeId>,
}

/// Ordered, read-only set of known node identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeCatalog {
    entries: Vec<CatalogEntry>,
}

impl NodeCatalog {
    /// Builds a catalog, preserving the supplied order.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = ids
            .into_iter()
            .map(|id| {
                let raw = id.as_ref().to_string();
                let node = NodeId::parse(&raw);
                if node.is_none() {
                    debug!(id = %raw, "catalog entry has fewer than two segments");
                }
                CatalogEntry { raw, node }
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Returns the identifiers as supplied, in order.
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.raw.as_str()).collect()
    }

    /// Finds the first entry named by the candidate's segments.
    pub fn find_match(&self, segments: &[&str]) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| {
            entry
                .node
                .as_ref()
                .is_some_and(|node| node.matches(segments))
        })
    }

    /// Renders the catalog as a JSON array for error messages.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.ids()).unwrap_or_default()
    }
}
