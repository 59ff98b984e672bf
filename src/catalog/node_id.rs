use serde::{Deserialize, Serialize};

/// Kinds of declared configuration entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Resource,
    DataSource,
    Variable,
    Local,
    Module,
}

#[allow(clippy::should_implement_trait)]
impl NodeKind {
    /// Returns the string representation of this node kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Resource => "resource",
            NodeKind::DataSource => "data",
            NodeKind::Variable => "var",
            NodeKind::Local => "local",
            NodeKind::Module => "module",
        }
    }

    /// Parses a string into a `NodeKind`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<NodeKind> {
        match s {
            "resource" => Some(NodeKind::Resource),
            "data" => Some(NodeKind::DataSource),
            "var" => Some(NodeKind::Variable),
            "local" => Some(NodeKind::Local),
            "module" => Some(NodeKind::Module),
            _ => None,
        }
    }

    /// Whether references to this kind are named after the declared name alone.
    pub fn is_named_by_declaration(&self) -> bool {
        matches!(self, NodeKind::Variable | NodeKind::Local | NodeKind::Module)
    }
}

/// A parsed catalog identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeId {
    Resource { type_name: String, name: String },
    /// `name` is absent for two-segment `data.type` entries.
    DataSource {
        type_name: String,
        name: Option<String>,
    },
    Variable { name: String },
    Local { name: String },
    Module { name: String },
}

impl NodeId {
    /// Parses a dot-delimited catalog entry.
    ///
    /// Returns `None` for entries with fewer than two segments, which can never
    /// name a reference.
    pub fn parse(raw: &str) -> Option<NodeId> {
        let mut parts = raw.split('.');
        let first = parts.next()?;
        let second = parts.next()?.to_string();

        let id = match first {
            "var" => NodeId::Variable { name: second },
            "local" => NodeId::Local { name: second },
            "module" => NodeId::Module { name: second },
            "data" => NodeId::DataSource {
                type_name: second,
                name: parts.next().map(str::to_string),
            },
            _ => NodeId::Resource {
                type_name: first.to_string(),
                name: second,
            },
        };
        Some(id)
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeId::Resource { .. } => NodeKind::Resource,
            NodeId::DataSource { .. } => NodeKind::DataSource,
            NodeId::Variable { .. } => NodeKind::Variable,
            NodeId::Local { .. } => NodeKind::Local,
            NodeId::Module { .. } => NodeKind::Module,
        }
    }

    /// Tests whether the dot-split segments of a candidate name this entity.
    ///
    /// The first two segments must agree; data sources also compare the third.
    pub fn matches(&self, segments: &[&str]) -> bool {
        let first = segments.first().copied();
        let second = segments.get(1).copied();

        match self {
            NodeId::Resource { type_name, name } => {
                first == Some(type_name.as_str()) && second == Some(name.as_str())
            }
            NodeId::DataSource { type_name, name } => {
                first == Some("data")
                    && second == Some(type_name.as_str())
                    && segments.get(2).copied() == name.as_deref()
            }
            NodeId::Variable { name } => first == Some("var") && second == Some(name.as_str()),
            NodeId::Local { name } => first == Some("local") && second == Some(name.as_str()),
            NodeId::Module { name } => first == Some("module") && second == Some(name.as_str()),
        }
    }
}
