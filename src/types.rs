use serde::{Deserialize, Serialize};

/// The catalog entry a reference resolved to, plus the text that named it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Referencee {
    /// Matching catalog identifier, e.g. `aws_instance.foo`.
    pub id: String,
    /// Exact matched substring, e.g. `aws_instance.foo.id`.
    pub full: String,
}

/// An occurrence of an entity access inside an interpolation string.
///
/// `start` and `end` are byte offsets into the original (unstripped) input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub start: usize,
    pub end: usize,
    pub referencee: Referencee,
}

impl Reference {
    pub fn new(start: usize, id: &str, full: &str) -> Self {
        Reference {
            start,
            end: start + full.len(),
            referencee: Referencee {
                id: id.to_string(),
                full: full.to_string(),
            },
        }
    }

    /// Dot-separated segments of the matched text.
    pub fn segments(&self) -> Vec<&str> {
        self.referencee.full.split('.').collect()
    }
}

/// Kinds of expression produced by synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionKind {
    StringLiteral,
    Identifier,
    Member,
    Template,
}

impl ExpressionKind {
    /// Returns the string representation of this expression kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpressionKind::StringLiteral => "string_literal",
            ExpressionKind::Identifier => "identifier",
            ExpressionKind::Member => "member",
            ExpressionKind::Template => "template",
        }
    }
}

/// One literal segment of a template expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateElement {
    pub raw: String,
    /// Set on the final segment only.
    pub tail: bool,
}

/// Target-language expression tree handed to the downstream printer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expression {
    StringLiteral {
        value: String,
    },
    Identifier {
        name: String,
    },
    Member {
        object: Box<Expression>,
        property: String,
    },
    /// `quasis` always holds one more element than `expressions`.
    Template {
        quasis: Vec<TemplateElement>,
        expressions: Vec<Expression>,
    },
}

impl Expression {
    pub fn string_literal(value: impl Into<String>) -> Self {
        Expression::StringLiteral {
            value: value.into(),
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier { name: name.into() }
    }

    /// Wraps `object` in a property access.
    pub fn member(object: Expression, property: impl Into<String>) -> Self {
        Expression::Member {
            object: Box::new(object),
            property: property.into(),
        }
    }

    pub fn kind(&self) -> ExpressionKind {
        match self {
            Expression::StringLiteral { .. } => ExpressionKind::StringLiteral,
            Expression::Identifier { .. } => ExpressionKind::Identifier,
            Expression::Member { .. } => ExpressionKind::Member,
            Expression::Template { .. } => ExpressionKind::Template,
        }
    }

    /// Flattens a member chain into `[base, prop1, prop2, ...]`.
    ///
    /// Returns `None` for literals and templates.
    pub fn member_path(&self) -> Option<Vec<&str>> {
        match self {
            Expression::Identifier { name } => Some(vec![name.as_str()]),
            Expression::Member { object, property } => {
                let mut path = object.member_path()?;
                path.push(property.as_str());
                Some(path)
            }
            _ => None,
        }
    }
}
