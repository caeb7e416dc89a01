//! Typed entity spans.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a pattern-matched entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Numeric dates such as `03/04/2024`
    Date,
    /// Percentages such as `45%`
    Percentage,
    /// Dollar amounts, optionally with a magnitude word
    Money,
    /// Email addresses
    Email,
    /// http(s) URLs
    Url,
    /// North American style phone numbers
    Phone,
}

impl EntityKind {
    /// Lowercase name used in JSON and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Date => "date",
            EntityKind::Percentage => "percentage",
            EntityKind::Money => "money",
            EntityKind::Email => "email",
            EntityKind::Url => "url",
            EntityKind::Phone => "phone",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed span of the document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Entity kind
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// Literal matched text
    pub value: String,
    /// Character offset into the concatenated document text
    pub source_offset: usize,
}

impl Entity {
    /// Create an entity.
    pub fn new(kind: EntityKind, value: impl Into<String>, source_offset: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            source_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_json() {
        let entity = Entity::new(EntityKind::Email, "a@b.io", 12);
        let json = serde_json::to_string(&entity).unwrap();
        assert_eq!(json, r#"{"type":"email","value":"a@b.io","sourceOffset":12}"#);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EntityKind::Percentage.to_string(), "percentage");
    }
}
