//! Document-level types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Dimensions, Entity, EntityKind, Heading, Section, TableBlock};

/// The inferred structure of one document.
///
/// Produced once per analysis pass and never mutated by the engine
/// afterwards. Serializes to the camelCase JSON shape consumed by
/// summarizers and front ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStructure {
    /// Document metadata passed through from the input
    pub metadata: Metadata,

    /// Concatenated document text (each page followed by a blank line)
    pub text: String,

    /// Per-page text and dimensions
    pub pages: Vec<PageInfo>,

    /// Detected tables in page order
    pub tables: Vec<TableBlock>,

    /// Detected headings in page order
    pub headings: Vec<Heading>,

    /// Sections opened by headings
    pub sections: Vec<Section>,

    /// Typed entities found in `text`
    pub entities: Vec<Entity>,

    /// Ranked keywords
    pub keywords: Vec<String>,
}

impl DocumentStructure {
    /// Create an empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of analysed pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Check if the document produced no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&PageInfo> {
        self.pages.iter().find(|p| p.page_num == page_num)
    }

    /// Tables found on one page.
    pub fn tables_on_page(&self, page_num: u32) -> impl Iterator<Item = &TableBlock> {
        self.tables.iter().filter(move |t| t.page == page_num)
    }

    /// Entity counts per kind, in order of first appearance.
    pub fn entity_counts(&self) -> Vec<(EntityKind, usize)> {
        let mut counts: Vec<(EntityKind, usize)> = Vec::new();
        for entity in &self.entities {
            match counts.iter_mut().find(|(kind, _)| *kind == entity.kind) {
                Some((_, count)) => *count += 1,
                None => counts.push((entity.kind, 1)),
            }
        }
        counts
    }

    /// Number of whitespace-separated words in the document text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Text and dimensions of one analysed page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Page number (1-indexed)
    pub page_num: u32,

    /// Page text
    pub text: String,

    /// Page dimensions in points
    pub dimensions: Dimensions,
}

impl PageInfo {
    /// Create page info.
    pub fn new(page_num: u32, text: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            page_num,
            text: text.into(),
            dimensions,
        }
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Document subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Keywords declared by the producer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    /// Creator application
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// Producer application
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,

    /// Creation date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Check if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.keywords.is_none()
            && self.creator.is_none()
            && self.producer.is_none()
            && self.created.is_none()
    }
}
