//! Heading and section types.

use serde::{Deserialize, Serialize};

/// Position of a heading on its page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

/// A detected heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading text (trimmed)
    pub text: String,
    /// Level 1 (largest) to 3
    pub level: u8,
    /// Page number (1-indexed)
    pub page: u32,
    /// Where the heading starts
    pub position: Position,
}

impl Heading {
    /// Create a heading.
    pub fn new(text: impl Into<String>, level: u8, page: u32, position: Position) -> Self {
        Self {
            text: text.into(),
            level,
            page,
            position,
        }
    }
}

/// A document region introduced by a heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text that opened the section
    pub title: String,
    /// Page the section starts on
    pub page: u32,
    /// Body text collected until the next heading
    pub content: String,
}

impl Section {
    /// Create an empty section.
    pub fn new(title: impl Into<String>, page: u32) -> Self {
        Self {
            title: title.into(),
            page,
            content: String::new(),
        }
    }

    /// Append body text, separating fragments with a single space.
    pub fn append(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if !self.content.is_empty() {
            self.content.push(' ');
        }
        self.content.push_str(text);
    }

    /// Check if the section has no body text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_append() {
        let mut section = Section::new("Revenue", 1);
        assert!(section.is_empty());
        section.append("Sales grew ");
        section.append("   ");
        section.append("in Q3.");
        assert_eq!(section.content, "Sales grew in Q3.");
    }
}
