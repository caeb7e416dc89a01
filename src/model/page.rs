//! Page-level input types.

use serde::{Deserialize, Serialize};

use super::Metadata;

/// Default page width in points (US Letter).
const LETTER_WIDTH: f32 = 612.0;
/// Default page height in points (US Letter).
const LETTER_HEIGHT: f32 = 792.0;

/// A single positioned unit of text produced by the decoding collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// The text content
    pub text: String,
    /// X position (left edge)
    pub x: f32,
    /// Y position (top-down page coordinates)
    pub y: f32,
    /// Width of the text run
    #[serde(default)]
    pub width: f32,
    /// Glyph box height
    #[serde(default)]
    pub height: f32,
    /// Font size in points
    #[serde(default)]
    pub font_size: f32,
    /// Page number (1-indexed, 0 = inherit from the owning page)
    #[serde(default)]
    pub page: u32,
}

impl Token {
    /// Create a new token. The font size defaults to the glyph height.
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
            font_size: height,
            page: 0,
        }
    }

    /// Set the font size and return self.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the page number and return self.
    pub fn on_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Right edge of the token.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Horizontal center of the token.
    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Font size used for heading decisions. Falls back to the glyph
    /// height when the extractor did not report a size.
    pub fn effective_font_size(&self) -> f32 {
        if self.font_size > 0.0 {
            self.font_size
        } else {
            self.height
        }
    }

    /// Check if the token carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Check if all geometry is finite.
    pub fn has_finite_geometry(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.font_size.is_finite()
    }
}

/// Fidelity of the font metrics attached to positioned tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontMetrics {
    /// Per-token font heights are reliable
    #[default]
    Precise,
    /// Heights are approximate; only line-level decisions are trustworthy
    Coarse,
}

/// Content of one page, resolved once when the input is decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageContent {
    /// Tokens with positional and font metadata
    Positioned {
        /// Tokens in extraction order
        tokens: Vec<Token>,
        /// How far the font sizes can be trusted
        #[serde(rename = "fontMetrics", default)]
        font_metrics: FontMetrics,
    },

    /// Plain text only (degraded mode)
    TextOnly {
        /// Raw page text, lines separated by `\n`
        text: String,
    },
}

impl PageContent {
    /// Create positioned content with precise font metrics.
    pub fn positioned(tokens: Vec<Token>) -> Self {
        PageContent::Positioned {
            tokens,
            font_metrics: FontMetrics::Precise,
        }
    }

    /// Create positioned content with coarse font metrics.
    pub fn coarse(tokens: Vec<Token>) -> Self {
        PageContent::Positioned {
            tokens,
            font_metrics: FontMetrics::Coarse,
        }
    }

    /// Create text-only content.
    pub fn text(text: impl Into<String>) -> Self {
        PageContent::TextOnly { text: text.into() }
    }

    /// Check if this content carries geometry.
    pub fn is_positioned(&self) -> bool {
        matches!(self, PageContent::Positioned { .. })
    }
}

/// Page width and height in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: LETTER_WIDTH,
            height: LETTER_HEIGHT,
        }
    }
}

/// One decoded page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInput {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in points
    #[serde(default = "default_width")]
    pub width: f32,

    /// Page height in points
    #[serde(default = "default_height")]
    pub height: f32,

    /// Page content
    pub content: PageContent,
}

fn default_width() -> f32 {
    LETTER_WIDTH
}

fn default_height() -> f32 {
    LETTER_HEIGHT
}

impl PageInput {
    /// Create a page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32, content: PageContent) -> Self {
        Self {
            number,
            width,
            height,
            content,
        }
    }

    /// Create a Letter-sized page.
    pub fn letter(number: u32, content: PageContent) -> Self {
        Self::new(number, LETTER_WIDTH, LETTER_HEIGHT, content)
    }

    /// Get page dimensions.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }
}

/// A decoded document, as handed over by the extraction collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentInput {
    /// Document metadata (title, author, etc.)
    #[serde(default)]
    pub metadata: Metadata,

    /// Pages in any order; analysis sorts them by number
    pub pages: Vec<PageInput>,
}

impl DocumentInput {
    /// Create an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a text-only input. Pages are separated by form feeds.
    pub fn from_text(text: &str) -> Self {
        let pages = text
            .split('\u{000C}')
            .enumerate()
            .map(|(i, page_text)| PageInput::letter(i as u32 + 1, PageContent::text(page_text)))
            .collect();

        Self {
            metadata: Metadata::default(),
            pages,
        }
    }

    /// Add a page.
    pub fn add_page(&mut self, page: PageInput) {
        self.pages.push(page);
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_geometry() {
        let token = Token::new("Total", 100.0, 50.0, 40.0, 12.0);
        assert_eq!(token.right(), 140.0);
        assert_eq!(token.center(), 120.0);
        assert_eq!(token.font_size, 12.0);
        assert!(!token.is_blank());
        assert!(Token::new("  ", 0.0, 0.0, 0.0, 0.0).is_blank());
    }

    #[test]
    fn test_token_non_finite() {
        let token = Token::new("x", f32::NAN, 0.0, 1.0, 1.0);
        assert!(!token.has_finite_geometry());
    }

    #[test]
    fn test_from_text_splits_form_feeds() {
        let input = DocumentInput::from_text("first page\u{000C}second page");
        assert_eq!(input.page_count(), 2);
        assert_eq!(input.pages[1].number, 2);
        assert!(!input.pages[0].content.is_positioned());
    }

    #[test]
    fn test_page_content_json_shape() {
        let json = r#"{
            "number": 1,
            "content": {
                "kind": "positioned",
                "fontMetrics": "coarse",
                "tokens": [{"text": "Hi", "x": 1, "y": 2, "width": 3, "height": 10, "fontSize": 10}]
            }
        }"#;
        let page: PageInput = serde_json::from_str(json).unwrap();
        assert_eq!(page.width, 612.0);
        match page.content {
            PageContent::Positioned {
                tokens,
                font_metrics,
            } => {
                assert_eq!(font_metrics, FontMetrics::Coarse);
                assert_eq!(tokens[0].font_size, 10.0);
            }
            PageContent::TextOnly { .. } => panic!("Expected positioned content"),
        }
    }
}
