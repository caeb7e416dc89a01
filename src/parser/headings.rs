//! Heading detection and section folding.
//!
//! Strategies turn the tokens of one page into a stream of [`LayoutEvent`]s.
//! A [`SectionFolder`] then folds the events of all pages, in page order, into
//! headings and sections.

use crate::model::{Heading, Position, Section, Token};

/// One classified piece of page layout.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEvent {
    /// A heading
    Heading(Heading),
    /// Body text
    Body(String),
}

/// A heading classification strategy.
pub trait HeadingStrategy: Send + Sync {
    /// Strategy name for logging.
    fn name(&self) -> &str;

    /// Classify the (normalized) tokens of a page.
    fn scan(&self, page: u32, tokens: &[Token]) -> Vec<LayoutEvent>;

    /// Classify a page that carries no font metadata. Every non-blank line
    /// is body text.
    fn scan_text(&self, _page: u32, text: &str) -> Vec<LayoutEvent> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| LayoutEvent::Body(line.to_string()))
            .collect()
    }
}

/// Per-token strategy for pages with reliable font sizes.
#[derive(Debug, Clone)]
pub struct GeometricHeadings {
    /// Font size above which a token is a heading
    pub heading_size: f32,
    /// Font size above which a heading is level 2
    pub level2_size: f32,
    /// Font size above which a heading is level 1
    pub level1_size: f32,
}

impl Default for GeometricHeadings {
    fn default() -> Self {
        Self {
            heading_size: 14.0,
            level2_size: 16.0,
            level1_size: 18.0,
        }
    }
}

impl GeometricHeadings {
    /// Create the strategy with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    fn level(&self, font_size: f32) -> u8 {
        if font_size > self.level1_size {
            1
        } else if font_size > self.level2_size {
            2
        } else {
            3
        }
    }
}

impl HeadingStrategy for GeometricHeadings {
    fn name(&self) -> &str {
        "geometric"
    }

    fn scan(&self, page: u32, tokens: &[Token]) -> Vec<LayoutEvent> {
        tokens
            .iter()
            .filter(|t| !t.is_blank())
            .map(|t| {
                let size = t.effective_font_size();
                let text = t.text.trim();
                if size > self.heading_size {
                    LayoutEvent::Heading(Heading::new(
                        text,
                        self.level(size),
                        page,
                        Position { x: t.x, y: t.y },
                    ))
                } else {
                    LayoutEvent::Body(text.to_string())
                }
            })
            .collect()
    }
}

/// Line-level strategy for pages whose font sizes are approximate.
#[derive(Debug, Clone)]
pub struct CoarseHeadings {
    /// Font size above which a line may be a heading
    pub heading_size: f32,
    /// Font size above which a heading is level 2
    pub level2_size: f32,
    /// Font size above which a heading is level 1
    pub level1_size: f32,
    /// Shortest heading, in characters
    pub min_len: usize,
    /// Longest heading, in characters
    pub max_len: usize,
}

impl Default for CoarseHeadings {
    fn default() -> Self {
        Self {
            heading_size: 12.0,
            level2_size: 14.0,
            level1_size: 16.0,
            min_len: 2,
            max_len: 100,
        }
    }
}

/// A line of tokens sharing a rounded y.
struct Line<'a> {
    tokens: Vec<&'a Token>,
}

impl Line<'_> {
    fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.trim())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl CoarseHeadings {
    /// Create the strategy with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    fn level(&self, font_size: f32) -> u8 {
        if font_size > self.level1_size {
            1
        } else if font_size > self.level2_size {
            2
        } else {
            3
        }
    }

    /// Check whether a line's text and size qualify it as a heading.
    pub fn is_candidate(&self, text: &str, font_size: f32) -> bool {
        let len = text.chars().count();
        let leading = text
            .chars()
            .next()
            .map(|c| c.is_uppercase() || c.is_ascii_digit())
            .unwrap_or(false);

        (self.min_len..=self.max_len).contains(&len) && leading && font_size > self.heading_size
    }

    fn lines<'a>(&self, tokens: &'a [Token]) -> Vec<Line<'a>> {
        let mut keyed: Vec<(i64, Line<'a>)> = Vec::new();
        for token in tokens.iter().filter(|t| !t.is_blank()) {
            let key = token.y.round() as i64;
            match keyed.iter_mut().find(|(k, _)| *k == key) {
                Some((_, line)) => line.tokens.push(token),
                None => keyed.push((key, Line { tokens: vec![token] })),
            }
        }

        keyed.sort_by_key(|(k, _)| *k);
        keyed
            .into_iter()
            .map(|(_, mut line)| {
                line.tokens.sort_by(|a, b| a.x.total_cmp(&b.x));
                line
            })
            .collect()
    }
}

impl HeadingStrategy for CoarseHeadings {
    fn name(&self) -> &str {
        "coarse"
    }

    fn scan(&self, page: u32, tokens: &[Token]) -> Vec<LayoutEvent> {
        self.lines(tokens)
            .into_iter()
            .filter_map(|line| {
                let first = line.tokens.first()?;
                let text = line.text();
                let size = first.effective_font_size();
                if self.is_candidate(&text, size) {
                    Some(LayoutEvent::Heading(Heading::new(
                        text,
                        self.level(size),
                        page,
                        Position {
                            x: first.x,
                            y: first.y,
                        },
                    )))
                } else {
                    Some(LayoutEvent::Body(text))
                }
            })
            .collect()
    }
}

/// Folds layout events into headings and sections.
///
/// Body text goes to the most recently opened section; text before the first
/// heading is dropped. A heading whose title already opened a section on the
/// same page records the heading but does not open a second section.
#[derive(Debug, Default)]
pub struct SectionFolder {
    headings: Vec<Heading>,
    sections: Vec<Section>,
}

impl SectionFolder {
    /// Create an empty folder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event.
    pub fn push(&mut self, event: LayoutEvent) {
        match event {
            LayoutEvent::Heading(heading) => {
                let seen = self
                    .sections
                    .iter()
                    .any(|s| s.title == heading.text && s.page == heading.page);
                if !seen {
                    self.sections.push(Section::new(heading.text.clone(), heading.page));
                }
                self.headings.push(heading);
            }
            LayoutEvent::Body(text) => {
                if let Some(section) = self.sections.last_mut() {
                    section.append(&text);
                }
            }
        }
    }

    /// Fold a sequence of events.
    pub fn extend(&mut self, events: impl IntoIterator<Item = LayoutEvent>) {
        for event in events {
            self.push(event);
        }
    }

    /// Finish folding and return headings and sections.
    pub fn finish(self) -> (Vec<Heading>, Vec<Section>) {
        (self.headings, self.sections)
    }
}
