//! Pattern-based entity extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Entity, EntityKind};

/// Ordered pattern table. Output follows this order, then match order.
///
/// Digits and word boundaries are ASCII only: `٣/٤/٢٠٢٤` is not a date,
/// and a letter like `é` ends a word.
static PATTERNS: Lazy<Vec<(EntityKind, Regex)>> = Lazy::new(|| {
    [
        (
            EntityKind::Date,
            r"(?-u:\b)[0-9]{1,2}[/\-.][0-9]{1,2}[/\-.][0-9]{2,4}(?-u:\b)",
        ),
        // no trailing boundary: "%" is not a word character, so one would
        // reject "45%)" and "45% "
        (EntityKind::Percentage, r"(?-u:\b)[0-9]+(?:\.[0-9]+)?%"),
        (
            EntityKind::Money,
            r"(?i)\$[0-9]+(?:,[0-9]{3})*(?:\.[0-9]+)?(?: ?(?:million|billion|thousand))?",
        ),
        (
            EntityKind::Email,
            r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?-u:\b)",
        ),
        (EntityKind::Url, r"https?://[^\s]+"),
        (
            EntityKind::Phone,
            r"(?-u:\b)(?:\+[0-9]{1,2}\s?)?\(?[0-9]{3}\)?[\s.-]?[0-9]{3}[\s.-]?[0-9]{4}(?-u:\b)",
        ),
    ]
    .into_iter()
    .map(|(kind, pattern)| (kind, Regex::new(pattern).unwrap()))
    .collect()
});

/// Extract all entities from the document text.
///
/// Overlapping matches of different kinds are all kept. Offsets are
/// character offsets into `text`.
pub fn extract_entities(text: &str) -> Vec<Entity> {
    PATTERNS
        .iter()
        .flat_map(|(kind, regex)| {
            let mut offsets = CharOffsets::new(text);
            regex
                .find_iter(text)
                .map(move |m| Entity::new(*kind, m.as_str(), offsets.char_offset(m.start())))
        })
        .collect()
}

/// Converts increasing byte offsets to character offsets in one pass.
struct CharOffsets<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharOffsets<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    fn char_offset(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}
