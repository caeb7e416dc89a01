//! Token normalization and row grouping.

use crate::model::Token;

/// Vertical distance within which tokens share a row.
pub const ROW_TOLERANCE: f32 = 3.0;

/// Tokens sharing a y-coordinate within [`ROW_TOLERANCE`].
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Y of the token that opened the row
    pub y: f32,
    /// Tokens sorted left to right
    pub tokens: Vec<Token>,
}

impl Row {
    /// Create a row; tokens are sorted by x.
    pub fn new(y: f32, mut tokens: Vec<Token>) -> Self {
        tokens.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self { y, tokens }
    }

    /// Number of tokens in the row.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the row has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Row text, tokens joined by a space.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.trim())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Drop blank and malformed tokens and stamp the page number on the rest.
///
/// Extraction order is preserved.
pub fn normalize_tokens(tokens: &[Token], page: u32) -> Vec<Token> {
    tokens
        .iter()
        .filter(|token| {
            if token.is_blank() {
                return false;
            }
            if !token.has_finite_geometry() {
                log::debug!(
                    "Normalizer: dropping token with non-finite geometry on page {}: {:?}",
                    page,
                    token.text
                );
                return false;
            }
            true
        })
        .map(|token| {
            let mut token = token.clone();
            if token.page == 0 {
                token.page = page;
            }
            token
        })
        .collect()
}

/// Group tokens into rows by vertical proximity.
///
/// A token joins the first row, in creation order, whose key lies within
/// `tolerance`; otherwise it opens a new row keyed by its own y. The result
/// is sorted top to bottom.
pub fn group_into_rows(tokens: &[Token], tolerance: f32) -> Vec<Row> {
    let mut groups: Vec<(f32, Vec<Token>)> = Vec::new();

    for token in tokens {
        match groups
            .iter_mut()
            .find(|(y, _)| (y - token.y).abs() <= tolerance)
        {
            Some((_, members)) => members.push(token.clone()),
            None => groups.push((token.y, vec![token.clone()])),
        }
    }

    let mut rows: Vec<Row> = groups
        .into_iter()
        .map(|(y, members)| Row::new(y, members))
        .collect();
    rows.sort_by(|a, b| a.y.total_cmp(&b.y));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, x: f32, y: f32) -> Token {
        Token::new(text, x, y, 20.0, 10.0)
    }

    #[test]
    fn test_normalize_drops_blank_tokens() {
        let tokens = vec![token("A", 0.0, 0.0), token("   ", 5.0, 0.0), token("", 9.0, 0.0)];
        let normalized = normalize_tokens(&tokens, 2);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].page, 2);
    }

    #[test]
    fn test_normalize_drops_non_finite() {
        let tokens = vec![token("A", f32::INFINITY, 0.0), token("B", 1.0, 0.0)];
        let normalized = normalize_tokens(&tokens, 1);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].text, "B");
    }

    #[test]
    fn test_normalize_keeps_explicit_page() {
        let tokens = vec![token("A", 0.0, 0.0).on_page(7)];
        assert_eq!(normalize_tokens(&tokens, 1)[0].page, 7);
    }

    #[test]
    fn test_group_into_rows() {
        let tokens = vec![
            token("B1", 60.0, 100.0),
            token("A1", 10.0, 101.5),
            token("A2", 10.0, 115.0),
            token("B2", 60.0, 117.0),
        ];

        let rows = group_into_rows(&tokens, ROW_TOLERANCE);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].y, 100.0);
        assert_eq!(rows[0].text(), "A1 B1");
        assert_eq!(rows[1].text(), "A2 B2");
    }

    #[test]
    fn test_rows_sorted_top_to_bottom() {
        let tokens = vec![token("low", 0.0, 300.0), token("high", 0.0, 20.0)];
        let rows = group_into_rows(&tokens, ROW_TOLERANCE);
        assert_eq!(rows[0].text(), "high");
        assert_eq!(rows[1].text(), "low");
    }

    #[test]
    fn test_row_key_is_first_token() {
        // 103 is within 3 of 100 but 105 is not, even though it is
        // within 3 of 103; rows do not chain.
        let tokens = vec![token("a", 0.0, 100.0), token("b", 30.0, 103.0), token("c", 60.0, 105.0)];
        let rows = group_into_rows(&tokens, ROW_TOLERANCE);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].y, 105.0);
    }
}
