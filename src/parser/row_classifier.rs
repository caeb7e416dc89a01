//! Structured/unstructured row classification.
//!
//! A row is "structured" when the horizontal gaps between its tokens are
//! regular enough to suggest column alignment.

use super::normalizer::Row;
use crate::model::Token;

/// Spacing statistics over the gaps between adjacent tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingStats {
    /// Mean gap
    pub mean: f64,
    /// Population standard deviation of the gaps
    pub std_dev: f64,
}

impl SpacingStats {
    /// Relative spread (`std_dev / mean`). Not finite when the mean is zero.
    pub fn ratio(&self) -> f64 {
        self.std_dev / self.mean
    }
}

/// Compute gap statistics for tokens sorted by x.
///
/// Returns `None` when there are fewer than two tokens.
pub fn spacing_stats(tokens: &[Token]) -> Option<SpacingStats> {
    if tokens.len() < 2 {
        return None;
    }

    let gaps: Vec<f64> = tokens
        .windows(2)
        .map(|pair| pair[1].x as f64 - (pair[0].x as f64 + pair[0].width as f64))
        .collect();

    let n = gaps.len() as f64;
    let mean = gaps.iter().sum::<f64>() / n;
    let variance = gaps.iter().map(|g| (g - mean).powi(2)).sum::<f64>() / n;

    Some(SpacingStats {
        mean,
        std_dev: variance.sqrt(),
    })
}

/// Classifier configuration.
#[derive(Debug, Clone)]
pub struct RowClassifierConfig {
    /// Maximum relative spread for a structured row
    pub max_relative_spread: f64,
    /// Absolute spread below which a row is structured regardless of ratio
    pub max_absolute_spread: f64,
}

impl Default for RowClassifierConfig {
    fn default() -> Self {
        Self {
            max_relative_spread: 0.5,
            max_absolute_spread: 10.0,
        }
    }
}

/// Decides whether a row looks like a table row.
#[derive(Debug, Clone, Default)]
pub struct RowClassifier {
    config: RowClassifierConfig,
}

impl RowClassifier {
    /// Create a classifier with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with custom thresholds.
    pub fn with_config(config: RowClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify a row. Rows with fewer than two tokens are never structured.
    pub fn is_structured(&self, row: &Row) -> bool {
        let Some(stats) = spacing_stats(&row.tokens) else {
            return false;
        };

        let ratio = stats.ratio();
        (ratio.is_finite() && ratio < self.config.max_relative_spread)
            || stats.std_dev < self.config.max_absolute_spread
    }
}
