//! Column band estimation.

use super::normalizer::Row;
use crate::model::ColumnBand;

/// Horizontal slack when testing a token center against a band.
pub const BAND_TOLERANCE: f32 = 10.0;

/// Share of tokens that must land in a band for a row to be compatible.
pub const COMPATIBLE_RATIO: f32 = 0.5;

/// An ordered set of column bands for one table under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnModel {
    bands: Vec<ColumnBand>,
}

impl ColumnModel {
    /// Create a model from explicit bands.
    pub fn new(bands: Vec<ColumnBand>) -> Self {
        Self { bands }
    }

    /// Derive one band per token of the row.
    pub fn from_row(row: &Row) -> Self {
        let bands = row
            .tokens
            .iter()
            .map(|t| ColumnBand::new(t.x, t.right()))
            .collect();
        Self { bands }
    }

    /// Get the bands.
    pub fn bands(&self) -> &[ColumnBand] {
        &self.bands
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Check if the model has no bands.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Merge with another estimate.
    ///
    /// Equal counts average elementwise. Otherwise the set with more bands
    /// is kept as is and the other is discarded.
    ///
    /// In noisy tables this can drop legitimate columns: a single row that
    /// splits one cell in two replaces the running estimate. This is kept on
    /// purpose.
    pub fn merged(&self, incoming: &ColumnModel) -> ColumnModel {
        if self.bands.len() == incoming.bands.len() {
            let bands = self
                .bands
                .iter()
                .zip(&incoming.bands)
                .map(|(a, b)| a.average(b))
                .collect();
            return ColumnModel { bands };
        }

        if incoming.bands.len() > self.bands.len() {
            log::debug!(
                "ColumnModel: band count grew {} -> {}, replacing estimate",
                self.bands.len(),
                incoming.bands.len()
            );
            incoming.clone()
        } else {
            log::debug!(
                "ColumnModel: ignoring row with {} bands against {}",
                incoming.bands.len(),
                self.bands.len()
            );
            self.clone()
        }
    }

    /// Check whether more than half of the row's token centers fall inside
    /// some band widened by `tolerance`.
    pub fn accepts(&self, row: &Row, tolerance: f32) -> bool {
        if row.tokens.is_empty() {
            return false;
        }

        let matched = row
            .tokens
            .iter()
            .filter(|t| {
                let center = t.center();
                self.bands.iter().any(|band| band.contains(center, tolerance))
            })
            .count();

        matched as f32 / row.tokens.len() as f32 > COMPATIBLE_RATIO
    }

    /// Assign one cell per band, choosing the token whose center is closest
    /// to the band center. Ties go to the earlier token; a token may fill
    /// more than one cell.
    pub fn cells(&self, row: &Row) -> Vec<String> {
        self.bands
            .iter()
            .map(|band| {
                let mut best: Option<(f32, &str)> = None;
                for token in &row.tokens {
                    let distance = (token.center() - band.center).abs();
                    match best {
                        Some((d, _)) if distance >= d => {}
                        _ => best = Some((distance, token.text.trim())),
                    }
                }
                best.map(|(_, text)| text.to_string()).unwrap_or_default()
            })
            .collect()
    }
}

impl From<ColumnModel> for Vec<ColumnBand> {
    fn from(model: ColumnModel) -> Self {
        model.bands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Token;

    fn make_row(y: f32, cells: &[(&str, f32, f32)]) -> Row {
        let tokens = cells
            .iter()
            .map(|&(text, x, width)| Token::new(text, x, y, width, 10.0))
            .collect();
        Row::new(y, tokens)
    }

    fn model(bands: &[(f32, f32)]) -> ColumnModel {
        ColumnModel::new(bands.iter().map(|&(s, e)| ColumnBand::new(s, e)).collect())
    }

    #[test]
    fn test_from_row() {
        let row = make_row(10.0, &[("a", 10.0, 20.0), ("b", 100.0, 40.0)]);
        let model = ColumnModel::from_row(&row);
        assert_eq!(model.len(), 2);
        assert_eq!(model.bands()[1], ColumnBand::new(100.0, 140.0));
        assert_eq!(model.bands()[1].center, 120.0);
    }

    #[test]
    fn test_merge_equal_counts_averages() {
        let left = model(&[(0.0, 10.0), (100.0, 120.0)]);
        let right = model(&[(4.0, 14.0), (110.0, 130.0)]);

        let merged = left.merged(&right);
        assert_eq!(merged.bands()[0], ColumnBand::new(2.0, 12.0));
        assert_eq!(merged.bands()[1], ColumnBand::new(105.0, 125.0));
    }

    #[test]
    fn test_merge_equal_counts_pairwise_symmetric() {
        let left = model(&[(0.0, 10.0), (100.0, 120.0)]);
        let right = model(&[(4.0, 14.0), (110.0, 130.0)]);
        assert_eq!(left.merged(&right), right.merged(&left));
    }

    #[test]
    fn test_merge_fold_depends_on_row_order() {
        // Averaging weighs later rows more heavily, so the result of folding
        // a sequence of rows depends on the order they arrive in.
        let a = model(&[(0.0, 10.0)]);
        let b = model(&[(8.0, 18.0)]);
        let c = model(&[(16.0, 26.0)]);

        let abc = a.merged(&b).merged(&c);
        let cba = c.merged(&b).merged(&a);
        assert_eq!(abc.bands()[0].start, 10.0);
        assert_eq!(cba.bands()[0].start, 6.0);
    }

    #[test]
    fn test_merge_unequal_counts_keeps_larger_left() {
        let wide = model(&[(0.0, 10.0), (50.0, 60.0), (100.0, 110.0)]);
        let narrow = model(&[(0.0, 10.0), (100.0, 110.0)]);
        assert_eq!(wide.merged(&narrow), wide);
    }

    #[test]
    fn test_merge_unequal_counts_keeps_larger_right() {
        let wide = model(&[(0.0, 10.0), (50.0, 60.0), (100.0, 110.0)]);
        let narrow = model(&[(0.0, 10.0), (100.0, 110.0)]);
        assert_eq!(narrow.merged(&wide), wide);
    }

    #[test]
    fn test_accepts_majority() {
        let bands = model(&[(0.0, 40.0), (100.0, 140.0)]);

        // centers 20 and 120 both land in bands
        let aligned = make_row(0.0, &[("a", 0.0, 40.0), ("b", 100.0, 40.0)]);
        assert!(bands.accepts(&aligned, BAND_TOLERANCE));

        // centers 20 and 300: exactly half is not a majority
        let half = make_row(0.0, &[("a", 0.0, 40.0), ("b", 280.0, 40.0)]);
        assert!(!bands.accepts(&half, BAND_TOLERANCE));
    }

    #[test]
    fn test_accepts_uses_tolerance() {
        let bands = model(&[(100.0, 140.0)]);
        let near = make_row(0.0, &[("a", 145.0, 10.0)]); // center 150
        assert!(bands.accepts(&near, BAND_TOLERANCE));
        let far = make_row(0.0, &[("a", 147.0, 10.0)]); // center 152
        assert!(!bands.accepts(&far, BAND_TOLERANCE));
    }

    #[test]
    fn test_cells_nearest_center() {
        let bands = model(&[(0.0, 40.0), (100.0, 140.0), (200.0, 240.0)]);
        let row = make_row(0.0, &[("Name", 0.0, 40.0), ("Age", 105.0, 30.0)]);

        // The third band's nearest token is "Age"
        assert_eq!(bands.cells(&row), vec!["Name", "Age", "Age"]);
    }

    #[test]
    fn test_cells_tie_goes_to_first() {
        let bands = model(&[(40.0, 60.0)]); // center 50
        let row = make_row(0.0, &[("left", 30.0, 10.0), ("right", 60.0, 10.0)]);
        assert_eq!(bands.cells(&row), vec!["left"]);
    }

    #[test]
    fn test_cells_empty_row() {
        let bands = model(&[(0.0, 10.0), (20.0, 30.0)]);
        let row = Row::new(0.0, Vec::new());
        assert_eq!(bands.cells(&row), vec!["", ""]);
    }
}
