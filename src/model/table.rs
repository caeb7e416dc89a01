//! Table types.

use serde::{Deserialize, Serialize};

/// One estimated column boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnBand {
    /// Left edge
    pub start: f32,
    /// Right edge
    pub end: f32,
    /// Horizontal center
    pub center: f32,
}

impl ColumnBand {
    /// Create a band spanning `[start, end]`.
    pub fn new(start: f32, end: f32) -> Self {
        Self {
            start,
            end,
            center: start + (end - start) / 2.0,
        }
    }

    /// Check if `x` falls inside the band widened by `tolerance` on both sides.
    pub fn contains(&self, x: f32, tolerance: f32) -> bool {
        x >= self.start - tolerance && x <= self.end + tolerance
    }

    /// Elementwise average of two bands.
    pub fn average(&self, other: &ColumnBand) -> ColumnBand {
        ColumnBand {
            start: (self.start + other.start) / 2.0,
            end: (self.end + other.end) / 2.0,
            center: (self.center + other.center) / 2.0,
        }
    }
}

/// How a table was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableSource {
    /// Row/column geometry of positioned tokens
    #[default]
    Geometric,
    /// Delimiter heuristics over plain text lines
    Text,
}

/// A detected table region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableBlock {
    /// Page number (1-indexed)
    pub page: u32,

    /// Y of the first row (line index for text tables)
    pub start_y: f32,

    /// Y of the row that closed the table (line index for text tables)
    pub end_y: f32,

    /// Column bands (empty for text tables)
    pub columns: Vec<ColumnBand>,

    /// Cell text, row-major
    pub rows: Vec<Vec<String>>,

    /// Copy of the first row
    pub header_row: Vec<String>,

    /// Detection method
    pub source: TableSource,
}

impl TableBlock {
    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        if self.columns.is_empty() {
            self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
        } else {
            self.columns.len()
        }
    }

    /// Rows after the header.
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
