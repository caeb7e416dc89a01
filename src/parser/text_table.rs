//! Delimiter-based table detection for pages without geometry.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{TableBlock, TableSource};

static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Finds pipe- or space-aligned tables in plain text.
#[derive(Debug, Clone)]
pub struct TextTableFinder {
    min_rows: usize,
}

impl Default for TextTableFinder {
    fn default() -> Self {
        Self { min_rows: 2 }
    }
}

impl TextTableFinder {
    /// Create a finder with the default minimum of two rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a line looks like part of a table.
    pub fn is_tabular(line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.starts_with('|') && trimmed.ends_with('|') {
            return true;
        }
        line.contains("  ") && MULTI_SPACE.split(trimmed).count() > 2
    }

    /// Split a tabular line into cells.
    pub fn split_cells(line: &str) -> Vec<String> {
        if line.contains('|') {
            line.split('|')
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(String::from)
                .collect()
        } else {
            MULTI_SPACE
                .split(line.trim())
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(String::from)
                .collect()
        }
    }

    /// Find tables in the text of one page.
    pub fn find(&self, page: u32, text: &str) -> Vec<TableBlock> {
        let mut tables = Vec::new();
        let mut run: Vec<(usize, Vec<String>)> = Vec::new();

        for (index, line) in text.lines().enumerate() {
            if Self::is_tabular(line) {
                let cells = Self::split_cells(line);
                if cells.len() > 1 {
                    run.push((index, cells));
                }
            } else if !run.is_empty() {
                tables.extend(self.close(page, std::mem::take(&mut run)));
            }
        }
        tables.extend(self.close(page, run));

        if !tables.is_empty() {
            log::debug!("TextTableFinder: page {} produced {} table(s)", page, tables.len());
        }
        tables
    }

    fn close(&self, page: u32, run: Vec<(usize, Vec<String>)>) -> Option<TableBlock> {
        if run.len() < self.min_rows {
            return None;
        }

        let start_y = run.first().map(|(i, _)| *i as f32).unwrap_or_default();
        let end_y = run.last().map(|(i, _)| *i as f32).unwrap_or_default();
        let rows: Vec<Vec<String>> = run.into_iter().map(|(_, cells)| cells).collect();

        Some(TableBlock {
            page,
            start_y,
            end_y,
            columns: Vec::new(),
            header_row: rows.first().cloned().unwrap_or_default(),
            rows,
            source: TableSource::Text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_tabular() {
        assert!(TextTableFinder::is_tabular("| a | b |"));
        assert!(TextTableFinder::is_tabular("Name   Age   City"));
        assert!(!TextTableFinder::is_tabular("Name   Age"));
        assert!(!TextTableFinder::is_tabular("An ordinary sentence here."));
        assert!(!TextTableFinder::is_tabular("    indented prose"));
    }

    #[test]
    fn test_split_cells() {
        assert_eq!(TextTableFinder::split_cells("| a |  | b |"), vec!["a", "b"]);
        assert_eq!(
            TextTableFinder::split_cells("  Q1    $10   4%  "),
            vec!["Q1", "$10", "4%"]
        );
    }

    #[test]
    fn test_pipe_table() {
        let text = "Intro text\n| Name | Age |\n| Alice | 30 |\n| Bob | 25 |\nOutro";
        let tables = TextTableFinder::new().find(3, text);

        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(table.page, 3);
        assert_eq!(table.start_y, 1.0);
        assert_eq!(table.end_y, 3.0);
        assert_eq!(table.header_row, vec!["Name", "Age"]);
        assert_eq!(table.row_count(), 3);
        assert!(table.columns.is_empty());
        assert_eq!(table.source, TableSource::Text);
    }

    #[test]
    fn test_single_row_run_rejected() {
        let text = "Name   Age   City\nprose follows";
        assert!(TextTableFinder::new().find(1, text).is_empty());
    }

    #[test]
    fn test_runs_split_by_prose() {
        let text = "a  b  c\nd  e  f\nprose\ng  h  i\nj  k  l\nm  n  o";
        let tables = TextTableFinder::new().find(1, text);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1].row_count(), 3);
        assert_eq!(tables[1].start_y, 3.0);
    }

    #[test]
    fn test_table_at_end_of_text() {
        let text = "| x | y |\n| 1 | 2 |";
        assert_eq!(TextTableFinder::new().find(1, text).len(), 1);
    }
}
