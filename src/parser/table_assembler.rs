//! Row-by-row table assembly.
//!
//! Rows are folded through an explicit state value. A table is only emitted
//! once a run of consecutive structured rows reaches the configured gate.

use super::column_model::{ColumnModel, BAND_TOLERANCE};
use super::normalizer::Row;
use crate::model::{TableBlock, TableSource};

/// A row with its structured verdict attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRow {
    /// The row
    pub row: Row,
    /// Whether the row's spacing looks tabular
    pub structured: bool,
}

impl ClassifiedRow {
    /// Create a classified row.
    pub fn new(row: Row, structured: bool) -> Self {
        Self { row, structured }
    }
}

/// Configuration for table assembly.
#[derive(Debug, Clone)]
pub struct TableAssemblerConfig {
    /// Structured rows required before a run is accepted
    pub min_structured_rows: usize,
    /// Minimum rows in an emitted table
    pub min_rows: usize,
    /// Slack for the band compatibility test
    pub band_tolerance: f32,
}

impl Default for TableAssemblerConfig {
    fn default() -> Self {
        Self {
            min_structured_rows: 3,
            min_rows: 2,
            band_tolerance: BAND_TOLERANCE,
        }
    }
}

/// A table under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDraft {
    /// Current column estimate
    pub columns: ColumnModel,
    /// Rows accepted so far
    pub rows: Vec<Row>,
    /// Y of the first row
    pub start_y: f32,
    /// Structured rows seen in this run
    pub consecutive: usize,
}

/// Assembler state between rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AssemblerState {
    /// Not inside a table
    #[default]
    Idle,
    /// Accumulating rows
    Building(TableDraft),
}

/// Result of feeding one row to the assembler.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// State after the row
    pub next: AssemblerState,
    /// Draft closed by this row, with the closing y
    pub closed: Option<(TableDraft, f32)>,
}

impl Transition {
    fn stay(next: AssemblerState) -> Self {
        Self { next, closed: None }
    }

    fn close(draft: TableDraft, end_y: f32) -> Self {
        Self {
            next: AssemblerState::Idle,
            closed: Some((draft, end_y)),
        }
    }
}

/// Geometric table detector.
#[derive(Debug, Clone, Default)]
pub struct TableAssembler {
    config: TableAssemblerConfig,
}

impl TableAssembler {
    /// Create an assembler with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assembler with custom configuration.
    pub fn with_config(config: TableAssemblerConfig) -> Self {
        Self { config }
    }

    /// Assemble tables from the rows of one page, sorted top to bottom.
    pub fn assemble(&self, page: u32, rows: &[ClassifiedRow]) -> Vec<TableBlock> {
        let (state, mut tables) = rows.iter().fold(
            (AssemblerState::Idle, Vec::new()),
            |(state, mut tables), row| {
                let transition = self.step(state, row);
                if let Some((draft, end_y)) = transition.closed {
                    tables.extend(self.emit(page, draft, end_y));
                }
                (transition.next, tables)
            },
        );

        if let AssemblerState::Building(draft) = state {
            let end_y = draft.rows.last().map(|r| r.y).unwrap_or(draft.start_y);
            tables.extend(self.emit(page, draft, end_y));
        }

        log::debug!("TableAssembler: page {} produced {} table(s)", page, tables.len());
        tables
    }

    /// Advance the state by one row.
    pub fn step(&self, state: AssemblerState, row: &ClassifiedRow) -> Transition {
        if row.row.len() < 2 {
            return match state {
                AssemblerState::Building(draft) => Transition::close(draft, row.row.y),
                AssemblerState::Idle => Transition::stay(AssemblerState::Idle),
            };
        }

        match state {
            AssemblerState::Idle if row.structured => {
                Transition::stay(AssemblerState::Building(TableDraft {
                    columns: ColumnModel::from_row(&row.row),
                    rows: vec![row.row.clone()],
                    start_y: row.row.y,
                    consecutive: 1,
                }))
            }
            AssemblerState::Idle => Transition::stay(AssemblerState::Idle),
            AssemblerState::Building(mut draft) if row.structured => {
                draft.columns = draft.columns.merged(&ColumnModel::from_row(&row.row));
                draft.rows.push(row.row.clone());
                draft.consecutive += 1;
                Transition::stay(AssemblerState::Building(draft))
            }
            AssemblerState::Building(mut draft) => {
                if draft.columns.accepts(&row.row, self.config.band_tolerance) {
                    draft.rows.push(row.row.clone());
                    Transition::stay(AssemblerState::Building(draft))
                } else {
                    Transition::close(draft, row.row.y)
                }
            }
        }
    }

    /// Turn a closed draft into a table if it passes the gate.
    fn emit(&self, page: u32, draft: TableDraft, end_y: f32) -> Option<TableBlock> {
        if draft.consecutive < self.config.min_structured_rows {
            log::trace!(
                "TableAssembler: discarding run of {} structured row(s) at y={}",
                draft.consecutive,
                draft.start_y
            );
            return None;
        }

        let rows: Vec<Vec<String>> = draft.rows.iter().map(|r| draft.columns.cells(r)).collect();
        if rows.len() < self.config.min_rows {
            return None;
        }

        Some(TableBlock {
            page,
            start_y: draft.start_y,
            end_y,
            header_row: rows.first().cloned().unwrap_or_default(),
            columns: draft.columns.into(),
            rows,
            source: TableSource::Geometric,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Token;

    fn make_row(y: f32, cells: &[(&str, f32)]) -> Row {
        let tokens = cells
            .iter()
            .map(|&(text, x)| Token::new(text, x, y, 30.0, 10.0))
            .collect();
        Row::new(y, tokens)
    }

    fn structured(y: f32, cells: &[(&str, f32)]) -> ClassifiedRow {
        ClassifiedRow::new(make_row(y, cells), true)
    }

    fn unstructured(y: f32, cells: &[(&str, f32)]) -> ClassifiedRow {
        ClassifiedRow::new(make_row(y, cells), false)
    }

    fn grid_row(y: f32, a: &str, b: &str, c: &str) -> ClassifiedRow {
        structured(y, &[(a, 10.0), (b, 110.0), (c, 210.0)])
    }

    #[test]
    fn test_three_structured_rows_emit() {
        let rows = vec![
            grid_row(100.0, "Name", "Age", "City"),
            grid_row(115.0, "Alice", "30", "Paris"),
            grid_row(130.0, "Bob", "25", "Rome"),
        ];

        let tables = TableAssembler::new().assemble(1, &rows);
        assert_eq!(tables.len(), 1);

        let table = &tables[0];
        assert_eq!(table.page, 1);
        assert_eq!(table.start_y, 100.0);
        assert_eq!(table.end_y, 130.0);
        assert_eq!(table.header_row, vec!["Name", "Age", "City"]);
        assert_eq!(table.rows[2], vec!["Bob", "25", "Rome"]);
        assert_eq!(table.columns.len(), 3);
        assert_eq!(table.source, TableSource::Geometric);
    }

    #[test]
    fn test_two_structured_rows_are_discarded() {
        let rows = vec![
            grid_row(100.0, "Name", "Age", "City"),
            grid_row(115.0, "Alice", "30", "Paris"),
            structured(130.0, &[("Footnote", 10.0)]),
        ];

        assert!(TableAssembler::new().assemble(1, &rows).is_empty());
    }

    #[test]
    fn test_single_token_row_closes_table() {
        let rows = vec![
            grid_row(100.0, "a", "b", "c"),
            grid_row(115.0, "d", "e", "f"),
            grid_row(130.0, "g", "h", "i"),
            unstructured(160.0, &[("Paragraph", 10.0)]),
            grid_row(200.0, "j", "k", "l"),
        ];

        let tables = TableAssembler::new().assemble(2, &rows);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].end_y, 160.0);
        assert_eq!(tables[0].row_count(), 3);
    }

    #[test]
    fn test_compatible_unstructured_row_is_absorbed() {
        let rows = vec![
            grid_row(100.0, "a", "b", "c"),
            grid_row(115.0, "d", "e", "f"),
            // irregular but aligned with two of three bands
            unstructured(130.0, &[("x", 10.0), ("y", 210.0)]),
            grid_row(145.0, "g", "h", "i"),
        ];

        let tables = TableAssembler::new().assemble(1, &rows);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].row_count(), 4);
        assert_eq!(tables[0].rows[2], vec!["x", "x", "y"]);
    }

    #[test]
    fn test_compatible_rows_do_not_count_toward_gate() {
        let rows = vec![
            grid_row(100.0, "a", "b", "c"),
            grid_row(115.0, "d", "e", "f"),
            unstructured(130.0, &[("x", 10.0), ("y", 210.0)]),
        ];

        assert!(TableAssembler::new().assemble(1, &rows).is_empty());
    }

    #[test]
    fn test_incompatible_row_closes_table() {
        let rows = vec![
            grid_row(100.0, "a", "b", "c"),
            grid_row(115.0, "d", "e", "f"),
            grid_row(130.0, "g", "h", "i"),
            unstructured(145.0, &[("far", 500.0), ("away", 560.0)]),
        ];

        let tables = TableAssembler::new().assemble(1, &rows);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].end_y, 145.0);
    }

    #[test]
    fn test_step_transitions() {
        let assembler = TableAssembler::new();

        let t = assembler.step(AssemblerState::Idle, &unstructured(0.0, &[("a", 0.0), ("b", 300.0)]));
        assert_eq!(t.next, AssemblerState::Idle);
        assert!(t.closed.is_none());

        let t = assembler.step(AssemblerState::Idle, &grid_row(10.0, "a", "b", "c"));
        match &t.next {
            AssemblerState::Building(draft) => {
                assert_eq!(draft.consecutive, 1);
                assert_eq!(draft.start_y, 10.0);
            }
            AssemblerState::Idle => panic!("Expected Building state"),
        }

        let t = assembler.step(t.next, &structured(20.0, &[("solo", 0.0)]));
        assert_eq!(t.next, AssemblerState::Idle);
        let (draft, end_y) = t.closed.unwrap();
        assert_eq!(draft.rows.len(), 1);
        assert_eq!(end_y, 20.0);
    }

    #[test]
    fn test_two_tables_on_one_page() {
        let mut rows = Vec::new();
        for i in 0..3 {
            rows.push(grid_row(100.0 + i as f32 * 15.0, "a", "b", "c"));
        }
        rows.push(unstructured(200.0, &[("Break", 10.0)]));
        for i in 0..4 {
            rows.push(grid_row(300.0 + i as f32 * 15.0, "d", "e", "f"));
        }

        let tables = TableAssembler::new().assemble(1, &rows);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1].start_y, 300.0);
        assert_eq!(tables[1].end_y, 345.0);
    }
}
