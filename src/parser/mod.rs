//! Structure inference engine.

mod analyzer;
mod column_model;
mod headings;
pub mod input;
mod normalizer;
mod options;
mod row_classifier;
mod table_assembler;
mod text_table;

pub use analyzer::Analyzer;
pub use column_model::{ColumnModel, BAND_TOLERANCE, COMPATIBLE_RATIO};
pub use headings::{CoarseHeadings, GeometricHeadings, HeadingStrategy, LayoutEvent, SectionFolder};
pub use normalizer::{group_into_rows, normalize_tokens, Row, ROW_TOLERANCE};
pub use options::{AnalyzeOptions, HeadingMode, PageSelection};
pub use row_classifier::{spacing_stats, RowClassifier, RowClassifierConfig, SpacingStats};
pub use table_assembler::{
    AssemblerState, ClassifiedRow, TableAssembler, TableAssemblerConfig, TableDraft, Transition,
};
pub use text_table::TextTableFinder;
