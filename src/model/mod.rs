//! Document model types.
//!
//! This module defines both sides of the analysis contract: the decoded
//! input handed over by the extraction collaborator (pages of positioned
//! tokens or plain text) and the serializable `DocumentStructure` produced
//! by the inference engine. None of these types carry behavior beyond
//! simple accessors.

mod document;
mod entity;
mod heading;
mod page;
mod summary;
mod table;

pub use document::{DocumentStructure, Metadata, PageInfo};
pub use entity::{Entity, EntityKind};
pub use heading::{Heading, Position, Section};
pub use page::{Dimensions, DocumentInput, FontMetrics, PageContent, PageInput, Token};
pub use summary::{Summary, SummaryOutcome, VisualizationSuggestion};
pub use table::{ColumnBand, TableBlock, TableSource};
