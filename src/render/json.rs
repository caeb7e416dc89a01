//! JSON rendering for analysis results.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{DocumentStructure, SummaryOutcome};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document structure to JSON.
pub fn to_json(doc: &DocumentStructure, format: JsonFormat) -> Result<String> {
    serialize(doc, format)
}

/// Convert a summary outcome to JSON, including its provenance.
pub fn summary_to_json(outcome: &SummaryOutcome, format: JsonFormat) -> Result<String> {
    serialize(outcome, format)
}

fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
