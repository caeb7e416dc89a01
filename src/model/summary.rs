//! Summary types exchanged with the summarizer collaborator.

use serde::{Deserialize, Serialize};

/// An executive summary of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Summary prose
    pub summary: String,

    /// Key takeaways
    pub insights: Vec<String>,

    /// Suggested charts
    #[serde(default)]
    pub visualization_suggestions: Vec<VisualizationSuggestion>,

    /// Information the document lacks
    #[serde(default)]
    pub data_gaps: Vec<String>,
}

/// A suggested visualization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationSuggestion {
    /// Chart type, e.g. "bar chart"
    #[serde(rename = "type")]
    pub kind: String,
    /// What the chart would show
    pub description: String,
    /// Data the chart needs
    pub data_required: String,
}

impl VisualizationSuggestion {
    /// Create a suggestion.
    pub fn new(
        kind: impl Into<String>,
        description: impl Into<String>,
        data_required: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
            data_required: data_required.into(),
        }
    }
}

/// A summary tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provenance", content = "summary", rename_all = "lowercase")]
pub enum SummaryOutcome {
    /// Produced by the remote summarizer
    Remote(Summary),
    /// Produced by the deterministic local fallback
    Local(Summary),
}

impl SummaryOutcome {
    /// Get the summary regardless of provenance.
    pub fn summary(&self) -> &Summary {
        match self {
            SummaryOutcome::Remote(s) | SummaryOutcome::Local(s) => s,
        }
    }

    /// Consume the outcome and return the summary.
    pub fn into_summary(self) -> Summary {
        match self {
            SummaryOutcome::Remote(s) | SummaryOutcome::Local(s) => s,
        }
    }

    /// Check if the remote summarizer produced this summary.
    pub fn is_remote(&self) -> bool {
        matches!(self, SummaryOutcome::Remote(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_deserialize_camel_case() {
        let json = r#"{
            "summary": "Short.",
            "insights": ["One"],
            "visualizationSuggestions": [
                {"type": "line chart", "description": "Trend", "dataRequired": "Monthly values"}
            ],
            "dataGaps": ["No 2023 data"]
        }"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.visualization_suggestions[0].kind, "line chart");
        assert_eq!(summary.data_gaps, vec!["No 2023 data".to_string()]);
    }

    #[test]
    fn test_outcome_provenance() {
        let outcome = SummaryOutcome::Local(Summary::default());
        assert!(!outcome.is_remote());
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.starts_with(r#"{"provenance":"local""#));
    }
}
