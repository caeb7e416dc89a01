//! Prompt construction and response parsing for remote summarizers.

use crate::error::{Error, Result};
use crate::model::{DocumentStructure, Summary};

/// Maximum number of document characters included in a prompt.
pub const PROMPT_TEXT_LIMIT: usize = 8000;

/// Number of rows of the first table included in a prompt.
const PROMPT_TABLE_ROWS: usize = 5;

/// Build the summarization prompt for a document.
pub fn build_prompt(doc: &DocumentStructure) -> String {
    let text: String = doc.text.chars().take(PROMPT_TEXT_LIMIT).collect();

    let tables_info = match doc.tables.first() {
        Some(first) => {
            let rows = &first.rows[..first.rows.len().min(PROMPT_TABLE_ROWS)];
            let rows_json = serde_json::to_string(rows).unwrap_or_else(|_| "[]".to_string());
            format!(
                "The document contains {} tables. Here's the first one: {}",
                doc.tables.len(),
                rows_json
            )
        }
        None => "The document does not contain any tables.".to_string(),
    };

    let headings_info = if doc.headings.is_empty() {
        "No clear headings were detected.".to_string()
    } else {
        let titles: Vec<&str> = doc.headings.iter().map(|h| h.text.as_str()).collect();
        format!(
            "The document contains these headings: {}",
            titles.join(", ")
        )
    };

    format!(
        r#"
I need you to analyze this document content and create an executive summary.
Focus on the main points, insights, and key data.

Document content:
{text}

{tables_info}

{headings_info}

Please provide:
1. A concise executive summary (3-4 paragraphs)
2. 5-7 key insights or takeaways
3. Suggest 3-5 data visualization types that would best represent this information and why
4. Identify any gaps in the data that would benefit from additional information

Format your response in JSON like this:
{{
  "summary": "The executive summary...",
  "insights": ["Insight 1", "Insight 2", ...],
  "visualizationSuggestions": [
    {{"type": "visualization type", "description": "what it would show", "dataRequired": "what data it needs"}}
  ],
  "dataGaps": ["Gap 1", "Gap 2", ...]
}}
"#
    )
}

/// Parse a summarizer response.
///
/// The span from the first `{` to the last `}` must deserialize into a
/// [`Summary`]; surrounding prose is ignored.
pub fn parse_response(response: &str) -> Result<Summary> {
    let (Some(start), Some(end)) = (response.find('{'), response.rfind('}')) else {
        return Err(Error::SummaryParse("no JSON object in response".to_string()));
    };
    if end < start {
        return Err(Error::SummaryParse("unbalanced braces in response".to_string()));
    }

    serde_json::from_str(&response[start..=end]).map_err(|e| Error::SummaryParse(e.to_string()))
}
