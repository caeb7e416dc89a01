//! Deterministic local summary.

use crate::model::{DocumentStructure, Summary, VisualizationSuggestion};

const MIN_PARAGRAPH_CHARS: usize = 20;
const SUMMARY_PARAGRAPHS: usize = 3;

/// Build a summary without any remote collaborator.
pub fn local_summary(doc: &DocumentStructure) -> Summary {
    let summary = doc
        .text
        .split("\n\n")
        .filter(|p| p.trim().chars().count() > MIN_PARAGRAPH_CHARS)
        .take(SUMMARY_PARAGRAPHS)
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut insights = Vec::new();

    if let Some(title) = &doc.metadata.title {
        insights.push(format!("The document is titled \"{}\".", title));
    }
    if let Some(author) = &doc.metadata.author {
        insights.push(format!("The document was created by {}.", author));
    }
    if !doc.tables.is_empty() {
        insights.push(format!("The document contains {} tables.", doc.tables.len()));
    }
    if !doc.headings.is_empty() {
        insights.push(format!(
            "The document contains {} sections.",
            doc.headings.len()
        ));
    }

    let counts = doc.entity_counts();
    if !counts.is_empty() {
        let parts: Vec<String> = counts
            .iter()
            .map(|(kind, count)| format!("{} {} references", count, kind))
            .collect();
        insights.push(format!("The document contains {}.", parts.join(", ")));
    }

    if insights.is_empty() {
        insights.push("No clear insights could be automatically generated.".to_string());
    }

    let mut visualization_suggestions = vec![
        VisualizationSuggestion::new(
            "bar chart",
            "Frequency of key terms",
            "Word frequency data from document text",
        ),
        VisualizationSuggestion::new(
            "pie chart",
            "Distribution of entity types",
            "Entity counts by type",
        ),
    ];
    if !doc.tables.is_empty() {
        visualization_suggestions.push(VisualizationSuggestion::new(
            "table visualization",
            "Interactive representation of table data",
            "Table content from the document",
        ));
    }

    Summary {
        summary,
        insights,
        visualization_suggestions,
        data_gaps: vec!["AI-based content analysis was unavailable.".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entity, EntityKind, Metadata};

    #[test]
    fn test_empty_document() {
        let summary = local_summary(&DocumentStructure::new());
        assert!(summary.summary.is_empty());
        assert_eq!(
            summary.insights,
            vec!["No clear insights could be automatically generated."]
        );
        assert_eq!(summary.visualization_suggestions.len(), 2);
        assert_eq!(
            summary.data_gaps,
            vec!["AI-based content analysis was unavailable."]
        );
    }

    #[test]
    fn test_paragraph_selection() {
        let mut doc = DocumentStructure::new();
        doc.text = [
            "Too short.",
            "The first paragraph is long enough to keep.",
            "   padded yet tiny   ",
            "The second paragraph also clears the bar.",
            "The third paragraph clears it as well.",
            "The fourth paragraph is never reached.",
        ]
        .join("\n\n");

        let summary = local_summary(&doc);
        assert_eq!(
            summary.summary,
            "The first paragraph is long enough to keep.\n\n\
             The second paragraph also clears the bar.\n\n\
             The third paragraph clears it as well."
        );
    }

    #[test]
    fn test_insights() {
        let mut doc = DocumentStructure::new();
        doc.metadata = Metadata {
            title: Some("Budget".to_string()),
            author: Some("Finance".to_string()),
            ..Default::default()
        };
        doc.entities = vec![
            Entity::new(EntityKind::Money, "$5", 0),
            Entity::new(EntityKind::Date, "1/2/24", 5),
            Entity::new(EntityKind::Money, "$9", 9),
        ];

        let summary = local_summary(&doc);
        assert_eq!(
            summary.insights,
            vec![
                "The document is titled \"Budget\".",
                "The document was created by Finance.",
                "The document contains 2 money references, 1 date references.",
            ]
        );
    }
}
