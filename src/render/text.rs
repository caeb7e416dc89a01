//! Plain text report rendering.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::model::DocumentStructure;

/// Render a human-readable report of the inferred structure.
pub fn to_text(doc: &DocumentStructure) -> Result<String> {
    write_report(doc).map_err(|e| Error::Render(format!("text report error: {}", e)))
}

fn write_report(doc: &DocumentStructure) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();

    if let Some(title) = &doc.metadata.title {
        writeln!(out, "{}", title)?;
        writeln!(out, "{}", "=".repeat(title.chars().count()))?;
        writeln!(out)?;
    }

    writeln!(out, "Pages: {}", doc.page_count())?;
    writeln!(out, "Words: {}", doc.word_count())?;

    if !doc.headings.is_empty() {
        writeln!(out)?;
        writeln!(out, "Headings:")?;
        for heading in &doc.headings {
            let indent = "  ".repeat(heading.level as usize);
            writeln!(out, "{}{} (p. {})", indent, heading.text, heading.page)?;
        }
    }

    for (i, table) in doc.tables.iter().enumerate() {
        writeln!(out)?;
        writeln!(
            out,
            "Table {} (page {}, {} rows x {} columns):",
            i + 1,
            table.page,
            table.row_count(),
            table.column_count()
        )?;
        writeln!(out, "{}", table.plain_text())?;
    }

    let counts = doc.entity_counts();
    if !counts.is_empty() {
        writeln!(out)?;
        writeln!(out, "Entities:")?;
        for (kind, count) in counts {
            writeln!(out, "  {}: {}", kind, count)?;
        }
    }

    if !doc.keywords.is_empty() {
        writeln!(out)?;
        writeln!(out, "Keywords: {}", doc.keywords.join(", "))?;
    }

    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entity, EntityKind, Heading, Metadata, Position, TableBlock, TableSource};

    #[test]
    fn test_to_text() {
        let mut doc = DocumentStructure::new();
        doc.metadata = Metadata::with_title("Budget");
        doc.text = "one two three\n\n".to_string();
        doc.headings = vec![
            Heading::new("Costs", 1, 1, Position::default()),
            Heading::new("Ink", 2, 1, Position::default()),
        ];
        doc.tables = vec![TableBlock {
            page: 1,
            start_y: 0.0,
            end_y: 1.0,
            columns: Vec::new(),
            rows: vec![vec!["a".into(), "b".into()], vec!["1".into(), "2".into()]],
            header_row: vec!["a".into(), "b".into()],
            source: TableSource::Text,
        }];
        doc.entities = vec![Entity::new(EntityKind::Money, "$5", 0)];
        doc.keywords = vec!["three".to_string()];

        let report = to_text(&doc).unwrap();
        assert!(report.starts_with("Budget\n======\n"));
        assert!(report.contains("Words: 3"));
        assert!(report.contains("  Costs (p. 1)\n    Ink (p. 1)"));
        assert!(report.contains("Table 1 (page 1, 2 rows x 2 columns):\na\tb\n1\t2"));
        assert!(report.contains("  money: 1"));
        assert!(report.ends_with("Keywords: three"));
    }

    #[test]
    fn test_to_text_empty() {
        let report = to_text(&DocumentStructure::new()).unwrap();
        assert_eq!(report, "Pages: 0\nWords: 0");
    }
}
