//! Document analysis pipeline.
//!
//! Pages are prepared independently (normalization and row classification),
//! optionally in parallel. Table assembly, heading folding and text
//! concatenation then run sequentially in page order.

use rayon::prelude::*;

use super::headings::{CoarseHeadings, GeometricHeadings, HeadingStrategy, LayoutEvent, SectionFolder};
use super::normalizer::{group_into_rows, normalize_tokens, ROW_TOLERANCE};
use super::options::{AnalyzeOptions, HeadingMode};
use super::row_classifier::RowClassifier;
use super::table_assembler::{ClassifiedRow, TableAssembler};
use super::text_table::TextTableFinder;
use crate::extract::{extract_entities, rank_keywords};
use crate::model::{
    Dimensions, DocumentInput, DocumentStructure, FontMetrics, PageContent, PageInfo, PageInput,
    TableBlock, Token,
};

/// A page after the independent preparation step.
#[derive(Debug, Clone)]
struct PreparedPage {
    number: u32,
    dimensions: Dimensions,
    text: String,
    layout: PreparedLayout,
}

#[derive(Debug, Clone)]
enum PreparedLayout {
    Positioned {
        tokens: Vec<Token>,
        rows: Vec<ClassifiedRow>,
        font_metrics: FontMetrics,
    },
    TextOnly,
}

/// Per-page output of the sequential step.
struct PageLayout {
    tables: Vec<TableBlock>,
    events: Vec<LayoutEvent>,
}

/// Infers document structure from decoded input.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: AnalyzeOptions,
    classifier: RowClassifier,
    assembler: TableAssembler,
    text_tables: TextTableFinder,
    geometric: GeometricHeadings,
    coarse: CoarseHeadings,
}

impl Analyzer {
    /// Create an analyzer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom options.
    pub fn with_options(options: AnalyzeOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Get the options.
    pub fn options(&self) -> &AnalyzeOptions {
        &self.options
    }

    /// Analyse a decoded document.
    pub fn analyze(&self, input: &DocumentInput) -> DocumentStructure {
        let mut pages: Vec<&PageInput> = input
            .pages
            .iter()
            .filter(|p| self.options.pages.includes(p.number))
            .collect();
        pages.sort_by_key(|p| p.number);

        let prepared: Vec<PreparedPage> = if self.options.parallel {
            pages.par_iter().map(|p| self.prepare(p)).collect()
        } else {
            pages.iter().map(|p| self.prepare(p)).collect()
        };

        let mut structure = DocumentStructure {
            metadata: input.metadata.clone(),
            ..Default::default()
        };
        let mut folder = SectionFolder::new();

        for page in prepared {
            let layout = self.layout(&page);
            structure.tables.extend(layout.tables);
            folder.extend(layout.events);

            structure.text.push_str(&page.text);
            structure.text.push_str("\n\n");
            structure
                .pages
                .push(PageInfo::new(page.number, page.text, page.dimensions));
        }

        let (headings, sections) = folder.finish();
        structure.headings = headings;
        structure.sections = sections;
        structure.entities = extract_entities(&structure.text);
        structure.keywords = rank_keywords(&structure.text, self.options.keyword_limit);

        log::debug!(
            "Analyzed {} page(s): {} table(s), {} heading(s), {} entity(ies)",
            structure.pages.len(),
            structure.tables.len(),
            structure.headings.len(),
            structure.entities.len()
        );

        structure
    }

    /// Independent per-page work.
    fn prepare(&self, page: &PageInput) -> PreparedPage {
        match &page.content {
            PageContent::Positioned {
                tokens,
                font_metrics,
            } => {
                let tokens = normalize_tokens(tokens, page.number);
                let text = tokens
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                let rows = group_into_rows(&tokens, ROW_TOLERANCE)
                    .into_iter()
                    .map(|row| {
                        let structured = self.classifier.is_structured(&row);
                        ClassifiedRow::new(row, structured)
                    })
                    .collect();

                PreparedPage {
                    number: page.number,
                    dimensions: page.dimensions(),
                    text,
                    layout: PreparedLayout::Positioned {
                        tokens,
                        rows,
                        font_metrics: *font_metrics,
                    },
                }
            }
            PageContent::TextOnly { text } => PreparedPage {
                number: page.number,
                dimensions: page.dimensions(),
                text: text.clone(),
                layout: PreparedLayout::TextOnly,
            },
        }
    }

    /// Order-dependent per-page work.
    fn layout(&self, page: &PreparedPage) -> PageLayout {
        match &page.layout {
            PreparedLayout::Positioned {
                tokens,
                rows,
                font_metrics,
            } => {
                let strategy = self.strategy_for(*font_metrics);
                log::trace!("Page {}: {} heading strategy", page.number, strategy.name());
                PageLayout {
                    tables: self.assembler.assemble(page.number, rows),
                    events: strategy.scan(page.number, tokens),
                }
            }
            PreparedLayout::TextOnly => {
                let tables = if self.options.text_tables {
                    self.text_tables.find(page.number, &page.text)
                } else {
                    Vec::new()
                };
                PageLayout {
                    tables,
                    events: self.coarse.scan_text(page.number, &page.text),
                }
            }
        }
    }

    fn strategy_for(&self, metrics: FontMetrics) -> &dyn HeadingStrategy {
        match (self.options.heading_mode, metrics) {
            (HeadingMode::Geometric, _) | (HeadingMode::Auto, FontMetrics::Precise) => {
                &self.geometric
            }
            (HeadingMode::Coarse, _) | (HeadingMode::Auto, FontMetrics::Coarse) => &self.coarse,
        }
    }
}
