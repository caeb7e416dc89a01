//! # docsift
//!
//! Rule-based document structure inference for Rust.
//!
//! This library takes positioned text tokens (or plain text) extracted from a
//! document and infers its latent structure: headings and sections, tables,
//! typed entities and keywords. It is purely rule-based and deterministic.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docsift::{analyze_file, render};
//!
//! fn main() -> docsift::Result<()> {
//!     // Analyse an extracted token stream
//!     let doc = analyze_file("report.json")?;
//!
//!     // Print a plain text report
//!     println!("{}", render::to_text(&doc)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Table detection**: row/column geometry with a consecutive-row gate,
//!   plus a delimiter fallback for plain text pages
//! - **Headings and sections**: geometric or line-level strategies
//! - **Entities**: dates, percentages, money, emails, URLs, phone numbers
//! - **Keywords**: frequency ranking with stop-word filtering
//! - **Parallel processing**: uses Rayon for per-page preparation
//! - **Summaries**: pluggable remote summarizer with a local fallback

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;
pub mod summary;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, InputFormat};
pub use error::{Error, Result};
pub use model::{
    ColumnBand, Dimensions, DocumentInput, DocumentStructure, Entity, EntityKind, FontMetrics,
    Heading, Metadata, PageContent, PageInfo, PageInput, Position, Section, Summary,
    SummaryOutcome, TableBlock, TableSource, Token, VisualizationSuggestion,
};
pub use parser::{AnalyzeOptions, Analyzer, HeadingMode, PageSelection};
pub use render::JsonFormat;
pub use summary::{local_summary, summarize, Summarizer};

use std::io::Read;
use std::path::Path;

/// Analyse a file and return the inferred structure.
///
/// The file may be a JSON token stream or UTF-8 plain text.
///
/// # Example
///
/// ```no_run
/// use docsift::analyze_file;
///
/// let doc = analyze_file("report.json").unwrap();
/// println!("Tables: {}", doc.tables.len());
/// ```
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<DocumentStructure> {
    analyze_file_with_options(path, AnalyzeOptions::default())
}

/// Analyse a file with custom options.
///
/// # Example
///
/// ```no_run
/// use docsift::{analyze_file_with_options, AnalyzeOptions, HeadingMode};
///
/// let options = AnalyzeOptions::new()
///     .sequential()
///     .with_heading_mode(HeadingMode::Coarse);
/// let doc = analyze_file_with_options("report.json", options).unwrap();
/// ```
pub fn analyze_file_with_options<P: AsRef<Path>>(
    path: P,
    options: AnalyzeOptions,
) -> Result<DocumentStructure> {
    let data = std::fs::read(path)?;
    analyze_bytes_with_options(&data, options)
}

/// Analyse input bytes.
pub fn analyze_bytes(data: &[u8]) -> Result<DocumentStructure> {
    analyze_bytes_with_options(data, AnalyzeOptions::default())
}

/// Analyse input bytes with custom options.
pub fn analyze_bytes_with_options(
    data: &[u8],
    options: AnalyzeOptions,
) -> Result<DocumentStructure> {
    let input = parser::input::decode(data)?;
    Ok(Analyzer::with_options(options).analyze(&input))
}

/// Analyse input from a reader.
pub fn analyze_reader<R: Read>(mut reader: R) -> Result<DocumentStructure> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    analyze_bytes(&data)
}

/// Analyse plain text. Pages are separated by form feeds.
///
/// # Example
///
/// ```
/// use docsift::analyze_str;
///
/// let doc = analyze_str("Invoice total: $1,200.50 due 03/04/2024");
/// assert_eq!(doc.entities.len(), 2);
/// ```
pub fn analyze_str(text: &str) -> DocumentStructure {
    Analyzer::new().analyze(&parser::input::decode_text(text))
}

/// Analyse an already decoded document.
pub fn analyze_input(input: &DocumentInput) -> DocumentStructure {
    Analyzer::new().analyze(input)
}

/// Analyse a file and render it as JSON.
///
/// # Example
///
/// ```no_run
/// use docsift::{to_json, JsonFormat};
///
/// let json = to_json("report.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("structure.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = analyze_file(path)?;
    render::to_json(&doc, format)
}

/// Analyse a file and render a plain text report.
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = analyze_file(path)?;
    render::to_text(&doc)
}

/// Builder for analysing documents.
///
/// # Example
///
/// ```no_run
/// use docsift::{Docsift, PageSelection};
///
/// let report = Docsift::new()
///     .sequential()
///     .with_pages(PageSelection::Range(1..=3))
///     .analyze("report.json")?
///     .to_text()?;
/// # Ok::<(), docsift::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Docsift {
    options: AnalyzeOptions,
}

impl Docsift {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set heading mode.
    pub fn with_heading_mode(mut self, mode: HeadingMode) -> Self {
        self.options = self.options.with_heading_mode(mode);
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.options = self.options.with_pages(pages);
        self
    }

    /// Enable or disable text table detection.
    pub fn with_text_tables(mut self, enabled: bool) -> Self {
        self.options = self.options.with_text_tables(enabled);
        self
    }

    /// Set the keyword limit.
    pub fn with_keyword_limit(mut self, limit: usize) -> Self {
        self.options = self.options.with_keyword_limit(limit);
        self
    }

    /// Analyse a file and return a result wrapper.
    pub fn analyze<P: AsRef<Path>>(self, path: P) -> Result<DocsiftResult> {
        let structure = analyze_file_with_options(path, self.options)?;
        Ok(DocsiftResult { structure })
    }

    /// Analyse bytes.
    pub fn analyze_bytes(self, data: &[u8]) -> Result<DocsiftResult> {
        let structure = analyze_bytes_with_options(data, self.options)?;
        Ok(DocsiftResult { structure })
    }

    /// Analyse an already decoded document.
    pub fn analyze_input(self, input: &DocumentInput) -> DocsiftResult {
        DocsiftResult {
            structure: Analyzer::with_options(self.options).analyze(input),
        }
    }
}

/// Result of analysing a document.
#[derive(Debug, Clone)]
pub struct DocsiftResult {
    /// The inferred structure
    pub structure: DocumentStructure,
}

impl DocsiftResult {
    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.structure, format)
    }

    /// Render a plain text report.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.structure)
    }

    /// Summarize, falling back to the local summary on any failure.
    pub fn summarize(&self, summarizer: Option<&dyn Summarizer>) -> SummaryOutcome {
        summary::summarize(&self.structure, summarizer)
    }

    /// Get the structure.
    pub fn structure(&self) -> &DocumentStructure {
        &self.structure
    }
}
