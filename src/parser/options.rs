//! Analysis options and configuration.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Options for analysing a document.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Whether to prepare pages in parallel
    pub parallel: bool,

    /// Which heading strategy to use
    pub heading_mode: HeadingMode,

    /// Page selection (which pages to analyse)
    pub pages: PageSelection,

    /// Whether to run delimiter-based table detection on text-only pages
    pub text_tables: bool,

    /// Maximum number of keywords to return
    pub keyword_limit: usize,
}

impl AnalyzeOptions {
    /// Create new analyze options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set heading mode.
    pub fn with_heading_mode(mut self, mode: HeadingMode) -> Self {
        self.heading_mode = mode;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Enable or disable text table detection.
    pub fn with_text_tables(mut self, enabled: bool) -> Self {
        self.text_tables = enabled;
        self
    }

    /// Set the keyword limit.
    pub fn with_keyword_limit(mut self, limit: usize) -> Self {
        self.keyword_limit = limit;
        self
    }
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            heading_mode: HeadingMode::Auto,
            pages: PageSelection::All,
            text_tables: true,
            keyword_limit: 20,
        }
    }
}

/// Which heading strategy to apply to positioned pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingMode {
    /// Follow each page's declared font metrics
    #[default]
    Auto,
    /// Always use per-token font sizes
    Geometric,
    /// Always use line-level heuristics
    Coarse,
}

/// Page selection for analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Analyse all pages
    #[default]
    All,
    /// Analyse a range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Analyse a set of pages (1-indexed), as sorted disjoint ranges
    Pages(Vec<RangeInclusive<u32>>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(ranges) => ranges.iter().any(|r| r.contains(&page)),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        // Simple range (e.g., "1-10")
        if let Some((start, end)) = s.split_once('-') {
            if !start.contains(',') && !end.contains(',') {
                return parse_range(s, start, end).map(PageSelection::Range);
            }
        }

        let mut ranges = s
            .split(',')
            .map(|part| match part.trim().split_once('-') {
                Some((start, end)) => parse_range(part, start, end),
                None => parse_page_number(part).map(|p| p..=p),
            })
            .collect::<Result<Vec<_>>>()?;

        ranges.sort_by_key(|r| *r.start());
        let mut merged: Vec<RangeInclusive<u32>> = Vec::with_capacity(ranges.len());
        for range in ranges {
            match merged.last_mut() {
                Some(last) if *range.start() <= last.end().saturating_add(1) => {
                    let end = (*last.end()).max(*range.end());
                    *last = *last.start()..=end;
                }
                _ => merged.push(range),
            }
        }

        Ok(PageSelection::Pages(merged))
    }
}

fn parse_range(part: &str, start: &str, end: &str) -> Result<RangeInclusive<u32>> {
    let start = parse_page_number(start)?;
    let end = parse_page_number(end)?;
    if start > end {
        return Err(Error::InvalidPageRange(part.trim().to_string()));
    }
    Ok(start..=end)
}

fn parse_page_number(s: &str) -> Result<u32> {
    s.trim()
        .parse()
        .map_err(|_| Error::InvalidPageRange(format!("invalid page number '{}'", s.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_options_builder() {
        let options = AnalyzeOptions::new()
            .sequential()
            .with_heading_mode(HeadingMode::Coarse)
            .with_text_tables(false)
            .with_keyword_limit(5);

        assert!(!options.parallel);
        assert_eq!(options.heading_mode, HeadingMode::Coarse);
        assert!(!options.text_tables);
        assert_eq!(options.keyword_limit, 5);
    }

    #[test]
    fn test_default_options() {
        let options = AnalyzeOptions::default();
        assert!(options.parallel);
        assert_eq!(options.heading_mode, HeadingMode::Auto);
        assert_eq!(options.keyword_limit, 20);
        assert_eq!(options.pages, PageSelection::All);
    }

    #[test]
    fn test_page_selection_includes() {
        let range = PageSelection::Range(5..=10);
        assert!(!range.includes(4));
        assert!(range.includes(5));
        assert!(range.includes(10));
        assert!(!range.includes(11));

        let pages = PageSelection::Pages(vec![1..=1, 3..=3]);
        assert!(pages.includes(3));
        assert!(!pages.includes(2));
    }

    #[test]
    fn test_page_selection_parse() {
        assert_eq!(PageSelection::parse("all").unwrap(), PageSelection::All);
        assert_eq!(
            PageSelection::parse("2-4").unwrap(),
            PageSelection::Range(2..=4)
        );
        assert_eq!(
            PageSelection::parse("1,3,5-7,3").unwrap(),
            PageSelection::Pages(vec![1..=1, 3..=3, 5..=7])
        );
        assert_eq!(
            PageSelection::parse("4,2-3,8-9,9-10").unwrap(),
            PageSelection::Pages(vec![2..=4, 8..=10])
        );
    }

    #[test]
    fn test_page_selection_parse_invalid() {
        assert!(matches!(
            PageSelection::parse("x-3"),
            Err(Error::InvalidPageRange(_))
        ));
        assert!(matches!(
            PageSelection::parse("5-2"),
            Err(Error::InvalidPageRange(_))
        ));
        assert!(matches!(
            PageSelection::parse("1,5-2"),
            Err(Error::InvalidPageRange(_))
        ));
    }

    #[test]
    fn test_page_selection_wide_range_in_list() {
        let selection = PageSelection::parse("1-4294967295,3").unwrap();
        assert_eq!(selection, PageSelection::Pages(vec![1..=u32::MAX]));
        assert!(selection.includes(4_000_000_000));
        assert!(!selection.includes(0));
    }
}
