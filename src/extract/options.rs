//! Extraction options and page selection.

use std::ops::RangeInclusive;

/// Options for extracting text from PDF documents.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Page selection (which pages to read)
    pub pages: PageSelection,
}

impl ExtractOptions {
    /// Create new extraction options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Set specific page range.
    pub fn with_page_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.pages = PageSelection::Range(range);
        self
    }
}

/// Page selection for extraction.
///
/// Selection filters pages; it never changes their order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Read all pages
    #[default]
    All,
    /// Read a range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Read specific pages (1-indexed)
    Pages(Vec<u32>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        if let Some((start, end)) = s.split_once('-') {
            if !start.contains(',') && !end.contains(',') {
                let (start, end) = parse_bounds(start, end)?;
                return Ok(PageSelection::Range(start..=end));
            }
        }

        let mut pages = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                let (start, end) = parse_bounds(start, end)?;
                pages.extend(start..=end);
            } else {
                pages.push(parse_page(part)?);
            }
        }

        pages.sort_unstable();
        pages.dedup();
        Ok(PageSelection::Pages(pages))
    }
}

fn parse_page(s: &str) -> Result<u32, String> {
    match s.trim().parse::<u32>() {
        Ok(0) => Err("Page numbers start at 1".to_string()),
        Ok(p) => Ok(p),
        Err(_) => Err(format!("Invalid page number: {:?}", s.trim())),
    }
}

fn parse_bounds(start: &str, end: &str) -> Result<(u32, u32), String> {
    let start = parse_page(start)?;
    let end = parse_page(end)?;
    if start > end {
        return Err(format!("Invalid page range: {}-{}", start, end));
    }
    Ok((start, end))
}
