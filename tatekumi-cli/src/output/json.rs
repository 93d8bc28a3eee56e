//! JSON output formatter

use super::PageFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tatekumi_core::{wrap_lines, LineBreakPolicy, Page, Pagination, PaginationParams};

/// JSON formatter - outputs the run as one document
pub struct JsonFormatter<W: Write> {
    writer: W,
    params: PaginationParams,
    policy: LineBreakPolicy,
    pages: Vec<PageData>,
}

/// Data structure for one page of JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct PageData {
    /// Zero-based page index
    pub index: usize,
    /// Chapter shown at the top of the page
    pub chapter_index: Option<usize>,
    /// Wrapped lines of the page as plain strings
    pub lines: Vec<String>,
    /// Ruby readings present on the page
    pub ruby: Vec<RubyData>,
}

/// A ruby reading anchored to a glyph on a page
#[derive(Debug, Serialize, Deserialize)]
pub struct RubyData {
    /// Unit offset of the annotated glyph within the page
    pub offset: usize,
    /// The base glyph carrying the reading
    pub base: char,
    /// The reading itself
    pub reading: String,
}

/// Top-level JSON document
#[derive(Debug, Serialize, Deserialize)]
pub struct RunData {
    /// Pages in reading order
    pub pages: Vec<PageData>,
    /// Diagnostics recorded during the run
    pub diagnostics: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter for the given capacity parameters
    pub fn new(writer: W, params: PaginationParams) -> Self {
        Self {
            writer,
            params,
            policy: LineBreakPolicy::new(),
            pages: Vec::new(),
        }
    }
}

impl<W: Write> PageFormatter for JsonFormatter<W> {
    fn format_page(&mut self, index: usize, page: &Page) -> Result<()> {
        let lines = wrap_lines(&page.units, &self.params, &self.policy)
            .iter()
            .map(|line| line.iter().map(|u| u.glyph).collect())
            .collect();

        let ruby = page
            .units
            .iter()
            .enumerate()
            .filter_map(|(offset, unit)| {
                unit.ruby_text.as_ref().map(|reading| RubyData {
                    offset,
                    base: unit.glyph,
                    reading: reading.clone(),
                })
            })
            .collect();

        self.pages.push(PageData {
            index,
            chapter_index: page.chapter_index(),
            lines,
            ruby,
        });
        Ok(())
    }

    fn finish(&mut self, result: &Pagination) -> Result<()> {
        let run = RunData {
            pages: std::mem::take(&mut self.pages),
            diagnostics: result.diagnostics.iter().map(|d| d.to_string()).collect(),
        };
        serde_json::to_writer_pretty(&mut self.writer, &run)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
