//! Plain-text output formatter
//!
//! Renders each page as its wrapped lines under a page header. Ruby readings
//! are shown inline as `漢字(よみ)` since a terminal has no ruby layout.

use super::PageFormatter;
use anyhow::Result;
use std::io::Write;
use tatekumi_core::{wrap_lines, LineBreakPolicy, Page, Pagination, PaginationParams};

/// Text formatter - one block of wrapped lines per page
pub struct TextFormatter<W: Write> {
    writer: W,
    params: PaginationParams,
    policy: LineBreakPolicy,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter for the given capacity parameters
    pub fn new(writer: W, params: PaginationParams) -> Self {
        Self {
            writer,
            params,
            policy: LineBreakPolicy::new(),
        }
    }
}

impl<W: Write> PageFormatter for TextFormatter<W> {
    fn format_page(&mut self, index: usize, page: &Page) -> Result<()> {
        let chapter = page
            .chapter_index()
            .map_or_else(|| "-".to_string(), |c| c.to_string());
        writeln!(self.writer, "=== page {} (chapter {}) ===", index + 1, chapter)?;

        for line in wrap_lines(&page.units, &self.params, &self.policy) {
            let mut rendered = String::new();
            for unit in line {
                rendered.push(unit.glyph);
                if let Some(reading) = &unit.ruby_text {
                    rendered.push('(');
                    rendered.push_str(reading);
                    rendered.push(')');
                }
            }
            writeln!(self.writer, "{rendered}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self, result: &Pagination) -> Result<()> {
        writeln!(self.writer, "{} page(s)", result.page_count())?;
        self.writer.flush()?;
        Ok(())
    }
}
