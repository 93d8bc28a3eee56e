//! Output formatting module

use anyhow::Result;
use tatekumi_core::{Page, Pagination};

/// Trait for page output formatters
pub trait PageFormatter {
    /// Format and output a single page
    fn format_page(&mut self, index: usize, page: &Page) -> Result<()>;

    /// Finalize output (e.g., close the JSON document)
    fn finish(&mut self, result: &Pagination) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
