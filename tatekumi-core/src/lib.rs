//! Vertical-text pagination engine for Japanese e-book readers
//!
//! Converts a book's chapters plus inline phonetic annotations into a
//! deterministic sequence of fixed-capacity pages of per-glyph records,
//! honoring Japanese line-breaking prohibitions (kinsoku), ruby placement,
//! and chapter-boundary policy.
//!
//! # Pipeline
//!
//! - **Annotation resolution** ([`annotation`]): annotation words become
//!   explicit glyph spans in a single left-to-right scan.
//! - **Tokenization** ([`tokenizer`]): chapters expand into ordered
//!   [`CharUnit`] streams, ruby attached to the first glyph of each span.
//! - **Line-break policy** ([`kinsoku`]): a stateless oracle forbidding
//!   breaks around closing punctuation and opening brackets.
//! - **Pagination** ([`paginator`]): a per-glyph fold that fills lines and
//!   pages, with a bounded lookback split and a chapter-boundary flush.
//!
//! The whole run is a pure function of `(chapters, params)`: identical inputs
//! always yield identical pages, and no state survives between calls.
//!
//! # Example
//!
//! ```rust
//! use tatekumi_core::{paginate, Annotation, Chapter, PaginationParams};
//!
//! let mut chapter = Chapter::new(0, Some("一".to_string()), "私は猫である。");
//! chapter.annotations = vec![Annotation::new("猫", "ねこ")];
//!
//! let result = paginate(&[chapter], PaginationParams::new(20, 10)).unwrap();
//! assert_eq!(result.page_count(), 1);
//!
//! let ruby = result.pages[0]
//!     .units
//!     .iter()
//!     .find(|u| u.ruby_text.is_some())
//!     .unwrap();
//! assert_eq!(ruby.glyph, '猫');
//! ```

#![warn(missing_docs)]

pub mod annotation;
pub mod error;
pub mod kinsoku;
pub mod navigation;
pub mod paginator;
pub mod tokenizer;
pub mod types;

pub use error::{CoreError, Result};
pub use kinsoku::LineBreakPolicy;
pub use navigation::{current_chapter_of, first_page_of_chapter, go_to_page};
pub use paginator::{paginate, wrap_lines, Paginator, CHAPTER_FLUSH_RATIO, LOOKBACK_WINDOW};
pub use types::{
    Annotation, Chapter, CharClass, CharUnit, Diagnostic, Page, Pagination, PaginationParams,
};
