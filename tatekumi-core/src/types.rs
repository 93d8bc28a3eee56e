//! Core types for vertical-text pagination

use crate::kinsoku;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chapter of the source book. Immutable input to pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Zero-based position of the chapter in the book
    pub index: usize,
    /// Chapter title; `Some("")` synthesizes a `第N章` heading, `None`
    /// suppresses the heading run entirely
    #[serde(default)]
    pub title: Option<String>,
    /// Raw chapter body text
    #[serde(rename = "text")]
    pub raw_text: String,
    /// Phonetic annotations attached to words in the body
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Chapter {
    /// Create a chapter with no annotations
    pub fn new(index: usize, title: Option<String>, raw_text: impl Into<String>) -> Self {
        Self {
            index,
            title,
            raw_text: raw_text.into(),
            annotations: Vec::new(),
        }
    }

    /// A chapter with neither a title nor body text produces no tokens
    pub fn is_fully_empty(&self) -> bool {
        self.title.is_none() && self.raw_text.is_empty()
    }
}

/// A phonetic annotation for a word in a chapter body
///
/// `word` must be non-empty to be applied. `reading` may be empty, in which
/// case no ruby is attached but the span still carries `has_annotation` so a
/// renderer can register it as a click target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// The annotated word as it appears in the body text
    pub word: String,
    /// Phonetic reading rendered as ruby alongside the word
    #[serde(default)]
    pub reading: String,
    /// Dictionary definition, carried through for the consuming UI
    #[serde(default)]
    pub definition: String,
}

impl Annotation {
    /// Create an annotation without a definition
    pub fn new(word: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            reading: reading.into(),
            definition: String::new(),
        }
    }
}

/// Coarse glyph classification for the rendering collaborator
///
/// Pagination itself only distinguishes newlines and the kinsoku sets; the
/// classification is carried on every [`CharUnit`] so renderers can decide
/// ruby layout, horizontal-in-vertical rotation, and punctuation nudges
/// without re-deriving character ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// Hiragana, katakana, and the prolonged sound mark
    Kana,
    /// CJK unified ideographs
    Kanji,
    /// ASCII and fullwidth Latin letters
    Latin,
    /// ASCII and fullwidth digits
    Digit,
    /// Fullwidth sentence punctuation (、。！？ and friends)
    FullwidthPunctuation,
    /// Opening bracket or quote (forbidden at line end)
    OpenBracket,
    /// Closing bracket or quote (forbidden at line start)
    CloseBracket,
    /// Whitespace, including explicit newlines
    Whitespace,
    /// Anything else
    Other,
}

impl CharClass {
    /// Classify a glyph
    pub fn of(glyph: char) -> Self {
        if glyph.is_whitespace() {
            return CharClass::Whitespace;
        }
        if kinsoku::is_open_bracket(glyph) {
            return CharClass::OpenBracket;
        }
        if kinsoku::is_close_bracket(glyph) {
            return CharClass::CloseBracket;
        }
        match glyph {
            '、' | '。' | '，' | '．' | '！' | '？' | '・' | '：' | '；' | '…' | '―' => {
                CharClass::FullwidthPunctuation
            }
            'a'..='z' | 'A'..='Z' | 'ａ'..='ｚ' | 'Ａ'..='Ｚ' => CharClass::Latin,
            '0'..='9' | '０'..='９' => CharClass::Digit,
            'ぁ'..='ゖ' | 'ァ'..='ヺ' | 'ー' => CharClass::Kana,
            '一'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' => CharClass::Kanji,
            _ => CharClass::Other,
        }
    }
}

/// The atomic glyph record produced by the tokenizer
///
/// Invariant: `ruby_text` is `Some` only on the first glyph of a matched
/// annotation span; every other glyph of the span has `has_annotation = true`
/// and `ruby_text = None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharUnit {
    /// The glyph itself; `'\n'` acts as a line separator within a page
    pub glyph: char,
    /// Ruby reading, present only on the first glyph of an annotated span
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruby_text: Option<String>,
    /// Whether this glyph belongs to a synthesized chapter-title run
    pub is_chapter_title: bool,
    /// Index of the chapter this glyph came from
    pub chapter_index: usize,
    /// Whether this glyph is inside an annotated span
    pub has_annotation: bool,
    /// Rendering classification of the glyph
    pub class: CharClass,
}

impl CharUnit {
    /// Create a plain body glyph with no annotation
    pub fn plain(glyph: char, chapter_index: usize) -> Self {
        Self {
            glyph,
            ruby_text: None,
            is_chapter_title: false,
            chapter_index,
            has_annotation: false,
            class: CharClass::of(glyph),
        }
    }

    /// Whether this unit is an explicit line separator
    pub fn is_newline(&self) -> bool {
        self.glyph == '\n'
    }
}

/// Capacity parameters for a pagination run
///
/// Derived by a measurement collaborator from viewport pixel dimensions and
/// font metrics; the engine treats them as opaque positive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Glyphs per vertical line (column)
    pub chars_per_line: usize,
    /// Lines (columns) per page
    pub lines_per_page: usize,
}

impl PaginationParams {
    /// Create new parameters; validity is checked at the start of a run
    pub fn new(chars_per_line: usize, lines_per_page: usize) -> Self {
        Self {
            chars_per_line,
            lines_per_page,
        }
    }

    /// Reject parameters that cannot hold a single glyph
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.chars_per_line < 1 || self.lines_per_page < 1 {
            return Err(crate::error::CoreError::InvalidParams {
                chars_per_line: self.chars_per_line,
                lines_per_page: self.lines_per_page,
            });
        }
        Ok(())
    }

    /// Full page capacity in glyphs
    pub fn page_capacity(&self) -> usize {
        self.chars_per_line * self.lines_per_page
    }
}

/// One page of the paginated book
///
/// A page may span two chapters when a chapter ends mid-page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Ordered glyph records of the page
    pub units: Vec<CharUnit>,
}

impl Page {
    /// Number of glyph records on the page, separators included
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the page holds no glyphs
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Number of body glyphs: titles and line separators excluded
    pub fn body_glyph_count(&self) -> usize {
        self.units
            .iter()
            .filter(|u| !u.is_chapter_title && !u.is_newline())
            .count()
    }

    /// Chapter index of the page's first glyph
    pub fn chapter_index(&self) -> Option<usize> {
        self.units.first().map(|u| u.chapter_index)
    }
}

/// Non-fatal findings recorded during a pagination run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An annotation with an empty `word` was skipped
    EmptyAnnotationWord {
        /// Chapter the annotation belonged to
        chapter_index: usize,
    },
    /// An annotation word never occurred in its chapter body
    UnmatchedAnnotation {
        /// Chapter the annotation belonged to
        chapter_index: usize,
        /// The word that was not found
        word: String,
    },
    /// A second annotation for the same word was ignored
    DuplicateAnnotation {
        /// Chapter the annotation belonged to
        chapter_index: usize,
        /// The word annotated more than once
        word: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::EmptyAnnotationWord { chapter_index } => {
                write!(f, "chapter {chapter_index}: annotation with empty word skipped")
            }
            Diagnostic::UnmatchedAnnotation {
                chapter_index,
                word,
            } => {
                write!(f, "chapter {chapter_index}: annotation word '{word}' not found in text")
            }
            Diagnostic::DuplicateAnnotation {
                chapter_index,
                word,
            } => {
                write!(f, "chapter {chapter_index}: duplicate annotation for '{word}' ignored")
            }
        }
    }
}

/// Result of a pagination run: the page sequence plus run diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Pages in reading order
    pub pages: Vec<Page>,
    /// Non-fatal findings collected during the run
    pub diagnostics: Vec<Diagnostic>,
    /// The capacity parameters the run used
    pub params: PaginationParams,
}

impl Pagination {
    /// Number of pages produced
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page at `index`, clamped to the valid range; `None` only when empty
    pub fn page(&self, index: usize) -> Option<&Page> {
        crate::navigation::go_to_page(&self.pages, index)
    }

    /// Chapter shown at the top of the page at `index` (clamped)
    pub fn chapter_of_page(&self, index: usize) -> Option<usize> {
        self.page(index).and_then(Page::chapter_index)
    }

    /// Index of the first page whose leading glyph belongs to `chapter_index`
    pub fn first_page_of_chapter(&self, chapter_index: usize) -> Option<usize> {
        crate::navigation::first_page_of_chapter(&self.pages, chapter_index)
    }
}
