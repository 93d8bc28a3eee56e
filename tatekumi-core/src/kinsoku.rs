//! Japanese line-breaking prohibition (kinsoku) rules
//!
//! Two character sets drive the policy:
//! - glyphs forbidden at line start: closing punctuation (、 U+3001, 。 U+3002,
//!   closing brackets, closing quotes) must hang on the previous line
//! - glyphs forbidden at line end: opening brackets and quotes must be pushed
//!   to the next line together with what they open
//!
//! This is a single-pair lookahead rule: a forbidden glyph followed by another
//! forbidden glyph is not chained. That matches the engine this was built for
//! and is an accepted limitation, not a defect.

use std::collections::HashSet;

/// Closing brackets and quotes, forbidden at line start
pub(crate) const CLOSE_BRACKETS: &[char] = &[
    '）', '」', '』', '】', '〉', '》', '〕', '］', '｝', '〗', '〙', '〟', '’', '”',
];

/// Closing punctuation, forbidden at line start alongside the brackets
const CLOSING_PUNCTUATION: &[char] = &['、', '。', '，', '．'];

/// Opening brackets and quotes, forbidden at line end
pub(crate) const OPEN_BRACKETS: &[char] = &[
    '（', '「', '『', '【', '〈', '《', '〔', '［', '｛', '〖', '〘', '〝', '‘', '“',
];

/// Whether a glyph is an opening bracket or quote
#[inline]
pub fn is_open_bracket(glyph: char) -> bool {
    OPEN_BRACKETS.contains(&glyph)
}

/// Whether a glyph is a closing bracket or quote
#[inline]
pub fn is_close_bracket(glyph: char) -> bool {
    CLOSE_BRACKETS.contains(&glyph)
}

/// Stateless line-break oracle consulted by the paginator
///
/// Built once per run; lookups are O(1).
#[derive(Debug, Clone)]
pub struct LineBreakPolicy {
    forbidden_start: HashSet<char>,
    forbidden_end: HashSet<char>,
}

impl LineBreakPolicy {
    /// Create the policy from the built-in kinsoku tables
    pub fn new() -> Self {
        let forbidden_start = CLOSE_BRACKETS
            .iter()
            .chain(CLOSING_PUNCTUATION.iter())
            .copied()
            .collect();
        let forbidden_end = OPEN_BRACKETS.iter().copied().collect();
        Self {
            forbidden_start,
            forbidden_end,
        }
    }

    /// Whether a glyph may not begin a line
    #[inline]
    pub fn is_forbidden_line_start(&self, glyph: char) -> bool {
        self.forbidden_start.contains(&glyph)
    }

    /// Whether a glyph may not end a line
    #[inline]
    pub fn is_forbidden_line_end(&self, glyph: char) -> bool {
        self.forbidden_end.contains(&glyph)
    }

    /// Whether a line break between `current` and `next` is prohibited
    ///
    /// When true, the paginator keeps both glyphs on the same line even if
    /// the line budget is exceeded by one glyph.
    #[inline]
    pub fn forbids_break(&self, current: char, next: char) -> bool {
        self.forbidden_start.contains(&next) || self.forbidden_end.contains(&current)
    }
}

impl Default for LineBreakPolicy {
    fn default() -> Self {
        Self::new()
    }
}
