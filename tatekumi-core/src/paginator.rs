//! Page assembly state machine
//!
//! Consumes per-chapter glyph streams in chapter order and fills lines and
//! pages under the capacity and kinsoku constraints. The running state is an
//! explicit [`PaginationState`] threaded through a per-glyph step function, so
//! each transition is independently testable.
//!
//! Page-break refinement is deliberately bounded: the lookback split scans at
//! most [`LOOKBACK_WINDOW`] trailing units and recognizes only `。`, `、`, and
//! explicit newlines as safe split points. Other sentence-final marks (！, ？)
//! are not in the set; accepted limitation inherited from the engine this
//! reimplements. Likewise the kinsoku lookahead peeks only within the current
//! chapter's stream, so the pair spanning a chapter boundary is never checked.

use crate::error::Result;
use crate::kinsoku::LineBreakPolicy;
use crate::tokenizer::tokenize_chapter;
use crate::types::{Chapter, CharUnit, Page, Pagination, PaginationParams};
use std::mem;

/// Maximum number of trailing units the lookback split inspects
pub const LOOKBACK_WINDOW: usize = 15;

/// Fill ratio at which a chapter boundary forces a page flush
///
/// A new chapter never begins squeezed into a page that is already this full.
pub const CHAPTER_FLUSH_RATIO: f64 = 0.8;

/// Running fold state of the paginator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Units accumulated for the page being filled
    pub page_buffer: Vec<CharUnit>,
    /// Glyphs on the line being filled
    pub line_chars: usize,
    /// Completed lines on the page being filled
    pub line_count: usize,
}

impl PaginationState {
    /// Occupied glyph count over full page capacity
    pub fn fill_ratio(&self, params: &PaginationParams) -> f64 {
        self.page_buffer.len() as f64 / params.page_capacity() as f64
    }

    /// Emit the buffered units as a finished page and reset the counters
    fn take_page(&mut self) -> Page {
        self.line_chars = 0;
        self.line_count = 0;
        Page {
            units: mem::take(&mut self.page_buffer),
        }
    }
}

/// The pagination orchestrator
///
/// A pure function of its inputs: identical chapters and parameters always
/// produce an identical page sequence, and no state survives between runs.
#[derive(Debug, Clone)]
pub struct Paginator {
    params: PaginationParams,
    policy: LineBreakPolicy,
}

impl Paginator {
    /// Create a paginator, rejecting capacity parameters below 1
    pub fn new(params: PaginationParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            policy: LineBreakPolicy::new(),
        })
    }

    /// Paginate the chapters in order
    pub fn run(&self, chapters: &[Chapter]) -> Pagination {
        let mut diagnostics = Vec::new();
        let mut pages = Vec::new();
        let mut state = PaginationState::default();

        for chapter in chapters {
            let units = tokenize_chapter(chapter, &mut diagnostics);
            if units.is_empty() {
                continue;
            }

            // Chapter-boundary rule: a nearly-full page is flushed before the
            // next chapter's token run starts.
            if !state.page_buffer.is_empty()
                && state.fill_ratio(&self.params) >= CHAPTER_FLUSH_RATIO
            {
                pages.push(state.take_page());
            }

            let mut stream = units.into_iter().peekable();
            while let Some(unit) = stream.next() {
                let next_glyph = stream.peek().map(|u| u.glyph);
                self.step(&mut state, unit, next_glyph, &mut pages);
            }
        }

        // Final partial page, even under capacity.
        if !state.page_buffer.is_empty() {
            pages.push(state.take_page());
        }

        Pagination {
            pages,
            diagnostics,
            params: self.params,
        }
    }

    /// Advance the state machine by one glyph record
    fn step(
        &self,
        state: &mut PaginationState,
        unit: CharUnit,
        next_glyph: Option<char>,
        pages: &mut Vec<Page>,
    ) {
        let glyph = unit.glyph;
        state.page_buffer.push(unit);

        if glyph == '\n' {
            state.line_chars = 0;
            state.line_count += 1;
        } else {
            state.line_chars += 1;
            if state.line_chars >= self.params.chars_per_line {
                let deferred =
                    next_glyph.is_some_and(|next| self.policy.forbids_break(glyph, next));
                // A forbidden pair keeps filling past the nominal budget until
                // an allowed break point appears.
                if !deferred {
                    state.line_chars = 0;
                    state.line_count += 1;
                }
            }
        }

        if state.line_count >= self.params.lines_per_page {
            self.split_full_page(state, pages);
        }
    }

    /// Split a full page buffer at the nearest safe break point
    ///
    /// Scans the trailing [`LOOKBACK_WINDOW`] units for the latest explicit
    /// newline or sentence-terminal mark. A mark whose successor may not start
    /// a line is skipped and the scan continues backward. Units after the
    /// split point seed the next page; without a split point the whole buffer
    /// flushes as-is.
    fn split_full_page(&self, state: &mut PaginationState, pages: &mut Vec<Page>) {
        let window = state.page_buffer.len().min(LOOKBACK_WINDOW);
        let split_at = state
            .page_buffer
            .iter()
            .enumerate()
            .rev()
            .take(window)
            .find(|(idx, unit)| {
                is_split_point(unit)
                    && !state
                        .page_buffer
                        .get(idx + 1)
                        .is_some_and(|next| self.policy.is_forbidden_line_start(next.glyph))
            })
            .map(|(idx, _)| idx);

        match split_at {
            Some(idx) => {
                let seed = state.page_buffer.split_off(idx + 1);
                pages.push(state.take_page());

                // The seed's partial line counts as a full line.
                state.line_count = seed.len().div_ceil(self.params.chars_per_line);
                state.line_chars = seed.len() % self.params.chars_per_line;
                state.page_buffer = seed;
            }
            None => pages.push(state.take_page()),
        }
    }
}

/// Paginate a book: the sole entry point of the engine
///
/// Fails only for invalid capacity parameters; every other irregularity is
/// reported through the returned [`Pagination::diagnostics`].
pub fn paginate(chapters: &[Chapter], params: PaginationParams) -> Result<Pagination> {
    Ok(Paginator::new(params)?.run(chapters))
}

/// Whether a unit is a safe lookback split point
fn is_split_point(unit: &CharUnit) -> bool {
    matches!(unit.glyph, '\n' | '。' | '、')
}

/// Re-derive the line layout of a page's units
///
/// Applies the same fill-and-defer rule as pagination, restarted at the page
/// top. Explicit newline separators are excluded from the returned lines.
/// This is the view the rendering collaborator consumes.
pub fn wrap_lines<'a>(
    units: &'a [CharUnit],
    params: &PaginationParams,
    policy: &LineBreakPolicy,
) -> Vec<&'a [CharUnit]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut line_chars = 0;

    for idx in 0..units.len() {
        if units[idx].is_newline() {
            lines.push(&units[start..idx]);
            start = idx + 1;
            line_chars = 0;
            continue;
        }
        line_chars += 1;
        if line_chars >= params.chars_per_line {
            let deferred = units
                .get(idx + 1)
                .is_some_and(|next| policy.forbids_break(units[idx].glyph, next.glyph));
            if !deferred {
                lines.push(&units[start..=idx]);
                start = idx + 1;
                line_chars = 0;
            }
        }
    }
    if start < units.len() {
        lines.push(&units[start..]);
    }
    lines
}
