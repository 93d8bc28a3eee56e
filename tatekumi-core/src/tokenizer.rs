//! Chapter tokenization into glyph records
//!
//! Expands a chapter into its ordered [`CharUnit`] stream: a synthesized
//! title run first, then the body with annotation spans attached. Literal
//! characters map 1:1 to units; only the first glyph of an annotated span
//! carries the ruby reading.

use crate::annotation::resolve_spans;
use crate::types::{Chapter, CharUnit, Diagnostic};

/// Tokenize one chapter into its glyph stream
///
/// Returns an empty stream for a chapter with neither title nor body. A
/// chapter with a title field but no title text gets a `第N章` heading
/// (1-based); a chapter without a title field gets no heading run at all.
pub fn tokenize_chapter(chapter: &Chapter, diagnostics: &mut Vec<Diagnostic>) -> Vec<CharUnit> {
    if chapter.is_fully_empty() {
        return Vec::new();
    }

    let mut units = Vec::with_capacity(chapter.raw_text.chars().count() + 8);

    // Title run: "{title}\n\n" as its own leading token run, every glyph
    // flagged so renderers and the round-trip invariant can exclude it.
    if let Some(title) = chapter.title.as_deref() {
        let title_text = if title.is_empty() {
            format!("第{}章\n\n", chapter.index + 1)
        } else {
            format!("{title}\n\n")
        };
        for glyph in title_text.chars() {
            let mut unit = CharUnit::plain(glyph, chapter.index);
            unit.is_chapter_title = true;
            units.push(unit);
        }
    }

    let chars: Vec<char> = chapter.raw_text.chars().collect();
    let spans = resolve_spans(&chars, &chapter.annotations, chapter.index, diagnostics);

    let mut span_cursor = 0;
    for (idx, &glyph) in chars.iter().enumerate() {
        let mut unit = CharUnit::plain(glyph, chapter.index);

        if let Some(span) = spans.get(span_cursor) {
            if idx >= span.start {
                unit.has_annotation = true;
                if idx == span.start && !span.annotation.reading.is_empty() {
                    unit.ruby_text = Some(span.annotation.reading.clone());
                }
                if idx + 1 == span.end {
                    span_cursor += 1;
                }
            }
        }

        units.push(unit);
    }

    units
}
