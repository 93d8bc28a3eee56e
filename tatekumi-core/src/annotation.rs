//! Annotation span resolution
//!
//! Maps each chapter's annotation words onto explicit `(start, end)` glyph
//! spans before any tokenization happens, so a match can never shift the
//! offsets of a later one. The scan is a single left-to-right pass over the
//! chapter body; when several annotation words match at the same offset the
//! longest word wins, which prevents a short word from eating the prefix of a
//! longer one.
//!
//! Every occurrence of an annotated word is treated uniformly. When two
//! annotations name the same word, the first in list order applies to all
//! occurrences and the duplicate is reported as a diagnostic.

use crate::types::{Annotation, Diagnostic};
use smallvec::SmallVec;
use std::collections::HashSet;

/// A resolved annotation span over chapter body glyphs
///
/// Offsets are glyph (char) indices into the chapter body, `start` inclusive
/// and `end` exclusive. Spans never overlap and are sorted by `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationSpan<'a> {
    /// First glyph of the annotated word
    pub start: usize,
    /// One past the last glyph of the annotated word
    pub end: usize,
    /// The annotation that produced this span
    pub annotation: &'a Annotation,
}

/// Resolve all annotation spans in a chapter body
///
/// `chars` is the chapter body as glyphs. Skipped and unmatched annotations
/// are recorded in `diagnostics`; the scan itself never fails.
pub fn resolve_spans<'a>(
    chars: &[char],
    annotations: &'a [Annotation],
    chapter_index: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<AnnotationSpan<'a>> {
    let mut active: Vec<(&'a Annotation, Vec<char>)> = Vec::new();
    let mut seen_words: HashSet<&str> = HashSet::new();

    for annotation in annotations {
        if annotation.word.is_empty() {
            diagnostics.push(Diagnostic::EmptyAnnotationWord { chapter_index });
            continue;
        }
        if !seen_words.insert(annotation.word.as_str()) {
            diagnostics.push(Diagnostic::DuplicateAnnotation {
                chapter_index,
                word: annotation.word.clone(),
            });
            continue;
        }
        active.push((annotation, annotation.word.chars().collect()));
    }

    let mut spans = Vec::new();
    let mut matched = vec![false; active.len()];
    let mut pos = 0;

    while pos < chars.len() {
        // Collect every annotation word starting at this offset, then take
        // the longest so prefixes of longer words never match first.
        let mut candidates: SmallVec<[usize; 4]> = SmallVec::new();
        for (idx, (_, word_chars)) in active.iter().enumerate() {
            if chars[pos..].starts_with(word_chars) {
                candidates.push(idx);
            }
        }

        match candidates
            .iter()
            .copied()
            .max_by_key(|&idx| active[idx].1.len())
        {
            Some(best) => {
                let (annotation, word_chars) = &active[best];
                spans.push(AnnotationSpan {
                    start: pos,
                    end: pos + word_chars.len(),
                    annotation: *annotation,
                });
                matched[best] = true;
                pos += word_chars.len();
            }
            None => pos += 1,
        }
    }

    for (idx, (annotation, _)) in active.iter().enumerate() {
        if !matched[idx] {
            diagnostics.push(Diagnostic::UnmatchedAnnotation {
                chapter_index,
                word: annotation.word.clone(),
            });
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars_of(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_single_word_span() {
        let chars = chars_of("私は猫である。");
        let annotations = vec![Annotation::new("猫", "ねこ")];
        let mut diags = Vec::new();

        let spans = resolve_spans(&chars, &annotations, 0, &mut diags);

        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start, spans[0].end), (2, 3));
        assert_eq!(spans[0].annotation.reading, "ねこ");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_all_occurrences_annotated() {
        let chars = chars_of("猫が好き。猫は寝る。");
        let annotations = vec![Annotation::new("猫", "ねこ")];
        let mut diags = Vec::new();

        let spans = resolve_spans(&chars, &annotations, 0, &mut diags);

        assert_eq!(spans.len(), 2);
        assert_eq!((spans[0].start, spans[0].end), (0, 1));
        assert_eq!((spans[1].start, spans[1].end), (5, 6));
    }

    #[test]
    fn test_longest_word_wins_at_offset() {
        let chars = chars_of("日本語を勉強する。");
        let annotations = vec![
            Annotation::new("日本", "にほん"),
            Annotation::new("日本語", "にほんご"),
        ];
        let mut diags = Vec::new();

        let spans = resolve_spans(&chars, &annotations, 0, &mut diags);

        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start, spans[0].end), (0, 3));
        assert_eq!(spans[0].annotation.word, "日本語");
        // The shorter word never matched anywhere on its own.
        assert_eq!(
            diags,
            vec![Diagnostic::UnmatchedAnnotation {
                chapter_index: 0,
                word: "日本".to_string(),
            }]
        );
    }

    #[test]
    fn test_matched_span_consumes_its_glyphs() {
        // A word inside an already-matched span must not match again.
        let chars = chars_of("東京都に住む。");
        let annotations = vec![
            Annotation::new("東京都", "とうきょうと"),
            Annotation::new("京都", "きょうと"),
        ];
        let mut diags = Vec::new();

        let spans = resolve_spans(&chars, &annotations, 0, &mut diags);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].annotation.word, "東京都");
    }

    #[test]
    fn test_empty_word_skipped_with_diagnostic() {
        let chars = chars_of("私は猫である。");
        let annotations = vec![Annotation::new("", "よみ"), Annotation::new("猫", "ねこ")];
        let mut diags = Vec::new();

        let spans = resolve_spans(&chars, &annotations, 3, &mut diags);

        assert_eq!(spans.len(), 1);
        assert_eq!(diags, vec![Diagnostic::EmptyAnnotationWord { chapter_index: 3 }]);
    }

    #[test]
    fn test_duplicate_word_first_wins() {
        let chars = chars_of("猫がいる。");
        let annotations = vec![Annotation::new("猫", "ねこ"), Annotation::new("猫", "ネコ")];
        let mut diags = Vec::new();

        let spans = resolve_spans(&chars, &annotations, 0, &mut diags);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].annotation.reading, "ねこ");
        assert_eq!(
            diags,
            vec![Diagnostic::DuplicateAnnotation {
                chapter_index: 0,
                word: "猫".to_string(),
            }]
        );
    }

    #[test]
    fn test_unmatched_word_reported() {
        let chars = chars_of("私は犬である。");
        let annotations = vec![Annotation::new("猫", "ねこ")];
        let mut diags = Vec::new();

        let spans = resolve_spans(&chars, &annotations, 1, &mut diags);

        assert!(spans.is_empty());
        assert_eq!(
            diags,
            vec![Diagnostic::UnmatchedAnnotation {
                chapter_index: 1,
                word: "猫".to_string(),
            }]
        );
    }

    #[test]
    fn test_no_annotations() {
        let chars = chars_of("ただの文章。");
        let mut diags = Vec::new();

        let spans = resolve_spans(&chars, &[], 0, &mut diags);

        assert!(spans.is_empty());
        assert!(diags.is_empty());
    }
}
