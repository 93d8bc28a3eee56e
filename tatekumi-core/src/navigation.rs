//! Page navigation helpers
//!
//! Navigation is lenient by design: out-of-range indices clamp instead of
//! erroring, matching the UI flows these calls feed. Only an empty page list
//! yields `None`.

use crate::types::Page;

/// Page at `index`, clamped to `[0, pages.len() - 1]`
pub fn go_to_page(pages: &[Page], index: usize) -> Option<&Page> {
    if pages.is_empty() {
        return None;
    }
    Some(&pages[index.min(pages.len() - 1)])
}

/// Chapter shown at the top of a page, from its first glyph
pub fn current_chapter_of(page: &Page) -> Option<usize> {
    page.chapter_index()
}

/// Index of the first page that opens with the given chapter
///
/// A chapter that only ever appears mid-page (its predecessor ended partway
/// down and the page was roomy enough to share) has no opening page; callers
/// fall back to the page that contains the chapter start.
pub fn first_page_of_chapter(pages: &[Page], chapter_index: usize) -> Option<usize> {
    pages
        .iter()
        .position(|page| page.chapter_index() == Some(chapter_index))
}

/// Index of the page containing any glyph of the given chapter
pub fn page_containing_chapter(pages: &[Page], chapter_index: usize) -> Option<usize> {
    pages
        .iter()
        .position(|page| page.units.iter().any(|u| u.chapter_index == chapter_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CharUnit;

    fn page_of(chapter_index: usize, text: &str) -> Page {
        Page {
            units: text
                .chars()
                .map(|glyph| CharUnit::plain(glyph, chapter_index))
                .collect(),
        }
    }

    #[test]
    fn test_go_to_page_in_range() {
        let pages = vec![page_of(0, "一"), page_of(0, "二"), page_of(1, "三")];

        assert_eq!(go_to_page(&pages, 1).unwrap().units[0].glyph, '二');
    }

    #[test]
    fn test_go_to_page_clamps_overflow() {
        let pages = vec![page_of(0, "一"), page_of(0, "二")];

        assert_eq!(go_to_page(&pages, 99).unwrap().units[0].glyph, '二');
    }

    #[test]
    fn test_go_to_page_empty() {
        assert!(go_to_page(&[], 0).is_none());
    }

    #[test]
    fn test_current_chapter_of() {
        let page = page_of(4, "本文");
        assert_eq!(current_chapter_of(&page), Some(4));

        let empty = Page { units: Vec::new() };
        assert_eq!(current_chapter_of(&empty), None);
    }

    #[test]
    fn test_first_page_of_chapter() {
        let pages = vec![page_of(0, "一"), page_of(1, "二"), page_of(1, "三")];

        assert_eq!(first_page_of_chapter(&pages, 1), Some(1));
        assert_eq!(first_page_of_chapter(&pages, 5), None);
    }

    #[test]
    fn test_page_containing_chapter_mid_page() {
        // Chapter 1 starts partway down the first page.
        let mut shared = page_of(0, "前章");
        shared.units.push(CharUnit::plain('次', 1));
        let pages = vec![shared, page_of(1, "続き")];

        assert_eq!(first_page_of_chapter(&pages, 1), Some(1));
        assert_eq!(page_containing_chapter(&pages, 1), Some(0));
    }
}
