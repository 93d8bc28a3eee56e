//! Error types for the pagination engine

use thiserror::Error;

/// Errors that abort a pagination run before any pages are produced
///
/// Everything else the engine encounters (skipped annotations, empty
/// chapters) degrades gracefully and is reported through
/// [`Diagnostic`](crate::types::Diagnostic) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Capacity parameters that cannot hold a single glyph
    #[error(
        "invalid pagination parameters: chars_per_line={chars_per_line}, \
         lines_per_page={lines_per_page} (both must be at least 1)"
    )]
    InvalidParams {
        /// The rejected chars-per-line value
        chars_per_line: usize,
        /// The rejected lines-per-page value
        lines_per_page: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_params_display() {
        let err = CoreError::InvalidParams {
            chars_per_line: 0,
            lines_per_page: 8,
        };
        assert_eq!(
            err.to_string(),
            "invalid pagination parameters: chars_per_line=0, lines_per_page=8 \
             (both must be at least 1)"
        );
    }
}
