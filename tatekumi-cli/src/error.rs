//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Book file could not be parsed
    InvalidBook(String),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidBook(msg) => write!(f, "Invalid book file: {msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("book.json".to_string());
        assert_eq!(error.to_string(), "File not found: book.json");
    }

    #[test]
    fn test_invalid_book_error_display() {
        let error = CliError::InvalidBook("missing field 'chapters'".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid book file: missing field 'chapters'"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("chars-per-line must be at least 1".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: chars-per-line must be at least 1"
        );
    }

    #[test]
    fn test_error_with_japanese_path() {
        let error = CliError::FileNotFound("本/吾輩は猫である.json".to_string());
        assert_eq!(error.to_string(), "File not found: 本/吾輩は猫である.json");
    }
}
