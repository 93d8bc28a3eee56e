//! Book file loading
//!
//! Two input shapes are accepted: a `.json` book file with chapters and
//! annotations, or any other file read as plain UTF-8 text and treated as a
//! single untitled chapter. Chapter indices are assigned by position.

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tatekumi_core::{Annotation, Chapter};

/// On-disk book shape
#[derive(Debug, Deserialize)]
pub struct BookFile {
    /// Book title; informational only
    #[serde(default)]
    pub title: Option<String>,
    /// Chapters in reading order
    pub chapters: Vec<ChapterEntry>,
}

/// One chapter of a book file
#[derive(Debug, Deserialize)]
pub struct ChapterEntry {
    /// Chapter title; omit for no heading run, empty for a numbered heading
    #[serde(default)]
    pub title: Option<String>,
    /// Raw chapter body text
    pub text: String,
    /// Phonetic annotations for words in the body
    #[serde(default)]
    pub annotations: Vec<AnnotationEntry>,
}

/// One annotation of a chapter entry
#[derive(Debug, Deserialize)]
pub struct AnnotationEntry {
    /// The annotated word
    pub word: String,
    /// Ruby reading for the word
    #[serde(default)]
    pub reading: String,
    /// Dictionary definition
    #[serde(default)]
    pub definition: String,
}

/// Load a book from a path, dispatching on the file extension
pub fn load_book(path: &Path) -> Result<Vec<Chapter>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        parse_book_json(&content)
    } else {
        log::debug!("treating {} as a plain-text single chapter", path.display());
        Ok(vec![Chapter::new(0, None, content)])
    }
}

/// Parse the JSON book shape into core chapters
pub fn parse_book_json(content: &str) -> Result<Vec<Chapter>> {
    let book: BookFile = serde_json::from_str(content)
        .map_err(|e| CliError::InvalidBook(e.to_string()))?;

    let chapters = book
        .chapters
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let mut chapter = Chapter::new(index, entry.title, entry.text);
            chapter.annotations = entry
                .annotations
                .into_iter()
                .map(|a| Annotation {
                    word: a.word,
                    reading: a.reading,
                    definition: a.definition,
                })
                .collect();
            chapter
        })
        .collect();

    Ok(chapters)
}
