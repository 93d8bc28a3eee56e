//! Validate command implementation

use crate::error::CliResult;
use crate::input::load_book;
use clap::Args;
use std::path::PathBuf;
use tatekumi_core::tokenizer::tokenize_chapter;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Book file to check
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ValidateArgs {
    /// Execute the validate command
    ///
    /// Tokenizes every chapter without paginating and prints what a
    /// pagination run would report as diagnostics. Always exits zero for a
    /// parsable book; broken annotations are findings, not failures.
    pub fn execute(&self) -> CliResult<()> {
        super::paginate::init_logging(self.quiet, self.verbose);

        let chapters = load_book(&self.input)?;
        let mut diagnostics = Vec::new();
        let mut total_glyphs = 0;

        for chapter in &chapters {
            let units = tokenize_chapter(chapter, &mut diagnostics);
            total_glyphs += units.len();
            log::debug!(
                "chapter {}: {} unit(s), {} annotation(s)",
                chapter.index,
                units.len(),
                chapter.annotations.len()
            );
        }

        println!(
            "{}: {} chapter(s), {} glyph unit(s)",
            self.input.display(),
            chapters.len(),
            total_glyphs
        );
        if diagnostics.is_empty() {
            println!("no findings");
        } else {
            for diagnostic in &diagnostics {
                println!("finding: {diagnostic}");
            }
        }

        Ok(())
    }
}
