//! Paginate command implementation

use crate::error::{CliError, CliResult};
use crate::input::load_book;
use crate::output::{JsonFormatter, PageFormatter, TextFormatter};
use anyhow::Context;
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tatekumi_core::{paginate, PaginationParams};

/// Arguments for the paginate command
#[derive(Debug, Args)]
pub struct PaginateArgs {
    /// Book file (.json with chapters, or plain text as a single chapter)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Glyphs per vertical line
    #[arg(short = 'c', long, value_name = "N", default_value_t = 20)]
    pub chars_per_line: usize,

    /// Lines per page
    #[arg(short = 'l', long, value_name = "N", default_value_t = 10)]
    pub lines_per_page: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Wrapped lines per page with inline ruby
    Text,
    /// One JSON document with pages, lines, and ruby anchors
    Json,
}

impl PaginateArgs {
    /// Execute the paginate command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.quiet, self.verbose);

        let chapters = load_book(&self.input)?;
        log::info!(
            "paginating {} chapter(s) at {}x{}",
            chapters.len(),
            self.chars_per_line,
            self.lines_per_page
        );

        let params = PaginationParams::new(self.chars_per_line, self.lines_per_page);
        let result = paginate(&chapters, params)
            .map_err(|err| CliError::ConfigError(err.to_string()))
            .with_context(|| format!("cannot paginate {}", self.input.display()))?;

        for diagnostic in &result.diagnostics {
            log::warn!("{diagnostic}");
        }

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn PageFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, params)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, params)),
        };
        for (index, page) in result.pages.iter().enumerate() {
            formatter.format_page(index, page)?;
        }
        formatter.finish(&result)?;

        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level),
    )
    .try_init();
}
