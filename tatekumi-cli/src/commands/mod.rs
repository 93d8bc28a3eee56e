//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod paginate;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Paginate a book into fixed-capacity pages
    Paginate(paginate::PaginateArgs),

    /// Check a book file and report annotation diagnostics
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Paginate(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}
