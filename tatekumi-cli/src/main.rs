//! Tatekumi command-line entry point

use clap::Parser;
use tatekumi_cli::commands::Commands;

/// Vertical-text pagination for Japanese e-books
#[derive(Debug, Parser)]
#[command(name = "tatekumi", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
