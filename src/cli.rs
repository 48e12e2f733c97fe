//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Terminal editor for homepage card layout configuration.
#[derive(Parser, Debug)]
#[command(name = "homecard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the card styles JSON file (default: card-styles.json)
    #[arg(short, long)]
    pub styles: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the effective card style collection as JSON and exit
    #[arg(long)]
    pub print: bool,

    /// Overwrite the styles file with the bundled defaults and exit
    #[arg(long)]
    pub reset: bool,

    /// Path to the log file (default: homecard.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}
