//! Command-line argument definitions for the Voltaic CLI.
//!
//! Arguments control input/output paths, configuration file selection,
//! orientation search and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Voltaic schematic compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input schematic source
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Keep the reference layout instead of searching symbol orientations
    #[arg(long)]
    pub no_optimize: bool,
}
