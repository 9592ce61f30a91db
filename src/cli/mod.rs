//! CLI argument parsing for edgeroute

pub mod envelope;
mod parse;

use std::path::PathBuf;

use clap::Parser;

pub use edgeroute_core::format::OutputFormat;
use parse::{parse_delimiter, parse_format};

/// Edgeroute - find the cheapest route through a weighted edge list
#[derive(Parser, Debug)]
#[command(name = "edgeroute")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge list file with one `start,end,weight` per line (`-` for stdin)
    pub file: PathBuf,

    /// Name of the location to start from
    pub start: String,

    /// Name of the location to reach
    pub end: String,

    /// Output format: human, json, or records (overrides the config file)
    #[arg(long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress error messages
    #[arg(long, short)]
    pub quiet: bool,

    /// Log search progress to stderr
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `edgeroute_core=debug`)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Path to a TOML config file
    #[arg(long, env = "EDGEROUTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Field delimiter for the edge list (single ASCII character)
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<String>,

    /// Print the total route cost after the path
    #[arg(long)]
    pub show_cost: bool,
}
