//! Edgeroute - minimum-cost route finder
//!
//! Reads a directed, weighted edge list and prints the cheapest route
//! between two named locations.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{envelope, Cli, OutputFormat};
use edgeroute_core::error::{ExitCode as RouteExitCode, RouteError};
use edgeroute_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if envelope::requests_json(env::args().skip(1)) {
                if let Some(route_error) = envelope::parse_failure(&err) {
                    eprintln!("{}", route_error.to_json());
                    return exit_with(&route_error);
                }
            }
            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(RouteExitCode::Success as u8),
        Err(e) => {
            if cli.format == Some(OutputFormat::Json) {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            exit_with(&e)
        }
    }
}

fn exit_with(err: &RouteError) -> ExitCode {
    ExitCode::from(err.exit_code() as u8)
}
