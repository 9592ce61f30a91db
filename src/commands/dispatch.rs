//! Command dispatch: merge config with flags, then run the route command

use std::time::Instant;

use edgeroute_core::bail_usage;
use edgeroute_core::config::RouteConfig;
use edgeroute_core::error::Result;
use edgeroute_core::graph::ParseOptions;
use edgeroute_core::trace_time;

use crate::cli::{Cli, OutputFormat};
use crate::commands::route;

/// Effective settings after layering flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSettings {
    pub format: OutputFormat,
    pub show_cost: bool,
    pub parse_options: ParseOptions,
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let settings = resolve_settings(cli)?;
    trace_time!(start, "resolve_settings");

    tracing::debug!(
        file = %cli.file.display(),
        format = %settings.format,
        "running route"
    );
    route::execute(cli, &settings, start)
}

/// Load the config file (if any) and apply command-line overrides
pub fn resolve_settings(cli: &Cli) -> Result<RouteSettings> {
    let mut config = match &cli.config {
        Some(path) => RouteConfig::load(path)?,
        None => RouteConfig::default(),
    };

    if let Some(delimiter) = &cli.delimiter {
        config.input.delimiter = delimiter.clone();
    }

    let parse_options = match config.input.parse_options() {
        Ok(opts) => opts,
        Err(reason) => bail_usage!(reason),
    };

    Ok(RouteSettings {
        format: cli.format.unwrap_or(config.output.format),
        show_cost: cli.show_cost || config.output.show_cost,
        parse_options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use edgeroute_core::error::RouteError;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["edgeroute", "edges.csv", "A", "B"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = resolve_settings(&parse(&[])).unwrap();
        assert_eq!(settings.format, OutputFormat::Human);
        assert!(!settings.show_cost);
        assert_eq!(settings.parse_options, ParseOptions::default());
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edgeroute.toml");
        fs::write(
            &path,
            "[input]\ndelimiter = \";\"\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();
        let config = path.to_str().unwrap();

        let from_config = resolve_settings(&parse(&["--config", config])).unwrap();
        assert_eq!(from_config.format, OutputFormat::Json);
        assert_eq!(from_config.parse_options.delimiter, b';');

        let overridden = resolve_settings(&parse(&[
            "--config",
            config,
            "--format",
            "records",
            "--delimiter",
            "\t",
            "--show-cost",
        ]))
        .unwrap();
        assert_eq!(overridden.format, OutputFormat::Records);
        assert_eq!(overridden.parse_options.delimiter, b'\t');
        assert!(overridden.show_cost);
    }

    #[test]
    fn test_delimiter_clashing_with_comment_is_usage_error() {
        let err = resolve_settings(&parse(&["--delimiter", "#"])).unwrap_err();
        assert!(matches!(err, RouteError::UsageError(_)));
    }
}
