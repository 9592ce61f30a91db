//! The route command: load an edge list, search it, print the result

pub mod human;
pub mod json;
pub mod records;

use std::time::Instant;

use edgeroute_core::error::Result;
use edgeroute_core::find_route;
use edgeroute_core::graph::load_edges;
use edgeroute_core::trace_time;

use super::dispatch::RouteSettings;
use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, settings: &RouteSettings, start: Instant) -> Result<()> {
    let mut graph = load_edges(&cli.file, &settings.parse_options)?;
    trace_time!(
        start,
        "load_edges",
        nodes = graph.node_count(),
        edges = graph.edge_count()
    );

    let route = find_route(&mut graph, &cli.start, &cli.end)?;
    trace_time!(start, "find_route", length = route.len());

    match settings.format {
        OutputFormat::Human => human::output_human(&route, settings.show_cost),
        OutputFormat::Json => json::output_json(&route)?,
        OutputFormat::Records => records::output_records(&route),
    }

    Ok(())
}
