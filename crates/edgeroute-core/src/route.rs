//! Name-level shortest path lookup

use std::time::Instant;

use crate::error::Result;
use crate::graph::{reconstruct, search, Graph, Route};
use crate::trace_time;

/// Find the minimum-cost route between two named locations.
///
/// Both names are resolved before any search runs, so an unknown name is
/// reported as [`RouteError::NotFound`](crate::error::RouteError::NotFound)
/// even when the other one is also missing or unreachable.
pub fn find_route(graph: &mut Graph, start: &str, end: &str) -> Result<Route> {
    let begin = Instant::now();

    let start_id = graph.lookup(start)?;
    let end_id = graph.lookup(end)?;

    let stats = search(graph, start_id, end_id)?;
    trace_time!(begin, "search", expanded = stats.expanded);

    let route = reconstruct(graph, end_id)?;
    trace_time!(begin, "reconstruct");
    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;
    use crate::graph::{read_edges, ParseOptions};

    fn load(input: &str) -> Graph {
        read_edges(input.as_bytes(), &ParseOptions::default()).unwrap()
    }

    #[test]
    fn test_prefers_cheaper_indirect_path() {
        let mut graph = load("A,B,1\nB,C,2\nA,C,5\n");
        let route = find_route(&mut graph, "A", "C").unwrap();
        assert_eq!(route.names, vec!["A", "B", "C"]);
        assert_eq!(route.total_cost, 3);
    }

    #[test]
    fn test_unknown_end_is_not_found() {
        let mut graph = load("A,B,1\n");
        let err = find_route(&mut graph, "A", "C").unwrap_err();
        assert!(matches!(err, RouteError::NotFound { ref name } if name == "C"));
    }

    #[test]
    fn test_unknown_start_checked_first() {
        let mut graph = load("A,B,1\n");
        let err = find_route(&mut graph, "X", "Y").unwrap_err();
        assert!(matches!(err, RouteError::NotFound { ref name } if name == "X"));
    }

    #[test]
    fn test_disconnected_components_unreachable() {
        let mut graph = load("A,B,1\nC,D,1\n");
        let err = find_route(&mut graph, "A", "D").unwrap_err();
        assert!(matches!(
            err,
            RouteError::Unreachable { ref start, ref end } if start == "A" && end == "D"
        ));
    }

    #[test]
    fn test_graph_reusable_across_searches() {
        let mut graph = load("A,B,1\nB,C,2\nA,C,5\nC,A,1\n");
        let first = find_route(&mut graph, "A", "C").unwrap();
        let second = find_route(&mut graph, "C", "B").unwrap();
        let third = find_route(&mut graph, "A", "C").unwrap();

        assert_eq!(second.names, vec!["C", "A", "B"]);
        assert_eq!(second.total_cost, 2);
        assert_eq!(first, third);
    }
}
