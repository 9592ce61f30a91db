//! Path reconstruction from search back-pointers

use crate::error::{Result, RouteError};
use crate::graph::types::{Cost, Hop, NodeId, Route};
use crate::graph::Graph;

/// Walk `incoming_edge` back-pointers from `end` to the search start and
/// return the route in start-to-end order.
///
/// `end` must have been finalized by the last [`search`](crate::graph::search).
/// When `end` is the start itself the route is just its name with cost 0.
pub fn reconstruct(graph: &Graph, end: NodeId) -> Result<Route> {
    let end_node = graph.node(end);
    if !end_node.is_finalized() {
        return Err(RouteError::NotReached {
            name: end_node.name().to_string(),
        });
    }

    let broken = || RouteError::BrokenBackPointers {
        name: end_node.name().to_string(),
    };

    let mut node_stack = vec![end];
    let mut edge_stack = Vec::new();
    let mut current = end;

    while let Some(edge_id) = graph.node(current).incoming_edge() {
        // A chain can never visit more nodes than the graph holds
        if node_stack.len() > graph.node_count() {
            return Err(broken());
        }
        current = graph.edge(edge_id).other_end(current);
        node_stack.push(current);
        edge_stack.push(edge_id);
    }

    if graph.node(current).cost() != Cost::ZERO {
        return Err(broken());
    }
    let total_cost = end_node.cost().value().ok_or_else(broken)?;

    let mut names = Vec::with_capacity(node_stack.len());
    while let Some(id) = node_stack.pop() {
        names.push(graph.node(id).name().to_string());
    }

    let mut hops = Vec::with_capacity(edge_stack.len());
    while let Some(edge_id) = edge_stack.pop() {
        let edge = graph.edge(edge_id);
        hops.push(Hop {
            from: graph.node(edge.start()).name().to_string(),
            to: graph.node(edge.end()).name().to_string(),
            weight: edge.weight(),
        });
    }

    tracing::debug!(length = hops.len(), cost = total_cost, "reconstructed route");
    Ok(Route {
        names,
        hops,
        total_cost,
    })
}
