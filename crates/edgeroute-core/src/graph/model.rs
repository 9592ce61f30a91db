//! Arena-backed directed graph keyed by location name

use std::collections::HashMap;

use crate::error::{Result, RouteError};
use crate::graph::types::{Edge, EdgeId, Node, NodeId};

/// A directed, weighted graph of named locations.
///
/// Nodes and edges live in index-addressed arenas. Edges refer to their
/// endpoints by [`NodeId`], and each node lists the [`EdgeId`]s it owns.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node registered under `name`, creating it if absent
    pub fn get_or_create(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(name));
        self.index.insert(name.to_string(), id);
        id
    }

    /// Resolve a name to its node
    pub fn lookup(&self, name: &str) -> Result<NodeId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| RouteError::not_found(name))
    }

    /// Add a directed edge owned by `start`
    pub fn add_edge(&mut self, start: NodeId, end: NodeId, weight: u64) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(start, end, weight));
        self.nodes[start.index()].push_outgoing(id);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterate nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(i), node))
    }

    /// Location names in creation order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(Node::name)
    }

    /// Outgoing edges of a node, resolved
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.node(id)
            .outgoing()
            .iter()
            .map(move |&edge_id| (edge_id, self.edge(edge_id)))
    }

    /// Clear per-node search state: infinite cost, no back-pointer, not finalized
    pub fn reset_search_state(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
    }
}
