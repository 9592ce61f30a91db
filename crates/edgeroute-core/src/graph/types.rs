use std::fmt;

use serde::Serialize;

/// Handle to a node in a [`Graph`](super::Graph)'s node arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to an edge in a [`Graph`](super::Graph)'s edge arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    pub(crate) fn new(index: usize) -> Self {
        EdgeId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Cumulative path cost from the search start.
///
/// `Infinite` marks a node the search has not reached. Every finite cost
/// orders below `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Cost {
    Finite(u64),
    #[default]
    Infinite,
}

impl Cost {
    pub const ZERO: Cost = Cost::Finite(0);

    /// The finite value, if any
    pub fn value(self) -> Option<u64> {
        match self {
            Cost::Finite(c) => Some(c),
            Cost::Infinite => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// Extend this cost by one edge weight. `None` on overflow.
    pub fn checked_add(self, weight: u64) -> Option<Cost> {
        match self {
            Cost::Finite(c) => c.checked_add(weight).map(Cost::Finite),
            Cost::Infinite => Some(Cost::Infinite),
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(c) => write!(f, "{}", c),
            Cost::Infinite => write!(f, "inf"),
        }
    }
}

/// A named location in the graph.
///
/// The node owns the ids of its outgoing edges. `incoming_edge` is a
/// back-pointer set by the search and read by path reconstruction.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    cost: Cost,
    outgoing: Vec<EdgeId>,
    incoming_edge: Option<EdgeId>,
    finalized: bool,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cost: Cost::Infinite,
            outgoing: Vec::new(),
            incoming_edge: None,
            finalized: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Best known cost from the last search start
    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    pub fn incoming_edge(&self) -> Option<EdgeId> {
        self.incoming_edge
    }

    /// Whether the last search settled this node at its minimum cost
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub(crate) fn push_outgoing(&mut self, edge: EdgeId) {
        self.outgoing.push(edge);
    }

    pub(crate) fn reset(&mut self) {
        self.cost = Cost::Infinite;
        self.incoming_edge = None;
        self.finalized = false;
    }

    /// Record a better tentative cost without settling the node
    pub(crate) fn offer(&mut self, cost: Cost) {
        self.cost = cost;
    }

    pub(crate) fn settle(&mut self, cost: Cost, incoming_edge: Option<EdgeId>) {
        self.cost = cost;
        self.incoming_edge = incoming_edge;
        self.finalized = true;
    }
}

/// A directed, weighted connection between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    start: NodeId,
    end: NodeId,
    weight: u64,
}

impl Edge {
    pub(crate) fn new(start: NodeId, end: NodeId, weight: u64) -> Self {
        Self { start, end, weight }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn end(&self) -> NodeId {
        self.end
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// The endpoint opposite `node`
    pub fn other_end(&self, node: NodeId) -> NodeId {
        if node == self.start {
            self.end
        } else {
            self.start
        }
    }
}

/// One edge of a reconstructed route, by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub from: String,
    pub to: String,
    pub weight: u64,
}

/// A start-to-end path produced by path reconstruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Location names from start to end, inclusive
    pub names: Vec<String>,
    /// Edges taken, in travel order
    pub hops: Vec<Hop>,
    /// Sum of hop weights; equals the end node's cost
    pub total_cost: u64,
}

impl Route {
    pub fn start(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }

    pub fn end(&self) -> &str {
        self.names.last().map(String::as_str).unwrap_or_default()
    }

    /// Number of edges on the route
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_costs_order_below_infinite() {
        assert!(Cost::Finite(u64::MAX) < Cost::Infinite);
        assert!(Cost::Finite(3) < Cost::Finite(5));
        assert_eq!(Cost::default(), Cost::Infinite);
    }

    #[test]
    fn test_checked_add_overflow() {
        assert_eq!(Cost::Finite(2).checked_add(3), Some(Cost::Finite(5)));
        assert_eq!(Cost::Finite(u64::MAX).checked_add(1), None);
        assert_eq!(Cost::Infinite.checked_add(1), Some(Cost::Infinite));
    }

    #[test]
    fn test_other_end() {
        let edge = Edge::new(NodeId::new(0), NodeId::new(1), 4);
        assert_eq!(edge.other_end(NodeId::new(0)), NodeId::new(1));
        assert_eq!(edge.other_end(NodeId::new(1)), NodeId::new(0));
    }

    #[test]
    fn test_settle_and_reset() {
        let mut node = Node::new("A");
        node.settle(Cost::Finite(7), Some(EdgeId::new(2)));
        assert!(node.is_finalized());
        assert_eq!(node.incoming_edge(), Some(EdgeId::new(2)));

        node.reset();
        assert_eq!(node.cost(), Cost::Infinite);
        assert_eq!(node.incoming_edge(), None);
        assert!(!node.is_finalized());
    }
}
