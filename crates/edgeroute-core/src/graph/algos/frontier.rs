use crate::error::{Result, RouteError};
use crate::graph::types::{Cost, EdgeId, NodeId};
use crate::graph::Graph;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// A possible step from an already-settled node across one of its edges.
///
/// Ordered by `cost` ascending, then by insertion sequence so equal-cost
/// moves are extracted first-in first-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    /// Node the move is expanded from
    pub from: NodeId,
    pub edge: EdgeId,
    /// `edge.weight + from.cost`
    pub cost: Cost,
    seq: u64,
}

impl PartialOrd for CandidateMove {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CandidateMove {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-ordered set of candidate moves, private to one search call
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<Reverse<CandidateMove>>,
    next_seq: u64,
}

impl Frontier {
    fn push(&mut self, from: NodeId, edge: EdgeId, cost: Cost) {
        self.heap.push(Reverse(CandidateMove {
            from,
            edge,
            cost,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<CandidateMove> {
        self.heap.pop().map(|Reverse(candidate)| candidate)
    }
}

/// Counters describing one search run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose outgoing edges were pushed onto the frontier
    pub expanded: usize,
    /// Candidate moves inserted
    pub pushed: usize,
    /// Stale candidate moves dropped on extraction
    pub discarded: usize,
    /// Moves skipped because their cost exceeded `u64::MAX`
    pub overflowed: usize,
}

/// Find the minimum-cost path from `start` to `end`.
///
/// On success every node on the path is finalized with its cost and the
/// edge used to reach it, ready for [`reconstruct`](crate::graph::path::reconstruct).
/// Fails with [`RouteError::Unreachable`] when the frontier runs dry first,
/// or [`RouteError::CostOverflow`] when `end` is only reachable at a cost
/// beyond `u64::MAX`.
#[tracing::instrument(skip_all, fields(start = %graph.node(start).name(), end = %graph.node(end).name()))]
pub fn search(graph: &mut Graph, start: NodeId, end: NodeId) -> Result<SearchStats> {
    graph.reset_search_state();
    graph.node_mut(start).settle(Cost::ZERO, None);

    let mut frontier = Frontier::default();
    let mut stats = SearchStats::default();
    let mut current = start;

    while current != end {
        expand(graph, current, &mut frontier, &mut stats);

        let Some((next_move, next_node)) = extract_live(graph, &mut frontier, &mut stats) else {
            return Err(exhausted(graph, start, end, &stats));
        };

        graph
            .node_mut(next_node)
            .settle(next_move.cost, Some(next_move.edge));
        tracing::trace!(
            node = graph.node(next_node).name(),
            cost = %next_move.cost,
            "settled"
        );

        current = next_node;
    }

    tracing::debug!(
        expanded = stats.expanded,
        pushed = stats.pushed,
        discarded = stats.discarded,
        overflowed = stats.overflowed,
        cost = %graph.node(end).cost(),
        "search complete"
    );
    Ok(stats)
}

/// Push a candidate move for every outgoing edge of `current` that would
/// improve its destination's best known cost
fn expand(
    graph: &mut Graph,
    current: NodeId,
    frontier: &mut Frontier,
    stats: &mut SearchStats,
) {
    stats.expanded += 1;
    let base = graph.node(current).cost();

    for i in 0..graph.node(current).outgoing().len() {
        let edge_id = graph.node(current).outgoing()[i];
        let edge = *graph.edge(edge_id);
        let dest = edge.other_end(current);

        if graph.node(dest).is_finalized() {
            continue;
        }

        // A sum past u64::MAX can never beat a finite cost
        let Some(cost) = base.checked_add(edge.weight()) else {
            stats.overflowed += 1;
            continue;
        };
        if cost >= graph.node(dest).cost() {
            continue;
        }

        graph.node_mut(dest).offer(cost);
        frontier.push(current, edge_id, cost);
        stats.pushed += 1;
    }
}

/// Error for a frontier that ran dry before settling `end`.
///
/// `end` may still be connected to `start` when every route to it
/// overflowed the cost range; that is reported as `CostOverflow`.
fn exhausted(graph: &Graph, start: NodeId, end: NodeId, stats: &SearchStats) -> RouteError {
    if stats.overflowed > 0 && connected(graph, start, end) {
        return RouteError::CostOverflow {
            name: graph.node(end).name().to_string(),
        };
    }

    RouteError::Unreachable {
        start: graph.node(start).name().to_string(),
        end: graph.node(end).name().to_string(),
    }
}

/// Whether `end` can be reached from `start` following edge direction,
/// ignoring weights
fn connected(graph: &Graph, start: NodeId, end: NodeId) -> bool {
    let mut seen = vec![false; graph.node_count()];
    let mut queue = VecDeque::from([start]);
    seen[start.index()] = true;

    while let Some(id) = queue.pop_front() {
        if id == end {
            return true;
        }
        for (_, edge) in graph.outgoing(id) {
            let next = edge.end();
            if !seen[next.index()] {
                seen[next.index()] = true;
                queue.push_back(next);
            }
        }
    }

    false
}

/// Pop the cheapest move whose destination is still open, dropping stale ones
fn extract_live(
    graph: &Graph,
    frontier: &mut Frontier,
    stats: &mut SearchStats,
) -> Option<(CandidateMove, NodeId)> {
    while let Some(candidate) = frontier.pop() {
        let dest = graph.edge(candidate.edge).other_end(candidate.from);
        let dest_node = graph.node(dest);

        if dest_node.is_finalized() || candidate.cost > dest_node.cost() {
            stats.discarded += 1;
            continue;
        }

        return Some((candidate, dest));
    }

    None
}
