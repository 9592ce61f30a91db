//! Graph search algorithms
//!
//! - `frontier`: lazy Dijkstra over a shared candidate-move frontier

pub mod frontier;

pub use frontier::{search, CandidateMove, SearchStats};
