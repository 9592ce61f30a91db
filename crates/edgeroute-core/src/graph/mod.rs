//! Graph model, loading, and shortest-path search
//!
//! - `types`: arena handles, costs, nodes, edges, and routes
//! - `model`: the name-keyed [`Graph`]
//! - `builder`: edge list parsing into a [`Graph`]
//! - `algos`: frontier search
//! - `path`: route reconstruction from back-pointers

pub mod algos;
pub mod builder;
pub mod model;
pub mod path;
pub mod types;

pub use algos::{search, SearchStats};
pub use builder::{load_edges, read_edges, ParseOptions};
pub use model::Graph;
pub use path::reconstruct;
pub use types::{Cost, Edge, EdgeId, Hop, Node, NodeId, Route};
