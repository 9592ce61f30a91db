//! Edgeroute Core Library
//!
//! Graph model, edge list loading, and minimum-cost path search for the
//! edgeroute CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
pub mod route;

pub use route::find_route;
