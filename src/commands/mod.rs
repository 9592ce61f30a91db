//! CLI commands for edgeroute

pub mod dispatch;
pub mod route;
