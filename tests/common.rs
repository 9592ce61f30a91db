use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn edgeroute() -> Command {
    let mut cmd = cargo_bin_cmd!("edgeroute");
    cmd.env_remove("RUST_LOG")
        .env_remove("EDGEROUTE_LOG")
        .env_remove("EDGEROUTE_CONFIG");
    cmd
}

/// Write an edge list into `dir` and return its path
#[allow(dead_code)]
pub fn write_edges(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("edges.csv");
    fs::write(&path, contents).unwrap();
    path
}

/// The three-node graph where the indirect route is cheaper
#[allow(dead_code)]
pub const TRIANGLE: &str = "A,B,1\nB,C,2\nA,C,5\n";
