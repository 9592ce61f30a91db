//! End-to-end scenarios: edge list file -> graph -> route

use std::fs;
use std::path::PathBuf;

use edgeroute_core::error::RouteError;
use edgeroute_core::find_route;
use edgeroute_core::graph::{load_edges, ParseOptions};
use tempfile::TempDir;

fn write_edges(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("edges.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_cheaper_two_hop_route_is_chosen() {
    let dir = TempDir::new().unwrap();
    let path = write_edges(&dir, "A,B,1\nB,C,2\nA,C,5\n");

    let mut graph = load_edges(&path, &ParseOptions::default()).unwrap();
    let route = find_route(&mut graph, "A", "C").unwrap();

    assert_eq!(route.names, vec!["A", "B", "C"]);
    assert_eq!(route.total_cost, 3);
}

#[test]
fn test_undefined_end_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = write_edges(&dir, "A,B,1\n");

    let mut graph = load_edges(&path, &ParseOptions::default()).unwrap();
    let err = find_route(&mut graph, "A", "C").unwrap_err();

    assert!(matches!(err, RouteError::NotFound { ref name } if name == "C"));
}

#[test]
fn test_disconnected_components_are_unreachable() {
    let dir = TempDir::new().unwrap();
    let path = write_edges(&dir, "A,B,1\nC,D,1\n");

    let mut graph = load_edges(&path, &ParseOptions::default()).unwrap();
    let err = find_route(&mut graph, "A", "D").unwrap_err();

    assert!(matches!(err, RouteError::Unreachable { .. }));
}

#[test]
fn test_same_start_and_end() {
    let dir = TempDir::new().unwrap();
    let path = write_edges(&dir, "A,B,1\nB,C,2\n");

    let mut graph = load_edges(&path, &ParseOptions::default()).unwrap();
    let route = find_route(&mut graph, "B", "B").unwrap();

    assert_eq!(route.names, vec!["B"]);
    assert_eq!(route.total_cost, 0);
}

#[test]
fn test_names_with_spaces_and_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let path = write_edges(
        &dir,
        "# city graph\nNew York, Boston, 215\nBoston,Portland,107\r\n",
    );

    let mut graph = load_edges(&path, &ParseOptions::default()).unwrap();
    let route = find_route(&mut graph, "New York", "Portland").unwrap();

    assert_eq!(route.names, vec!["New York", "Boston", "Portland"]);
    assert_eq!(route.total_cost, 322);
}

#[test]
fn test_semicolon_delimited_file() {
    let dir = TempDir::new().unwrap();
    let path = write_edges(&dir, "A;B;2\nB;C;2\nA;C;9\n");
    let opts = ParseOptions {
        delimiter: b';',
        ..Default::default()
    };

    let mut graph = load_edges(&path, &opts).unwrap();
    let route = find_route(&mut graph, "A", "C").unwrap();

    assert_eq!(route.total_cost, 4);
}

#[test]
fn test_negative_weight_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_edges(&dir, "A,B,1\nB,C,-3\n");

    let err = load_edges(&path, &ParseOptions::default()).unwrap_err();
    assert!(matches!(err, RouteError::NegativeWeight { line: 2, .. }));
}
