//! Edge list loading
//!
//! Each record is `start,end,weight` and describes one directed edge.
//! Blank lines and comment lines are skipped, surrounding whitespace is
//! trimmed, and weights must be non-negative integers.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::bail_malformed;
use crate::error::{Result, RouteError};
use crate::graph::Graph;

/// Byte-level settings for reading an edge list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub delimiter: u8,
    /// Lines starting with this byte are ignored
    pub comment: Option<u8>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            comment: Some(b'#'),
        }
    }
}

/// A single parsed `start,end,weight` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub start: String,
    pub end: String,
    pub weight: u64,
}

/// Load a graph from an edge list file, or from stdin when `path` is `-`
#[tracing::instrument(skip(path, opts), fields(path = %path.display()))]
pub fn load_edges(path: &Path, opts: &ParseOptions) -> Result<Graph> {
    if path == Path::new("-") {
        return read_edges(io::stdin().lock(), opts);
    }

    let file = File::open(path)?;
    read_edges(file, opts)
}

/// Build a graph from edge records read from `reader`
pub fn read_edges<R: Read>(reader: R, opts: &ParseOptions) -> Result<Graph> {
    let mut graph = Graph::new();
    for record in parse_records(reader, opts)? {
        let start = graph.get_or_create(&record.start);
        let end = graph.get_or_create(&record.end);
        graph.add_edge(start, end, record.weight);
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded edge list"
    );
    Ok(graph)
}

/// Parse every record from `reader`, failing on the first malformed one
pub fn parse_records<R: Read>(reader: R, opts: &ParseOptions) -> Result<Vec<EdgeRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(opts.delimiter)
        .comment(opts.comment)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(map_csv_error)?;
        if row.iter().all(str::is_empty) || is_indented_comment(&row, opts.comment) {
            continue;
        }

        let line = row.position().map(|p| p.line()).unwrap_or(0);
        records.push(parse_record(&row, line)?);
    }

    Ok(records)
}

/// csv only recognises comments in column 1; after trimming, a leading
/// comment byte in the first field marks the rest of the line as well
fn is_indented_comment(row: &csv::StringRecord, comment: Option<u8>) -> bool {
    match (comment, row.get(0)) {
        (Some(marker), Some(first)) => first.as_bytes().first() == Some(&marker),
        _ => false,
    }
}

fn parse_record(row: &csv::StringRecord, line: u64) -> Result<EdgeRecord> {
    if row.len() != 3 {
        bail_malformed!(line, "expected 3 fields, found {}", row.len());
    }

    let start = &row[0];
    let end = &row[1];
    if start.is_empty() || end.is_empty() {
        bail_malformed!(line, "location names must not be empty");
    }

    let weight: i64 = match row[2].parse() {
        Ok(w) => w,
        Err(_) => bail_malformed!(line, "weight {:?} is not an integer", &row[2]),
    };
    if weight < 0 {
        return Err(RouteError::NegativeWeight { line, weight });
    }

    Ok(EdgeRecord {
        start: start.to_string(),
        end: end.to_string(),
        weight: weight.unsigned_abs(),
    })
}

fn map_csv_error(err: csv::Error) -> RouteError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => RouteError::Io(e),
        _ => RouteError::malformed(line, message),
    }
}
