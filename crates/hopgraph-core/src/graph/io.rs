//! Text persistence format for graphs.
//!
//! ```text
//! n m type
//! src dst weight      (m lines)
//! ```
//!
//! `type` is 0 for undirected and 1 for directed graphs. Node indices are
//! `0..n-1`; weights are real numbers, possibly negative. Undirected files
//! list each logical edge once and the reader inserts both mirrored arcs.
//!
//! A file declaring more edges than it contains is loaded anyway: the
//! shortfall is logged as a warning and the partial graph is returned.
//! Structurally invalid content (unparsable header, malformed edge line,
//! out-of-range endpoint) is a hard error — file content is untrusted input,
//! so these are `GraphError`s rather than the panics the in-memory API uses.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, GraphKind};

/// Parse a graph from the text format.
pub fn read_graph<R: BufRead>(reader: R) -> GraphResult<Graph> {
    let mut lines = reader.lines().enumerate();

    let (header_line, header) = loop {
        match lines.next() {
            Some((idx, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break (idx + 1, line);
                }
            }
            None => return Err(GraphError::InvalidHeader("empty input".to_string())),
        }
    };

    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(GraphError::InvalidHeader(format!(
            "expected `n m type` on line {header_line}, got {:?}",
            header.trim()
        )));
    }
    let n: usize = fields[0]
        .parse()
        .map_err(|_| GraphError::InvalidHeader(format!("node count {:?}", fields[0])))?;
    let m: usize = fields[1]
        .parse()
        .map_err(|_| GraphError::InvalidHeader(format!("edge count {:?}", fields[1])))?;
    if n == 0 {
        return Err(GraphError::InvalidHeader(
            "node count must be positive".to_string(),
        ));
    }
    let code: i64 = fields[2]
        .parse()
        .map_err(|_| GraphError::InvalidHeader(format!("kind code {:?}", fields[2])))?;
    let kind = GraphKind::from_code(code).ok_or(GraphError::InvalidKindCode(code))?;

    let mut graph = Graph::new(n, kind);
    let mut read = 0usize;

    while read < m {
        let Some((idx, line)) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (src, dst, weight) = parse_edge_line(idx + 1, &line)?;
        if src >= n || dst >= n {
            return Err(GraphError::EdgeOutOfRange {
                line: idx + 1,
                src,
                dst,
                nodes: n,
            });
        }
        graph.add_edge(src, dst, weight);
        read += 1;
    }

    if read < m {
        // Non-fatal: traversal proceeds on whatever graph was built.
        warn!(declared = m, read, "graph file declared more edges than it contains");
    }
    debug!(
        nodes = n,
        edges = graph.edge_count(),
        kind = ?graph.kind(),
        "graph loaded"
    );
    Ok(graph)
}

fn parse_edge_line(line_no: usize, line: &str) -> GraphResult<(usize, usize, f64)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(GraphError::MalformedEdge {
            line: line_no,
            message: format!("expected `src dst weight`, got {:?}", line.trim()),
        });
    }
    let src = fields[0].parse().map_err(|_| GraphError::MalformedEdge {
        line: line_no,
        message: format!("source node {:?}", fields[0]),
    })?;
    let dst = fields[1].parse().map_err(|_| GraphError::MalformedEdge {
        line: line_no,
        message: format!("destination node {:?}", fields[1]),
    })?;
    let weight = fields[2].parse().map_err(|_| GraphError::MalformedEdge {
        line: line_no,
        message: format!("weight {:?}", fields[2]),
    })?;
    Ok((src, dst, weight))
}

/// Write `graph` in the text format.
///
/// Undirected graphs emit each logical edge once, keeping the output
/// readable by [`read_graph`] (which re-inserts the mirror arcs). A
/// self-loop is stored as two identical arcs, so only every other one
/// is written.
pub fn write_graph<W: Write>(writer: &mut W, graph: &Graph) -> GraphResult<()> {
    writeln!(
        writer,
        "{} {} {}",
        graph.node_count(),
        graph.edge_count(),
        graph.kind().code()
    )?;
    if graph.kind() == GraphKind::Directed {
        for edge in graph.arcs() {
            writeln!(writer, "{} {} {}", edge.source, edge.target, edge.weight)?;
        }
        return Ok(());
    }
    let mut pending_loop = vec![false; graph.node_count()];
    for edge in graph.arcs() {
        let emit = if edge.source == edge.target {
            let flag = &mut pending_loop[edge.source];
            *flag = !*flag;
            *flag
        } else {
            edge.source < edge.target
        };
        if emit {
            writeln!(writer, "{} {} {}", edge.source, edge.target, edge.weight)?;
        }
    }
    Ok(())
}

impl Graph {
    /// Load a graph from a file in the text format.
    pub fn from_path<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        let file = File::open(path)?;
        read_graph(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> GraphResult<Graph> {
        read_graph(Cursor::new(text))
    }

    #[test]
    fn test_read_directed() {
        let g = parse("4 3 1\n0 1 1.0\n1 2 1.0\n0 3 -2.5\n").unwrap();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.kind(), GraphKind::Directed);
        assert_eq!(g.adjacency(0).len(), 2);
        assert_eq!(g.adjacency(0)[1].weight, -2.5);
        assert!(g.adjacency(2).is_empty());
    }

    #[test]
    fn test_read_undirected_inserts_mirrors() {
        let g = parse("2 1 0\n0 1 3.0\n").unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.adjacency(0)[0].target, 1);
        assert_eq!(g.adjacency(1)[0].target, 0);
    }

    #[test]
    fn test_blank_lines_tolerated() {
        let g = parse("\n\n2 1 1\n\n0 1 1.0\n").unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(parse(""), Err(GraphError::InvalidHeader(_))));
    }

    #[test]
    fn test_bad_header_rejected() {
        assert!(matches!(parse("4 3\n"), Err(GraphError::InvalidHeader(_))));
        assert!(matches!(parse("x 3 1\n"), Err(GraphError::InvalidHeader(_))));
        assert!(matches!(parse("0 0 1\n"), Err(GraphError::InvalidHeader(_))));
    }

    #[test]
    fn test_bad_kind_code_rejected() {
        assert!(matches!(parse("4 0 2\n"), Err(GraphError::InvalidKindCode(2))));
    }

    #[test]
    fn test_malformed_edge_rejected() {
        let err = parse("2 1 1\n0 one 1.0\n").unwrap_err();
        match err {
            GraphError::MalformedEdge { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_edge_out_of_range_rejected() {
        let err = parse("2 1 1\n0 5 1.0\n").unwrap_err();
        assert!(matches!(
            err,
            GraphError::EdgeOutOfRange { src: 0, dst: 5, nodes: 2, .. }
        ));
    }

    #[test]
    fn test_declared_count_mismatch_is_non_fatal() {
        // header claims 3 edges, file holds 1: load what is there
        let g = parse("3 3 1\n0 1 1.0\n").unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_round_trip_directed() {
        let mut g = Graph::new(3, GraphKind::Directed);
        g.add_edge(0, 1, 1.5);
        g.add_edge(2, 0, -4.0);
        let mut buf = Vec::new();
        write_graph(&mut buf, &g).unwrap();
        let back = read_graph(Cursor::new(buf)).unwrap();
        assert_eq!(back.node_count(), 3);
        assert_eq!(back.edge_count(), 2);
        assert_eq!(back.adjacency(2)[0].weight, -4.0);
    }

    #[test]
    fn test_round_trip_undirected() {
        let mut g = Graph::new(3, GraphKind::Undirected);
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 2, 2.0);
        let mut buf = Vec::new();
        write_graph(&mut buf, &g).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        // each logical edge appears once in the file
        assert_eq!(text.lines().count(), 3);
        let back = read_graph(Cursor::new(buf)).unwrap();
        assert_eq!(back.edge_count(), 2);
        assert_eq!(back.in_degree(1), 2);
        assert_eq!(back.out_degree(1), 2);
    }

    #[test]
    fn test_round_trip_undirected_self_loop() {
        let mut g = Graph::new(2, GraphKind::Undirected);
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 1, 2.0);
        let mut buf = Vec::new();
        write_graph(&mut buf, &g).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        // header plus one line per logical edge, the self-loop included
        assert_eq!(text.lines().count(), 3);
        let back = read_graph(Cursor::new(buf)).unwrap();
        assert_eq!(back.edge_count(), 2);
        let loops = back.adjacency(1).iter().filter(|e| e.target == 1).count();
        assert_eq!(loops, 2, "self-loop keeps both mirror arcs");
        assert_eq!(back.in_degree(1), g.in_degree(1));
        assert_eq!(back.out_degree(1), g.out_degree(1));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.graph");
        std::fs::write(&path, "2 1 1\n0 1 1.0\n").unwrap();
        let g = Graph::from_path(&path).unwrap();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(Graph::from_path(dir.path().join("missing.graph")).is_err());
    }
}
