//! Error types for hopgraph-core.
//!
//! Recoverable conditions (file I/O, malformed graph files) surface as
//! `GraphError`. Contract violations on the in-memory API — an out-of-range
//! node index, a zero node count — are programming errors and panic instead.

use thiserror::Error;

/// Top-level error type for hopgraph-core.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid graph header: {0}")]
    InvalidHeader(String),

    #[error("invalid graph kind code {0}: expected 0 (undirected) or 1 (directed)")]
    InvalidKindCode(i64),

    #[error("malformed edge on line {line}: {message}")]
    MalformedEdge { line: usize, message: String },

    #[error("edge ({src}, {dst}) on line {line} references a node outside 0..{nodes}")]
    EdgeOutOfRange {
        line: usize,
        src: usize,
        dst: usize,
        nodes: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::InvalidKindCode(7);
        assert!(err.to_string().contains("kind code 7"));
    }

    #[test]
    fn test_edge_out_of_range_display() {
        let err = GraphError::EdgeOutOfRange {
            line: 3,
            src: 5,
            dst: 9,
            nodes: 6,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("0..6"));
    }
}
