//! Hopgraph Core Library
//!
//! Adjacency-list graphs (directed or undirected) with breadth-first
//! traversal and shortest-hop path reconstruction.
//!
//! # Architecture
//!
//! This crate defines:
//! - The graph store (`Graph`, `Edge`, `GraphKind`) with per-node degree
//!   tracking and a text persistence format (`graph::io`)
//! - The double-ended FIFO queue (`NodeQueue`) used as the traversal frontier
//! - The breadth-first traversal engine (`bfs`, `BfsParams`, `BfsResult`)
//!   producing distances in edge count and a predecessor tree
//! - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use hopgraph_core::{bfs, Graph, GraphKind};
//!
//! let mut g = Graph::new(4, GraphKind::Directed);
//! g.add_edge(0, 1, 1.0);
//! g.add_edge(1, 2, 1.0);
//! g.add_edge(0, 3, 1.0);
//!
//! let result = bfs(&g, 0);
//! assert_eq!(result.reachable_count(), 4);
//! assert_eq!(result.path_to(2), Some(vec![0, 1, 2]));
//! ```

pub mod error;
pub mod graph;
pub mod queue;
pub mod traversal;

// Re-exports for convenience
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, GraphKind, NodeIndex};
pub use queue::NodeQueue;
pub use traversal::{bfs, bfs_with_params, format_path, BfsParams, BfsResult};
