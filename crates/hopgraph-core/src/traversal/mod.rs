//! Graph traversal.
//!
//! Breadth-first search over an immutable [`Graph`](crate::graph::Graph),
//! producing hop-count distances, a predecessor tree, and shortest-hop path
//! reconstruction.

pub mod bfs;
pub mod result;

pub use bfs::{bfs, bfs_with_params, BfsParams};
pub use result::{format_path, BfsResult};
