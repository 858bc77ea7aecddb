//! BFS (Breadth-First Search) graph traversal.
//!
//! Explores the graph level by level from a source node using a FIFO
//! frontier ([`NodeQueue`]), recording for every node the minimum number of
//! edges from the source and the predecessor on one such shortest path.
//! Each node is enqueued at most once, so a traversal costs O(n + m) and
//! always terminates.
//!
//! Edge weights do not contribute to distances; distance is hop count.
//! An optional weight gate ([`BfsParams::min_weight`]) can exclude arcs at
//! or below a threshold from traversal; by default every arc is followed.
//!
//! The graph is only read during traversal, so independent BFS calls over
//! the same graph may run concurrently, each with its own result state.
//! Frontier and scratch state are dropped when the call returns.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::{Edge, Graph, NodeIndex};
use crate::queue::NodeQueue;
use crate::traversal::result::BfsResult;

/// Parameters for BFS traversal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BfsParams {
    /// Weight gate: arcs with `weight <= min_weight` are not traversed.
    /// `None` (default) follows every arc regardless of weight.
    pub min_weight: Option<f64>,
}

impl BfsParams {
    /// Builder: follow only arcs strictly heavier than `weight`.
    #[must_use]
    pub fn min_weight(mut self, weight: f64) -> Self {
        self.min_weight = Some(weight);
        self
    }

    fn traversable(&self, edge: &Edge) -> bool {
        match self.min_weight {
            Some(threshold) => edge.weight > threshold,
            None => true,
        }
    }
}

/// Breadth-first traversal from `source` with default parameters.
///
/// # Panics
///
/// Panics if `source` is out of range.
#[must_use]
pub fn bfs(graph: &Graph, source: NodeIndex) -> BfsResult {
    bfs_with_params(graph, source, &BfsParams::default())
}

/// Breadth-first traversal from `source`.
///
/// Returns a [`BfsResult`] whose `distance[v]` is the minimum number of
/// edges from `source` to `v` (`None` if unreachable) and whose
/// `predecessor[v]` is the node before `v` on one shortest path (`None`
/// for the source and unreachable nodes). `visited_order` lists nodes in
/// dequeue order; its length is the reachable count.
///
/// Among equal-length paths the one recorded is determined by adjacency
/// insertion order, which makes the result deterministic for a graph built
/// in a fixed order.
///
/// # Panics
///
/// Panics if `source` is out of range.
#[must_use]
pub fn bfs_with_params(graph: &Graph, source: NodeIndex, params: &BfsParams) -> BfsResult {
    let n = graph.node_count();
    assert!(
        source < n,
        "source node {source} out of range for graph with {n} nodes"
    );
    debug!(source, nodes = n, "starting breadth-first traversal");

    let mut distance: Vec<Option<u32>> = vec![None; n];
    let mut predecessor: Vec<Option<NodeIndex>> = vec![None; n];
    let mut visited_order = Vec::new();
    let mut frontier = NodeQueue::new();

    distance[source] = Some(0);
    frontier.push_back(source);

    while let Some(u) = frontier.pop_front() {
        visited_order.push(u);
        let depth = match distance[u] {
            Some(d) => d,
            // distance is set before every enqueue
            None => unreachable!("frontier node {u} has no distance"),
        };
        for edge in graph.adjacency(u) {
            let v = edge.target;
            if distance[v].is_none() && params.traversable(edge) {
                distance[v] = Some(depth + 1);
                predecessor[v] = Some(u);
                frontier.push_back(v);
            }
        }
    }

    debug!(
        source,
        reachable = visited_order.len(),
        "breadth-first traversal complete"
    );
    BfsResult {
        source,
        distance,
        predecessor,
        visited_order,
    }
}
