//! Adjacency-list graph store.
//!
//! Nodes are dense zero-based indices in `[0, node_count)`. Each node owns a
//! row of outgoing edges; in-degree and out-degree counters are maintained at
//! insertion time. Undirected graphs materialize every logical edge as two
//! mirrored arcs, one per endpoint row, while `edge_count` counts logical
//! edges once.
//!
//! The graph is append-only: edges can be added but never removed. All
//! structural queries are O(1); `adjacency` borrows a node's row without
//! copying.
//!
//! Out-of-range node indices passed to this API are contract violations and
//! panic. Untrusted input (graph files) is validated with recoverable errors
//! in [`io`] instead.

pub mod io;

use serde::{Deserialize, Serialize};

/// Dense node identifier, valid in `[0, node_count)`.
pub type NodeIndex = usize;

/// Whether edges are one-way or mirrored at insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphKind {
    Undirected,
    Directed,
}

impl GraphKind {
    /// Numeric code used by the graph file format (0 undirected, 1 directed).
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            GraphKind::Undirected => 0,
            GraphKind::Directed => 1,
        }
    }

    /// Inverse of [`GraphKind::code`].
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(GraphKind::Undirected),
            1 => Some(GraphKind::Directed),
            _ => None,
        }
    }
}

/// A directed arc with its endpoints and weight.
///
/// Weights may be negative; breadth-first traversal measures distance in
/// edge count and never interprets the weight as a length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: f64,
}

/// Adjacency-list graph with degree tracking.
///
/// Immutable borrows are safe to share across threads (`Graph` is `Sync`);
/// concurrent traversals over one graph need no coordination as long as each
/// allocates its own result state.
#[derive(Debug, Clone)]
pub struct Graph {
    kind: GraphKind,
    rows: Vec<Vec<Edge>>,
    in_degree: Vec<usize>,
    out_degree: Vec<usize>,
    edge_count: usize,
}

impl Graph {
    /// Create a graph with `n` nodes and no edges.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    #[must_use]
    pub fn new(n: usize, kind: GraphKind) -> Self {
        assert!(n > 0, "graph must have at least one node");
        Self {
            kind,
            rows: vec![Vec::new(); n],
            in_degree: vec![0; n],
            out_degree: vec![0; n],
            edge_count: 0,
        }
    }

    /// Insert the logical edge `(src, dst)` with `weight`.
    ///
    /// Directed graphs store one arc; undirected graphs store the arc and its
    /// mirror. The logical edge count rises by one either way. No duplicate
    /// check is performed, keeping insertion O(1) amortized; see
    /// [`Graph::add_edge_unique`] for the checked variant.
    ///
    /// # Panics
    ///
    /// Panics if `src` or `dst` is out of range.
    pub fn add_edge(&mut self, src: NodeIndex, dst: NodeIndex, weight: f64) {
        self.assert_node(src);
        self.assert_node(dst);
        self.insert_arc(src, dst, weight);
        if self.kind == GraphKind::Undirected {
            self.insert_arc(dst, src, weight);
        }
        self.edge_count += 1;
    }

    /// Insert `(src, dst)` only if no arc from `src` to `dst` exists yet.
    ///
    /// Returns `true` if the edge was inserted. Costs O(out-degree of `src`)
    /// for the duplicate scan; the graph (counters included) is untouched
    /// when the edge is rejected. For undirected graphs the mirror arc is
    /// symmetric with the scanned row, so one scan suffices.
    ///
    /// # Panics
    ///
    /// Panics if `src` or `dst` is out of range.
    pub fn add_edge_unique(&mut self, src: NodeIndex, dst: NodeIndex, weight: f64) -> bool {
        self.assert_node(src);
        self.assert_node(dst);
        if self.rows[src].iter().any(|e| e.target == dst) {
            return false;
        }
        self.add_edge(src, dst, weight);
        true
    }

    /// Outgoing arcs of `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[must_use]
    pub fn adjacency(&self, node: NodeIndex) -> &[Edge] {
        self.assert_node(node);
        &self.rows[node]
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of logical edges (mirrored arc pairs count once).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[must_use]
    pub fn in_degree(&self, node: NodeIndex) -> usize {
        self.assert_node(node);
        self.in_degree[node]
    }

    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[must_use]
    pub fn out_degree(&self, node: NodeIndex) -> usize {
        self.assert_node(node);
        self.out_degree[node]
    }

    #[must_use]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Iterate over every stored arc (undirected graphs yield both mirrors).
    pub fn arcs(&self) -> impl Iterator<Item = &Edge> {
        self.rows.iter().flatten()
    }

    fn insert_arc(&mut self, src: NodeIndex, dst: NodeIndex, weight: f64) {
        self.rows[src].push(Edge {
            source: src,
            target: dst,
            weight,
        });
        self.out_degree[src] += 1;
        self.in_degree[dst] += 1;
    }

    fn assert_node(&self, node: NodeIndex) {
        assert!(
            node < self.rows.len(),
            "node index {node} out of range for graph with {} nodes",
            self.rows.len()
        );
    }
}
