//! BFS traversal result type and path rendering.

use crate::graph::NodeIndex;

/// Result of a breadth-first traversal.
///
/// Over the reachable nodes, `predecessor` forms a tree rooted at `source`,
/// and `distance[v] == distance[predecessor[v]] + 1` for every reachable
/// `v != source`. Unreachable nodes have `None` in both arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsResult {
    /// The node the traversal started from.
    pub source: NodeIndex,

    /// Minimum number of edges from `source`, `None` if unreachable.
    pub distance: Vec<Option<u32>>,

    /// Node preceding each node on one shortest path (`None` for the
    /// source and for unreachable nodes).
    pub predecessor: Vec<Option<NodeIndex>>,

    /// Nodes in dequeue order; the source comes first.
    pub visited_order: Vec<NodeIndex>,
}

impl BfsResult {
    /// Number of nodes reachable from the source, the source included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.visited_order.len()
    }

    /// Whether `node` was reached by the traversal.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[must_use]
    pub fn is_reachable(&self, node: NodeIndex) -> bool {
        self.distance[node].is_some()
    }

    /// Shortest-hop path from the source to `target`, endpoints included.
    ///
    /// Walks the predecessor tree backward from `target` and reverses the
    /// collected nodes. Returns `None` when `target` is unreachable; when
    /// `target` is the source itself the path is the single-node path,
    /// without consulting the predecessor array.
    ///
    /// # Panics
    ///
    /// Panics if `target` is out of range.
    #[must_use]
    pub fn path_to(&self, target: NodeIndex) -> Option<Vec<NodeIndex>> {
        assert!(
            target < self.distance.len(),
            "target node {target} out of range for graph with {} nodes",
            self.distance.len()
        );
        if target == self.source {
            return Some(vec![self.source]);
        }
        self.distance[target]?;

        let mut path = vec![target];
        let mut current = target;
        while let Some(parent) = self.predecessor[current] {
            path.push(parent);
            current = parent;
        }
        debug_assert_eq!(current, self.source);
        path.reverse();
        Some(path)
    }
}

/// Render a node path as `"s->n1->...->d"`.
#[must_use]
pub fn format_path(path: &[NodeIndex]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("->")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Graph, GraphKind};
    use crate::traversal::bfs;

    fn diamond_result() -> BfsResult {
        let mut g = Graph::new(4, GraphKind::Directed);
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 2, 1.0);
        g.add_edge(0, 3, 1.0);
        bfs(&g, 0)
    }

    #[test]
    fn test_path_to_target() {
        let result = diamond_result();
        assert_eq!(result.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(result.path_to(3), Some(vec![0, 3]));
    }

    #[test]
    fn test_path_to_source_is_trivial() {
        let mut result = diamond_result();
        // the trivial path must not consult the predecessor array
        result.predecessor = vec![None; 4];
        assert_eq!(result.path_to(0), Some(vec![0]));
    }

    #[test]
    fn test_path_to_unreachable() {
        let mut g = Graph::new(3, GraphKind::Directed);
        g.add_edge(0, 1, 1.0);
        let result = bfs(&g, 0);
        assert_eq!(result.path_to(2), None);
    }

    #[test]
    fn test_path_length_matches_distance() {
        let result = diamond_result();
        for v in 0..4 {
            if let Some(d) = result.distance[v] {
                let path = result.path_to(v).unwrap();
                assert_eq!(path.len() as u32, d + 1, "node {v}");
                assert_eq!(path.first(), Some(&0));
                assert_eq!(path.last(), Some(&v));
            }
        }
    }

    #[test]
    fn test_is_reachable() {
        let result = diamond_result();
        assert!(result.is_reachable(0));
        assert!(result.is_reachable(2));
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[0, 1, 2]), "0->1->2");
        assert_eq!(format_path(&[7]), "7");
        assert_eq!(format_path(&[]), "");
    }
}
