//! Double-ended FIFO queue of node indices.
//!
//! `NodeQueue` is the frontier structure for breadth-first traversal: nodes
//! are discovered at the back and expanded from the front, which gives the
//! level ordering BFS correctness depends on. Both ends support O(1)
//! (amortized) insertion and removal, so the same type also serves as a
//! stack when pushed and popped from the same end.
//!
//! Backed by `VecDeque`; removal from an empty queue returns `None` rather
//! than being a precondition violation.

use std::collections::VecDeque;

use crate::graph::NodeIndex;

/// Double-ended queue of node indices awaiting expansion.
#[derive(Debug, Clone, Default)]
pub struct NodeQueue {
    items: VecDeque<NodeIndex>,
}

impl NodeQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Create an empty queue with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Insert `node` at the front.
    pub fn push_front(&mut self, node: NodeIndex) {
        self.items.push_front(node);
    }

    /// Insert `node` at the back.
    pub fn push_back(&mut self, node: NodeIndex) {
        self.items.push_back(node);
    }

    /// Remove and return the front node, or `None` if the queue is empty.
    pub fn pop_front(&mut self) -> Option<NodeIndex> {
        self.items.pop_front()
    }

    /// Remove and return the back node, or `None` if the queue is empty.
    pub fn pop_back(&mut self) -> Option<NodeIndex> {
        self.items.pop_back()
    }

    /// Peek at the front node without removing it.
    #[must_use]
    pub fn front(&self) -> Option<NodeIndex> {
        self.items.front().copied()
    }

    /// Peek at the back node without removing it.
    #[must_use]
    pub fn back(&self) -> Option<NodeIndex> {
        self.items.back().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Linear membership scan, O(len).
    #[must_use]
    pub fn contains(&self, node: NodeIndex) -> bool {
        self.items.contains(&node)
    }

    /// Drop every queued node.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.items.iter().copied()
    }
}
