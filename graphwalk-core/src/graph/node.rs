//! Graph Nodes
//!
//! This module defines the vertices that live in a [`Graph`](super::Graph).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use smallvec::SmallVec;

/// Unique identifier for a node.
///
/// Identity is what the engine tracks: two nodes holding the same value are
/// still distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Generate a new unique node ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Neighbor list storage. Most vertices in the graphs we walk have a
/// handful of edges, so they stay inline.
pub(crate) type Neighbors = SmallVec<[NodeId; 4]>;

/// A vertex: a value, a visited marker and an ordered neighbor list.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier for this node.
    id: NodeId,

    /// Payload carried by the vertex.
    value: i64,

    /// Set while a traversal has reached this node. Cleared by
    /// [`Graph::reset_visited`](super::Graph::reset_visited).
    visited: bool,

    /// Outgoing adjacency. Insertion order decides traversal order.
    neighbors: Neighbors,
}

impl Node {
    /// Create a new, unconnected node holding `value`.
    pub fn new(value: i64) -> Self {
        Self {
            id: NodeId::new(),
            value,
            visited: false,
            neighbors: Neighbors::new(),
        }
    }

    /// Get the node's ID.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Get the node's value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Neighbors in insertion order.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Whether the last traversal reached this node.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn visit(&mut self) {
        self.visited = true;
    }

    pub(crate) fn reset_visit(&mut self) {
        self.visited = false;
    }

    /// Append `neighbor` unless it is already present.
    ///
    /// Returns `true` if the list changed.
    pub(crate) fn add_neighbor(&mut self, neighbor: NodeId) -> bool {
        if self.neighbors.contains(&neighbor) {
            return false;
        }
        self.neighbors.push(neighbor);
        true
    }

    /// Drop `neighbor`, keeping the order of the rest.
    pub(crate) fn remove_neighbor(&mut self, neighbor: NodeId) {
        self.neighbors.retain(|n| *n != neighbor);
    }
}
