//! Adjacency-List Graph
//!
//! The graph owns its nodes and hands out [`NodeId`] handles. Neighbor lists
//! only ever hold ids of member nodes: edges can be added only between nodes
//! already in the graph, and removing a node scrubs it from every list.
//!
//! Nodes are kept in insertion order so that iteration, `reset_visited` and
//! value lookups are deterministic.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use super::mode::EdgeMode;
use super::node::{Node, NodeId};
use crate::error::{Error, Result};

/// An in-memory graph of [`Node`]s.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// How `add_edge` records edges.
    mode: EdgeMode,

    /// All nodes in the graph, indexed by ID, in insertion order.
    nodes: IndexMap<NodeId, Node>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new(mode: EdgeMode) -> Self {
        Self {
            mode,
            nodes: IndexMap::new(),
        }
    }

    /// Create a graph whose edges are one-way.
    pub fn directed() -> Self {
        Self::new(EdgeMode::Directed)
    }

    /// Create a graph whose edges are mirrored.
    pub fn undirected() -> Self {
        Self::new(EdgeMode::Undirected)
    }

    /// Build a graph from existing nodes.
    ///
    /// Duplicates (by id) are dropped, keeping the first occurrence.
    /// Neighbor references to nodes outside the list are discarded.
    pub fn from_nodes<I>(mode: EdgeMode, nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut graph = Self::new(mode);
        for node in nodes {
            graph.nodes.entry(node.id()).or_insert(node);
        }

        let members: HashSet<NodeId> = graph.nodes.keys().copied().collect();
        for node in graph.nodes.values_mut() {
            let dangling: Vec<NodeId> = node
                .neighbors()
                .iter()
                .copied()
                .filter(|n| !members.contains(n))
                .collect();
            for id in dangling {
                node.remove_neighbor(id);
            }
        }

        if graph.mode.is_undirected() {
            let edges: Vec<(NodeId, NodeId)> = graph
                .nodes
                .values()
                .flat_map(|node| node.neighbors().iter().map(move |n| (node.id(), *n)))
                .collect();
            for (from, to) in edges {
                graph.mirror(from, to);
            }
        }
        graph
    }

    /// The edge mode chosen at construction.
    pub fn mode(&self) -> EdgeMode {
        self.mode
    }

    /// Add a node to the graph.
    ///
    /// Adding a node whose id is already present is a no-op; the existing
    /// node is kept. Neighbor references to non-members are discarded.
    pub fn add_node(&mut self, mut node: Node) -> NodeId {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            debug!(node = %id, "node already present, ignoring");
            return id;
        }

        let dangling: Vec<NodeId> = node
            .neighbors()
            .iter()
            .copied()
            .filter(|n| *n != id && !self.nodes.contains_key(n))
            .collect();
        for neighbor in dangling {
            node.remove_neighbor(neighbor);
        }

        let kept: Vec<NodeId> = node.neighbors().to_vec();
        self.nodes.insert(id, node);
        if self.mode.is_undirected() {
            for neighbor in kept {
                self.mirror(id, neighbor);
            }
        }
        id
    }

    /// Record `from` as a neighbor of `to`. Self loops are stored once.
    fn mirror(&mut self, from: NodeId, to: NodeId) {
        if from == to {
            return;
        }
        if let Some(node) = self.nodes.get_mut(&to) {
            node.add_neighbor(from);
        }
    }

    /// Create a node holding `value` and add it.
    pub fn insert(&mut self, value: i64) -> NodeId {
        self.add_node(Node::new(value))
    }

    /// Connect `from` to `to` (and `to` to `from` in undirected mode).
    ///
    /// Both endpoints must already be members. Repeated edges are ignored.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        if !self.contains(from) || !self.contains(to) {
            debug!(%from, %to, "rejecting edge with missing endpoint");
            return Err(Error::edge_endpoint_missing(from, to));
        }

        if let Some(node) = self.nodes.get_mut(&from) {
            node.add_neighbor(to);
        }
        if self.mode.is_undirected() {
            if let Some(node) = self.nodes.get_mut(&to) {
                node.add_neighbor(from);
            }
        }
        Ok(())
    }

    /// Remove a node from the graph.
    ///
    /// Also removes all edges involving this node. The returned node is
    /// detached: no neighbors, not visited.
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        let mut node = self.nodes.shift_remove(&node_id)?;

        for other in self.nodes.values_mut() {
            other.remove_neighbor(node_id);
        }

        let neighbors: Vec<NodeId> = node.neighbors().to_vec();
        for neighbor in neighbors {
            node.remove_neighbor(neighbor);
        }
        node.reset_visit();
        Some(node)
    }

    /// Clear the visited marker on every node.
    pub fn reset_visited(&mut self) {
        for node in self.nodes.values_mut() {
            node.reset_visit();
        }
    }

    /// Get a reference to a node.
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Whether `node_id` belongs to this graph.
    pub fn contains(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// Neighbors of a member node, in insertion order.
    pub fn neighbors(&self, node_id: NodeId) -> Result<&[NodeId]> {
        self.nodes
            .get(&node_id)
            .map(Node::neighbors)
            .ok_or_else(|| Error::node_not_found(node_id))
    }

    /// Whether the last traversal reached `node_id`. `false` for non-members.
    pub fn is_visited(&self, node_id: NodeId) -> bool {
        self.nodes
            .get(&node_id)
            .map(Node::is_visited)
            .unwrap_or(false)
    }

    pub(crate) fn mark_visited(&mut self, node_id: NodeId) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.visit();
        }
    }

    /// Neighbors of `node_id`, or an empty slice for non-members.
    pub(crate) fn adjacent(&self, node_id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node_id)
            .map(Node::neighbors)
            .unwrap_or(&[])
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// First node (in insertion order) holding `value`.
    pub fn find(&self, value: i64) -> Option<NodeId> {
        self.nodes
            .values()
            .find(|node| node.value() == value)
            .map(Node::id)
    }

    /// Get the total number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges. Mirrored entries of an undirected edge count once.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.nodes.values().map(|n| n.neighbors().len()).sum();
        match self.mode {
            EdgeMode::Directed => entries,
            EdgeMode::Undirected => {
                let loops = self
                    .nodes
                    .values()
                    .filter(|n| n.neighbors().contains(&n.id()))
                    .count();
                (entries - loops) / 2 + loops
            }
        }
    }
}
