//! Graph Storage
//!
//! This module implements the in-memory graph the traversal engine walks.
//!
//! # Overview
//!
//! - Nodes carry an integer value, a visited marker and an ordered list of
//!   neighbor ids
//! - The graph owns the nodes and decides, once, whether edges are directed
//!   or mirrored
//!
//! # Design Decisions
//!
//! 1. Nodes are referenced by [`NodeId`] rather than by pointer, so neighbor
//!    lists never own other nodes and cycles need no reference counting.
//!
//! 2. The graph is an insertion-ordered map, giving O(1) lookups and
//!    deterministic iteration at the same time.
//!
//! 3. Visited markers live on the nodes. Traversals take `&mut Graph`, so
//!    two walks can never interleave their marks over one graph.

mod adjacency;
mod mode;
mod node;

pub use adjacency::Graph;
pub use mode::EdgeMode;
pub use node::{Node, NodeId};
pub(crate) use node::Neighbors;
