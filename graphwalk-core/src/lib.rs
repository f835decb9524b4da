//! Graphwalk Core
//!
//! This crate provides breadth-first and depth-first traversal over
//! in-memory adjacency-list graphs. It implements:
//!
//! - A graph of integer-valued nodes with directed or undirected edges
//! - BFS, and DFS in pre-order or post-order, recursive or iterative
//! - Early-exit search and cooperative cancellation
//! - Linear and binary search over slices
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: Node and graph storage
//! - `traversal`: The BFS/DFS engine, cancellation and configuration
//! - `search`: Array search utilities
//! - `background`: Running walks on tokio's blocking pool
//!
//! # Example
//!
//! ```rust
//! use graphwalk_core::graph::Graph;
//! use graphwalk_core::traversal::{Bfs, Dfs, Traversal};
//!
//! let mut graph = Graph::undirected();
//! let a = graph.insert(1);
//! let b = graph.insert(2);
//! let c = graph.insert(3);
//! graph.add_edge(a, b)?;
//! graph.add_edge(a, c)?;
//!
//! assert_eq!(Bfs.traverse(&mut graph, a)?, vec![a, b, c]);
//! assert_eq!(Dfs::post_order().traverse(&mut graph, a)?, vec![b, c, a]);
//! assert_eq!(Bfs.search(&mut graph, a, |n| n.value() == 3)?, Some(c));
//! # Ok::<(), graphwalk_core::Error>(())
//! ```

pub mod background;
pub mod error;
pub mod graph;
pub mod search;
pub mod traversal;

pub use error::{Error, ErrorKind, Result};
