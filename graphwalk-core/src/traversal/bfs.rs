//! Breadth-First Traversal
//!
//! Level-by-level walk with a FIFO queue. Nodes are marked when they are
//! enqueued, not when they are dequeued, so a node with several in-edges
//! enters the queue once.

use std::collections::VecDeque;
use std::ops::ControlFlow;

use tracing::debug;

use super::cancel::CancellationToken;
use super::walk::{ensure_member, Walk};
use super::Traversal;
use crate::error::Result;
use crate::graph::{Graph, Node, NodeId};

/// Breadth-first walker. Stateless; one value can serve any number of walks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bfs;

impl Bfs {
    /// Create a breadth-first walker.
    pub fn new() -> Self {
        Self
    }
}

impl Traversal for Bfs {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn traverse_with<F>(
        &self,
        graph: &mut Graph,
        start: NodeId,
        visit: F,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<NodeId>>
    where
        F: FnMut(&Node) -> ControlFlow<()>,
    {
        ensure_member(graph, start, self.name())?;
        debug!(algorithm = self.name(), %start, "traversal started");

        graph.reset_visited();
        let mut walk = Walk::new(visit, cancel);
        let mut queue = VecDeque::new();

        graph.mark_visited(start);
        queue.push_back(start);

        while !walk.should_stop() {
            let Some(current) = queue.pop_front() else {
                break;
            };

            walk.record(graph, current);
            if walk.should_stop() {
                break;
            }

            for i in 0..graph.adjacent(current).len() {
                let neighbor = graph.adjacent(current)[i];
                if !graph.is_visited(neighbor) {
                    graph.mark_visited(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(walk.finish(self.name(), start))
    }
}
