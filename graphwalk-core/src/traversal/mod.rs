//! Traversal Engine
//!
//! Breadth-first and depth-first walks over a [`Graph`].
//!
//! # Contract
//!
//! Every walk:
//!
//! 1. Checks that the start node is a member of the graph. If not, it fails
//!    with an invalid-argument error before touching any visited marker.
//! 2. Clears all visited markers, so marks from an earlier walk never leak.
//! 3. Visits every node reachable from the start exactly once, handing each
//!    to the callback and recording it in the returned order.
//!
//! # Stopping Early
//!
//! A callback returns [`ControlFlow::Break`] to stop the walk after the
//! current node; a [`CancellationToken`] stops it from outside. Either way
//! the walk is abandoned, not rolled back, and the call still succeeds with
//! the order recorded so far. Searches are built on exactly this: the first
//! node matching the predicate breaks the walk.

mod bfs;
mod cancel;
mod config;
mod dfs;
mod walk;

use std::ops::ControlFlow;

pub use bfs::Bfs;
pub use cancel::CancellationToken;
pub use config::{Order, Strategy, TraversalConfig};
pub use dfs::Dfs;

use crate::error::Result;
use crate::graph::{Graph, Node, NodeId};

/// Result of a search: the first match, if any, and how many nodes the walk
/// examined to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The first node satisfying the predicate.
    pub node: Option<NodeId>,

    /// Nodes handed to the predicate, the match included.
    pub examined: usize,
}

impl SearchOutcome {
    /// Whether a node matched.
    pub fn found(&self) -> bool {
        self.node.is_some()
    }
}

/// A graph walk.
///
/// Implementors provide [`traverse_with`](Traversal::traverse_with); the
/// plain traversal and both search flavors are derived from it.
pub trait Traversal {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Walk from `start`, calling `visit` on each node as it is recorded.
    ///
    /// Returns the nodes in the order they were recorded.
    fn traverse_with<F>(
        &self,
        graph: &mut Graph,
        start: NodeId,
        visit: F,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<NodeId>>
    where
        F: FnMut(&Node) -> ControlFlow<()>;

    /// Walk every node reachable from `start`.
    fn traverse(&self, graph: &mut Graph, start: NodeId) -> Result<Vec<NodeId>> {
        self.traverse_with(graph, start, |_| ControlFlow::Continue(()), None)
    }

    /// Walk until `predicate` matches, or until `cancel` fires.
    fn try_search_with<P>(
        &self,
        graph: &mut Graph,
        start: NodeId,
        mut predicate: P,
        cancel: Option<&CancellationToken>,
    ) -> Result<SearchOutcome>
    where
        P: FnMut(&Node) -> bool,
    {
        let mut found = None;
        let order = self.traverse_with(
            graph,
            start,
            |node| {
                if predicate(node) {
                    found = Some(node.id());
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            },
            cancel,
        )?;

        Ok(SearchOutcome {
            node: found,
            examined: order.len(),
        })
    }

    /// Walk until `predicate` matches.
    fn try_search<P>(&self, graph: &mut Graph, start: NodeId, predicate: P) -> Result<SearchOutcome>
    where
        P: FnMut(&Node) -> bool,
    {
        self.try_search_with(graph, start, predicate, None)
    }

    /// First node, in this walk's own order, satisfying `predicate`.
    fn search<P>(&self, graph: &mut Graph, start: NodeId, predicate: P) -> Result<Option<NodeId>>
    where
        P: FnMut(&Node) -> bool,
    {
        Ok(self.try_search(graph, start, predicate)?.node)
    }
}
