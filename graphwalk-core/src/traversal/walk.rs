//! Per-call walk state shared by the BFS and DFS implementations.

use std::ops::ControlFlow;

use tracing::{debug, trace};

use super::cancel::CancellationToken;
use crate::error::{Error, Result};
use crate::graph::{Graph, Node, NodeId};

/// Reject a start node the graph does not hold. Runs before any mark is
/// touched.
pub(crate) fn ensure_member(graph: &Graph, start: NodeId, algorithm: &'static str) -> Result<()> {
    if graph.contains(start) {
        return Ok(());
    }
    debug!(algorithm, %start, "start node is not a member of the graph");
    Err(Error::node_not_found(start))
}

/// Visitation record plus the two ways a walk can be told to stop: the
/// callback breaking, or the caller's token firing.
pub(crate) struct Walk<'t, F> {
    visit: F,
    cancel: Option<&'t CancellationToken>,
    stopped: bool,
    order: Vec<NodeId>,
}

impl<'t, F> Walk<'t, F>
where
    F: FnMut(&Node) -> ControlFlow<()>,
{
    pub(crate) fn new(visit: F, cancel: Option<&'t CancellationToken>) -> Self {
        Self {
            visit,
            cancel,
            stopped: false,
            order: Vec::new(),
        }
    }

    pub(crate) fn should_stop(&self) -> bool {
        self.stopped || self.cancel.is_some_and(CancellationToken::is_cancelled)
    }

    /// Append `id` to the visitation order and hand it to the callback.
    pub(crate) fn record(&mut self, graph: &Graph, id: NodeId) {
        self.order.push(id);
        if let Some(node) = graph.node(id) {
            trace!(node = %id, value = node.value(), "visit");
            if (self.visit)(node).is_break() {
                self.stopped = true;
            }
        }
    }

    pub(crate) fn finish(self, algorithm: &'static str, start: NodeId) -> Vec<NodeId> {
        let stopped_early = self.should_stop();
        debug!(
            algorithm,
            %start,
            visited = self.order.len(),
            stopped_early,
            "traversal finished"
        );
        self.order
    }
}
