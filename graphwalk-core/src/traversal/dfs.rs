//! Depth-First Traversal
//!
//! Four variants: pre-order or post-order, each either recursive or driven
//! by an explicit stack. For a given graph, start and order, both
//! strategies record the same sequence.
//!
//! # Iterative Simulation
//!
//! - Pre-order: pop a node; if unvisited, mark and record it, then push its
//!   unvisited neighbors in reverse so they pop in insertion order.
//! - Post-order: each node gets two stack frames. Popping `Descend(n)` for
//!   an unvisited `n` marks it, pushes `Finish(n)` and then `Descend` frames
//!   for its unvisited neighbors in reverse. Popping `Finish(n)` records
//!   `n`, which by then has every descendant below it recorded.
//!
//! Marking on descent mirrors the recursive variant, which marks on entry;
//! it is what keeps cycles from being re-entered.

use std::ops::ControlFlow;

use tracing::debug;

use super::cancel::CancellationToken;
use super::config::{Order, Strategy};
use super::walk::{ensure_member, Walk};
use super::Traversal;
use crate::error::Result;
use crate::graph::{Graph, Neighbors, Node, NodeId};

/// Depth-first walker.
///
/// The default is iterative pre-order. Prefer [`Strategy::Iterative`] for
/// large or untrusted graphs: the recursive strategy uses one call frame
/// per level of depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dfs {
    order: Order,
    strategy: Strategy,
}

/// Stack frame for the iterative post-order walk.
#[derive(Debug, Clone, Copy)]
enum Frame {
    Descend(NodeId),
    Finish(NodeId),
}

impl Dfs {
    /// Create a walker with the given order and strategy.
    pub fn new(order: Order, strategy: Strategy) -> Self {
        Self { order, strategy }
    }

    /// Iterative pre-order walker.
    pub fn pre_order() -> Self {
        Self::new(Order::PreOrder, Strategy::Iterative)
    }

    /// Iterative post-order walker.
    pub fn post_order() -> Self {
        Self::new(Order::PostOrder, Strategy::Iterative)
    }

    /// Same order, different strategy.
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// When nodes are recorded.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Recursive or explicit-stack.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    fn descend<F>(&self, graph: &mut Graph, id: NodeId, walk: &mut Walk<'_, F>)
    where
        F: FnMut(&Node) -> ControlFlow<()>,
    {
        if walk.should_stop() {
            return;
        }

        graph.mark_visited(id);
        if self.order == Order::PreOrder {
            walk.record(graph, id);
        }

        let neighbors: Neighbors = graph.adjacent(id).iter().copied().collect();
        for next in neighbors {
            if walk.should_stop() {
                return;
            }
            if !graph.is_visited(next) {
                self.descend(graph, next, walk);
            }
        }

        if self.order == Order::PostOrder && !walk.should_stop() {
            walk.record(graph, id);
        }
    }

    fn pre_order_stack<F>(&self, graph: &mut Graph, start: NodeId, walk: &mut Walk<'_, F>)
    where
        F: FnMut(&Node) -> ControlFlow<()>,
    {
        let mut stack = vec![start];

        while !walk.should_stop() {
            let Some(id) = stack.pop() else {
                break;
            };
            if graph.is_visited(id) {
                continue;
            }

            graph.mark_visited(id);
            walk.record(graph, id);

            let pending = graph
                .adjacent(id)
                .iter()
                .rev()
                .copied()
                .filter(|n| !graph.is_visited(*n));
            stack.extend(pending);
        }
    }

    fn post_order_stack<F>(&self, graph: &mut Graph, start: NodeId, walk: &mut Walk<'_, F>)
    where
        F: FnMut(&Node) -> ControlFlow<()>,
    {
        let mut stack = vec![Frame::Descend(start)];

        while !walk.should_stop() {
            match stack.pop() {
                None => break,
                Some(Frame::Descend(id)) => {
                    if graph.is_visited(id) {
                        continue;
                    }
                    graph.mark_visited(id);
                    stack.push(Frame::Finish(id));

                    let pending = graph
                        .adjacent(id)
                        .iter()
                        .rev()
                        .copied()
                        .filter(|n| !graph.is_visited(*n))
                        .map(Frame::Descend);
                    stack.extend(pending);
                }
                Some(Frame::Finish(id)) => walk.record(graph, id),
            }
        }
    }
}

impl Traversal for Dfs {
    fn name(&self) -> &'static str {
        "dfs"
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
        debug!(
            algorithm = self.name(),
            %start,
            order = %self.order,
            strategy = %self.strategy,
            "traversal started"
        );

        graph.reset_visited();
        let mut walk = Walk::new(visit, cancel);

        match (self.strategy, self.order) {
            (Strategy::Recursive, _) => self.descend(graph, start, &mut walk),
            (Strategy::Iterative, Order::PreOrder) => {
                self.pre_order_stack(graph, start, &mut walk)
            }
            (Strategy::Iterative, Order::PostOrder) => {
                self.post_order_stack(graph, start, &mut walk)
            }
        }

        Ok(walk.finish(self.name(), start))
    }
}
