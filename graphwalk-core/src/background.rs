//! Background Traversals
//!
//! Run a walk or search on tokio's blocking pool instead of the calling
//! task. The walk itself is the same synchronous code; only the thread it
//! runs on changes.
//!
//! # Sharing a Graph
//!
//! Visited markers live on the graph, so two walks over one graph must not
//! overlap. [`SharedGraph`] puts the graph behind a mutex: each background
//! walk holds the lock for its whole duration, so concurrent requests are
//! serialized rather than interleaved. Callers that want real parallelism
//! should hand each task its own clone of the graph.

use std::ops::ControlFlow;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::error::{Error, Result};
use crate::graph::{Graph, Node, NodeId};
use crate::traversal::{CancellationToken, SearchOutcome, Traversal};

/// A graph that background tasks can lock one at a time.
pub type SharedGraph = Arc<Mutex<Graph>>;

/// Wrap a graph for use with [`spawn_traverse`] and [`spawn_search`].
pub fn share(graph: Graph) -> SharedGraph {
    Arc::new(Mutex::new(graph))
}

/// Walk every node reachable from `start` on the blocking pool.
pub async fn spawn_traverse<T>(
    traversal: T,
    graph: SharedGraph,
    start: NodeId,
    cancel: Option<CancellationToken>,
) -> Result<Vec<NodeId>>
where
    T: Traversal + Send + 'static,
{
    let name = traversal.name();
    let handle = tokio::task::spawn_blocking(move || {
        let mut graph = graph.lock();
        traversal.traverse_with(
            &mut graph,
            start,
            |_: &Node| ControlFlow::Continue(()),
            cancel.as_ref(),
        )
    });
    join(name, handle).await?
}

/// Search from `start` on the blocking pool.
pub async fn spawn_search<T, P>(
    traversal: T,
    graph: SharedGraph,
    start: NodeId,
    predicate: P,
    cancel: Option<CancellationToken>,
) -> Result<SearchOutcome>
where
    T: Traversal + Send + 'static,
    P: FnMut(&Node) -> bool + Send + 'static,
{
    let name = traversal.name();
    let handle = tokio::task::spawn_blocking(move || {
        let mut graph = graph.lock();
        traversal.try_search_with(&mut graph, start, predicate, cancel.as_ref())
    });
    join(name, handle).await?
}

async fn join<R>(algorithm: &'static str, handle: JoinHandle<R>) -> Result<R> {
    handle.await.map_err(|e| {
        warn!(algorithm, error = %e, "background traversal failed");
        Error::Background {
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::{Bfs, Dfs};

    fn line(len: i64) -> (Graph, Vec<NodeId>) {
        let mut graph = Graph::directed();
        let ids: Vec<NodeId> = (0..len).map(|v| graph.insert(v)).collect();
        for pair in ids.windows(2) {
            graph.add_edge(pair[0], pair[1]).unwrap();
        }
        (graph, ids)
    }

    #[tokio::test]
    async fn background_walk_matches_foreground() {
        let (mut graph, ids) = line(50);
        let expected = Dfs::post_order().traverse(&mut graph, ids[0]).unwrap();

        let shared = share(graph);
        let order = spawn_traverse(Dfs::post_order(), shared, ids[0], None)
            .await
            .unwrap();

        assert_eq!(order, expected);
    }

    #[tokio::test]
    async fn background_search_finds_node() {
        let (graph, ids) = line(20);
        let shared = share(graph);

        let outcome = spawn_search(Bfs, shared.clone(), ids[0], |n| n.value() == 7, None)
            .await
            .unwrap();

        assert_eq!(outcome.node, Some(ids[7]));
        assert_eq!(outcome.examined, 8);
        assert!(shared.lock().is_visited(ids[7]));
        assert!(!shared.lock().is_visited(ids[9]));
    }

    #[tokio::test]
    async fn concurrent_walks_are_serialized() {
        let (graph, ids) = line(200);
        let shared = share(graph);

        let walks: Vec<_> = (0..8)
            .map(|_| tokio::spawn(spawn_traverse(Bfs, shared.clone(), ids[0], None)))
            .collect();

        for walk in walks {
            let order = walk.await.unwrap().unwrap();
            assert_eq!(order, ids);
        }
    }

    #[tokio::test]
    async fn invalid_start_surfaces_unchanged() {
        let (graph, _) = line(3);
        let stranger = NodeId::new();

        let err = spawn_traverse(Bfs, share(graph), stranger, None)
            .await
            .unwrap_err();

        assert_eq!(err, Error::node_not_found(stranger));
    }

    #[tokio::test]
    async fn panicking_predicate_becomes_background_error() {
        let (graph, ids) = line(3);

        let err = spawn_search(
            Bfs,
            share(graph),
            ids[0],
            |_: &Node| -> bool { panic!("predicate exploded") },
            None,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::Background { .. }));
    }

    #[tokio::test]
    async fn cancelled_token_is_honored() {
        let (graph, ids) = line(10);
        let token = CancellationToken::new();
        token.cancel();

        let order = spawn_traverse(Dfs::default(), share(graph), ids[0], Some(token))
            .await
            .unwrap();

        assert!(order.is_empty());
    }
}
