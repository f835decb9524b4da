use std::collections::{HashMap, HashSet, VecDeque};

use graphwalk_core::graph::{EdgeMode, Graph, NodeId};
use graphwalk_core::traversal::{Bfs, Dfs, Order, Strategy as WalkStrategy, Traversal};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Shape {
    undirected: bool,
    len: usize,
    edges: Vec<(usize, usize)>,
    start: usize,
}

fn shapes() -> impl Strategy<Value = Shape> {
    (1usize..40, any::<bool>()).prop_flat_map(|(len, undirected)| {
        (
            proptest::collection::vec((0..len, 0..len), 0..len * 3),
            0..len,
        )
            .prop_map(move |(edges, start)| Shape {
                undirected,
                len,
                edges,
                start,
            })
    })
}

fn build(shape: &Shape) -> (Graph, Vec<NodeId>) {
    let mode = if shape.undirected {
        EdgeMode::Undirected
    } else {
        EdgeMode::Directed
    };
    let mut graph = Graph::new(mode);
    let ids: Vec<NodeId> = (0..shape.len).map(|v| graph.insert(v as i64)).collect();
    for &(from, to) in &shape.edges {
        graph.add_edge(ids[from], ids[to]).unwrap();
    }
    (graph, ids)
}

/// Hop distance from `start` to every reachable node, computed without the
/// engine.
fn distances(graph: &Graph, start: NodeId) -> HashMap<NodeId, usize> {
    let mut dist = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(id) = queue.pop_front() {
        let d = dist[&id];
        for &next in graph.neighbors(id).unwrap() {
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

fn walkers() -> Vec<(String, Box<dyn Fn(&mut Graph, NodeId) -> Vec<NodeId>>)> {
    let mut all: Vec<(String, Box<dyn Fn(&mut Graph, NodeId) -> Vec<NodeId>>)> = Vec::new();
    all.push((
        "bfs".to_string(),
        Box::new(|g: &mut Graph, s: NodeId| Bfs.traverse(g, s).unwrap()),
    ));
    for order in [Order::PreOrder, Order::PostOrder] {
        for strategy in [WalkStrategy::Recursive, WalkStrategy::Iterative] {
            let dfs = Dfs::new(order, strategy);
            all.push((
                format!("dfs {order} {strategy}"),
                Box::new(move |g: &mut Graph, s: NodeId| dfs.traverse(g, s).unwrap()),
            ));
        }
    }
    all
}

proptest! {
    #[test]
    fn every_reachable_node_exactly_once(shape in shapes()) {
        let (mut graph, ids) = build(&shape);
        let start = ids[shape.start];
        let reachable: HashSet<NodeId> = distances(&graph, start).into_keys().collect();

        for (name, walk) in walkers() {
            let order = walk(&mut graph, start);
            let unique: HashSet<NodeId> = order.iter().copied().collect();
            prop_assert_eq!(unique.len(), order.len(), "{} repeated a node", name);
            prop_assert_eq!(&unique, &reachable, "{} visited the wrong set", name);

            for id in &ids {
                prop_assert_eq!(graph.is_visited(*id), reachable.contains(id));
            }
        }
    }

    #[test]
    fn bfs_is_level_ordered(shape in shapes()) {
        let (mut graph, ids) = build(&shape);
        let start = ids[shape.start];
        let dist = distances(&graph, start);

        let order = Bfs.traverse(&mut graph, start).unwrap();
        let levels: Vec<usize> = order.iter().map(|id| dist[id]).collect();

        prop_assert!(
            levels.windows(2).all(|w| w[0] <= w[1]),
            "levels {:?}",
            levels
        );
    }

    #[test]
    fn recursive_and_iterative_agree(shape in shapes()) {
        let (mut graph, ids) = build(&shape);
        let start = ids[shape.start];

        for order in [Order::PreOrder, Order::PostOrder] {
            let recursive = Dfs::new(order, WalkStrategy::Recursive)
                .traverse(&mut graph, start)
                .unwrap();
            let iterative = Dfs::new(order, WalkStrategy::Iterative)
                .traverse(&mut graph, start)
                .unwrap();
            prop_assert_eq!(recursive, iterative);
        }
    }

    #[test]
    fn start_bounds_the_dfs_orders(shape in shapes()) {
        let (mut graph, ids) = build(&shape);
        let start = ids[shape.start];

        let pre = Dfs::pre_order().traverse(&mut graph, start).unwrap();
        let post = Dfs::post_order().traverse(&mut graph, start).unwrap();

        prop_assert_eq!(pre.first(), Some(&start));
        prop_assert_eq!(post.last(), Some(&start));
    }

    #[test]
    fn rerunning_reproduces_the_order(shape in shapes()) {
        let (mut graph, ids) = build(&shape);
        let start = ids[shape.start];

        for (name, walk) in walkers() {
            let first = walk(&mut graph, start);
            graph.reset_visited();
            let second = walk(&mut graph, start);
            prop_assert_eq!(first, second, "{}", name);
        }
    }

    #[test]
    fn search_returns_first_match_in_walk_order(shape in shapes(), target in 0i64..40) {
        let (mut graph, ids) = build(&shape);
        let start = ids[shape.start];

        for dfs in [Dfs::pre_order(), Dfs::post_order()] {
            let order = dfs.traverse(&mut graph, start).unwrap();
            let expected = order
                .iter()
                .copied()
                .find(|id| graph.node(*id).unwrap().value() == target);

            let outcome = dfs
                .try_search(&mut graph, start, |n| n.value() == target)
                .unwrap();
            prop_assert_eq!(outcome.node, expected);
            prop_assert_eq!(outcome.found(), expected.is_some());
        }

        let order = Bfs.traverse(&mut graph, start).unwrap();
        let expected = order
            .iter()
            .copied()
            .find(|id| graph.node(*id).unwrap().value() == target);
        let found = Bfs
            .search(&mut graph, start, |n| n.value() == target)
            .unwrap();
        prop_assert_eq!(found, expected);
    }
}
