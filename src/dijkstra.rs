//! Single-source shortest paths over positive edge weights.

use std::{
    cmp::Reverse,
    collections::{BTreeMap, BinaryHeap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use crate::{edge::Distance, error::Result, graph::Graph};

/// The per-node outcome of a shortest-path query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeState<T> {
    /// Total weight of the shortest path from the source.
    pub distance: Distance,
    /// Number of edges on that path.
    pub hop: u32,
    /// The node preceding this one on that path, `None` for the source.
    pub previous: Option<T>,
}

/// The result of running [`dijkstra`] from a source.
///
/// The state is kept apart from the graph, which is only borrowed, so a graph can serve any
/// number of queries without being reset in between. Nodes without a recorded state were not
/// reached from the source.
#[derive(Clone, Debug)]
pub struct ShortestPaths<'a, T> {
    graph: &'a Graph<T>,
    source: T,
    states: BTreeMap<T, NodeState<T>>,
}

impl<'a, T> ShortestPaths<'a, T>
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    /// The graph the paths were computed over.
    pub fn graph(&self) -> &'a Graph<T> {
        self.graph
    }

    pub fn source(&self) -> T {
        self.source
    }

    pub fn state(&self, node: &T) -> Option<&NodeState<T>> {
        self.states.get(node)
    }

    /// Returns the shortest distance from the source, `None` if `node` is unreachable.
    pub fn distance(&self, node: &T) -> Option<Distance> {
        self.state(node).map(|state| state.distance)
    }

    /// Returns the number of edges on the shortest path from the source, `None` if `node` is
    /// unreachable.
    pub fn hop(&self, node: &T) -> Option<u32> {
        self.state(node).map(|state| state.hop)
    }

    pub fn previous(&self, node: &T) -> Option<T> {
        self.state(node).and_then(|state| state.previous)
    }

    pub fn is_reachable(&self, node: &T) -> bool {
        self.states.contains_key(node)
    }

    /// Returns the reached nodes and their state in ascending order of id.
    pub fn reachable(&self) -> impl Iterator<Item = (T, &NodeState<T>)> {
        self.states.iter().map(|(id, state)| (*id, state))
    }

    /// Returns the number of reached nodes, the source included.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Computes the shortest paths from `source` to every node of the graph.
///
/// Nodes are settled in order of increasing distance using a binary min-heap; ties are settled
/// by ascending id, so the chosen predecessors are reproducible. A neighbour's distance is only
/// replaced by a strictly shorter one.
///
/// # Examples
///
/// ```
/// use topopath::dijkstra::dijkstra;
/// use topopath::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge("a", "b", 2).unwrap();
/// graph.add_edge("b", "c", 2).unwrap();
/// graph.add_edge("a", "c", 5).unwrap();
///
/// let paths = dijkstra(&graph, "a").unwrap();
/// assert_eq!(paths.distance(&"c"), Some(4));
/// assert_eq!(paths.hop(&"c"), Some(2));
/// assert_eq!(paths.previous(&"c"), Some("b"));
/// ```
#[tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dijkstra<T>(graph: &Graph<T>, source: T) -> Result<ShortestPaths<'_, T>>
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    // Fail early on an unknown source rather than reporting everything as unreachable.
    graph.node(&source)?;

    let mut states = BTreeMap::new();
    let mut visited = HashSet::new();
    let mut heap: BinaryHeap<Reverse<(Distance, T)>> = BinaryHeap::new();

    states.insert(
        source,
        NodeState {
            distance: 0,
            hop: 0,
            previous: None,
        },
    );
    heap.push(Reverse((0, source)));

    while let Some(Reverse((distance, current))) = heap.pop() {
        // Skip stale entries, the node was settled with a shorter distance.
        if !visited.insert(current) {
            continue;
        }

        let hop = states.get(&current).map_or(0, |state: &NodeState<T>| state.hop);
        tracing::trace!(node = ?current, distance, hop, "settled");

        for (neighbour, weight) in graph.neighbours(&current)? {
            if visited.contains(&neighbour) {
                continue;
            }

            // A settled distance spans at most `vertex_count - 1` edges, so adding one more
            // weight can't overflow a `Distance`.
            let candidate = distance + Distance::from(weight);
            let is_shorter = states
                .get(&neighbour)
                .map_or(true, |state| candidate < state.distance);

            if is_shorter {
                states.insert(
                    neighbour,
                    NodeState {
                        distance: candidate,
                        hop: hop + 1,
                        previous: Some(current),
                    },
                );
                heap.push(Reverse((candidate, neighbour)));
            }
        }
    }

    tracing::debug!(
        reachable = states.len(),
        unreachable = graph.vertex_count() - states.len(),
        "shortest paths computed"
    );

    Ok(ShortestPaths {
        graph,
        source,
        states,
    })
}
