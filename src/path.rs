//! A module for materializing, enumerating and pricing paths.
//!
//! Paths are plain sequences of node ids, ordered from the source to the destination.

use std::{fmt::Debug, hash::Hash};

use itertools::Itertools;

use crate::{
    dijkstra::ShortestPaths,
    edge::Distance,
    error::{Error, Result},
    graph::Graph,
};

impl<T> ShortestPaths<'_, T>
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    /// Reconstructs the shortest path from the source to `destination` by walking the
    /// predecessor links back to the source.
    ///
    /// # Examples
    ///
    /// ```
    /// use topopath::dijkstra::dijkstra;
    /// use topopath::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge(1, 2, 5).unwrap();
    /// graph.add_edge(2, 3, 1).unwrap();
    /// graph.add_edge(1, 3, 10).unwrap();
    ///
    /// let paths = dijkstra(&graph, 1).unwrap();
    /// assert_eq!(paths.path_to(&3).unwrap(), vec![1, 2, 3]);
    /// assert_eq!(paths.path_to(&1).unwrap(), vec![1]);
    /// ```
    pub fn path_to(&self, destination: &T) -> Result<Vec<T>> {
        self.graph().node(destination)?;

        if !self.is_reachable(destination) {
            return Err(Error::unreachable(destination));
        }

        let mut path = vec![*destination];
        let mut current = *destination;

        // The source is the only reached node without a predecessor.
        while let Some(previous) = self.previous(&current) {
            path.push(previous);
            current = previous;
        }

        path.reverse();
        Ok(path)
    }
}

/// Enumerates every path from the source to `destination` that uses the minimum number of
/// hops.
///
/// The paths must have been computed over a unit-weight graph (see
/// [`Graph::to_unit_weight`]), where a node's hop count is its breadth-first layer; walking
/// backward from the destination, each step branches into every neighbour one layer closer to
/// the source. The result is sorted and free of duplicates.
///
/// # Examples
///
/// ```
/// use topopath::dijkstra::dijkstra;
/// use topopath::graph::Graph;
/// use topopath::path::enumerate_min_hop_paths;
///
/// let mut graph = Graph::new();
/// graph.add_edge("a", "b", 1).unwrap();
/// graph.add_edge("b", "d", 1).unwrap();
/// graph.add_edge("a", "c", 1).unwrap();
/// graph.add_edge("c", "d", 1).unwrap();
///
/// let paths = dijkstra(&graph, "a").unwrap();
/// assert_eq!(
///     enumerate_min_hop_paths(&paths, &"d").unwrap(),
///     vec![vec!["a", "b", "d"], vec!["a", "c", "d"]]
/// );
/// ```
#[tracing::instrument(level = "debug", skip(paths), fields(source = ?paths.source()))]
pub fn enumerate_min_hop_paths<T>(
    paths: &ShortestPaths<'_, T>,
    destination: &T,
) -> Result<Vec<Vec<T>>>
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    let graph = paths.graph();
    if !graph.is_unit_weight() {
        return Err(Error::NonUnitWeights);
    }

    graph.node(destination)?;
    let min_hop = paths
        .hop(destination)
        .ok_or_else(|| Error::unreachable(destination))?;

    let mut found = min_hop_prefixes(paths, *destination, min_hop)?;
    found.sort();
    found.dedup();

    tracing::debug!(min_hop, count = found.len(), "enumerated min-hop paths");

    Ok(found)
}

/// Returns the paths from the source ending in `node` that have exactly `remaining` hops and
/// only pass through nodes on successive hop layers.
fn min_hop_prefixes<T>(
    paths: &ShortestPaths<'_, T>,
    node: T,
    remaining: u32,
) -> Result<Vec<Vec<T>>>
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    if remaining == 0 {
        debug_assert_eq!(node, paths.source());
        return Ok(vec![vec![node]]);
    }

    let mut prefixes: Vec<Vec<T>> = Vec::new();

    for (neighbour, _) in paths.graph().neighbours(&node)? {
        if paths.hop(&neighbour) != Some(remaining - 1) {
            continue;
        }

        for prefix in min_hop_prefixes(paths, neighbour, remaining - 1)? {
            prefixes.push(prefix.into_iter().chain([node]).collect());
        }
    }

    Ok(prefixes)
}

/// Sums the weights of the edges along `path` in `graph`.
///
/// Every consecutive pair must be connected in `graph`; an empty or single-node path costs
/// nothing. The sum is a [`Distance`], so it is exact however heavy the edges are.
///
/// # Examples
///
/// ```
/// use topopath::graph::Graph;
/// use topopath::path::path_cost;
///
/// let mut graph = Graph::new();
/// graph.add_edge(1, 2, 5).unwrap();
/// graph.add_edge(2, 3, 1).unwrap();
///
/// assert_eq!(path_cost(&graph, &[1, 2, 3]).unwrap(), 6);
/// assert!(path_cost(&graph, &[1, 3]).is_err());
/// ```
pub fn path_cost<T>(graph: &Graph<T>, path: &[T]) -> Result<Distance>
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    if let Some(first) = path.first() {
        graph.node(first)?;
    }

    let mut cost: Distance = 0;
    for (a, b) in path.iter().tuple_windows() {
        graph.node(b)?;
        let weight = graph.weight(a, b).ok_or_else(|| Error::invalid_edge(a, b))?;
        cost += Distance::from(weight);
    }

    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{brute_force, dijkstra::dijkstra, edge::Weight};

    #[test]
    fn path_to_weighted_triangle() {
        let graph = graph![(1, 2, 5), (2, 3, 1), (1, 3, 10)];
        let paths = dijkstra(&graph, 1).unwrap();

        let path = paths.path_to(&3).unwrap();
        assert_eq!(path, vec![1, 2, 3]);
        assert_eq!(path.len() as u32 - 1, paths.hop(&3).unwrap());
    }

    #[test]
    fn path_to_unit_triangle() {
        let graph = graph![(1, 2, 5), (2, 3, 1), (1, 3, 10)].to_unit_weight();
        let paths = dijkstra(&graph, 1).unwrap();

        assert_eq!(paths.path_to(&3).unwrap(), vec![1, 3]);
    }

    #[test]
    fn path_to_unreachable() {
        let graph = graph![(1, 2, 1), (3, 4, 1)];
        let paths = dijkstra(&graph, 1).unwrap();

        assert!(matches!(
            paths.path_to(&4),
            Err(Error::Unreachable { node }) if node == "4"
        ));
    }

    #[test]
    fn path_to_unknown() {
        let graph = graph![(1, 2, 1)];
        let paths = dijkstra(&graph, 1).unwrap();

        assert!(matches!(paths.path_to(&5), Err(Error::UnknownNode { .. })));
    }

    #[test]
    fn min_hop_paths_triangle() {
        let graph = graph![(1, 2, 5), (2, 3, 1), (1, 3, 10)].to_unit_weight();
        let paths = dijkstra(&graph, 1).unwrap();

        assert_eq!(enumerate_min_hop_paths(&paths, &3).unwrap(), vec![vec![1, 3]]);
    }

    #[test]
    fn min_hop_paths_to_source() {
        let graph = graph![(1, 2, 1)];
        let paths = dijkstra(&graph, 1).unwrap();

        assert_eq!(enumerate_min_hop_paths(&paths, &1).unwrap(), vec![vec![1]]);
    }

    #[test]
    fn min_hop_paths_ignore_longer_paths() {
        let (a, b, c, d, e) = ("a", "b", "c", "d", "e");
        let graph = graph![
            (a, b, 1),
            (b, c, 1),
            (a, d, 1),
            (d, c, 1),
            (a, e, 1),
            (e, d, 1)
        ];
        let paths = dijkstra(&graph, a).unwrap();

        assert_eq!(
            enumerate_min_hop_paths(&paths, &c).unwrap(),
            vec![vec![a, b, c], vec![a, d, c]]
        );
    }

    #[test]
    fn min_hop_paths_require_unit_weights() {
        let graph = graph![(1, 2, 5), (2, 3, 1)];
        let paths = dijkstra(&graph, 1).unwrap();

        assert!(matches!(
            enumerate_min_hop_paths(&paths, &3),
            Err(Error::NonUnitWeights)
        ));
    }

    #[test]
    fn min_hop_paths_unreachable() {
        let graph = graph![(1, 2, 1), (3, 4, 1)];
        let paths = dijkstra(&graph, 1).unwrap();

        assert!(matches!(
            enumerate_min_hop_paths(&paths, &3),
            Err(Error::Unreachable { .. })
        ));
        assert!(matches!(
            enumerate_min_hop_paths(&paths, &7),
            Err(Error::UnknownNode { .. })
        ));
    }

    #[test]
    fn min_hop_paths_match_brute_force() {
        for graph in brute_force::sample_graphs() {
            let unit = graph.to_unit_weight();
            let ids: Vec<u32> = unit.nodes().map(|node| node.id()).collect();

            for &source in &ids {
                let paths = dijkstra(&unit, source).unwrap();

                for &target in &ids {
                    let all = brute_force::simple_paths(&unit, source, target);
                    let Some(min_len) = all.iter().map(Vec::len).min() else {
                        assert!(enumerate_min_hop_paths(&paths, &target).is_err());
                        continue;
                    };

                    let mut expected: Vec<Vec<u32>> =
                        all.into_iter().filter(|path| path.len() == min_len).collect();
                    expected.sort();

                    let found = enumerate_min_hop_paths(&paths, &target).unwrap();
                    assert_eq!(found, expected);

                    for path in &found {
                        assert_eq!(path.first(), Some(&source));
                        assert_eq!(path.last(), Some(&target));
                        assert_eq!(path_cost(&unit, path).unwrap(), min_len as Distance - 1);
                    }
                }
            }
        }
    }

    #[test]
    fn cost_of_reconstructed_path_is_distance() {
        for graph in brute_force::sample_graphs() {
            let ids: Vec<u32> = graph.nodes().map(|node| node.id()).collect();

            for &source in &ids {
                let paths = dijkstra(&graph, source).unwrap();

                for (target, state) in paths.reachable() {
                    let path = paths.path_to(&target).unwrap();
                    assert_eq!(path_cost(&graph, &path).unwrap(), state.distance);
                    assert_eq!(path.len() as u32 - 1, state.hop);
                }
            }
        }
    }

    #[test]
    fn cost_of_trivial_paths() {
        let graph = graph![(1, 2, 3)];

        assert_eq!(path_cost(&graph, &[]).unwrap(), 0);
        assert_eq!(path_cost(&graph, &[1]).unwrap(), 0);
        // Order doesn't matter on an undirected graph.
        assert_eq!(path_cost(&graph, &[2, 1]).unwrap(), 3);
    }

    #[test]
    fn cost_of_invalid_paths() {
        let graph = graph![(1, 2, 3), (3, 4, 1)];

        assert!(matches!(
            path_cost(&graph, &[1, 2, 3]),
            Err(Error::InvalidEdge { from, to }) if from == "2" && to == "3"
        ));
        assert!(matches!(
            path_cost(&graph, &[9]),
            Err(Error::UnknownNode { .. })
        ));
        assert!(matches!(
            path_cost(&graph, &[1, 9]),
            Err(Error::UnknownNode { .. })
        ));
    }

    #[test]
    fn cost_beyond_the_weight_range() {
        let graph = graph![(1, 2, Weight::MAX), (2, 4, 10), (1, 3, Weight::MAX), (3, 4, 1)];
        let max = Distance::from(Weight::MAX);

        assert_eq!(path_cost(&graph, &[1, 2, 4]).unwrap(), max + 10);
        assert_eq!(path_cost(&graph, &[1, 3, 4]).unwrap(), max + 1);
        assert_eq!(path_cost(&graph, &[2, 1, 3]).unwrap(), 2 * max);

        let paths = dijkstra(&graph, 1).unwrap();
        let path = paths.path_to(&4).unwrap();
        assert_eq!(path, vec![1, 3, 4]);
        assert_eq!(Some(path_cost(&graph, &path).unwrap()), paths.distance(&4));
    }

    #[test]
    fn cost_against_another_graph() {
        let weighted = graph![(1, 2, 5), (2, 3, 1), (1, 3, 10)];
        let unit = weighted.to_unit_weight();
        let paths = dijkstra(&unit, 1).unwrap();

        let min_hop = enumerate_min_hop_paths(&paths, &3).unwrap();
        assert_eq!(path_cost(&weighted, &min_hop[0]).unwrap(), 10);
    }
}
