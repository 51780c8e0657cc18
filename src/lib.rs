//! Topopath is a small toolkit for shortest-path analysis of weighted, undirected network
//! topologies.
//!
//! # Basic usage
//!
//! The library is centered around the [`Graph`](graph::Graph) structure which can be
//! constructed from [`Edge`](edge::Edge) instances or parsed from an edge list. Once
//! constructed, [`dijkstra`](dijkstra::dijkstra) computes the shortest paths from a source,
//! and the [`path`] module reconstructs, enumerates and prices the resulting paths.
//!
//! ```rust
//! use topopath::dijkstra::dijkstra;
//! use topopath::edge::Edge;
//! use topopath::graph::Graph;
//! use topopath::path::{enumerate_min_hop_paths, path_cost};
//!
//! // Construct the graph instance, the IDs can be any type that is
//! // `Copy + Eq + Hash + Ord + Debug`.
//! let mut graph = Graph::new();
//! graph.insert(Edge::new(1, 2, 5)).unwrap();
//! graph.insert(Edge::new(2, 3, 1)).unwrap();
//! graph.insert(Edge::new(1, 3, 10)).unwrap();
//!
//! // The cheapest route goes through 2...
//! let weighted = dijkstra(&graph, 1).unwrap();
//! assert_eq!(weighted.path_to(&3).unwrap(), vec![1, 2, 3]);
//! assert_eq!(weighted.distance(&3), Some(6));
//!
//! // ...while the route with the fewest hops is the direct link.
//! let unit = graph.to_unit_weight();
//! let hops = dijkstra(&unit, 1).unwrap();
//! let min_hop_paths = enumerate_min_hop_paths(&hops, &3).unwrap();
//! assert_eq!(min_hop_paths, vec![vec![1, 3]]);
//! assert_eq!(path_cost(&graph, &min_hop_paths[0]).unwrap(), 10);
//! ```

/// Builds a `Graph` from `(a, b, weight)` triples.
#[cfg(test)]
macro_rules! graph {
    ($(($a:expr, $b:expr, $weight:expr)),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut graph = $crate::graph::Graph::new();

        $(
            graph.add_edge($a, $b, $weight).unwrap();
        )*

        graph
    }};
}

pub mod dijkstra;
pub mod edge;
pub mod error;
pub mod graph;
pub mod input;
pub mod logging;
pub mod path;
pub mod report;

#[cfg(test)]
mod brute_force;
