//! Exhaustive reference computations used to cross-check the path algorithms in tests.

use std::{collections::BTreeSet, fmt::Debug, hash::Hash};

use itertools::Itertools;

use crate::{edge::Distance, graph::Graph};

/// Returns every simple path (no repeated vertex) from `source` to `target`, source first.
pub fn simple_paths<T>(graph: &Graph<T>, source: T, target: T) -> Vec<Vec<T>>
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    fn extend<T>(graph: &Graph<T>, path: &mut Vec<T>, target: T, found: &mut Vec<Vec<T>>)
    where
        T: Copy + Eq + Hash + Ord + Debug,
    {
        let Some(&last) = path.last() else {
            return;
        };

        if last == target {
            found.push(path.clone());
            return;
        }

        let neighbours: Vec<T> = graph
            .neighbours(&last)
            .map(|n| n.map(|(id, _)| id).collect::<Vec<T>>())
            .unwrap_or_default();

        for neighbour in neighbours {
            if !path.contains(&neighbour) {
                path.push(neighbour);
                extend(graph, path, target, found);
                path.pop();
            }
        }
    }

    let mut found = Vec::new();
    if graph.contains_node(&source) {
        extend(graph, &mut vec![source], target, &mut found);
    }

    found
}

/// Sums the weights along `path`, panicking if it isn't a walk in the graph.
pub fn cost<T>(graph: &Graph<T>, path: &[T]) -> Distance
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    path.iter()
        .tuple_windows()
        .map(|(a, b)| graph.weight(a, b).expect("path must follow edges"))
        .map(Distance::from)
        .sum()
}

/// A fixed set of small graphs (at most 7 vertices) mixing hand-picked shapes with
/// pseudo-randomly generated ones.
pub fn sample_graphs() -> Vec<Graph<u32>> {
    let mut graphs = vec![
        // Triangle with a cheap detour.
        graph![(1, 2, 5), (2, 3, 1), (1, 3, 10)],
        // Square with two equal-hop routes and a diagonal.
        graph![(1, 2, 1), (2, 4, 3), (1, 3, 2), (3, 4, 2), (2, 3, 1)],
        // Two components.
        graph![(1, 2, 4), (2, 3, 4), (4, 5, 1)],
        // Ladder.
        graph![
            (1, 2, 1),
            (2, 3, 1),
            (4, 5, 2),
            (5, 6, 2),
            (1, 4, 3),
            (2, 5, 1),
            (3, 6, 4)
        ],
    ];

    // Linear congruential generator so the samples are the same on every run.
    let mut seed: u64 = 0x5eed;
    let mut next = move |bound: u64| {
        seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (seed >> 33) % bound
    };

    for _ in 0..16 {
        let vertices = 3 + next(5) as u32;
        let mut edges = BTreeSet::new();

        for a in 1..=vertices {
            for b in (a + 1)..=vertices {
                if next(100) < 45 {
                    edges.insert((a, b, 1 + next(9)));
                }
            }
        }

        let mut graph = Graph::new();
        for vertex in 1..=vertices {
            graph.add_node(vertex);
        }
        for (a, b, weight) in edges {
            graph
                .add_edge(a, b, weight)
                .expect("generated weights are positive");
        }

        graphs.push(graph);
    }

    graphs
}

#[test]
fn simple_paths_of_a_triangle() {
    let graph = graph![(1, 2, 5), (2, 3, 1), (1, 3, 10)];

    assert_eq!(
        simple_paths(&graph, 1, 3),
        vec![vec![1, 2, 3], vec![1, 3]]
    );
    assert_eq!(cost(&graph, &[1, 2, 3]), 6);
    assert_eq!(simple_paths(&graph, 1, 1), vec![vec![1]]);
}
