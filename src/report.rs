//! The end-to-end analysis of a topology: weighted and unit-weight shortest paths between a
//! source and a destination, and the weighted ranking of every min-hop path.

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::{
    dijkstra::{dijkstra, ShortestPaths},
    edge::Distance,
    error::{Error, Result},
    input::{EdgeList, NodeId, WeightMode},
    path::{enumerate_min_hop_paths, path_cost},
};

/// Size of the analysed topology.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Distinct nodes appearing in the edges.
    pub nodes: usize,
    pub edges: usize,
    /// The node count announced by the edge list header.
    pub declared_nodes: usize,
}

/// A shortest path with its length in hops and its total weight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: Vec<NodeId>,
    pub hop: u32,
    pub distance: Distance,
}

impl Route {
    fn from_paths(paths: &ShortestPaths<'_, NodeId>, destination: NodeId) -> Result<Self> {
        let path = paths.path_to(&destination)?;
        let state = paths
            .state(&destination)
            .ok_or_else(|| Error::unreachable(destination))?;

        Ok(Self {
            path,
            hop: state.hop,
            distance: state.distance,
        })
    }
}

/// A min-hop path priced against the weighted graph.
///
/// Candidates order by cost first, then lexicographically by path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Candidate {
    pub cost: Distance,
    pub path: Vec<NodeId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub source: NodeId,
    pub destination: NodeId,
    pub summary: Summary,
    /// The shortest path using the edge weights.
    pub weighted: Route,
    /// The shortest path with every edge weighing 1.
    pub unweighted: Route,
    /// Every min-hop path with its weighted cost, cheapest first.
    pub candidates: Vec<Candidate>,
    /// The cheapest min-hop path. Among equally cheap paths the lexicographically smallest
    /// one is selected.
    pub cheapest: Candidate,
}

impl Report {
    /// Runs the full analysis between `source` and `destination`.
    ///
    /// # Examples
    ///
    /// ```
    /// use topopath::input::EdgeList;
    /// use topopath::report::Report;
    ///
    /// let edges = EdgeList::parse("3 3\n1 2 5\n2 3 1\n1 3 10\n").unwrap();
    /// let report = Report::build(&edges, 1, 3).unwrap();
    ///
    /// assert_eq!(report.weighted.path, vec![1, 2, 3]);
    /// assert_eq!(report.unweighted.path, vec![1, 3]);
    /// assert_eq!(report.cheapest.cost, 10);
    /// ```
    #[tracing::instrument(level = "debug", skip(edges))]
    pub fn build(edges: &EdgeList, source: NodeId, destination: NodeId) -> Result<Self> {
        let weighted_graph = edges.to_graph(WeightMode::Weighted)?;
        let unit_graph = edges.to_graph(WeightMode::Unit)?;

        let summary = Summary {
            nodes: weighted_graph.vertex_count(),
            edges: weighted_graph.edge_count(),
            declared_nodes: edges.declared_nodes(),
        };
        tracing::info!(nodes = summary.nodes, edges = summary.edges, "loaded topology");

        let weighted_paths = dijkstra(&weighted_graph, source)?;
        let weighted = Route::from_paths(&weighted_paths, destination)?;

        let unit_paths = dijkstra(&unit_graph, source)?;
        let unweighted = Route::from_paths(&unit_paths, destination)?;

        let mut candidates = enumerate_min_hop_paths(&unit_paths, &destination)?
            .into_iter()
            .map(|path| -> Result<Candidate> {
                Ok(Candidate {
                    cost: path_cost(&weighted_graph, &path)?,
                    path,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        candidates.sort();

        let cheapest = candidates
            .first()
            .cloned()
            .ok_or_else(|| Error::unreachable(destination))?;

        tracing::info!(
            distance = weighted.distance,
            min_hop = unweighted.hop,
            candidates = candidates.len(),
            cheapest = cheapest.cost,
            "analysis complete"
        );

        Ok(Self {
            source,
            destination,
            summary,
            weighted,
            unweighted,
            candidates,
            cheapest,
        })
    }
}

fn format_path(path: &[NodeId]) -> String {
    format!("[{}]", path.iter().join(", "))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (s, d) = (self.source, self.destination);

        writeln!(f, "Total no. of nodes connected = {}", self.summary.nodes)?;
        writeln!(
            f,
            "With weights {s} --> {d}: path = {}, hop = {}, distance = {}",
            format_path(&self.weighted.path),
            self.weighted.hop,
            self.weighted.distance
        )?;
        writeln!(
            f,
            "Without weights {s} --> {d}: path = {}, hop = {}, distance = {}",
            format_path(&self.unweighted.path),
            self.unweighted.hop,
            self.unweighted.distance
        )?;
        writeln!(
            f,
            "In total {} min-hop paths = [{}]",
            self.candidates.len(),
            self.candidates
                .iter()
                .map(|candidate| format_path(&candidate.path))
                .join(", ")
        )?;
        writeln!(
            f,
            "Cost of all min-hop paths = {{{}}}",
            self.candidates
                .iter()
                .map(|candidate| format!("{}: {}", candidate.cost, format_path(&candidate.path)))
                .join(", ")
        )?;
        write!(
            f,
            "Minimum cost among all min-hop paths = {}, path = {}",
            self.cheapest.cost,
            format_path(&self.cheapest.path)
        )
    }
}
