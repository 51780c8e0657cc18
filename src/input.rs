//! Parsing of the edge-list topology format.
//!
//! ```text
//! <node count> <link count>
//! <a> <b> <weight>
//! ...
//! ```
//!
//! The node count is informational, the node set is whatever ids appear in the edges. Blank
//! lines are skipped and line numbers in errors are 1-based.

use std::{collections::BTreeSet, fs, path::Path, str::FromStr};

use crate::{
    edge::Edge,
    error::{Error, Result},
    graph::Graph,
};

/// The vertex type of graphs read from an edge list.
pub type NodeId = u64;

/// How edge weights are taken from the edge list when building a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeightMode {
    /// Use the weight column.
    Weighted,
    /// Ignore the weight column, every edge weighs 1.
    Unit,
}

/// A parsed, validated edge list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeList {
    declared_nodes: usize,
    edges: Vec<Edge<NodeId>>,
}

impl EdgeList {
    /// Reads and parses an edge list file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read edge list");

        let input = String::from_utf8(bytes).map_err(|err| {
            let valid = &err.as_bytes()[..err.utf8_error().valid_up_to()];
            let line = valid.iter().filter(|&&byte| byte == b'\n').count() + 1;
            Error::malformed(line, "invalid UTF-8")
        })?;

        input.parse()
    }

    /// Parses an edge list.
    ///
    /// The whole input is validated before anything is returned, a malformed line never yields
    /// a partial edge list.
    ///
    /// # Examples
    ///
    /// ```
    /// use topopath::input::EdgeList;
    ///
    /// let edges = EdgeList::parse("3 3\n1 2 5\n2 3 1\n1 3 10\n").unwrap();
    /// assert_eq!(edges.edges().len(), 3);
    ///
    /// let err = EdgeList::parse("3 1\n1 2\n").unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "malformed input at line 2: expected 3 integers, found 2 tokens"
    /// );
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let Some((number, header)) = lines.next() else {
            return Err(Error::malformed(1, "missing `<node count> <link count>` header"));
        };
        let [declared_nodes, declared_links] = parse_integers::<2>(header, number)?;

        let mut edges = Vec::new();
        let mut last_line = number;

        while (edges.len() as u64) < declared_links {
            let Some((number, line)) = lines.next() else {
                return Err(Error::malformed(
                    last_line + 1,
                    format!(
                        "expected {declared_links} edges, found {}",
                        edges.len()
                    ),
                ));
            };

            let [a, b, weight] = parse_integers::<3>(line, number)?;
            if weight == 0 {
                return Err(Error::malformed(number, "edge weight must be positive"));
            }

            edges.push(Edge::new(a, b, weight));
            last_line = number;
        }

        let trailing = lines.count();
        if trailing > 0 {
            tracing::warn!(trailing, declared_links, "ignoring lines after the declared edges");
        }

        let declared_nodes = declared_nodes as usize;
        let seen: BTreeSet<NodeId> = edges
            .iter()
            .flat_map(|edge| [*edge.source(), *edge.target()])
            .collect();
        if seen.len() != declared_nodes {
            tracing::warn!(
                declared = declared_nodes,
                seen = seen.len(),
                "node count in the header doesn't match the edges"
            );
        }

        Ok(Self {
            declared_nodes,
            edges,
        })
    }

    /// The node count announced by the header.
    pub fn declared_nodes(&self) -> usize {
        self.declared_nodes
    }

    pub fn edges(&self) -> &[Edge<NodeId>] {
        &self.edges
    }

    /// Builds a graph from the edges. Repeated edges keep the last weight listed.
    ///
    /// # Examples
    ///
    /// ```
    /// use topopath::input::{EdgeList, WeightMode};
    ///
    /// let edges = EdgeList::parse("2 1\n1 2 5\n").unwrap();
    ///
    /// assert_eq!(edges.to_graph(WeightMode::Weighted).unwrap().weight(&1, &2), Some(5));
    /// assert_eq!(edges.to_graph(WeightMode::Unit).unwrap().weight(&1, &2), Some(1));
    /// ```
    pub fn to_graph(&self, mode: WeightMode) -> Result<Graph<NodeId>> {
        let mut graph = Graph::new();

        for edge in &self.edges {
            let edge = match mode {
                WeightMode::Weighted => edge.clone(),
                WeightMode::Unit => edge.clone().to_unit(),
            };
            graph.insert(edge)?;
        }

        tracing::debug!(
            ?mode,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built graph"
        );

        Ok(graph)
    }
}

impl FromStr for EdgeList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Parses a line made of exactly `N` non-negative integers.
fn parse_integers<const N: usize>(line: &str, number: usize) -> Result<[u64; N]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != N {
        return Err(Error::malformed(
            number,
            format!("expected {N} integers, found {} tokens", tokens.len()),
        ));
    }

    let values = tokens
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .map_err(|_| Error::malformed(number, format!("invalid integer `{token}`")))
        })
        .collect::<Result<Vec<u64>>>()?;

    values
        .try_into()
        .map_err(|_| Error::malformed(number, "unexpected token count"))
}
