//! A module for working with weighted graphs.

use std::{
    collections::{btree_map::Entry, BTreeMap},
    fmt::Debug,
    hash::Hash,
};

use nalgebra::DMatrix;

use crate::{
    edge::{Edge, Weight},
    error::{Error, Result},
};

/// A vertex of the graph and its weighted adjacency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    id: T,
    /// Neighbour to edge weight. The adjacency of the graph is symmetric: if `a` lists `b` with
    /// weight `w`, `b` lists `a` with weight `w`.
    adjacency: BTreeMap<T, Weight>,
}

impl<T: Copy + Ord> Node<T> {
    fn new(id: T) -> Self {
        Self {
            id,
            adjacency: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> T {
        self.id
    }

    /// Returns the neighbours of this node with the weight of the connecting edge, in ascending
    /// order of id.
    pub fn neighbours(&self) -> impl Iterator<Item = (T, Weight)> + '_ {
        self.adjacency.iter().map(|(id, weight)| (*id, *weight))
    }

    /// Returns the weight of the edge to `neighbour`, if there is one.
    pub fn weight(&self, neighbour: &T) -> Option<Weight> {
        self.adjacency.get(neighbour).copied()
    }
}

/// An undirected, weighted graph.
#[derive(Clone, Debug)]
pub struct Graph<T> {
    /// The nodes in the graph, keyed by id.
    ///
    /// The sorted collection gives every traversal a stable order, which keeps the results of
    /// the path computations reproducible.
    nodes: BTreeMap<T, Node<T>>,
    /// A mapping of vertices to their indices to be used when constructing the matrices
    /// representing the graph.
    index: Option<BTreeMap<T, usize>>,
    /// Cache the weight matrix when possible.
    weight_matrix: Option<DMatrix<f64>>,
}

impl<T> Default for Graph<T>
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T>
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    /// Creates an empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use topopath::graph::Graph;
    ///
    /// let graph: Graph<u64> = Graph::new();
    /// ```
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            index: None,
            weight_matrix: None,
        }
    }

    /// Inserts a node without any edges. Returns `false` and leaves the existing node untouched
    /// if the id is already present.
    pub fn add_node(&mut self, id: T) -> bool {
        match self.nodes.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(Node::new(id));
                self.clear_cache();
                true
            }
        }
    }

    /// Inserts an edge between `a` and `b`, creating either endpoint if it doesn't exist yet.
    ///
    /// Returns whether the edge is new; inserting an existing edge overwrites its weight. A zero
    /// weight is rejected and leaves the graph unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use topopath::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    ///
    /// assert!(graph.add_edge(1, 2, 5).unwrap());
    /// assert_eq!(graph.weight(&2, &1), Some(5));
    /// assert!(graph.add_edge(1, 3, 0).is_err());
    /// ```
    pub fn add_edge(&mut self, a: T, b: T, weight: Weight) -> Result<bool> {
        if weight == 0 {
            return Err(Error::invalid_weight(a, b));
        }

        self.add_node(a);
        self.add_node(b);

        // Both endpoints exist at this point.
        let is_new = self
            .nodes
            .get_mut(&a)
            .map(|node| node.adjacency.insert(b, weight).is_none())
            .unwrap_or_default();
        if let Some(node) = self.nodes.get_mut(&b) {
            node.adjacency.insert(a, weight);
        }

        // The matrices can't be patched reliably from a single connection.
        self.clear_cache();

        Ok(is_new)
    }

    /// Inserts an edge into the graph, see [`Graph::add_edge`].
    pub fn insert(&mut self, edge: Edge<T>) -> Result<bool> {
        self.add_edge(*edge.source(), *edge.target(), edge.weight())
    }

    /// Returns the node with the given id.
    pub fn node(&self, id: &T) -> Result<&Node<T>> {
        self.nodes.get(id).ok_or_else(|| Error::unknown_node(id))
    }

    pub fn contains_node(&self, id: &T) -> bool {
        self.nodes.contains_key(id)
    }

    /// Returns the weight of the edge between `a` and `b`, if they are connected.
    pub fn weight(&self, a: &T, b: &T) -> Option<Weight> {
        self.nodes.get(a).and_then(|node| node.weight(b))
    }

    /// Returns the neighbours of `id` along with the weight of each connecting edge.
    pub fn neighbours(&self, id: &T) -> Result<impl Iterator<Item = (T, Weight)> + '_> {
        Ok(self.node(id)?.neighbours())
    }

    /// Returns the nodes in ascending order of id.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.values()
    }

    /// Returns the vertex count of the graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use topopath::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge("a", "b", 1).unwrap();
    ///
    /// assert_eq!(graph.vertex_count(), 2);
    /// ```
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the edge count of the graph.
    pub fn edge_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|(id, node)| node.adjacency.range(*id..).count())
            .sum()
    }

    /// Returns every edge once, ordered by `(source, target)` with `source <= target`.
    pub fn edges(&self) -> Vec<Edge<T>> {
        self.nodes
            .iter()
            .flat_map(|(id, node)| {
                node.adjacency
                    .range(*id..)
                    .map(move |(neighbour, weight)| Edge::new(*id, *neighbour, *weight))
            })
            .collect()
    }

    /// Returns a distinct graph with the same edges, every weight forced to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use topopath::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge(1, 2, 5).unwrap();
    ///
    /// let unit = graph.to_unit_weight();
    /// assert_eq!(unit.weight(&1, &2), Some(1));
    /// assert_eq!(graph.weight(&1, &2), Some(5));
    /// ```
    pub fn to_unit_weight(&self) -> Self {
        let nodes = self
            .nodes
            .iter()
            .map(|(id, node)| {
                let adjacency = node.adjacency.keys().map(|n| (*n, 1)).collect();
                (*id, Node { id: *id, adjacency })
            })
            .collect();

        Self {
            nodes,
            index: None,
            weight_matrix: None,
        }
    }

    /// Returns whether every edge in the graph has a weight of 1.
    pub fn is_unit_weight(&self) -> bool {
        self.nodes
            .values()
            .all(|node| node.adjacency.values().all(|weight| *weight == 1))
    }

    /// Returns the mapping of vertices to matrix indices, sorted by `T`'s implementation of
    /// `Ord`.
    pub fn index(&mut self) -> BTreeMap<T, usize> {
        if self.index.is_none() {
            self.generate_index();
        }

        self.index.clone().unwrap_or_default()
    }

    /// Constructs the weight matrix for this graph.
    ///
    /// Adjacent vertices hold the weight of their edge, the diagonal is zero and every other
    /// entry is infinite. As the graph is undirected, the matrix is symmetric.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use topopath::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge("a", "b", 3).unwrap();
    /// graph.add_node("c");
    ///
    /// let inf = f64::INFINITY;
    /// assert_eq!(
    ///     graph.weight_matrix(),
    ///     dmatrix![0.0, 3.0, inf;
    ///              3.0, 0.0, inf;
    ///              inf, inf, 0.0]
    /// );
    /// ```
    pub fn weight_matrix(&mut self) -> DMatrix<f64> {
        // Check the cache.
        if let Some(matrix) = self.weight_matrix.clone() {
            return matrix;
        }

        let index = self.index();
        let n = index.len();
        let mut matrix = DMatrix::<f64>::from_element(n, n, f64::INFINITY);
        matrix.fill_diagonal(0.0);

        for (id, node) in &self.nodes {
            let i = index[id];
            for (neighbour, weight) in &node.adjacency {
                // Self-loops never shorten a path.
                if neighbour != id {
                    matrix[(i, index[neighbour])] = *weight as f64;
                }
            }
        }

        // Cache the matrix.
        self.weight_matrix = Some(matrix.clone());

        matrix
    }

    /// Computes the all-pairs shortest distances (Floyd–Warshall over the weight matrix).
    ///
    /// Unreachable pairs stay infinite. Rows and columns follow [`Graph::index`].
    pub fn distance_matrix(&mut self) -> DMatrix<f64> {
        let mut matrix = self.weight_matrix();
        let n = matrix.nrows();

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let through_k = matrix[(i, k)] + matrix[(k, j)];
                    if through_k < matrix[(i, j)] {
                        matrix[(i, j)] = through_k;
                    }
                }
            }
        }

        matrix
    }

    //
    // Private
    //

    /// Clears the computed state.
    ///
    /// This should be called every time the graph is mutated since the cached state won't
    /// correspond to the new graph.
    fn clear_cache(&mut self) {
        self.index = None;
        self.weight_matrix = None;
    }

    /// Constructs and stores an index of vertices.
    fn generate_index(&mut self) {
        let index: BTreeMap<T, usize> = self
            .nodes
            .keys()
            .enumerate()
            .map(|(i, &vertex)| (vertex, i))
            .collect();

        self.index = Some(index);
    }
}
