//! A module for working with weighted edges.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

/// The cost of traversing an edge. Weights are always strictly positive.
pub type Weight = u64;

/// The total weight of a path.
///
/// Wider than [`Weight`] so that summing any number of edge weights stays exact.
pub type Distance = u128;

/// A pair of vertices and the cost of the link between them. Edges don't have a direction,
/// despite the `source`-`target` nomenclature used.
///
/// Equality and hashing only consider the endpoints: two edges over the same pair of vertices
/// are the same edge whatever their weights.
#[derive(Clone, Debug, Eq)]
pub struct Edge<T> {
    source: T,
    target: T,
    weight: Weight,
}

impl<T> Edge<T> {
    /// Creates a new edge from two vertices and a weight.
    ///
    /// # Examples
    ///
    /// ```
    /// use topopath::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b", 3);
    /// assert_eq!(edge, Edge::new("b", "a", 3));
    /// ```
    pub fn new(source: T, target: T, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Creates a new edge with a weight of 1.
    pub fn unit(source: T, target: T) -> Self {
        Self::new(source, target, 1)
    }

    /// Returns the first vertex forming the edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use topopath::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b", 3);
    /// assert_eq!(edge.source(), &"a");
    /// ```
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Returns the second vertex forming the edge.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Returns the weight of the edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use topopath::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b", 3);
    /// assert_eq!(edge.weight(), 3);
    /// ```
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the same edge with its weight replaced by 1.
    pub fn to_unit(self) -> Self {
        Self { weight: 1, ..self }
    }
}

//
// Trait implementations
//

impl<T: PartialEq> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (&self.source, &self.target);
        let (c, d) = (&other.source, &other.target);

        a == d && b == c || a == c && b == d
    }
}

impl<T: Hash + Ord> Hash for Edge<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (a, b) = (&self.source, &self.target);

        // This ensures the hash is the same for (a, b) as it is for (b, a).
        match a.cmp(b) {
            Ordering::Greater => {
                b.hash(state);
                a.hash(state);
            }
            _ => {
                a.hash(state);
                b.hash(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let (source, target) = ("a", "b");

        assert_eq!(
            Edge::new(source, target, 2),
            Edge {
                source,
                target,
                weight: 2
            }
        )
    }

    #[test]
    fn unit() {
        assert_eq!(Edge::unit("a", "b").weight(), 1);
        assert_eq!(Edge::new("a", "b", 9).to_unit().weight(), 1);
    }

    //
    // Trait implementations
    //

    #[test]
    fn partial_eq() {
        let (a, b) = ("a", "b");

        assert_eq!(Edge::new(a, b, 1), Edge::new(b, a, 1));
        // The weight doesn't take part in the comparison.
        assert_eq!(Edge::new(a, b, 1), Edge::new(a, b, 5));
        assert_ne!(Edge::new(a, b, 1), Edge::new(a, "c", 1));
    }

    #[test]
    fn hash() {
        use std::collections::hash_map::DefaultHasher;

        let (a, b) = ("a", "b");

        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();

        let k1 = Edge::new(a, b, 4);
        let k2 = Edge::new(b, a, 7);

        k1.hash(&mut h1);
        k2.hash(&mut h2);

        // Verify k1 == k2 => hash(k1) == hash(k2).
        assert_eq!(h1.finish(), h2.finish());
    }
}
