use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use itertools::Itertools;

use crate::network::{Edge, NodeId};

/// A walk through the network as an ordered edge sequence.
///
/// Equality and hashing are structural: two paths are the same when their
/// `(from, to)` sequences match, whatever weights they carry.
#[derive(Clone, Debug)]
pub struct Path<N> {
    origin: N,
    edges: Vec<Edge<N>>,
    cost: f64,
}

impl<N: NodeId> Path<N> {
    /// Builds a path starting at `origin`; the cost is the sum of the edge weights.
    pub fn new(origin: N, edges: Vec<Edge<N>>) -> Self {
        debug_assert!(edges.first().map_or(true, |e| e.from == origin));
        debug_assert!(edges.windows(2).all(|w| w[0].to == w[1].from));
        let cost = edges.iter().fold(0.0, |cost, e| cost + e.weight);
        Path { origin, edges, cost }
    }
    /// The zero-edge path sitting on a single node.
    pub fn trivial(origin: N) -> Self {
        Path::new(origin, vec![])
    }
    pub fn cost(&self) -> f64 {
        self.cost
    }
    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    pub fn source(&self) -> &N {
        &self.origin
    }
    pub fn target(&self) -> &N {
        self.edges.last().map_or(&self.origin, |e| &e.to)
    }
    pub fn nodes(&self) -> Vec<N> {
        iter::once(self.origin.clone())
            .chain(self.edges.iter().map(|e| e.to.clone()))
            .collect()
    }
    /// The first `i` edges. An index past the end yields the whole path.
    pub fn prefix(&self, i: usize) -> Self {
        let i = i.min(self.edges.len());
        Path::new(self.origin.clone(), self.edges[..i].to_vec())
    }
    /// Glues `tail` onto the end of this path.
    pub fn concat(&self, tail: &Path<N>) -> Self {
        debug_assert!(self.target() == tail.source());
        let edges = self.edges.iter()
            .chain(tail.edges.iter())
            .cloned()
            .collect();
        Path::new(self.origin.clone(), edges)
    }
    pub fn structurally_eq(&self, other: &Path<N>) -> bool {
        self.edges.len() == other.edges.len()
            && self.edges.iter().zip(other.edges.iter())
                .all(|(a, b)| a.from == b.from && a.to == b.to)
    }
}

impl<N: NodeId> PartialEq for Path<N> {
    fn eq(&self, other: &Self) -> bool {
        self.structurally_eq(other)
    }
}

impl<N: NodeId> Eq for Path<N> {}

impl<N: NodeId> Hash for Path<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.edges.len().hash(state);
        for edge in self.edges.iter() {
            edge.from.hash(state);
            edge.to.hash(state);
        }
    }
}

impl<N: NodeId + fmt::Display> fmt::Display for Path<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.nodes().iter().join(" -> "), self.cost)
    }
}
