use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::hash::Hash;
use hashbrown::HashMap;

use crate::utils::error::{Error, Result};
use super::changeset::Changeset;

/// Anything that can name a vertex.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> NodeId for T {}

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    fn new(ix: usize) -> Self {
        NodeIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge<N> {
    pub from: N,
    pub to: N,
    pub weight: f64,
}

impl<N> Edge<N> {
    pub fn new(from: N, to: N, weight: f64) -> Self {
        Edge { from, to, weight }
    }
}

#[derive(Clone, Debug)]
struct Node<N> {
    id: N,
    present: bool,
    outgoings: BTreeMap<NodeIndex, f64>,
    incomings: BTreeSet<NodeIndex>,
}

impl<N> Node<N> {
    fn new(id: N) -> Self {
        Node { id, present: true, outgoings: BTreeMap::new(), incomings: BTreeSet::new() }
    }
}

/// A directed weighted graph with at most one edge per ordered node pair.
///
/// Every id ever inserted keeps its slot and index, even after removal, so
/// adjacency iterates in index order no matter how often edges come and go.
#[derive(Clone, Debug)]
pub struct Network<N> {
    nodes: Vec<Node<N>>,
    indices: HashMap<N, NodeIndex>,
    edge_count: usize,
}

impl<N> Default for Network<N> {
    fn default() -> Self {
        Network { nodes: vec![], indices: HashMap::new(), edge_count: 0 }
    }
}

impl<N: NodeId> Network<N> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.present).count()
    }
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
    pub fn index_of(&self, id: &N) -> Option<NodeIndex> {
        self.indices.get(id)
            .cloned()
            .filter(|ix| self.nodes[ix.index()].present)
    }
    pub fn id(&self, ix: NodeIndex) -> &N {
        debug_assert!(ix.index() < self.nodes.len());
        &self.nodes[ix.index()].id
    }
    pub fn contains_node(&self, id: &N) -> bool {
        self.index_of(id).is_some()
    }
    pub fn add_node(&mut self, id: N) -> NodeIndex {
        match self.indices.get(&id) {
            Some(&ix) => {
                self.nodes[ix.index()].present = true;
                ix
            }
            None => {
                let ix = NodeIndex::new(self.nodes.len());
                self.indices.insert(id.clone(), ix);
                self.nodes.push(Node::new(id));
                ix
            }
        }
    }
    pub fn add_edges(&mut self, edges: Vec<(N, N, f64)>) -> Result<()> {
        for (from, to, weight) in edges {
            self.set_edge(from, to, weight)?;
        }
        Ok(())
    }
    /// Inserts or overwrites the edge, creating missing endpoints.
    pub fn set_edge(&mut self, from: N, to: N, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::invalid_weight(&from, &to, weight));
        }
        let u = self.add_node(from);
        let v = self.add_node(to);
        self.link(u, v, weight);
        Ok(())
    }
    pub fn edge_weight(&self, from: &N, to: &N) -> Option<f64> {
        let u = self.index_of(from)?;
        let v = self.index_of(to)?;
        self.weight_between(u, v)
    }
    pub fn contains_edge(&self, from: &N, to: &N) -> bool {
        self.edge_weight(from, to).is_some()
    }
    pub fn remove_edge(&mut self, from: &N, to: &N) -> Option<Edge<N>> {
        let u = self.index_of(from)?;
        let v = self.index_of(to)?;
        self.unlink(u, v)
            .map(|weight| Edge::new(from.clone(), to.clone(), weight))
    }
    /// Drops the node together with its incident edges. The returned
    /// changeset holds exactly what went away.
    pub fn remove_node(&mut self, id: &N) -> Changeset<N> {
        let mut changeset = Changeset::new();
        let ix = match self.index_of(id) {
            Some(ix) => ix,
            None => return changeset,
        };
        let outs: Vec<_> = self.nodes[ix.index()].outgoings.keys().cloned().collect();
        let ins: Vec<_> = self.nodes[ix.index()].incomings.iter().cloned().collect();
        for v in outs {
            if let Some(weight) = self.unlink(ix, v) {
                changeset.record_edge(Edge::new(id.clone(), self.id(v).clone(), weight));
            }
        }
        for u in ins {
            if let Some(weight) = self.unlink(u, ix) {
                changeset.record_edge(Edge::new(self.id(u).clone(), id.clone(), weight));
            }
        }
        self.nodes[ix.index()].present = false;
        changeset.record_node(id.clone());
        changeset
    }
    /// Puts back everything recorded in the changeset with its stored weight.
    pub fn restore(&mut self, changeset: Changeset<N>) {
        let (nodes, edges) = changeset.into_parts();
        for id in nodes {
            self.add_node(id);
        }
        for edge in edges {
            let u = self.add_node(edge.from);
            let v = self.add_node(edge.to);
            self.link(u, v, edge.weight);
        }
    }
    pub fn edges(&self) -> impl Iterator<Item=Edge<N>> + '_ {
        self.nodes.iter()
            .filter(|node| node.present)
            .flat_map(move |node| node.outgoings.iter()
                .map(move |(&v, &weight)| Edge::new(node.id.clone(), self.id(v).clone(), weight)))
    }
    pub fn successors(&self, id: &N) -> Vec<N> {
        match self.index_of(id) {
            Some(ix) => self.outgoings(ix).map(|(v, _)| self.id(v).clone()).collect(),
            None => vec![],
        }
    }
    pub(crate) fn outgoings(&self, ix: NodeIndex)
        -> impl Iterator<Item=(NodeIndex, f64)> + '_ {
        debug_assert!(ix.index() < self.nodes.len());
        self.nodes[ix.index()].outgoings.iter().map(|(&v, &w)| (v, w))
    }
    pub(crate) fn weight_between(&self, u: NodeIndex, v: NodeIndex) -> Option<f64> {
        self.nodes[u.index()].outgoings.get(&v).cloned()
    }
    fn link(&mut self, u: NodeIndex, v: NodeIndex, weight: f64) {
        if self.nodes[u.index()].outgoings.insert(v, weight).is_none() {
            self.edge_count += 1;
        }
        self.nodes[v.index()].incomings.insert(u);
    }
    fn unlink(&mut self, u: NodeIndex, v: NodeIndex) -> Option<f64> {
        let weight = self.nodes[u.index()].outgoings.remove(&v)?;
        self.nodes[v.index()].incomings.remove(&u);
        self.edge_count -= 1;
        Some(weight)
    }
}
