use super::topology::Edge;

/// Nodes and edges taken out of a network, kept so they can be put back.
#[derive(Clone, Debug)]
pub struct Changeset<N> {
    nodes: Vec<N>,
    edges: Vec<Edge<N>>,
}

impl<N> Default for Changeset<N> {
    fn default() -> Self {
        Changeset { nodes: vec![], edges: vec![] }
    }
}

impl<N> Changeset<N> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn record_node(&mut self, id: N) {
        self.nodes.push(id);
    }
    pub fn record_edge(&mut self, edge: Edge<N>) {
        self.edges.push(edge);
    }
    pub fn extend(&mut self, other: Changeset<N>) {
        self.nodes.extend(other.nodes);
        self.edges.extend(other.edges);
    }
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }
    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
    pub fn into_parts(self) -> (Vec<N>, Vec<Edge<N>>) {
        (self.nodes, self.edges)
    }
}
