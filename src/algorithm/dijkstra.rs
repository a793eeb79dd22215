use std::collections::HashMap;
use std::f64::INFINITY as INF;

use crate::component::Path;
use crate::network::{Edge, Network, NodeId, NodeIndex};
use crate::utils::error::{InputError, Result};
use crate::utils::heap::MyMinHeap;
use super::strategy::Strategy;

/// Single-source shortest distances over the current state of a network.
#[derive(Default)]
pub struct Dijkstra {
    root: Option<NodeIndex>,
    dist: HashMap<NodeIndex, f64>,
    pred: HashMap<NodeIndex, NodeIndex>,
}

impl Dijkstra {
    pub fn compute<N: NodeId>(&mut self, graph: &Network<N>, r: NodeIndex,
                              strategy: &Strategy<N>) -> Result<()> {
        self.root = Some(r);
        self.dist.clear();
        self.pred.clear();
        let mut heap = MyMinHeap::new();
        let mut seen = HashMap::new();

        seen.insert(r, 0.0);
        heap.push(r, 0.0.into());

        // settle nodes in order of distance from the root
        while let Some((v, rv_dist)) = heap.pop() {
            let rv_dist: f64 = rv_dist.into();
            if self.dist.contains_key(&v) { continue; }
            self.dist.insert(v, rv_dist);
            for (u, stored) in graph.outgoings(v) {
                let (from, to) = (graph.id(v), graph.id(u));
                if self.dist.contains_key(&u)
                    || !strategy.follows(from, to) { continue; }

                let ru_dist = rv_dist + strategy.weight(from, to, stored)?;
                if ru_dist >= *seen.get(&u).unwrap_or(&INF) { continue; }

                self.pred.insert(u, v);
                seen.insert(u, ru_dist);
                match heap.get(&u) {
                    Some(_) => { heap.change_priority(&u, ru_dist.into()); },
                    None    => { heap.push(u, ru_dist.into()); },
                }
            }
        }
        Ok(())
    }
    pub fn distance(&self, dst: NodeIndex) -> Option<f64> {
        self.dist.get(&dst).cloned()
    }
    /// Walks predecessors back from `dst`, weighing each edge the same way
    /// the search did. `None` when `dst` was never reached.
    pub fn shortest_path<N: NodeId>(&self, graph: &Network<N>, dst: NodeIndex,
                                    strategy: &Strategy<N>) -> Result<Option<Path<N>>> {
        let root = match self.root {
            Some(root) => root,
            None => return Ok(None),
        };
        let dist = match self.distance(dst) {
            Some(dist) => dist,
            None => return Ok(None),
        };
        let mut edges = vec![];
        let mut node = dst;
        while node != root {
            let &pred = self.pred.get(&node)
                .expect("Error when backtrace path");
            let stored = graph.weight_between(pred, node)
                .expect("Backtraced edge missing from network");
            let (from, to) = (graph.id(pred), graph.id(node));
            let weight = strategy.weight(from, to, stored)?;
            edges.push(Edge::new(from.clone(), to.clone(), weight));
            node = pred;
        }
        edges.reverse();
        let path = Path::new(graph.id(root).clone(), edges);
        debug_assert!((path.cost() - dist).abs() <= 1e-9 * dist.max(1.0));
        Ok(Some(path))
    }
}

/// Cheapest path from `source` to `target` on `graph` as it stands now.
///
/// An unreachable target is `Ok(None)`, not an error.
pub fn shortest_path<N: NodeId>(graph: &Network<N>, source: &N, target: &N,
                                strategy: &Strategy<N>) -> Result<Option<Path<N>>> {
    let src = graph.index_of(source)
        .ok_or_else(|| InputError::UnknownSource(format!("{:?}", source)))?;
    let dst = graph.index_of(target)
        .ok_or_else(|| InputError::UnknownTarget(format!("{:?}", target)))?;
    let mut dijkstra = Dijkstra::default();
    dijkstra.compute(graph, src, strategy)?;
    dijkstra.shortest_path(graph, dst, strategy)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::error::Error;

    fn network(edges: Vec<(u32, u32, f64)>) -> Network<u32> {
        let mut graph = Network::new();
        for n in 0..6 {
            graph.add_node(n);
        }
        graph.add_edges(edges).unwrap();
        graph
    }

    #[test]
    fn test_dijkstra_case1() {
        let graph = network(vec![
            (0, 1, 10.0), (1, 2, 20.0), (0, 2, 02.0), (1, 0, 10.0),
        ]);
        let path = shortest_path(&graph, &0, &2, &Strategy::<u32>::new()).unwrap().unwrap();
        assert_eq!(path.nodes(), vec![0, 2]);
        assert_eq!(path.cost(), 2.0);
        let path = shortest_path(&graph, &1, &2, &Strategy::<u32>::new()).unwrap().unwrap();
        assert_eq!(path.nodes(), vec![1, 0, 2]);
        assert_eq!(path.cost(), 12.0);
    }
    #[test]
    fn test_dijkstra_case2() {
        let graph = network(vec![
            (0, 1, 10.0), (1, 2, 20.0), (0, 2, 02.0), (1, 3, 10.0),
            (0, 3, 03.0), (3, 4, 03.0), (2, 1, 1.0),
        ]);
        let strategy = Strategy::<u32>::new();
        let path = |src, dst| shortest_path(&graph, &src, &dst, &strategy).unwrap()
            .map(|p| p.nodes());
        assert_eq!(path(0, 4), Some(vec![0, 3, 4]));
        assert_eq!(path(2, 4), Some(vec![2, 1, 3, 4]));
        assert_eq!(path(3, 3), Some(vec![3]));
        assert_eq!(path(0, 5), None);
        assert_eq!(path(4, 0), None);
    }
    #[test]
    fn test_dijkstra_with_hooks() {
        let graph = network(vec![
            (0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0),
        ]);
        let strategy = Strategy::<u32>::new().with_edges(|&from, &to| (from, to) != (1, 2));
        let path = shortest_path(&graph, &0, &2, &strategy).unwrap().unwrap();
        assert_eq!(path.nodes(), vec![0, 2]);

        let strategy = Strategy::<u32>::new().with_weight(|&from, _, stored| {
            if from == 0 { stored * 10.0 } else { stored }
        });
        let path = shortest_path(&graph, &0, &2, &strategy).unwrap().unwrap();
        assert_eq!(path.nodes(), vec![0, 1, 2]);
        assert_eq!(path.cost(), 11.0);
        assert_eq!(path.edges()[0].weight, 10.0);
    }
    #[test]
    fn test_dijkstra_unknown_nodes() {
        let graph = network(vec![(0, 1, 1.0)]);
        let err = shortest_path(&graph, &9, &1, &Strategy::<u32>::new()).unwrap_err();
        assert!(matches!(err, Error::Input(InputError::UnknownSource(_))));
        let err = shortest_path(&graph, &0, &9, &Strategy::<u32>::new()).unwrap_err();
        assert!(matches!(err, Error::Input(InputError::UnknownTarget(_))));
    }
}
