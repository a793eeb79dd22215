use hashbrown::HashMap;
use log::{debug, trace};

use crate::component::{Candidates, Path};
use crate::network::{Changeset, Network, NodeId};
use crate::utils::config::Config;
use crate::utils::error::{InputError, Result};
use super::dijkstra::shortest_path;
use super::strategy::Strategy;

/// Up to `k` loopless paths from `source` to `target`, cheapest first.
///
/// Fewer than `k` paths (or none) come back when the network runs out of
/// distinct routes. The caller's network is never touched; the search works
/// on a private copy.
pub fn k_shortest_paths<N: NodeId>(network: &Network<N>, source: &N, target: &N,
                                   k: usize, strategy: &Strategy<N>) -> Result<Vec<Path<N>>> {
    if k == 0 {
        return Err(InputError::ZeroK.into());
    }
    if !network.contains_node(source) {
        return Err(InputError::UnknownSource(format!("{:?}", source)).into());
    }
    if !network.contains_node(target) {
        return Err(InputError::UnknownTarget(format!("{:?}", target)).into());
    }

    let mut graph = network.clone();
    let shortest = match shortest_path(&graph, source, target, strategy)? {
        Some(path) => path,
        None => {
            debug!("{:?} is unreachable from {:?}", target, source);
            return Ok(vec![]);
        }
    };
    let mut list_a = vec![shortest];
    let mut heap_b = Candidates::new();

    for kth in 1..k {
        let prev_path = &list_a[kth - 1];
        for i in 0..prev_path.len() {
            let spur_node = &prev_path.edges()[i].from;
            let root_path = prev_path.prefix(i);
            let mut removed = Changeset::new();

            // For example, if search for 4th shortest path with spur-node (2)
            // We should ignore edges (2)───(3), (2)───(5) and node (1)
            //
            // (1)───(2)───(3)───(4)  1st
            //  │     └────(5)───(4)  2nd
            //  └────(7)───(8)───(4)  3rd

            for path in list_a.iter().filter(|path| path.len() > i && path.prefix(i) == root_path) {
                let edge = &path.edges()[i];
                if let Some(edge) = graph.remove_edge(&edge.from, &edge.to) {
                    removed.record_edge(edge);
                }
            }
            for edge in root_path.edges().iter().filter(|edge| edge.from != *spur_node) {
                removed.extend(graph.remove_node(&edge.from));
            }

            let spur_path = shortest_path(&graph, spur_node, target, strategy);
            trace!("spur {:?} at #{} with {} edges removed: found {}", spur_node, i,
                   removed.edges().len(), matches!(spur_path, Ok(Some(_))));
            graph.restore(removed);

            if let Some(spur_path) = spur_path? {
                heap_b.insert(root_path.concat(&spur_path));
            }
        }
        match heap_b.pop_best_unseen(&list_a) {
            Some(path) => {
                debug!("accepted path #{} from {:?} to {:?} with cost {}",
                       kth, source, target, path.cost());
                list_a.push(path);
            }
            None => {
                debug!("only {} paths exist from {:?} to {:?}", kth, source, target);
                break;
            }
        }
    }
    Ok(list_a)
}

/// Caches the k shortest paths of every pair asked for so far.
pub struct Yens<N: NodeId> {
    network: Network<N>,
    k: usize,
    path: HashMap<(N, N), Vec<Path<N>>>,
}

impl<N: NodeId> Yens<N> {
    pub fn new(network: Network<N>, k: usize) -> Self {
        Yens { network, k, path: HashMap::new() }
    }
    pub fn from_config(network: Network<N>, config: &Config) -> Self {
        Self::new(network, config.k)
    }
    pub fn network(&self) -> &Network<N> {
        &self.network
    }
    pub fn compute_pair(&mut self, src: &N, dst: &N) -> Result<&[Path<N>]> {
        let ends = (src.clone(), dst.clone());
        if !self.path.contains_key(&ends) {
            let paths = k_shortest_paths(&self.network, src, dst, self.k, &Strategy::new())?;
            self.path.insert(ends.clone(), paths);
        }
        Ok(self.k_shortest_paths(&ends.0, &ends.1))
    }
    pub fn kth_shortest_path(&self, src: &N, dst: &N, kth: usize) -> Option<&Path<N>> {
        self.path.get(&(src.clone(), dst.clone()))
            .and_then(|paths| paths.get(kth))
    }
    pub fn count_shortest_paths(&self, src: &N, dst: &N) -> usize {
        self.path.get(&(src.clone(), dst.clone()))
            .map(|paths| paths.len())
            .unwrap_or(0)
    }
    pub fn k_shortest_paths(&self, src: &N, dst: &N) -> &[Path<N>] {
        self.path.get(&(src.clone(), dst.clone()))
            .map(|paths| paths.as_slice())
            .unwrap_or(&[])
    }
}
