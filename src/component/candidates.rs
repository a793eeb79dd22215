use crate::network::NodeId;
use crate::utils::heap::{MyMinHeap, Priority};
use super::path::Path;

/// Paths discovered but not yet accepted, at most one per edge sequence.
///
/// Equal costs pop in insertion order so repeated runs agree.
pub struct Candidates<N: NodeId> {
    heap: MyMinHeap<Path<N>>,
    seq: u64,
}

impl<N: NodeId> Default for Candidates<N> {
    fn default() -> Self {
        Candidates { heap: MyMinHeap::new(), seq: 0 }
    }
}

impl<N: NodeId> Candidates<N> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    /// Returns false when a structurally equal path is already pooled.
    pub fn insert(&mut self, path: Path<N>) -> bool {
        if self.heap.get(&path).is_some() {
            return false;
        }
        let priority = Priority::new(path.cost(), self.seq);
        self.seq += 1;
        self.heap.push(path, priority);
        true
    }
    /// Takes the cheapest pooled path not already in `accepted`, discarding
    /// cheaper ones that are.
    pub fn pop_best_unseen(&mut self, accepted: &[Path<N>]) -> Option<Path<N>> {
        while let Some((path, _)) = self.heap.pop() {
            if !accepted.contains(&path) {
                return Some(path);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Edge;

    fn path(nodes: &[&'static str], weight: f64) -> Path<&'static str> {
        let edges = nodes.windows(2)
            .map(|w| Edge::new(w[0], w[1], weight))
            .collect();
        Path::new(nodes[0], edges)
    }

    #[test]
    fn it_pops_cheapest_first() {
        let mut pool = Candidates::new();
        pool.insert(path(&["A", "C", "D"], 3.0));
        pool.insert(path(&["A", "B", "D"], 1.0));
        pool.insert(path(&["A", "D"], 4.0));
        let order: Vec<_> = std::iter::from_fn(|| pool.pop_best_unseen(&[]))
            .map(|p| p.cost())
            .collect();
        assert_eq!(order, vec![2.0, 4.0, 6.0]);
    }
    #[test]
    fn it_ignores_structural_duplicates() {
        let mut pool = Candidates::new();
        assert!(pool.insert(path(&["A", "B", "D"], 1.0)));
        assert!(!pool.insert(path(&["A", "B", "D"], 0.5)));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.pop_best_unseen(&[]).map(|p| p.cost()), Some(2.0));
    }
    #[test]
    fn it_skips_accepted_paths() {
        let mut pool = Candidates::new();
        pool.insert(path(&["A", "B", "D"], 1.0));
        pool.insert(path(&["A", "C", "D"], 2.0));
        let accepted = vec![path(&["A", "B", "D"], 1.0)];
        let best = pool.pop_best_unseen(&accepted);
        assert_eq!(best, Some(path(&["A", "C", "D"], 2.0)));
        assert!(pool.is_empty());
        assert_eq!(pool.pop_best_unseen(&accepted), None);
    }
    #[test]
    fn it_breaks_cost_ties_by_insertion_order() {
        let mut pool = Candidates::new();
        pool.insert(path(&["A", "E", "D"], 1.0));
        pool.insert(path(&["A", "B", "D"], 1.0));
        pool.insert(path(&["A", "C", "D"], 1.0));
        let order: Vec<_> = std::iter::from_fn(|| pool.pop_best_unseen(&[]))
            .map(|p| p.nodes()[1])
            .collect();
        assert_eq!(order, vec!["E", "B", "C"]);
    }
}
