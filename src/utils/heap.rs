use std::cmp::Reverse;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;

pub type MyMinHeap<I> = PriorityQueue<I, Priority>;

/// Smaller cost pops first; among equal costs the smaller sequence number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority (Reverse<(OrderedFloat<f64>, u64)>);

impl Priority {
    pub fn new(cost: f64, seq: u64) -> Self {
        Self (Reverse((OrderedFloat(cost), seq)))
    }
    pub fn cost(&self) -> f64 {
        ((self.0).0).0.into_inner()
    }
}

impl From<f64> for Priority {
    fn from(float: f64) -> Self {
        Self::new(float, 0)
    }
}

impl From<Priority> for f64 {
    fn from(priority: Priority) -> f64 {
        priority.cost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn it_pops_minimum_first() {
        let mut heap = MyMinHeap::new();
        heap.push("far", 7.0.into());
        heap.push("near", 1.5.into());
        heap.push("mid", 3.0.into());
        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|(item, prio)| (item, f64::from(prio)))
            .collect();
        assert_eq!(order, vec![("near", 1.5), ("mid", 3.0), ("far", 7.0)]);
    }
    #[test]
    fn it_breaks_ties_by_sequence() {
        let mut heap = MyMinHeap::new();
        heap.push("second", Priority::new(2.0, 1));
        heap.push("third", Priority::new(2.0, 2));
        heap.push("first", Priority::new(2.0, 0));
        assert_eq!(heap.pop().map(|p| p.0), Some("first"));
        assert_eq!(heap.pop().map(|p| p.0), Some("second"));
        assert_eq!(heap.pop().map(|p| p.0), Some("third"));
    }
}
