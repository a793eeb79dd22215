use crate::network::NodeId;
use crate::utils::error::{Error, Result};

/// Maps `(from, to, stored weight)` to the weight a search should use.
pub type WeightFn<'a, N> = Box<dyn Fn(&N, &N, f64) -> f64 + 'a>;
/// Decides whether a search may follow the edge `(from, to)`.
pub type EdgeFn<'a, N> = Box<dyn Fn(&N, &N) -> bool + 'a>;

/// Caller hooks threaded through every shortest path search.
///
/// Without hooks the stored edge weight is used and every edge is followed.
pub struct Strategy<'a, N> {
    weight: Option<WeightFn<'a, N>>,
    edges: Option<EdgeFn<'a, N>>,
}

impl<'a, N> Default for Strategy<'a, N> {
    fn default() -> Self {
        Strategy { weight: None, edges: None }
    }
}

impl<'a, N: NodeId> Strategy<'a, N> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_weight<F>(mut self, weight: F) -> Self
        where F: Fn(&N, &N, f64) -> f64 + 'a {
        self.weight = Some(Box::new(weight));
        self
    }
    pub fn with_edges<F>(mut self, edges: F) -> Self
        where F: Fn(&N, &N) -> bool + 'a {
        self.edges = Some(Box::new(edges));
        self
    }
    /// Hooked weights must stay finite and non-negative.
    pub fn weight(&self, from: &N, to: &N, stored: f64) -> Result<f64> {
        let weight = match &self.weight {
            Some(weight) => weight(from, to, stored),
            None => stored,
        };
        if weight.is_finite() && weight >= 0.0 {
            Ok(weight)
        } else {
            Err(Error::invalid_weight(from, to, weight))
        }
    }
    pub fn follows(&self, from: &N, to: &N) -> bool {
        self.edges.as_ref().map_or(true, |edges| edges(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn it_defaults_to_stored_weight() {
        let strategy = Strategy::<u32>::new();
        assert_eq!(strategy.weight(&1, &2, 4.5).unwrap(), 4.5);
        assert!(strategy.follows(&1, &2));
    }
    #[test]
    fn it_applies_hooks() {
        let strategy = Strategy::<u32>::new()
            .with_weight(|_, _, stored| stored * 2.0)
            .with_edges(|from, to| from < to);
        assert_eq!(strategy.weight(&1, &2, 4.5).unwrap(), 9.0);
        assert!(strategy.follows(&1, &2));
        assert!(!strategy.follows(&2, &1));
    }
    #[test]
    fn it_rejects_negative_hooked_weight() {
        let strategy = Strategy::<u32>::new().with_weight(|_, _, stored| -stored);
        assert!(strategy.weight(&1, &2, 1.0).is_err());
    }
}
