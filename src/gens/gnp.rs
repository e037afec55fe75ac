use super::*;

/// `G(n,p)` graphs generate every possible edge in a graph with `n` nodes with probability `p`
/// independent from each other.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "{prob} is no probability");
        self.p = prob;
        self
    }

    /// Updates `p` such that the expected degree of a node is `deg`
    pub fn avg_deg(self, deg: f64) -> Self {
        let p = if self.n > 1 {
            deg / (self.n - 1) as f64
        } else {
            0.0
        };
        self.prob(p)
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    /// Edges are produced in ascending order
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Edge> {
        let n = self.n;
        let p = self.p;

        (0..n)
            .flat_map(|u| ((u + 1)..n).map(move |v| Edge(u, v)))
            .filter(|_| rng.random_bool(p))
            .collect()
    }
}
