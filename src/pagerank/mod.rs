//! Iterative graph ranking
//!
//! [`textrank::WeightedTextRank`] runs the damped, weight-proportional score
//! propagation used for keyword extraction and reports how it converged.

pub mod textrank;

/// Result of a ranking run
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Scores indexed by node ID
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Largest per-node change in the final iteration
    pub delta: f64,
    pub converged: bool,
}

impl RankResult {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Top `n` nodes by descending score
    ///
    /// The sort is stable over node IDs, so equal scores keep first-seen
    /// order.
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(n);
        indexed
    }

    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}
