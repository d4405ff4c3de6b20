//! Weighted TextRank iteration
//!
//! Every node starts at 1.0. Each pass computes
//! `S(i) = (1 - d) + d * sum_j S(j) * w(j, i) / W(j)`, where `W(j)` is the
//! total edge weight of neighbor `j`. Passes repeat until no score moves by
//! more than the threshold or the iteration cap is hit. Scores are not
//! normalized; an isolated node settles at `1 - d`.

use super::RankResult;
use crate::config::RankerConfig;
use crate::graph::csr::CsrGraph;

/// Damped weighted score propagation over a co-occurrence graph
#[derive(Debug, Clone)]
pub struct WeightedTextRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    pub max_iterations: usize,
    /// Per-node absolute change that counts as converged
    pub threshold: f64,
    /// Score every node starts from
    pub initial_score: f64,
}

impl Default for WeightedTextRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-4,
            initial_score: 1.0,
        }
    }
}

impl WeightedTextRank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take damping, iteration cap and threshold from a ranker config
    pub fn from_config(config: &RankerConfig) -> Self {
        Self::new()
            .with_damping(config.damping)
            .with_max_iterations(config.max_iterations)
            .with_threshold(config.convergence_threshold)
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run the iteration to convergence or the iteration cap
    ///
    /// Returns the scores even when convergence wasn't reached, with
    /// `converged = false`.
    pub fn run(&self, graph: &CsrGraph) -> RankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return RankResult::new(vec![], 0, 0.0, true);
        }

        let mut scores = vec![self.initial_score; n];
        let mut new_scores = vec![0.0; n];
        let base = 1.0 - self.damping;

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            new_scores.fill(base);

            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);
                if total_weight <= 0.0 {
                    continue;
                }
                for (neighbor, weight) in graph.neighbors(node as u32) {
                    new_scores[neighbor as usize] +=
                        self.damping * node_score * weight / total_weight;
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            std::mem::swap(&mut scores, &mut new_scores);
        }

        RankResult::new(scores, iterations, delta, delta <= self.threshold)
    }
}
