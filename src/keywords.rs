//! Keyword ranking
//!
//! [`KeywordRanker`] links words that occur within a sliding window of the
//! flattened document, runs [`WeightedTextRank`] over the resulting graph and
//! returns the best-connected surface forms.
//!
//! Words are identified by surface form alone: the same spelling under two
//! different tags is one node. This is inherited behavior and is kept as is.

use crate::config::RankerConfig;
use crate::errors::{EventGraphError, Result};
use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::pagerank::textrank::WeightedTextRank;
use crate::types::{AnnotatedWord, KeywordScore};

/// Ranked keywords plus how the iteration ended
#[derive(Debug, Clone)]
pub struct RankedKeywords {
    pub keywords: Vec<KeywordScore>,
    pub iterations: usize,
    pub converged: bool,
    pub num_nodes: usize,
    pub num_edges: usize,
}

/// Graph-centrality keyword extractor
#[derive(Debug, Clone, Default)]
pub struct KeywordRanker {
    config: RankerConfig,
}

impl KeywordRanker {
    /// Create a ranker, rejecting invalid settings
    pub fn new(config: RankerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Build the co-occurrence graph the ranker would iterate over
    pub fn build_graph(&self, words: &[AnnotatedWord]) -> GraphBuilder {
        GraphBuilder::from_words(words, self.config.window_size)
    }

    /// Top `top_n` words by centrality, best first
    ///
    /// Equal scores keep first-seen order. An empty input yields an empty
    /// list; `top_n == 0` is a configuration error.
    pub fn rank(&self, words: &[AnnotatedWord], top_n: usize) -> Result<Vec<KeywordScore>> {
        Ok(self.rank_with_stats(words, top_n)?.keywords)
    }

    /// Same as [`rank`](Self::rank), also reporting convergence
    pub fn rank_with_stats(&self, words: &[AnnotatedWord], top_n: usize) -> Result<RankedKeywords> {
        if top_n == 0 {
            return Err(EventGraphError::invalid("top_n", "must be greater than zero"));
        }

        Ok(self.ranked(words, top_n))
    }

    /// Ranking with `top_n` already known to be positive
    pub(crate) fn ranked(&self, words: &[AnnotatedWord], top_n: usize) -> RankedKeywords {
        let builder = self.build_graph(words);
        if builder.is_empty() {
            return RankedKeywords {
                keywords: Vec::new(),
                iterations: 0,
                converged: true,
                num_nodes: 0,
                num_edges: 0,
            };
        }

        let graph = CsrGraph::from_builder(&builder);
        let result = WeightedTextRank::from_config(&self.config).run(&graph);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = graph.num_nodes,
            edges = graph.num_edges(),
            iterations = result.iterations,
            converged = result.converged,
            "keyword ranking finished"
        );

        let keywords = result
            .top_n(top_n)
            .into_iter()
            .map(|(node, score)| KeywordScore::new(graph.label(node), score))
            .collect();

        RankedKeywords {
            keywords,
            iterations: result.iterations,
            converged: result.converged,
            num_nodes: graph.num_nodes,
            num_edges: graph.num_edges(),
        }
    }
}
