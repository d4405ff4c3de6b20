//! Event aggregation pipeline
//!
//! [`EventAggregator`] turns one parsed document into the ordered event list
//! a renderer draws. Steps run in a fixed order and their events are
//! concatenated without deduplication:
//!
//! 1. keywords, each linked to the keyword category node
//! 2. keyword-anchored subject-verb-object triples
//! 3. the most frequent nouns, verbs and adjectives
//! 4. the most frequent named entities, linked to their category
//! 5. co-occurrence pairs among those entities
//!
//! Steps 2, 4 and 5 only see sentences that contain an entity; a document
//! without any still yields keyword and frequency events. Renderers assign
//! node ids by first appearance, so this order is part of the output.

use std::sync::Arc;

use rayon::prelude::*;

use crate::config::EventGraphConfig;
use crate::cooccurrence::{Cooccurrence, CooccurrenceAggregator};
use crate::errors::Result;
use crate::keywords::KeywordRanker;
use crate::nlp::normalize::WordFilter;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Document, EntityLabel, Event, EventSource, KeywordScore};

use super::digest::DocumentDigest;
use super::frequency::FrequencyCounter;
use super::triples::TripleFilter;

pub const STAGE_KEYWORDS: &str = "keywords";
pub const STAGE_TRIPLES: &str = "triples";
pub const STAGE_FREQUENCY: &str = "frequency";
pub const STAGE_ENTITIES: &str = "entities";
pub const STAGE_COOCCURRENCE: &str = "cooccurrence";

/// Enter a tracing span for an aggregation step (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Record how many events a step produced
macro_rules! trace_events {
    ($name:expr, $count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(stage = $name, events = $count, "stage finished");
    };
}

/// Everything the pipeline computed for one document
#[derive(Debug, Clone, Default)]
pub struct EventGraph {
    pub keywords: Vec<KeywordScore>,
    pub frequent_words: Vec<(String, usize)>,
    pub entities: Vec<(EntityLabel, usize)>,
    pub cooccurrences: Vec<Cooccurrence>,
    /// Ordered events for rendering
    pub events: Vec<Event>,
}

/// Builds event lists from parsed documents
#[derive(Debug, Clone)]
pub struct EventAggregator {
    config: EventGraphConfig,
    ranker: KeywordRanker,
    filter: WordFilter,
}

impl EventAggregator {
    /// Create an aggregator, rejecting invalid settings
    ///
    /// The stop-word list is shared read-only with every clone.
    pub fn new(config: EventGraphConfig, stopwords: Arc<StopwordFilter>) -> Result<Self> {
        config.validate()?;
        let ranker = KeywordRanker::new(config.ranker.clone())?;
        let filter = WordFilter::new(stopwords).with_lowercase_ascii(config.lowercase_ascii);
        Ok(Self {
            config,
            ranker,
            filter,
        })
    }

    pub fn config(&self) -> &EventGraphConfig {
        &self.config
    }

    /// Ordered events for one document
    pub fn aggregate(&self, document: &Document) -> Vec<Event> {
        self.analyze(document).events
    }

    /// Events for many independent documents, in input order
    pub fn aggregate_batch(&self, documents: &[Document]) -> Vec<Vec<Event>> {
        documents.par_iter().map(|doc| self.aggregate(doc)).collect()
    }

    /// Run every step and keep the intermediate results
    pub fn analyze(&self, document: &Document) -> EventGraph {
        let digest = DocumentDigest::collect(document, &self.filter, &self.config);
        let palette = &self.config.palette;
        let mut graph = EventGraph::default();

        {
            trace_stage!(STAGE_KEYWORDS);
            graph.keywords = self
                .ranker
                .ranked(&digest.ranking_words, self.config.keyword_count)
                .keywords;
            for keyword in &graph.keywords {
                graph.events.push(Event::new(
                    EventSource::Keyword,
                    &keyword.word,
                    &palette.default,
                    &self.config.labels.keyword,
                    &palette.keyword,
                ));
            }
            trace_events!(STAGE_KEYWORDS, graph.keywords.len());
        }

        if digest.has_entities() {
            trace_stage!(STAGE_TRIPLES);
            let triples = TripleFilter::new(
                graph.keywords.iter().map(|k| k.word.as_str()),
                self.config.min_triple_term_chars,
            );
            let events = triples.events(&digest.triples, &palette.default);
            trace_events!(STAGE_TRIPLES, events.len());
            graph.events.extend(events);
        }

        {
            trace_stage!(STAGE_FREQUENCY);
            let counter: FrequencyCounter<&str> = digest
                .words
                .iter()
                .filter(|w| self.config.event_pos.contains(&w.coarse_pos))
                .map(|w| w.node_key())
                .collect();
            graph.frequent_words = counter
                .most_common(self.config.frequent_word_count)
                .into_iter()
                .map(|(word, count)| (word.to_string(), count))
                .collect();
            for (word, _) in &graph.frequent_words {
                graph.events.push(Event::new(
                    EventSource::Frequency,
                    word,
                    &palette.default,
                    &self.config.labels.frequent_word,
                    &palette.frequency,
                ));
            }
            trace_events!(STAGE_FREQUENCY, graph.frequent_words.len());
        }

        if digest.has_entities() {
            trace_stage!(STAGE_ENTITIES);
            graph.entities = digest.entity_counts.most_common(self.config.entity_count);
            for (entity, _) in &graph.entities {
                graph.events.push(Event::new(
                    EventSource::Entity,
                    &entity.surface,
                    &palette.default,
                    &entity.category,
                    &palette.entity,
                ));
            }
            trace_events!(STAGE_ENTITIES, graph.entities.len());
        }

        if digest.has_entities() {
            trace_stage!(STAGE_COOCCURRENCE);
            let top: Vec<EntityLabel> = graph.entities.iter().map(|(e, _)| e.clone()).collect();
            graph.cooccurrences =
                CooccurrenceAggregator::new(&top).aggregate(&digest.entity_sentences);
            for pair in &graph.cooccurrences {
                graph.events.push(Event::new(
                    EventSource::Cooccurrence,
                    &pair.first.surface,
                    &palette.default,
                    &pair.second.surface,
                    &palette.default,
                ));
            }
            trace_events!(STAGE_COOCCURRENCE, graph.cooccurrences.len());
        }

        graph
    }
}
