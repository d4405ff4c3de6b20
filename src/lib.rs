//! Keyword ranking and event-graph aggregation over pre-tagged news text.
//!
//! The crate consumes documents that an external parser has already split
//! into sentences, tagged and reduced to dependency arcs and
//! subject-verb-object triples. It produces an ordered list of [`Event`]s:
//! labeled node pairs that a renderer turns into a graph.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use news_event_graph::{EventAggregator, EventGraphConfig, StopwordFilter, VisGraph};
//!
//! let stopwords = Arc::new(StopwordFilter::from_path("stopword")?);
//! let aggregator = EventAggregator::new(EventGraphConfig::default(), stopwords)?;
//! let events = aggregator.aggregate(&document);
//! let json = VisGraph::from_events(&events).to_json()?;
//! ```

pub mod config;
pub mod cooccurrence;
pub mod errors;
pub mod events;
pub mod graph;
pub mod keywords;
pub mod nlp;
pub mod pagerank;
pub mod render;
pub mod types;

pub use config::{CategoryLabels, EventGraphConfig, EventPalette, RankerConfig};
pub use cooccurrence::{Cooccurrence, CooccurrenceAggregator};
pub use errors::{EventGraphError, Result};
pub use events::aggregator::{EventAggregator, EventGraph};
pub use keywords::{KeywordRanker, RankedKeywords};
pub use nlp::stopwords::StopwordFilter;
pub use render::{NodeTable, VisGraph};
pub use types::{
    AnnotatedWord, DependencyEdge, Document, EntityLabel, Event, EventSource, KeywordScore,
    PosTag, Sentence, SvoTriple,
};
