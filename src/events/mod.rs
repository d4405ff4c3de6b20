//! Event aggregation
//!
//! Merges keyword ranking, triple filtering, frequency counting and entity
//! co-occurrence into one ordered event list.

pub mod aggregator;
pub mod digest;
pub mod frequency;
pub mod triples;
