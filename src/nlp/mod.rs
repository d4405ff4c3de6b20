//! Word-level filtering
//!
//! Stop-word lists and the normalization applied to every parsed word
//! before it reaches the ranker or the counters.

pub mod normalize;
pub mod stopwords;
