//! Graph construction and representation
//!
//! The keyword ranker builds a [`builder::GraphBuilder`] from the flattened
//! word sequence and freezes it into a [`csr::CsrGraph`] before iterating.

pub mod builder;
pub mod csr;
