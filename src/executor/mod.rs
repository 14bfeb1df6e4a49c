//! Query executor for the NEO dataset
//!
//! Consumes an ordered collection of filters and produces a lazy stream of
//! matching close approaches.
//!
//! # Execution
//!
//! 1. Pull the next approach in ingestion order
//! 2. Run filters in order, stop at the first rejection
//! 3. Yield on match, otherwise continue
//!
//! Read-only against the dataset; any number of queries may be open at once.

mod filters;
mod query;

pub use filters::{predicate, Filter, PredicateFilter};
pub use query::{limit, Query};
