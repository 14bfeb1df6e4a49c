//! Linker/indexer for the NEO dataset
//!
//! Turns unlinked NEO and close approach collections into a read-only,
//! cross-referenced [`NeoDatabase`].
//!
//! # Invariants
//!
//! - One NEO per designation; duplicates are rejected at build time
//! - A linked approach appears exactly once in its NEO's approaches
//! - An approach with an unknown designation stays in the flat collection, unlinked
//! - Per-NEO approach order is ingestion order

mod database;
mod errors;
mod handles;

pub use database::{ApproachId, NeoDatabase, NeoId};
pub use errors::{IndexError, IndexErrorCode, IndexResult};
pub use handles::{ApproachRef, Approaches, LinkedApproaches, NeoRef, Neos};
