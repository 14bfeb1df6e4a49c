//! neodb - Near-earth objects and their close approaches, linked in memory
//!
//! Load once, query many times:
//!
//! 1. [`loader`] reads the NEO CSV and close approach JSON into entities
//! 2. [`index::NeoDatabase`] links both collections and indexes NEOs
//! 3. [`index::NeoDatabase::query`] lazily yields approaches matching every filter
//! 4. [`export`] writes a result stream to CSV or JSON

pub mod cli;
pub mod executor;
pub mod export;
pub mod filters;
pub mod index;
pub mod loader;
pub mod model;
pub mod observability;
pub mod timefmt;
