//! Exporters for query results
//!
//! - CSV: one row per approach, NEO fields as sibling columns
//! - JSON: array of approach objects, NEO nested under `neo`

mod errors;
mod writer;

pub use errors::{ExportError, ExportResult};
pub use writer::{write_results, write_to_csv, write_to_json, OutputFormat};
