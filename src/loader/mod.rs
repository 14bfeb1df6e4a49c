//! Loader for NEO and close approach source files
//!
//! - NEOs: CSV with a header row
//! - Close approaches: JSON `{"fields": [...], "data": [[...], ...]}`
//!
//! Both produce unlinked entities ready for [`crate::index::NeoDatabase::new`].

mod approaches;
mod errors;
mod neos;

pub use approaches::{load_approaches, read_approaches};
pub use errors::{LoadError, LoadResult};
pub use neos::{load_neos, read_neos};
