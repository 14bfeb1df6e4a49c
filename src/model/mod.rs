//! Entity model for near-earth objects and their close approaches
//!
//! Entities are plain data. Construction normalizes raw loader records:
//! - empty name → `None`
//! - empty diameter / distance / velocity → `f64::NAN`
//! - empty or `N` hazard flag → `false`
//! - empty approach time → `None`
//!
//! Cross references between the two kinds are held by the dataset
//! ([`crate::index::NeoDatabase`]), not by the entities.

mod approach;
mod errors;
mod neo;
mod view;

pub use approach::{ApproachRecord, CloseApproach};
pub use errors::{ModelError, ModelErrorCode, ModelResult};
pub use neo::{NearEarthObject, NeoRecord};
pub use view::{ApproachView, NeoView, CSV_HEADER};
