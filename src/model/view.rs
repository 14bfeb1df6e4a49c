//! Serialized views handed to exporters
//!
//! Field names are fixed:
//! - approach: `datetime_utc`, `distance_au`, `velocity_km_s`, `neo`
//! - neo: `designation`, `name`, `diameter_km`, `potentially_hazardous`
//!
//! Tabular formats flatten `neo` into sibling columns, see [`ApproachView::csv_row`].

use serde::Serialize;

use super::approach::CloseApproach;
use super::neo::NearEarthObject;

/// Column order for flattened output
pub const CSV_HEADER: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// External representation of an NEO. An unnamed NEO has `name == ""`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeoView {
    pub designation: String,
    pub name: String,
    pub diameter_km: f64,
    pub potentially_hazardous: bool,
}

impl From<&NearEarthObject> for NeoView {
    fn from(neo: &NearEarthObject) -> Self {
        Self {
            designation: neo.designation().to_string(),
            name: neo.name().unwrap_or_default().to_string(),
            diameter_km: neo.diameter(),
            potentially_hazardous: neo.hazardous(),
        }
    }
}

impl NeoView {
    /// View for an approach whose designation matched no NEO
    fn unresolved(designation: &str) -> Self {
        Self {
            designation: designation.to_string(),
            name: String::new(),
            diameter_km: f64::NAN,
            potentially_hazardous: false,
        }
    }
}

/// External representation of a close approach with its NEO nested
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproachView {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub neo: NeoView,
}

impl ApproachView {
    /// Builds the view; `neo` is the linked NEO, if any.
    pub fn new(approach: &CloseApproach, neo: Option<&NearEarthObject>) -> Self {
        let neo = match neo {
            Some(neo) => NeoView::from(neo),
            None => NeoView::unresolved(approach.designation_ref()),
        };

        Self {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance(),
            velocity_km_s: approach.velocity(),
            neo,
        }
    }

    /// Flattened row in [`CSV_HEADER`] order
    pub fn csv_row(&self) -> [String; 7] {
        [
            self.datetime_utc.clone(),
            self.distance_au.to_string(),
            self.velocity_km_s.to_string(),
            self.neo.designation.clone(),
            self.neo.name.clone(),
            self.neo.diameter_km.to_string(),
            self.neo.potentially_hazardous.to_string(),
        ]
    }
}
