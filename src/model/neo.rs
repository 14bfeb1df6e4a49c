//! Near-earth object entity

use std::fmt;

use serde::Deserialize;

use super::approach::parse_measure;
use super::errors::{ModelError, ModelResult};

/// Raw NEO fields as handed over by the loader.
///
/// Column names follow the source CSV header. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NeoRecord {
    /// Primary designation
    pub pdes: String,
    /// IAU name
    pub name: String,
    /// Diameter in kilometers
    pub diameter: String,
    /// Potentially hazardous flag (`Y` / `N`)
    pub pha: String,
}

impl NeoRecord {
    /// Convenience constructor, mostly for tests and fixtures
    pub fn new(pdes: &str, name: &str, diameter: &str, pha: &str) -> Self {
        Self {
            pdes: pdes.to_string(),
            name: name.to_string(),
            diameter: diameter.to_string(),
            pha: pha.to_string(),
        }
    }
}

/// A near-earth object.
///
/// The designation is the primary key. A missing name is `None`, never the
/// empty string. An unknown diameter is `f64::NAN`.
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    designation: String,
    name: Option<String>,
    diameter: f64,
    hazardous: bool,
}

impl NearEarthObject {
    /// Creates an NEO from already-typed values.
    ///
    /// An empty `name` normalizes to `None`.
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: Option<f64>,
        hazardous: bool,
    ) -> ModelResult<Self> {
        let designation = designation.into();
        if designation.trim().is_empty() {
            return Err(ModelError::missing_designation());
        }

        Ok(Self {
            designation,
            name: name.filter(|n| !n.is_empty()),
            diameter: diameter.unwrap_or(f64::NAN),
            hazardous,
        })
    }

    /// Normalizes a raw record.
    ///
    /// Fails only on a missing designation or an unparsable diameter.
    pub fn from_record(record: &NeoRecord) -> ModelResult<Self> {
        let diameter = parse_measure("diameter", &record.diameter)?;
        let hazardous = parse_hazard(&record.pha);
        let name = Some(record.name.trim().to_string());

        Self::new(record.pdes.trim(), name, Some(diameter), hazardous)
    }

    /// Primary designation
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// IAU name, if the object has one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Diameter in kilometers, NaN if unknown
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Whether the object is flagged as potentially hazardous
    pub fn hazardous(&self) -> bool {
        self.hazardous
    }

    /// `433 (Eros)`, or just the designation when unnamed
    pub fn full_name(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard = if self.hazardous { "is" } else { "is not" };
        write!(
            f,
            "NEO {} has a diameter of {:.3} km and {} potentially hazardous.",
            self.full_name(),
            self.diameter,
            hazard
        )
    }
}

/// Empty, absent, or `N` means not hazardous
fn parse_hazard(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value.eq_ignore_ascii_case("n"))
}
