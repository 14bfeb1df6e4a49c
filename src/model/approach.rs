//! Close approach entity

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::timefmt::{cd_to_datetime, datetime_to_str};

use super::errors::{ModelError, ModelResult};

/// Raw close approach fields as handed over by the loader.
///
/// Field names follow the source JSON `fields` header. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApproachRecord {
    /// Designation of the approaching NEO
    pub des: String,
    /// Approach time, `2025-Jan-01 00:00`
    pub cd: String,
    /// Nominal approach distance (au)
    pub dist: String,
    /// Relative velocity (km/s)
    pub v_rel: String,
}

impl ApproachRecord {
    /// Convenience constructor, mostly for tests and fixtures
    pub fn new(des: &str, cd: &str, dist: &str, v_rel: &str) -> Self {
        Self {
            des: des.to_string(),
            cd: cd.to_string(),
            dist: dist.to_string(),
            v_rel: v_rel.to_string(),
        }
    }
}

/// A single close approach to Earth.
///
/// Holds only its own measurements and the designation of the NEO it belongs
/// to. The link to the NEO itself lives in the dataset, see
/// [`crate::index::ApproachRef::neo`].
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    designation_ref: String,
    time: Option<NaiveDateTime>,
    distance: f64,
    velocity: f64,
}

impl CloseApproach {
    /// Creates an approach from already-typed values. Unknown measures become NaN.
    pub fn new(
        designation_ref: impl Into<String>,
        time: Option<NaiveDateTime>,
        distance: Option<f64>,
        velocity: Option<f64>,
    ) -> Self {
        Self {
            designation_ref: designation_ref.into(),
            time,
            distance: distance.unwrap_or(f64::NAN),
            velocity: velocity.unwrap_or(f64::NAN),
        }
    }

    /// Normalizes a raw record.
    ///
    /// Empty fields become sentinels; non-empty fields that do not parse are rejected.
    pub fn from_record(record: &ApproachRecord) -> ModelResult<Self> {
        let time = match record.cd.trim() {
            "" => None,
            cd => Some(cd_to_datetime(cd).ok_or_else(|| ModelError::invalid_field("cd", cd))?),
        };
        let distance = parse_measure("dist", &record.dist)?;
        let velocity = parse_measure("v_rel", &record.v_rel)?;

        Ok(Self::new(
            record.des.trim(),
            time,
            Some(distance),
            Some(velocity),
        ))
    }

    /// Designation of the NEO this approach refers to
    pub fn designation_ref(&self) -> &str {
        &self.designation_ref
    }

    /// Approach time (UTC), if known
    pub fn time(&self) -> Option<&NaiveDateTime> {
        self.time.as_ref()
    }

    /// `2025-01-01 00:00`, or empty when the time is unknown
    pub fn time_str(&self) -> String {
        datetime_to_str(self.time.as_ref())
    }

    /// Nominal approach distance in au, NaN if unknown
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Relative approach velocity in km/s, NaN if unknown
    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}

/// Parses an optional numeric field; empty maps to NaN.
pub(crate) fn parse_measure(field: &'static str, value: &str) -> ModelResult<f64> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(f64::NAN);
    }
    value
        .parse::<f64>()
        .map_err(|_| ModelError::invalid_field(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record() {
        let ca = CloseApproach::from_record(&ApproachRecord::new(
            "433",
            "2025-Jan-01 00:00",
            "0.15",
            "5.1",
        ))
        .unwrap();
        assert_eq!(ca.designation_ref(), "433");
        assert_eq!(ca.time_str(), "2025-01-01 00:00");
        assert_eq!(ca.distance(), 0.15);
        assert_eq!(ca.velocity(), 5.1);
    }

    #[test]
    fn test_empty_fields_become_sentinels() {
        let ca = CloseApproach::from_record(&ApproachRecord::new("433", "", "", "")).unwrap();
        assert!(ca.time().is_none());
        assert_eq!(ca.time_str(), "");
        assert!(ca.distance().is_nan());
        assert!(ca.velocity().is_nan());
    }

    #[test]
    fn test_bad_time_rejected() {
        let err = CloseApproach::from_record(&ApproachRecord::new("433", "soon", "0.1", "1"))
            .unwrap_err();
        assert_eq!(err.field(), Some("cd"));
    }

    #[test]
    fn test_bad_distance_rejected() {
        let err = CloseApproach::from_record(&ApproachRecord::new("433", "", "far", "1"))
            .unwrap_err();
        assert_eq!(err.field(), Some("dist"));
    }
}
