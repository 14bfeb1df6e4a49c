//! Filters built from user-facing query options
//!
//! Each supplied option becomes one [`AttributeFilter`]: an attribute of
//! the approach (or its linked NEO), an operation, and a bound. Filters
//! plug into [`crate::executor::Filter`] and are combined by AND.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use crate::executor::Filter;
use crate::index::ApproachRef;

/// Attribute a filter reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// Calendar date of the approach time
    Date,
    /// Approach distance (au)
    Distance,
    /// Relative velocity (km/s)
    Velocity,
    /// Diameter of the linked NEO (km)
    Diameter,
    /// Hazard flag of the linked NEO
    Hazardous,
}

impl Attribute {
    /// Returns the attribute name for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Date => "date",
            Attribute::Distance => "distance",
            Attribute::Velocity => "velocity",
            Attribute::Diameter => "diameter",
            Attribute::Hazardous => "hazardous",
        }
    }
}

/// Filter operation types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// attribute = value
    Eq,
    /// attribute >= value
    Gte,
    /// attribute <= value
    Lte,
}

impl FilterOp {
    /// Returns the operator symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            FilterOp::Eq => "==",
            FilterOp::Gte => ">=",
            FilterOp::Lte => "<=",
        }
    }

    fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            FilterOp::Eq => ordering == Ordering::Equal,
            FilterOp::Gte => ordering != Ordering::Less,
            FilterOp::Lte => ordering != Ordering::Greater,
        }
    }
}

/// A typed filter bound
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterValue {
    Date(NaiveDate),
    Number(f64),
    Flag(bool),
}

impl FilterValue {
    /// Orders two values of the same kind; NaN and mixed kinds are unordered
    fn compare(&self, other: &FilterValue) -> Option<Ordering> {
        match (self, other) {
            (FilterValue::Date(a), FilterValue::Date(b)) => Some(a.cmp(b)),
            (FilterValue::Number(a), FilterValue::Number(b)) => a.partial_cmp(b),
            (FilterValue::Flag(a), FilterValue::Flag(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Date(d) => write!(f, "{}", d),
            FilterValue::Number(n) => write!(f, "{}", n),
            FilterValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// A single attribute comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeFilter {
    pub attribute: Attribute,
    pub op: FilterOp,
    pub value: FilterValue,
}

impl AttributeFilter {
    /// Create an equality filter
    pub fn eq(attribute: Attribute, value: FilterValue) -> Self {
        Self {
            attribute,
            op: FilterOp::Eq,
            value,
        }
    }

    /// Create a lower-bound filter (inclusive)
    pub fn gte(attribute: Attribute, value: FilterValue) -> Self {
        Self {
            attribute,
            op: FilterOp::Gte,
            value,
        }
    }

    /// Create an upper-bound filter (inclusive)
    pub fn lte(attribute: Attribute, value: FilterValue) -> Self {
        Self {
            attribute,
            op: FilterOp::Lte,
            value,
        }
    }

    /// Reads the filtered attribute; `None` when unknown or unlinked
    fn extract(&self, approach: &ApproachRef<'_>) -> Option<FilterValue> {
        match self.attribute {
            Attribute::Date => approach.time().map(|t| FilterValue::Date(t.date())),
            Attribute::Distance => Some(FilterValue::Number(approach.distance())),
            Attribute::Velocity => Some(FilterValue::Number(approach.velocity())),
            Attribute::Diameter => approach.neo().map(|neo| FilterValue::Number(neo.diameter())),
            Attribute::Hazardous => approach.neo().map(|neo| FilterValue::Flag(neo.hazardous())),
        }
    }
}

impl Filter for AttributeFilter {
    fn matches(&self, approach: &ApproachRef<'_>) -> bool {
        let Some(actual) = self.extract(approach) else {
            return false;
        };

        match actual.compare(&self.value) {
            Some(ordering) => self.op.accepts(ordering),
            None => false,
        }
    }
}

impl fmt::Display for AttributeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.attribute.as_str(), self.op.symbol(), self.value)
    }
}

/// User-facing query options; every field is optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    pub velocity_min: Option<f64>,
    pub velocity_max: Option<f64>,
    pub diameter_min: Option<f64>,
    pub diameter_max: Option<f64>,
    pub hazardous: Option<bool>,
}

/// Builds one filter per supplied option, in field order.
pub fn create_filters(options: &QueryOptions) -> Vec<AttributeFilter> {
    use Attribute::*;

    let mut filters = Vec::new();

    let dates = [
        (options.date, FilterOp::Eq),
        (options.start_date, FilterOp::Gte),
        (options.end_date, FilterOp::Lte),
    ];
    for (date, op) in dates {
        if let Some(date) = date {
            filters.push(AttributeFilter {
                attribute: Date,
                op,
                value: FilterValue::Date(date),
            });
        }
    }

    let bounds = [
        (Distance, options.distance_min, options.distance_max),
        (Velocity, options.velocity_min, options.velocity_max),
        (Diameter, options.diameter_min, options.diameter_max),
    ];
    for (attribute, min, max) in bounds {
        if let Some(min) = min {
            filters.push(AttributeFilter::gte(attribute, FilterValue::Number(min)));
        }
        if let Some(max) = max {
            filters.push(AttributeFilter::lte(attribute, FilterValue::Number(max)));
        }
    }

    if let Some(hazardous) = options.hazardous {
        filters.push(AttributeFilter::eq(Hazardous, FilterValue::Flag(hazardous)));
    }

    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::NeoDatabase;
    use crate::model::{ApproachRecord, CloseApproach, NearEarthObject, NeoRecord};

    fn dataset() -> NeoDatabase {
        let neos = vec![
            NearEarthObject::from_record(&NeoRecord::new("433", "Eros", "16.84", "N")).unwrap(),
            NearEarthObject::from_record(&NeoRecord::new("99942", "Apophis", "0.37", "Y")).unwrap(),
            NearEarthObject::from_record(&NeoRecord::new("2020 AB", "", "", "N")).unwrap(),
        ];
        let approaches = [
            ("433", "2025-Jan-01 00:00", "0.15", "5.1"),
            ("99942", "2029-Apr-13 21:46", "0.00025", "7.42"),
            ("2020 AB", "2020-Jan-01 12:00", "0.05", "12.0"),
            ("ghost", "2020-Jan-01 08:00", "0.01", "3.0"),
            ("433", "", "", ""),
        ]
        .iter()
        .map(|(des, cd, dist, v)| CloseApproach::from_record(&ApproachRecord::new(des, cd, dist, v)).unwrap())
        .collect();
        NeoDatabase::new(neos, approaches).unwrap()
    }

    fn run(db: &NeoDatabase, options: QueryOptions) -> Vec<usize> {
        let filters = create_filters(&options);
        db.query(&filters).map(|a| a.id().index()).collect()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_options_no_filters() {
        assert!(create_filters(&QueryOptions::default()).is_empty());
    }

    #[test]
    fn test_filter_order_follows_options() {
        let filters = create_filters(&QueryOptions {
            hazardous: Some(true),
            distance_max: Some(0.1),
            start_date: Some(ymd(2020, 1, 1)),
            ..Default::default()
        });
        let rendered: Vec<String> = filters.iter().map(|f| f.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["date >= 2020-01-01", "distance <= 0.1", "hazardous == true"]
        );
    }

    #[test]
    fn test_date_equality() {
        let db = dataset();
        let hits = run(&db, QueryOptions { date: Some(ymd(2020, 1, 1)), ..Default::default() });
        assert_eq!(hits, vec![2, 3]);
    }

    #[test]
    fn test_date_range_inclusive() {
        let db = dataset();
        let hits = run(
            &db,
            QueryOptions {
                start_date: Some(ymd(2020, 1, 1)),
                end_date: Some(ymd(2025, 1, 1)),
                ..Default::default()
            },
        );
        assert_eq!(hits, vec![0, 2, 3]);
    }

    #[test]
    fn test_distance_and_velocity() {
        let db = dataset();
        let hits = run(
            &db,
            QueryOptions {
                distance_max: Some(0.1),
                velocity_min: Some(5.0),
                ..Default::default()
            },
        );
        assert_eq!(hits, vec![1, 2]);
    }

    #[test]
    fn test_unknown_measures_never_match() {
        let db = dataset();
        let hits = run(&db, QueryOptions { distance_min: Some(0.0), ..Default::default() });
        assert!(!hits.contains(&4));

        let hits = run(&db, QueryOptions { diameter_max: Some(100.0), ..Default::default() });
        assert_eq!(hits, vec![0, 1, 4]);
    }

    #[test]
    fn test_hazardous_requires_linked_neo() {
        let db = dataset();
        let hazardous = run(&db, QueryOptions { hazardous: Some(true), ..Default::default() });
        assert_eq!(hazardous, vec![1]);

        let safe = run(&db, QueryOptions { hazardous: Some(false), ..Default::default() });
        assert_eq!(safe, vec![0, 2, 4]);
    }
}
