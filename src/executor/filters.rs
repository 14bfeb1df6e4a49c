//! Predicate filtering for query execution
//!
//! A filter is an opaque boolean function over a close approach. The
//! executor only composes them, by logical AND.

use crate::index::ApproachRef;

/// A predicate over a linked close approach
pub trait Filter {
    /// Returns true if the approach passes this filter
    fn matches(&self, approach: &ApproachRef<'_>) -> bool;
}

impl<F> Filter for F
where
    F: Fn(&ApproachRef<'_>) -> bool,
{
    fn matches(&self, approach: &ApproachRef<'_>) -> bool {
        self(approach)
    }
}

impl Filter for Box<dyn Filter + '_> {
    fn matches(&self, approach: &ApproachRef<'_>) -> bool {
        (**self).matches(approach)
    }
}

/// Pins a closure to the filter signature.
///
/// ```ignore
/// let near = predicate(|a| a.distance() < 0.2);
/// let results: Vec<_> = db.query(&[near]).collect();
/// ```
pub fn predicate<F>(f: F) -> F
where
    F: Fn(&ApproachRef<'_>) -> bool,
{
    f
}

/// Evaluates filter conjunctions against approaches
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if an approach matches all filters.
    ///
    /// Filters run in order and stop at the first rejection. No filters
    /// means everything matches.
    pub fn matches<F: Filter>(approach: &ApproachRef<'_>, filters: &[F]) -> bool {
        filters.iter().all(|filter| filter.matches(approach))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::NeoDatabase;
    use crate::model::{ApproachRecord, CloseApproach, NearEarthObject, NeoRecord};
    use std::cell::Cell;

    fn dataset() -> NeoDatabase {
        let neos = vec![NearEarthObject::from_record(&NeoRecord::new("433", "Eros", "16.84", "N")).unwrap()];
        let approaches = vec![CloseApproach::from_record(&ApproachRecord::new(
            "433",
            "2025-Jan-01 00:00",
            "0.15",
            "5.1",
        ))
        .unwrap()];
        NeoDatabase::new(neos, approaches).unwrap()
    }

    #[test]
    fn test_empty_filters_match() {
        let db = dataset();
        let approach = db.approaches().next().unwrap();
        let none: [Box<dyn Filter>; 0] = [];
        assert!(PredicateFilter::matches(&approach, &none));
    }

    #[test]
    fn test_conjunction() {
        let db = dataset();
        let approach = db.approaches().next().unwrap();

        let filters: Vec<Box<dyn Filter>> = vec![
            Box::new(predicate(|a| a.distance() < 0.2)),
            Box::new(predicate(|a| a.velocity() > 5.0)),
        ];
        assert!(PredicateFilter::matches(&approach, &filters));

        let filters: Vec<Box<dyn Filter>> = vec![
            Box::new(predicate(|a| a.distance() < 0.2)),
            Box::new(predicate(|a| a.velocity() > 50.0)),
        ];
        assert!(!PredicateFilter::matches(&approach, &filters));
    }

    #[test]
    fn test_short_circuit() {
        let db = dataset();
        let approach = db.approaches().next().unwrap();
        let second_calls = Cell::new(0);

        let filters: Vec<Box<dyn Filter + '_>> = vec![
            Box::new(predicate(|_| false)),
            Box::new(predicate(|_| {
                second_calls.set(second_calls.get() + 1);
                true
            })),
        ];
        assert!(!PredicateFilter::matches(&approach, &filters));
        assert_eq!(second_calls.get(), 0);
    }

    #[test]
    fn test_filter_sees_linked_neo() {
        let db = dataset();
        let approach = db.approaches().next().unwrap();
        let named = predicate(|a| a.neo().and_then(|n| n.name().map(str::to_string)) == Some("Eros".into()));
        assert!(PredicateFilter::matches(&approach, &[named]));
    }
}
