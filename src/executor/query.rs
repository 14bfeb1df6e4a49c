//! Lazy query evaluation
//!
//! [`Query`] pulls one approach at a time from the dataset and runs the
//! filters only when the consumer asks for the next match. Nothing is
//! buffered; dropping the iterator is cancellation.

use std::iter::{FusedIterator, Take};

use crate::index::{ApproachRef, Approaches};

use super::filters::{Filter, PredicateFilter};

/// One-shot, forward-only stream of approaches matching every filter.
///
/// Created by [`crate::index::NeoDatabase::query`].
pub struct Query<'a, 'f, F> {
    approaches: Approaches<'a>,
    filters: &'f [F],
    scanned: usize,
    matched: usize,
}

impl<'a, 'f, F: Filter> Query<'a, 'f, F> {
    /// Wraps an approach stream with a filter conjunction
    pub fn new(approaches: Approaches<'a>, filters: &'f [F]) -> Self {
        Self {
            approaches,
            filters,
            scanned: 0,
            matched: 0,
        }
    }

    /// Approaches pulled from the dataset so far
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    /// Approaches yielded so far
    pub fn matched(&self) -> usize {
        self.matched
    }
}

impl<'a, F: Filter> Iterator for Query<'a, '_, F> {
    type Item = ApproachRef<'a>;

    fn next(&mut self) -> Option<ApproachRef<'a>> {
        for approach in self.approaches.by_ref() {
            self.scanned += 1;
            if PredicateFilter::matches(&approach, self.filters) {
                self.matched += 1;
                return Some(approach);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.approaches.size_hint();
        if self.filters.is_empty() {
            self.approaches.size_hint()
        } else {
            (0, upper)
        }
    }
}

impl<F: Filter> FusedIterator for Query<'_, '_, F> {}

/// Caps a result stream at `n` items.
///
/// `None` and `Some(0)` both mean unlimited. Stays lazy: items past the
/// cap are never pulled.
pub fn limit<I: Iterator>(results: I, n: Option<usize>) -> Take<I> {
    match n {
        Some(n) if n > 0 => results.take(n),
        _ => results.take(usize::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::predicate;
    use crate::index::NeoDatabase;
    use crate::model::{ApproachRecord, CloseApproach, NearEarthObject, NeoRecord};
    use std::cell::Cell;

    fn dataset() -> NeoDatabase {
        let neos = vec![NearEarthObject::from_record(&NeoRecord::new("433", "Eros", "16.84", "N")).unwrap()];
        let approaches = ["0.5", "0.1", "0.4", "0.05", "0.3"]
            .iter()
            .map(|dist| {
                CloseApproach::from_record(&ApproachRecord::new("433", "2025-Jan-01 00:00", dist, "5"))
                    .unwrap()
            })
            .collect();
        NeoDatabase::new(neos, approaches).unwrap()
    }

    #[test]
    fn test_no_filters_yields_everything_in_order() {
        let db = dataset();
        let none: [Box<dyn Filter>; 0] = [];
        let distances: Vec<f64> = db.query(&none).map(|a| a.distance()).collect();
        assert_eq!(distances, vec![0.5, 0.1, 0.4, 0.05, 0.3]);
    }

    #[test]
    fn test_filtered_in_order() {
        let db = dataset();
        let near = predicate(|a| a.distance() < 0.35);
        let distances: Vec<f64> = db.query(&[near]).map(|a| a.distance()).collect();
        assert_eq!(distances, vec![0.1, 0.05, 0.3]);
    }

    #[test]
    fn test_stops_at_first_match() {
        let db = dataset();
        let calls = Cell::new(0);
        let near = predicate(|a| {
            calls.set(calls.get() + 1);
            a.distance() < 0.2
        });

        let filters = [near];
        let mut query = db.query(&filters);
        let first = query.next().unwrap();

        assert_eq!(first.distance(), 0.1);
        assert_eq!(calls.get(), 2);
        assert_eq!(query.scanned(), 2);
        assert_eq!(query.matched(), 1);
    }

    #[test]
    fn test_exhausted_query_stays_empty() {
        let db = dataset();
        let filters = [predicate(|a| a.distance() > 1.0)];
        let mut query = db.query(&filters);
        assert!(query.next().is_none());
        assert!(query.next().is_none());
        assert_eq!(query.scanned(), 5);
    }

    #[test]
    fn test_interleaved_queries() {
        let db = dataset();
        let far = [predicate(|a| a.distance() >= 0.3)];
        let near = [predicate(|a| a.distance() < 0.3)];

        let mut q1 = db.query(&far);
        let mut q2 = db.query(&near);
        assert_eq!(q1.next().unwrap().distance(), 0.5);
        assert_eq!(q2.next().unwrap().distance(), 0.1);
        assert_eq!(q1.next().unwrap().distance(), 0.4);
        assert_eq!(q2.next().unwrap().distance(), 0.05);
    }

    #[test]
    fn test_limit() {
        let db = dataset();
        let none: [Box<dyn Filter>; 0] = [];

        assert_eq!(limit(db.query(&none), Some(2)).count(), 2);
        assert_eq!(limit(db.query(&none), Some(0)).count(), 5);
        assert_eq!(limit(db.query(&none), None).count(), 5);
        assert_eq!(limit(db.query(&none), Some(50)).count(), 5);
    }

    #[test]
    fn test_limit_is_lazy() {
        let db = dataset();
        let calls = Cell::new(0);
        let filters = [predicate(|_| {
            calls.set(calls.get() + 1);
            true
        })];

        let taken: Vec<_> = limit(db.query(&filters), Some(2)).collect();
        assert_eq!(taken.len(), 2);
        assert_eq!(calls.get(), 2);
    }
}
