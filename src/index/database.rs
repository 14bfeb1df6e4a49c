//! Linked NEO / close approach dataset
//!
//! Built once from unlinked collections, read-only afterwards.
//!
//! # Build
//!
//! 1. One pass over NEOs: designation index and name index
//! 2. One pass over approaches: O(1) designation lookup, link on hit
//!
//! No sorting, O(n + m) overall. Approaches whose designation matches no NEO
//! stay in the flat collection, unlinked.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::executor::{Filter, Query};
use crate::model::{CloseApproach, NearEarthObject};
use crate::observability::{log_event_with_fields, Event};

use super::errors::{IndexError, IndexResult};
use super::handles::{ApproachRef, Approaches, NeoRef, Neos};

/// Position of an NEO in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeoId(pub(super) usize);

/// Position of a close approach in the dataset (ingestion order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApproachId(pub(super) usize);

impl NeoId {
    /// Index into the NEO collection
    pub fn index(self) -> usize {
        self.0
    }
}

impl ApproachId {
    /// Index into the approach collection
    pub fn index(self) -> usize {
        self.0
    }
}

/// An interlinked, indexed set of NEOs and their close approaches.
///
/// The dataset owns both collections. Links are stored as ids in two
/// parallel tables, so an NEO's approaches and an approach's NEO are reached
/// through [`NeoRef`] and [`ApproachRef`] handles.
#[derive(Debug)]
pub struct NeoDatabase {
    pub(super) neos: Vec<NearEarthObject>,
    pub(super) approaches: Vec<CloseApproach>,
    /// Parallel to `neos`, approach ids in ingestion order
    pub(super) neo_approaches: Vec<Vec<ApproachId>>,
    /// Parallel to `approaches`
    pub(super) approach_neo: Vec<Option<NeoId>>,
    by_designation: HashMap<String, NeoId>,
    /// name -> designations, first inserted first
    by_name: HashMap<String, Vec<String>>,
}

impl NeoDatabase {
    /// Links and indexes the two collections.
    ///
    /// Fails with `NEO_INDEX_DUPLICATE_DESIGNATION` if two NEOs share a
    /// designation; nothing is indexed in that case.
    pub fn new(neos: Vec<NearEarthObject>, approaches: Vec<CloseApproach>) -> IndexResult<Self> {
        let mut by_designation = HashMap::with_capacity(neos.len());
        let mut by_name: HashMap<String, Vec<String>> = HashMap::new();

        for (position, neo) in neos.iter().enumerate() {
            match by_designation.entry(neo.designation().to_string()) {
                Entry::Occupied(_) => {
                    return Err(IndexError::duplicate_designation(neo.designation(), position));
                }
                Entry::Vacant(slot) => {
                    slot.insert(NeoId(position));
                }
            }

            if let Some(name) = neo.name() {
                by_name
                    .entry(name.to_string())
                    .or_default()
                    .push(neo.designation().to_string());
            }
        }

        let mut neo_approaches = vec![Vec::new(); neos.len()];
        let mut approach_neo = Vec::with_capacity(approaches.len());
        let mut linked = 0usize;

        for (position, approach) in approaches.iter().enumerate() {
            let owner = by_designation.get(approach.designation_ref()).copied();
            if let Some(NeoId(neo)) = owner {
                neo_approaches[neo].push(ApproachId(position));
                linked += 1;
            }
            approach_neo.push(owner);
        }

        let neo_count = neos.len().to_string();
        let approach_count = approaches.len().to_string();
        let linked_count = linked.to_string();
        let orphan_count = (approaches.len() - linked).to_string();
        log_event_with_fields(
            Event::LinkComplete,
            &[
                ("neos", neo_count.as_str()),
                ("approaches", approach_count.as_str()),
                ("linked", linked_count.as_str()),
                ("orphans", orphan_count.as_str()),
            ],
        );

        Ok(Self {
            neos,
            approaches,
            neo_approaches,
            approach_neo,
            by_designation,
            by_name,
        })
    }

    /// Number of NEOs
    pub fn neo_count(&self) -> usize {
        self.neos.len()
    }

    /// Number of close approaches, linked or not
    pub fn approach_count(&self) -> usize {
        self.approaches.len()
    }

    /// Number of approaches whose designation matched no NEO
    pub fn orphan_count(&self) -> usize {
        self.approach_neo.iter().filter(|neo| neo.is_none()).count()
    }

    /// All NEOs in ingestion order
    pub fn neos(&self) -> Neos<'_> {
        Neos::new(self)
    }

    /// All close approaches in ingestion order
    pub fn approaches(&self) -> Approaches<'_> {
        Approaches::new(self)
    }

    /// Handle for an NEO id, `None` if out of range
    pub fn neo(&self, id: NeoId) -> Option<NeoRef<'_>> {
        (id.0 < self.neos.len()).then(|| NeoRef::new(self, id))
    }

    /// Handle for an approach id, `None` if out of range
    pub fn approach(&self, id: ApproachId) -> Option<ApproachRef<'_>> {
        (id.0 < self.approaches.len()).then(|| ApproachRef::new(self, id))
    }

    /// Exact-match lookup by primary designation.
    ///
    /// Matching is case-sensitive, no trimming.
    pub fn lookup_by_designation(&self, designation: &str) -> Option<NeoRef<'_>> {
        let id = self.by_designation.get(designation)?;
        Some(NeoRef::new(self, *id))
    }

    /// Exact-match lookup by name.
    ///
    /// If several NEOs share the name, the first one ingested is returned.
    pub fn lookup_by_name(&self, name: &str) -> Option<NeoRef<'_>> {
        let designation = self.by_name.get(name)?.first()?;
        self.lookup_by_designation(designation)
    }

    /// Every designation recorded under `name`, in ingestion order
    pub fn designations_for_name(&self, name: &str) -> &[String] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Lazily yields approaches matching every filter, in ingestion order.
    ///
    /// With no filters, yields every approach.
    pub fn query<'a, 'f, F: Filter>(&'a self, filters: &'f [F]) -> Query<'a, 'f, F> {
        Query::new(self.approaches(), filters)
    }
}
