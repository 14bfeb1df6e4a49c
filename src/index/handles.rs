//! Borrowed handles into a linked dataset
//!
//! A handle pairs a dataset reference with an id. It derefs to the entity
//! and navigates the links in either direction.

use std::fmt;
use std::ops::{Deref, Range};
use std::slice;

use crate::model::{ApproachView, CloseApproach, NearEarthObject};

use super::database::{ApproachId, NeoDatabase, NeoId};

/// An NEO inside a [`NeoDatabase`]
#[derive(Clone, Copy)]
pub struct NeoRef<'a> {
    db: &'a NeoDatabase,
    id: NeoId,
}

impl<'a> NeoRef<'a> {
    pub(super) fn new(db: &'a NeoDatabase, id: NeoId) -> Self {
        Self { db, id }
    }

    /// Id of this NEO; equal ids mean the same NEO
    pub fn id(&self) -> NeoId {
        self.id
    }

    /// The entity, borrowed for the dataset lifetime
    pub fn get(&self) -> &'a NearEarthObject {
        &self.db.neos[self.id.0]
    }

    /// This NEO's close approaches, in ingestion order
    pub fn approaches(&self) -> LinkedApproaches<'a> {
        LinkedApproaches {
            db: self.db,
            ids: self.db.neo_approaches[self.id.0].iter(),
        }
    }
}

impl Deref for NeoRef<'_> {
    type Target = NearEarthObject;

    fn deref(&self) -> &NearEarthObject {
        self.get()
    }
}

impl PartialEq for NeoRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.db, other.db) && self.id == other.id
    }
}

impl Eq for NeoRef<'_> {}

impl fmt::Debug for NeoRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NeoRef")
            .field("id", &self.id)
            .field("neo", self.get())
            .finish()
    }
}

impl fmt::Display for NeoRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.get(), f)
    }
}

/// A close approach inside a [`NeoDatabase`]
#[derive(Clone, Copy)]
pub struct ApproachRef<'a> {
    db: &'a NeoDatabase,
    id: ApproachId,
}

impl<'a> ApproachRef<'a> {
    pub(super) fn new(db: &'a NeoDatabase, id: ApproachId) -> Self {
        Self { db, id }
    }

    /// Id of this approach
    pub fn id(&self) -> ApproachId {
        self.id
    }

    /// The entity, borrowed for the dataset lifetime
    pub fn get(&self) -> &'a CloseApproach {
        &self.db.approaches[self.id.0]
    }

    /// The NEO this approach belongs to; `None` if its designation matched no NEO
    pub fn neo(&self) -> Option<NeoRef<'a>> {
        self.db.approach_neo[self.id.0].map(|id| NeoRef::new(self.db, id))
    }

    /// Serialized view for exporters
    pub fn to_view(&self) -> ApproachView {
        ApproachView::new(self.get(), self.neo().map(|neo| neo.get()))
    }
}

impl Deref for ApproachRef<'_> {
    type Target = CloseApproach;

    fn deref(&self) -> &CloseApproach {
        self.get()
    }
}

impl PartialEq for ApproachRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.db, other.db) && self.id == other.id
    }
}

impl Eq for ApproachRef<'_> {}

impl fmt::Debug for ApproachRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApproachRef")
            .field("id", &self.id)
            .field("approach", self.get())
            .field("neo", &self.db.approach_neo[self.id.0])
            .finish()
    }
}

impl fmt::Display for ApproachRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.neo() {
            Some(neo) => neo.full_name(),
            None => self.designation_ref().to_string(),
        };
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            name,
            self.distance(),
            self.velocity()
        )
    }
}

/// Iterator over every NEO of a dataset
#[derive(Clone)]
pub struct Neos<'a> {
    db: &'a NeoDatabase,
    ids: Range<usize>,
}

impl<'a> Neos<'a> {
    pub(super) fn new(db: &'a NeoDatabase) -> Self {
        Self {
            db,
            ids: 0..db.neos.len(),
        }
    }
}

impl<'a> Iterator for Neos<'a> {
    type Item = NeoRef<'a>;

    fn next(&mut self) -> Option<NeoRef<'a>> {
        self.ids.next().map(|i| NeoRef::new(self.db, NeoId(i)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl ExactSizeIterator for Neos<'_> {}

/// Iterator over every close approach of a dataset
#[derive(Clone)]
pub struct Approaches<'a> {
    db: &'a NeoDatabase,
    ids: Range<usize>,
}

impl<'a> Approaches<'a> {
    pub(super) fn new(db: &'a NeoDatabase) -> Self {
        Self {
            db,
            ids: 0..db.approaches.len(),
        }
    }
}

impl<'a> Iterator for Approaches<'a> {
    type Item = ApproachRef<'a>;

    fn next(&mut self) -> Option<ApproachRef<'a>> {
        self.ids.next().map(|i| ApproachRef::new(self.db, ApproachId(i)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl ExactSizeIterator for Approaches<'_> {}

/// Iterator over the close approaches linked to one NEO
#[derive(Clone)]
pub struct LinkedApproaches<'a> {
    db: &'a NeoDatabase,
    ids: slice::Iter<'a, ApproachId>,
}

impl<'a> Iterator for LinkedApproaches<'a> {
    type Item = ApproachRef<'a>;

    fn next(&mut self) -> Option<ApproachRef<'a>> {
        self.ids.next().map(|id| ApproachRef::new(self.db, *id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl ExactSizeIterator for LinkedApproaches<'_> {}
