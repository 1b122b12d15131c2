// SPDX-License-Identifier: MPL-2.0
//! The fixed gallery catalog.

use super::entry::{Category, EntryId, GalleryEntry, GalleryError};
use std::collections::HashSet;

/// Immutable, ordered list of gallery entries with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<GalleryEntry>,
}

impl Catalog {
    /// Builds a catalog from entries, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::DuplicateId`] if two entries share an id.
    pub fn new(entries: Vec<GalleryEntry>) -> Result<Self, GalleryError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id()) {
                return Err(GalleryError::DuplicateId(entry.id()));
            }
        }
        Ok(Self { entries })
    }

    /// The catalog shipped with the site.
    ///
    /// # Errors
    ///
    /// Returns the first [`GalleryError`] raised by an entry or by the id
    /// check.
    pub fn company() -> Result<Self, GalleryError> {
        let entries = [
            GalleryEntry::new(
                EntryId::new(1),
                "Client Meeting",
                "Snapshots from our recent client meeting.",
                Category::Events,
                vec![
                    "https://images.unsplash.com/photo-1551836022-4c4c79ecde51?w=1200&h=800&fit=crop".into(),
                    "https://images.unsplash.com/photo-1520880867055-1e30d1cb001c?w=1200&h=800&fit=crop".into(),
                    "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=1200&h=800&fit=crop".into(),
                ],
                vec!["client".into(), "meeting".into(), "business".into()],
            ),
            GalleryEntry::new(
                EntryId::new(2),
                "1-Year Anniversary",
                "Celebrating our first anniversary milestone.",
                Category::Events,
                vec![
                    "https://images.unsplash.com/photo-1511795409834-ef04bbd61622?w=1200&h=800&fit=crop".into(),
                    "https://images.unsplash.com/photo-1519741497674-611481863552?w=1200&h=800&fit=crop".into(),
                    "https://images.unsplash.com/photo-1454179083322-198bb4daae63?w=1200&h=800&fit=crop".into(),
                ],
                vec!["anniversary".into(), "milestone".into(), "celebration".into()],
            ),
        ];

        Self::new(entries.into_iter().collect::<Result<_, _>>()?)
    }

    #[must_use]
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&GalleryEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Categories present in the catalog, in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for entry in &self.entries {
            if !categories.contains(&entry.category()) {
                categories.push(entry.category());
            }
        }
        categories
    }
}
