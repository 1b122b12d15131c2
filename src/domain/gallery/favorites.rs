// SPDX-License-Identifier: MPL-2.0
//! Session-local favorites set.
//!
//! Created empty and held in memory only; nothing here is persisted.

use super::entry::EntryId;
use std::collections::BTreeSet;

/// Set of favorited entry ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<EntryId>,
}

impl Favorites {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `id` if present, adds it otherwise.
    ///
    /// Returns the membership after the toggle.
    pub fn toggle(&mut self, id: EntryId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: EntryId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.ids.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert!(Favorites::new().is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut favorites = Favorites::new();
        let id = EntryId::new(1);

        assert!(favorites.toggle(id));
        assert!(favorites.contains(id));

        assert!(!favorites.toggle(id));
        assert!(!favorites.contains(id));
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut favorites = Favorites::new();
        favorites.toggle(EntryId::new(2));
        let before = favorites.clone();

        for raw in [1, 2, 3] {
            let id = EntryId::new(raw);
            favorites.toggle(id);
            favorites.toggle(id);
            assert_eq!(favorites, before);
        }
    }

    #[test]
    fn toggling_one_id_leaves_others() {
        let mut favorites = Favorites::new();
        favorites.toggle(EntryId::new(1));
        favorites.toggle(EntryId::new(2));
        favorites.toggle(EntryId::new(1));

        let ids: Vec<u32> = favorites.iter().map(EntryId::value).collect();
        assert_eq!(ids, [2]);
    }
}
