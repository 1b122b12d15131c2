// SPDX-License-Identifier: MPL-2.0
//! Gallery filtering: free-text search AND category selector.
//!
//! Filtering is pure and synchronous; the grid recomputes it on every
//! keystroke or category click. There is no ranking, fuzzy matching or
//! debouncing.

use super::entry::{Category, GalleryEntry};

// =============================================================================
// Category Filter
// =============================================================================

/// Category selector state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every category matches.
    #[default]
    All,
    /// Only entries of this category match.
    Only(Category),
}

impl CategoryFilter {
    /// Label shown on the selector button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::All)
    }
}

// =============================================================================
// Composite Gallery Filter
// =============================================================================

/// Combined gallery filter with AND logic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryFilter {
    /// Raw search text as typed.
    pub search_term: String,
    /// Selected category.
    pub category: CategoryFilter,
}

impl GalleryFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `entry` passes both predicates.
    #[must_use]
    pub fn matches(&self, entry: &GalleryEntry) -> bool {
        self.category.matches(entry.category())
            && entry.matches_lowercase(&self.search_term.to_lowercase())
    }

    /// Entries passing the filter, in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, entries: &'a [GalleryEntry]) -> Vec<&'a GalleryEntry> {
        let needle = self.search_term.to_lowercase();
        entries
            .iter()
            .filter(|entry| {
                self.category.matches(entry.category()) && entry.matches_lowercase(&needle)
            })
            .collect()
    }

    /// Returns `true` if any predicate narrows the catalog.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || self.category.is_active()
    }

    /// Resets both predicates.
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.category = CategoryFilter::All;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{Catalog, EntryId};

    fn titles(entries: &[&GalleryEntry]) -> Vec<String> {
        entries.iter().map(|e| e.title().to_string()).collect()
    }

    fn filter(search: &str, category: CategoryFilter) -> GalleryFilter {
        GalleryFilter {
            search_term: search.to_string(),
            category,
        }
    }

    fn mixed_catalog() -> Catalog {
        let make = |id: u32, title: &str, category: Category, tags: &[&str]| {
            GalleryEntry::new(
                EntryId::new(id),
                title,
                format!("{title} description"),
                category,
                vec!["https://example.com/x.jpg".into()],
                tags.iter().map(|t| (*t).to_string()).collect(),
            )
            .expect("valid entry")
        };
        Catalog::new(vec![
            make(1, "Hackathon", Category::Technology, &["code", "rust"]),
            make(2, "Team Lunch", Category::Team, &["food"]),
            make(3, "New Office", Category::Office, &["bengaluru"]),
            make(4, "Client Meeting", Category::Events, &["client", "business"]),
        ])
        .expect("unique ids")
    }

    #[test]
    fn default_filter_returns_full_catalog_in_order() {
        let catalog = Catalog::company().expect("company catalog");
        let result = GalleryFilter::default().apply(catalog.entries());
        assert_eq!(titles(&result), ["Client Meeting", "1-Year Anniversary"]);
    }

    #[test]
    fn search_anniversary_yields_only_anniversary() {
        let catalog = Catalog::company().expect("company catalog");
        let result = filter("anniversary", CategoryFilter::All).apply(catalog.entries());
        assert_eq!(titles(&result), ["1-Year Anniversary"]);
    }

    #[test]
    fn unmatched_search_yields_empty() {
        let catalog = Catalog::company().expect("company catalog");
        let result = filter("zzz", CategoryFilter::All).apply(catalog.entries());
        assert!(result.is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = Catalog::company().expect("company catalog");
        let upper = filter("CLIENT", CategoryFilter::All).apply(catalog.entries());
        let mixed = filter("cLiEnT mEeT", CategoryFilter::All).apply(catalog.entries());
        assert_eq!(titles(&upper), ["Client Meeting"]);
        assert_eq!(titles(&mixed), ["Client Meeting"]);
    }

    #[test]
    fn category_absent_from_catalog_yields_empty() {
        let catalog = Catalog::company().expect("company catalog");
        let result = filter("", CategoryFilter::Only(Category::Office)).apply(catalog.entries());
        assert!(result.is_empty());
    }

    #[test]
    fn results_satisfy_both_predicates_and_are_subset() {
        let catalog = mixed_catalog();
        let searches = ["", "e", "client", "rust", "description", "zzz", "TEAM"];
        let mut categories = vec![CategoryFilter::All];
        categories.extend(Category::ALL.into_iter().map(CategoryFilter::Only));

        for search in searches {
            for category in &categories {
                let f = filter(search, *category);
                let result = f.apply(catalog.entries());
                let needle = search.to_lowercase();
                for entry in &result {
                    assert!(catalog.get(entry.id()).is_some());
                    assert!(category.matches(entry.category()));
                    assert!(entry.matches_lowercase(&needle));
                    assert!(f.matches(entry));
                }
                // Exactly the matching entries, none dropped.
                let expected = catalog.entries().iter().filter(|e| f.matches(e)).count();
                assert_eq!(result.len(), expected);
            }
        }
    }

    #[test]
    fn result_preserves_catalog_order() {
        let catalog = mixed_catalog();
        let result = filter("description", CategoryFilter::All).apply(catalog.entries());
        let ids: Vec<u32> = result.iter().map(|e| e.id().value()).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[test]
    fn is_active_and_clear() {
        let mut f = filter("x", CategoryFilter::Only(Category::Team));
        assert!(f.is_active());
        f.clear();
        assert!(!f.is_active());
        assert_eq!(f, GalleryFilter::default());
    }

    #[test]
    fn category_filter_labels() {
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(CategoryFilter::Only(Category::Events).label(), "Events");
    }
}
