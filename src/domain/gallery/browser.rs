// SPDX-License-Identifier: MPL-2.0
//! Gallery browser state: catalog, filter, favorites and the open slideshow.
//!
//! This is the single owner of every piece of gallery state. The UI layer
//! holds one `GalleryBrowser` and forwards user intents to it.

use super::catalog::Catalog;
use super::entry::{EntryId, GalleryEntry};
use super::favorites::Favorites;
use super::filter::{CategoryFilter, GalleryFilter};
use super::slideshow::Slideshow;

/// Complete gallery state.
#[derive(Debug, Clone, Default)]
pub struct GalleryBrowser {
    catalog: Catalog,
    filter: GalleryFilter,
    favorites: Favorites,
    selection: Option<Slideshow>,
}

impl GalleryBrowser {
    /// Creates a browser with default filter, no favorites and no selection.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: GalleryFilter::default(),
            favorites: Favorites::new(),
            selection: None,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn filter(&self) -> &GalleryFilter {
        &self.filter
    }

    #[must_use]
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Category selector options: `All` followed by catalog categories.
    #[must_use]
    pub fn category_options(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(
                self.catalog
                    .categories()
                    .into_iter()
                    .map(CategoryFilter::Only),
            )
            .collect()
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    /// Entries passing the current filter, in catalog order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&GalleryEntry> {
        self.filter.apply(self.catalog.entries())
    }

    // -------------------------------------------------------------------------
    // Favorites
    // -------------------------------------------------------------------------

    /// Toggles `id` in the favorites set and returns its new membership.
    pub fn toggle_favorite(&mut self, id: EntryId) -> bool {
        self.favorites.toggle(id)
    }

    #[must_use]
    pub fn is_favorite(&self, id: EntryId) -> bool {
        self.favorites.contains(id)
    }

    // -------------------------------------------------------------------------
    // Slideshow
    // -------------------------------------------------------------------------

    /// Opens the slideshow on `id`, starting at its first image.
    ///
    /// Returns the opened entry, or `None` for an unknown id.
    pub fn open(&mut self, id: EntryId) -> Option<&GalleryEntry> {
        let entry = self.catalog.get(id)?.clone();
        self.selection = Some(Slideshow::open(entry));
        self.selection.as_ref().map(Slideshow::entry)
    }

    /// Closes the slideshow. Returns `true` if one was open.
    pub fn close(&mut self) -> bool {
        self.selection.take().is_some()
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Slideshow> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }

    /// Advances the open slideshow. No-op when closed.
    pub fn next_image(&mut self) -> Option<usize> {
        self.selection.as_mut().map(Slideshow::next)
    }

    /// Steps the open slideshow back. No-op when closed.
    pub fn previous_image(&mut self) -> Option<usize> {
        self.selection.as_mut().map(Slideshow::previous)
    }

    /// Jumps to a slide of the open slideshow.
    pub fn select_image(&mut self, index: usize) -> bool {
        self.selection
            .as_mut()
            .is_some_and(|show| show.select(index))
    }
}
