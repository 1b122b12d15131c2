// SPDX-License-Identifier: MPL-2.0
//! Modal slideshow over one entry's images.
//!
//! The slide index always stays in `[0, image_count)`: previous/next wrap
//! with modular arithmetic instead of clamping.

use super::entry::GalleryEntry;

/// An open modal: the selected entry and the current slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slideshow {
    entry: GalleryEntry,
    index: usize,
}

impl Slideshow {
    /// Opens `entry` on its cover image.
    #[must_use]
    pub fn open(entry: GalleryEntry) -> Self {
        Self { entry, index: 0 }
    }

    #[must_use]
    pub fn entry(&self) -> &GalleryEntry {
        &self.entry
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entry.image_count()
    }

    /// Whether prev/next controls and slide dots are shown.
    #[must_use]
    pub fn has_multiple(&self) -> bool {
        self.total() > 1
    }

    /// URL of the slide currently shown.
    #[must_use]
    pub fn current_image(&self) -> &str {
        &self.entry.images()[self.index]
    }

    /// Advances one slide, wrapping to the first. Returns the new index.
    pub fn next(&mut self) -> usize {
        let total = self.total();
        self.index = (self.index + 1) % total;
        self.index
    }

    /// Goes back one slide, wrapping to the last. Returns the new index.
    pub fn previous(&mut self) -> usize {
        let total = self.total();
        self.index = (self.index + total - 1) % total;
        self.index
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    ///
    /// Returns `true` if the index changed to `index`.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.total() {
            self.index = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{Category, EntryId};

    fn entry_with(n: usize) -> GalleryEntry {
        GalleryEntry::new(
            EntryId::new(1),
            "Slides",
            "",
            Category::Events,
            (0..n).map(|i| format!("https://example.com/{i}.jpg")).collect(),
            Vec::new(),
        )
        .expect("valid entry")
    }

    #[test]
    fn open_starts_at_cover() {
        let show = Slideshow::open(entry_with(3));
        assert_eq!(show.index(), 0);
        assert_eq!(show.current_image(), "https://example.com/0.jpg");
    }

    #[test]
    fn previous_from_first_wraps_to_last_then_next_returns() {
        let mut show = Slideshow::open(entry_with(3));
        assert_eq!(show.previous(), 2);
        assert_eq!(show.next(), 0);
    }

    #[test]
    fn n_nexts_return_to_start() {
        for n in 1..=6 {
            for start in 0..n {
                let mut show = Slideshow::open(entry_with(n));
                show.select(start);
                for _ in 0..n {
                    show.next();
                }
                assert_eq!(show.index(), start, "n={n} start={start}");
            }
        }
    }

    #[test]
    fn previous_is_inverse_of_next() {
        for n in 1..=5 {
            for start in 0..n {
                let mut show = Slideshow::open(entry_with(n));
                show.select(start);
                show.next();
                show.previous();
                assert_eq!(show.index(), start);
                show.previous();
                show.next();
                assert_eq!(show.index(), start);
            }
        }
    }

    #[test]
    fn single_image_navigation_is_noop() {
        let mut show = Slideshow::open(entry_with(1));
        assert!(!show.has_multiple());
        assert_eq!(show.next(), 0);
        assert_eq!(show.previous(), 0);
    }

    #[test]
    fn select_sets_index_absolutely() {
        let mut show = Slideshow::open(entry_with(3));
        assert!(show.select(2));
        assert_eq!(show.current_image(), "https://example.com/2.jpg");
        assert!(!show.select(3));
        assert_eq!(show.index(), 2);
    }
}
