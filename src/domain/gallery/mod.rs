// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! The gallery is a fixed, in-memory catalog of entries. Everything the
//! gallery page does is derived from four pieces of state:
//!
//! - the [`Catalog`] itself (immutable after construction),
//! - a [`GalleryFilter`] (free-text search AND category selector),
//! - a [`Favorites`] set of entry ids,
//! - an optional [`Slideshow`] (the open modal and its slide index).
//!
//! [`GalleryBrowser`] bundles them so both the grid and the modal observe the
//! same favorites set.

pub mod browser;
pub mod catalog;
pub mod entry;
pub mod favorites;
pub mod filter;
pub mod slideshow;

pub use browser::GalleryBrowser;
pub use catalog::Catalog;
pub use entry::{Category, EntryId, GalleryEntry, GalleryError};
pub use favorites::Favorites;
pub use filter::{CategoryFilter, GalleryFilter};
pub use slideshow::Slideshow;
