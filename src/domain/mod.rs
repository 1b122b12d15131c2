// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery browser state ([`GalleryEntry`](gallery::GalleryEntry),
//!   [`GalleryFilter`](gallery::GalleryFilter), [`Favorites`](gallery::Favorites),
//!   [`Slideshow`](gallery::Slideshow), [`GalleryBrowser`](gallery::GalleryBrowser))
//! - [`career`]: Internship application form, validation and submission state
//!   ([`ApplicationForm`](career::ApplicationForm), [`SubmissionState`](career::SubmissionState))
//! - [`scroll`]: Page scroll lock bookkeeping ([`ScrollLock`](scroll::ScrollLock))

pub mod career;
pub mod gallery;
pub mod scroll;
