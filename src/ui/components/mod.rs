// SPDX-License-Identifier: MPL-2.0
//! Building blocks shared by several pages.
//!
//! - [`page`] - hero banners, content sections and feature cards
//! - [`status_panel`] - error, warning and info panels with an optional action

pub mod page;
pub mod status_panel;

pub use status_panel::{StatusPanel, Tone};
