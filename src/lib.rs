// SPDX-License-Identifier: MPL-2.0
//! `lumbini_site` is the Lumbini Technologies company site, built with the
//! Iced GUI framework.
//!
//! It provides the informational pages, a searchable photo gallery with a
//! slideshow, and an internship application form with asynchronous
//! submission. Strings are localized with Fluent and preferences persist in
//! `settings.toml`.

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod infrastructure;
pub mod media;
pub mod ui;
