// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Pages
//!
//! - [`pages`] - Home, About, Services, Products, Contact, Login, SkillArc, Admin
//! - [`gallery`] - Searchable gallery with the slideshow modal
//! - [`career`] - Career page, application modal and standalone form
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] / [`footer`] - Site chrome around every page
//! - [`transition`] - Page exit/enter animation
//! - [`components`] - Page sections and status panels
//! - [`widgets`] - Custom Iced widgets (spinner, scroll gate)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering
//! - [`notifications`] - Toast notification system for user feedback

pub mod career;
pub mod components;
pub mod design_tokens;
pub mod footer;
pub mod gallery;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod pages;
pub mod styles;
pub mod theming;
pub mod transition;
pub mod widgets;
