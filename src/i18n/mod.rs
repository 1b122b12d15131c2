// SPDX-License-Identifier: MPL-2.0
//! Localization of every user-facing string.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/`. The
//! active locale is resolved from the `--lang` flag, then `settings.toml`,
//! then the operating system, and finally falls back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
