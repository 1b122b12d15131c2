// SPDX-License-Identifier: MPL-2.0
//! Informational pages.
//!
//! Most pages are stateless and only emit [`Link`] messages. Login and
//! Products keep a little state of their own and follow the usual
//! `State`/`Message`/`Event` split.

pub mod about;
pub mod admin;
pub mod contact;
pub mod home;
pub mod login;
pub mod products;
pub mod services;
pub mod skillarc;

use crate::app::route::Route;
use crate::i18n::I18n;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Cards per grid row for the current window width.
    pub columns: usize,
}

/// Message of the stateless pages: follow an internal or external link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Navigate(Route),
    OpenUrl(&'static str),
}
