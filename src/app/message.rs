// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::career::{self, form};
use crate::ui::footer;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::pages::{login, products, Link};
use iced::widget::scrollable::Viewport;
use iced::Size;
use std::time::Instant;

/// Arrow keys forwarded to the gallery slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Left,
    Right,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Footer(footer::Message),
    /// Links emitted by the stateless pages.
    Page(Link),
    Gallery(gallery::Message),
    Career(career::Message),
    /// The standalone internship application page.
    Internship(form::Message),
    Products(products::Message),
    Login(login::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved.
    Scrolled(Viewport),
    /// Animation clock, only subscribed while something moves.
    Tick(Instant),
    WindowResized(Size),
    EscapePressed,
    ArrowPressed(Arrow),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Initial route path, e.g. `/Gallery`. Unknown paths open Home.
    pub route: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `LUMBINI_SITE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LUMBINI_SITE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
