// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are single-color SVGs embedded at compile time via `include_bytes!`
//! and tinted at draw time, so one file serves both themes. Handles are cached
//! with `OnceLock`.
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let heart = icons::tinted(icons::heart(), palette::HEART_500);
//! ```
//!
//! Icons use visual names (`heart`, `chevron_left`), not the action they
//! trigger.

use crate::domain::gallery::Category;
use crate::ui::theming::ColorScheme;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// Gallery categories
define_icon!(users, "users.svg", "Two people: team category.");
define_icon!(code, "code.svg", "Angle brackets: technology category.");
define_icon!(briefcase, "briefcase.svg", "Briefcase: projects, jobs.");
define_icon!(calendar, "calendar.svg", "Calendar page: events category.");
define_icon!(building, "building.svg", "Office building.");
define_icon!(camera, "camera.svg", "Camera: generic gallery fallback.");

// Gallery actions
define_icon!(heart, "heart.svg", "Heart outline: not a favorite.");
define_icon!(heart_filled, "heart_filled.svg", "Filled heart: favorite.");
define_icon!(search, "search.svg", "Magnifier for the search box.");
define_icon!(cross, "cross.svg", "Close / dismiss.");
define_icon!(chevron_left, "chevron_left.svg", "Previous slide.");
define_icon!(chevron_right, "chevron_right.svg", "Next slide.");
define_icon!(chevron_down, "chevron_down.svg", "Dropdown trigger.");

// Shell
define_icon!(hamburger, "hamburger.svg", "Three bars: mobile menu toggle.");
define_icon!(arrow_up, "arrow_up.svg", "Scroll to top.");
define_icon!(mail, "mail.svg", "Envelope.");
define_icon!(phone, "phone.svg", "Telephone handset.");
define_icon!(map_pin, "map_pin.svg", "Location marker.");
define_icon!(linkedin, "linkedin.svg", "LinkedIn logo.");
define_icon!(instagram, "instagram.svg", "Instagram logo.");
define_icon!(upload, "upload.svg", "File upload.");

// Notifications
define_icon!(checkmark, "checkmark.svg", "Success.");
define_icon!(info, "info.svg", "Information.");
define_icon!(warning, "warning.svg", "Warning triangle.");

/// Icon shown next to a gallery category.
pub fn for_category<'a>(category: Option<Category>) -> Svg<'a> {
    match category {
        Some(Category::Team) => users(),
        Some(Category::Technology) => code(),
        Some(Category::Projects) => briefcase(),
        Some(Category::Events) => calendar(),
        Some(Category::Office) => building(),
        None => camera(),
    }
}

/// Square icon of `size` logical pixels.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tint with a fixed color.
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

/// Tint with the theme's primary text color.
pub fn themed<'a>(icon: Svg<'a>) -> Svg<'a> {
    icon.style(|theme: &Theme, _status| svg::Style {
        color: Some(ColorScheme::of(theme).text_primary),
    })
}

/// Tint with the theme's brand color.
pub fn branded<'a>(icon: Svg<'a>) -> Svg<'a> {
    icon.style(|theme: &Theme, _status| svg::Style {
        color: Some(ColorScheme::of(theme).brand_primary),
    })
}
