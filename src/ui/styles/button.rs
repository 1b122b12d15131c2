// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand button for the main action of a section.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    let (background, shadow) = match status {
        button::Status::Active | button::Status::Pressed => (colors.brand_primary, shadow::SM),
        button::Status::Hovered => (colors.brand_secondary, shadow::MD),
        button::Status::Disabled => {
            return disabled(theme, status);
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: colors.brand_secondary,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

/// Outlined button for secondary actions (Cancel, Close).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    match status {
        button::Status::Disabled => disabled(theme, status),
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(colors.surface_tertiary)),
            text_color: colors.text_primary,
            border: Border {
                color: colors.brand_primary,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.surface_secondary)),
            text_color: colors.text_primary,
            border: Border {
                color: colors.text_tertiary,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Grayed out, non-interactive.
pub fn disabled(theme: &Theme, _status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;
    button::Style {
        background: Some(Background::Color(if is_dark {
            palette::GRAY_700
        } else {
            palette::GRAY_200
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navbar and footer link. `active` highlights the current route.
pub fn link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::of(theme);
        let text_color = match (active, status) {
            (true, _) => colors.brand_primary,
            (false, button::Status::Hovered) => colors.brand_secondary,
            (false, _) => colors.text_secondary,
        };
        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active {
                    colors.brand_primary
                } else {
                    Color::TRANSPARENT
                },
                width: 0.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Link on the dark footer background.
pub fn footer_link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => WHITE,
            _ => colors.footer_text,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Category selector chip.
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::of(theme);
        let (background, text_color) = if selected {
            (colors.brand_primary, WHITE)
        } else if matches!(status, button::Status::Hovered) {
            (colors.surface_tertiary, colors.text_primary)
        } else {
            (colors.surface_secondary, colors.text_secondary)
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: if selected {
                    colors.brand_secondary
                } else {
                    colors.surface_tertiary
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: if selected { shadow::SM } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Round translucent button laid over images (heart, arrows, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Slide indicator dot.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match (active, status) {
            (true, _) => opacity::OPAQUE,
            (false, button::Status::Hovered) => opacity::OVERLAY_HOVER,
            (false, _) => opacity::OVERLAY_MEDIUM,
        };
        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..WHITE })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Transparent full-area button, e.g. a clickable card.
pub fn bare(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::TRANSPARENT,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::light().brand_primary))
        );
    }

    #[test]
    fn primary_disabled_is_gray() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_200)));
    }

    #[test]
    fn active_link_is_highlighted() {
        let active = link(true)(&Theme::Dark, button::Status::Active);
        let idle = link(false)(&Theme::Dark, button::Status::Active);
        assert_ne!(active.text_color, idle.text_color);
    }

    #[test]
    fn overlay_alpha_changes_on_hover() {
        let style_fn = overlay(WHITE, 0.5, 0.8);
        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }
}
