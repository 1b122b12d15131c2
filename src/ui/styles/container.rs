// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Alternating section band.
pub fn band(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Hero banner at the top of a page.
pub fn hero(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_900)),
        text_color: Some(palette::WHITE),
        border: Border {
            color: colors.brand_secondary,
            width: 0.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Raised card (gallery entries, benefits, products).
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.surface_tertiary,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Navbar bar. The sticky variant is opaque with a shadow.
pub fn navbar(sticky: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::of(theme);
        let base = colors.surface_primary;
        container::Style {
            background: Some(Background::Color(Color {
                a: if sticky { opacity::OPAQUE } else { opacity::SURFACE },
                ..base
            })),
            text_color: Some(colors.text_primary),
            border: Border {
                color: colors.surface_tertiary,
                width: if sticky { 1.0 } else { 0.0 },
                radius: radius::NONE.into(),
            },
            shadow: if sticky { shadow::MD } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Dropdown panel under the About trigger.
pub fn dropdown(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.surface_tertiary,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Footer band.
pub fn footer(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.footer_background)),
        text_color: Some(colors.footer_text),
        ..Default::default()
    }
}

/// Dimmed full-window veil behind a modal.
pub fn veil(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::of(theme).overlay_background)),
        ..Default::default()
    }
}

/// Page-transition veil with a given opacity (0 = invisible).
pub fn transition_veil(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = ColorScheme::of(theme).surface_primary;
        container::Style {
            background: Some(Background::Color(Color {
                a: alpha.clamp(0.0, 1.0),
                ..base
            })),
            ..Default::default()
        }
    }
}

/// Modal dialog surface.
pub fn modal(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.surface_tertiary,
            width: 1.0,
            radius: radius::XL.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dark stage behind slideshow images.
pub fn stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small pill label (category badge, tags).
pub fn badge(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.brand_primary
        })),
        text_color: Some(colors.brand_primary),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Informational banner (career hero, products notice).
pub fn info_banner(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.accent
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: colors.accent,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Inline form error.
pub fn error_banner(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.error
        })),
        text_color: Some(colors.error),
        border: Border {
            color: colors.error,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Placeholder shown while an image downloads or after it failed.
pub fn image_placeholder(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_tertiary)),
        text_color: Some(colors.text_tertiary),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticky_navbar_has_shadow() {
        let sticky = navbar(true)(&Theme::Light);
        let floating = navbar(false)(&Theme::Light);
        assert_eq!(sticky.shadow, shadow::MD);
        assert_eq!(floating.shadow, shadow::NONE);
    }

    #[test]
    fn transition_veil_clamps_alpha() {
        let style = transition_veil(3.0)(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 1.0),
            other => panic!("unexpected background {other:?}"),
        }
    }
}
