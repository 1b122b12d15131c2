// SPDX-License-Identifier: MPL-2.0
//! Text input styles for forms and the gallery search box.

use crate::ui::design_tokens::radius;
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Border, Theme};

pub fn field(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let colors = ColorScheme::of(theme);
    let border_color = match status {
        text_input::Status::Focused { .. } => colors.brand_primary,
        text_input::Status::Hovered => colors.text_tertiary,
        text_input::Status::Active | text_input::Status::Disabled => colors.surface_tertiary,
    };
    text_input::Style {
        background: Background::Color(colors.surface_primary),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        icon: colors.text_tertiary,
        placeholder: colors.text_tertiary,
        value: colors.text_primary,
        selection: colors.brand_primary.scale_alpha(0.3),
    }
}

/// Newsletter field on the dark footer.
pub fn footer_field(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let colors = ColorScheme::of(theme);
    text_input::Style {
        background: Background::Color(colors.surface_secondary.scale_alpha(0.1)),
        value: colors.footer_text,
        ..field(theme, status)
    }
}
