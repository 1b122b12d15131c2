// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, svg::Svg, text, Column, Container, Row, Space};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders one toast.
pub fn view<'a>(notification: &'a Notification, i18n: &I18n) -> Element<'a, Message> {
    let severity = notification.severity();
    let accent = severity.color();

    let args: Vec<(&str, &str)> = notification
        .args()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let message = i18n.tr_with_args(notification.message_key(), &args);

    let dismiss = button(icons::themed(icons::sized(icons::cross(), sizing::ICON_SM)))
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(styles::button::link(false));

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(
            icons::sized(severity_icon(severity), sizing::ICON_MD),
            accent,
        ))
        .push(
            Container::new(text(message).size(typography::BODY))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_style(theme, accent))
        .into()
}

/// Stack of visible toasts in the bottom-right corner.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &I18n) -> Element<'a, Message> {
    if manager.visible_count() == 0 {
        return Space::new().into();
    }

    let column = Column::with_children(manager.visible().map(|n| view(n, i18n)))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn severity_icon(severity: Severity) -> Svg<'static> {
    match severity {
        Severity::Success => icons::checkmark(),
        Severity::Info => icons::info(),
        Severity::Warning | Severity::Error => icons::warning(),
    }
}

fn toast_style(theme: &Theme, accent: Color) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(iced::Background::Color(colors.surface_primary)),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn toast_border_uses_accent() {
        let style = toast_style(&Theme::Dark, palette::SUCCESS_500);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn every_severity_has_an_icon() {
        for severity in [
            Severity::Success,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ] {
            let _ = severity_icon(severity);
        }
    }
}
