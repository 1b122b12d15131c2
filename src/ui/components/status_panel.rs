// SPDX-License-Identifier: MPL-2.0
//! Status panel with consistent styling.
//!
//! Shows a tinted icon, a title, a message and an optional action button.
//! Used for load failures and empty states.
//!
//! ```ignore
//! StatusPanel::new(Tone::Error)
//!     .title(i18n.tr("products-error-title"))
//!     .message(err.to_string())
//!     .action(i18n.tr("products-retry"), Message::Retry)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Svg};
use iced::{alignment, Color, Element, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Error,
    Warning,
    Info,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Error => palette::ERROR_500,
            Tone::Warning => palette::WARNING_500,
            Tone::Info => palette::INFO_500,
        }
    }

    pub fn icon(self) -> Svg<'static> {
        match self {
            Tone::Error | Tone::Warning => icons::warning(),
            Tone::Info => icons::info(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusPanel<Message> {
    tone: Tone,
    title: Option<String>,
    message: Option<String>,
    action: Option<(String, Message)>,
}

impl<Message> Default for StatusPanel<Message> {
    fn default() -> Self {
        Self {
            tone: Tone::default(),
            title: None,
            message: None,
            action: None,
        }
    }
}

impl<Message: Clone + 'static> StatusPanel<Message> {
    pub fn new(tone: Tone) -> Self {
        Self {
            tone,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let accent = self.tone.color();
        let icon = icons::tinted(icons::sized(self.tone.icon(), sizing::ICON_XL), accent);

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title) = self.title {
            content = content.push(text(title).size(typography::TITLE_MD).style(
                move |_theme: &Theme| text::Style {
                    color: Some(accent),
                },
            ));
        }

        if let Some(message) = self.message {
            content = content.push(text(message).size(typography::BODY));
        }

        if let Some((label, message)) = self.action {
            content = content.push(
                button(text(label))
                    .on_press(message)
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary),
            );
        }

        let body = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Top)
            .push(icon)
            .push(content);

        Container::new(body)
            .width(Length::Fill)
            .max_width(sizing::FORM_WIDTH)
            .padding(spacing::LG)
            .style(move |theme: &Theme| {
                let palette = theme.extended_palette();
                iced::widget::container::Style {
                    background: Some(palette.background.weak.color.into()),
                    border: iced::Border {
                        color: accent,
                        width: 1.0,
                        radius: radius::MD.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Retry,
    }

    #[test]
    fn tones_have_distinct_colors() {
        assert_ne!(Tone::Error.color(), Tone::Warning.color());
        assert_ne!(Tone::Warning.color(), Tone::Info.color());
    }

    #[test]
    fn builder_collects_fields() {
        let panel: StatusPanel<TestMessage> = StatusPanel::new(Tone::Warning)
            .title("Heads up")
            .message("Something happened")
            .action("Retry", TestMessage::Retry);

        assert_eq!(panel.tone, Tone::Warning);
        assert_eq!(panel.title.as_deref(), Some("Heads up"));
        assert_eq!(panel.message.as_deref(), Some("Something happened"));
        assert!(panel.action.is_some());
        let _ = panel.view();
    }

    #[test]
    fn default_tone_is_error() {
        let panel: StatusPanel<TestMessage> = StatusPanel::default();
        assert_eq!(panel.tone, Tone::Error);
    }
}
