// SPDX-License-Identifier: MPL-2.0
//! Slideshow dialog for one gallery entry.
//!
//! Clicking the veil closes the dialog; clicks on the dialog itself are
//! absorbed by [`opaque`] so they never reach the veil.

use super::view::{category_badge, picture, tag_pill};
use super::{Message, State};
use crate::domain::gallery::Slideshow;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{
    button, column, container, mouse_area, opaque, row, text, Column, Container, Row, Space, Stack,
};
use iced::{alignment, Element, Length};

pub(super) fn view<'a>(
    state: &'a State,
    slideshow: &'a Slideshow,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let entry = slideshow.entry();

    let close = button(icons::themed(icons::sized(icons::cross(), sizing::ICON_MD)))
        .on_press(Message::Close)
        .padding(spacing::XS)
        .style(styles::button::link(false));

    let header = row![
        category_badge(entry),
        Space::new().width(Length::Fill),
        close
    ]
    .align_y(alignment::Vertical::Center);

    let details = column![
        text(entry.title()).size(typography::TITLE_MD),
        text(entry.description()).size(typography::BODY),
        entry
            .tags()
            .iter()
            .fold(Row::new().spacing(spacing::XXS), |row, tag| row.push(tag_pill(tag))),
    ]
    .spacing(spacing::XS);

    let mut dialog = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(stage(state, slideshow, i18n));
    if slideshow.has_multiple() {
        dialog = dialog.push(dots(slideshow));
    }
    let dialog = dialog.push(details).push(actions(state, slideshow, i18n));

    let dialog = Container::new(dialog)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::modal);

    let veil = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::veil),
    )
    .on_press(Message::Close);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(veil)
        .push(
            container(opaque(dialog))
                .width(Length::Fill)
                .height(Length::Fill)
                .center(Length::Fill)
                .padding(spacing::LG),
        )
        .into()
}

/// Current slide with previous/next arrows and a counter overlaid.
fn stage<'a>(state: &'a State, slideshow: &'a Slideshow, i18n: &'a I18n) -> Element<'a, Message> {
    let image = picture(
        state.images(),
        slideshow.current_image(),
        Length::Fill,
        Length::Fixed(sizing::SLIDE_HEIGHT),
        i18n,
    );

    let mut layers = Stack::new().push(
        container(image)
            .width(Length::Fill)
            .style(styles::container::stage),
    );

    if slideshow.has_multiple() {
        let arrow = |icon, message| {
            button(icons::tinted(icons::sized(icon, sizing::ICON_MD), palette::WHITE))
                .on_press(message)
                .padding(spacing::XS)
                .style(styles::button::overlay(palette::WHITE, 0.4, 0.7))
        };
        let counter = container(
            text(format!("{} / {}", slideshow.index() + 1, slideshow.total()))
                .size(typography::CAPTION)
                .color(palette::WHITE),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::veil);

        layers = layers
            .push(
                container(
                    row![
                        arrow(icons::chevron_left(), Message::PreviousImage),
                        Space::new().width(Length::Fill),
                        arrow(icons::chevron_right(), Message::NextImage),
                    ]
                    .align_y(alignment::Vertical::Center),
                )
                .width(Length::Fill)
                .height(Length::Fixed(sizing::SLIDE_HEIGHT))
                .center_y(Length::Fixed(sizing::SLIDE_HEIGHT))
                .padding(spacing::SM),
            )
            .push(
                container(counter)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right)
                    .padding(spacing::SM),
            );
    }

    layers.into()
}

fn dots<'a>(slideshow: &Slideshow) -> Element<'a, Message> {
    let dots = (0..slideshow.total()).map(|index| {
        button(Space::new().width(sizing::SLIDE_DOT).height(sizing::SLIDE_DOT))
            .on_press(Message::SelectImage(index))
            .padding(0)
            .style(styles::button::dot(index == slideshow.index()))
            .into()
    });

    container(Row::with_children(dots).spacing(spacing::XS))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn actions<'a>(state: &'a State, slideshow: &'a Slideshow, i18n: &'a I18n) -> Element<'a, Message> {
    let id = slideshow.entry().id();
    let favorite = state.browser().is_favorite(id);

    let (heart, label) = if favorite {
        (
            icons::tinted(icons::heart_filled(), palette::HEART_500),
            i18n.tr("gallery-favorited"),
        )
    } else {
        (icons::themed(icons::heart()), i18n.tr("gallery-add-favorite"))
    };

    let favorite_button = button(
        row![icons::sized(heart, sizing::ICON_SM), text(label)]
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(Message::ToggleFavorite(id))
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::secondary);

    let share = button(text(i18n.tr("gallery-share")))
        .on_press(Message::Share)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let original = button(text(i18n.tr("gallery-open-original")))
        .on_press(Message::OpenOriginal)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    row![favorite_button, share, Space::new().width(Length::Fill), original]
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .into()
}
