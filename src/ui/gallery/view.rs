// SPDX-License-Identifier: MPL-2.0
//! Gallery page layout: hero, search and category filters, card grid.

use super::{Message, State, ViewContext};
use crate::domain::gallery::{CategoryFilter, GalleryEntry};
use crate::i18n::I18n;
use crate::media::{ImagePrefetchCache, ImageStatus};
use crate::ui::components::page;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{
    button, column, container, image, row, text, text_input, Column, Container, Row, Space, Stack,
};
use iced::{alignment, ContentFit, Element, Length};

/// Tags shown on a card; the modal shows all of them.
const CARD_TAG_LIMIT: usize = 3;

pub(super) fn page<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let browser = state.browser();

    let hero = page::hero(
        icons::camera(),
        i18n.tr("gallery-hero-title"),
        i18n.tr("gallery-hero-subtitle"),
    );

    let filters = column![search_box(i18n, &browser.filter().search_term), category_chips(state, i18n)]
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center);

    let entries = browser.filtered();
    let body: Element<'a, Message> = if entries.is_empty() {
        no_results(i18n)
    } else {
        grid(state, &entries, ctx.columns.max(1), i18n)
    };

    let count = i18n.tr_with_args(
        "gallery-result-count",
        &[
            ("shown", &entries.len().to_string()),
            ("total", &browser.catalog().len().to_string()),
        ],
    );

    Column::new()
        .push(hero)
        .push(page::section(
            column![filters, text(count).size(typography::CAPTION), body]
                .spacing(spacing::LG)
                .align_x(alignment::Horizontal::Center)
                .into(),
        ))
        .into()
}

fn search_box<'a>(i18n: &I18n, term: &str) -> Element<'a, Message> {
    let input = text_input(&i18n.tr("gallery-search-placeholder"), term)
        .on_input(Message::SearchChanged)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .style(styles::text_input::field);

    let mut bar = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::themed(icons::sized(icons::search(), sizing::ICON_MD)))
        .push(input);

    if !term.is_empty() {
        bar = bar.push(
            button(icons::themed(icons::sized(icons::cross(), sizing::ICON_SM)))
                .on_press(Message::ClearSearch)
                .padding(spacing::XS)
                .style(styles::button::link(false)),
        );
    }

    container(bar).max_width(sizing::FORM_WIDTH).into()
}

fn category_chips<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let selected = state.browser().filter().category;
    let chips = state.browser().category_options().into_iter().map(|option| {
        let is_selected = option == selected;
        let label = match option {
            CategoryFilter::All => i18n.tr("gallery-category-all"),
            CategoryFilter::Only(category) => category.label().to_owned(),
        };
        let mut content = Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center);
        if let CategoryFilter::Only(category) = option {
            let icon = icons::sized(icons::for_category(Some(category)), sizing::ICON_SM);
            content = content.push(if is_selected {
                icons::tinted(icon, palette::WHITE)
            } else {
                icons::themed(icon)
            });
        }
        content = content.push(text(label).size(typography::BODY));

        button(content)
            .on_press(Message::CategorySelected(option))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::chip(is_selected))
            .into()
    });

    Row::with_children(chips).spacing(spacing::XS).into()
}

fn grid<'a>(
    state: &'a State,
    entries: &[&'a GalleryEntry],
    columns: usize,
    i18n: &I18n,
) -> Element<'a, Message> {
    let rows = entries.chunks(columns).map(|chunk| {
        let mut row = Row::new().spacing(spacing::LG);
        for entry in chunk {
            row = row.push(card(state, entry, i18n));
        }
        row.into()
    });

    Column::with_children(rows)
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn card<'a>(state: &'a State, entry: &'a GalleryEntry, i18n: &I18n) -> Element<'a, Message> {
    let favorite = state.browser().is_favorite(entry.id());
    let heart = if favorite {
        icons::tinted(icons::heart_filled(), palette::HEART_500)
    } else {
        icons::tinted(icons::heart(), palette::WHITE)
    };
    let heart_button = button(icons::sized(heart, sizing::ICON_SM))
        .on_press(Message::ToggleFavorite(entry.id()))
        .padding(spacing::XS)
        .style(styles::button::overlay(palette::WHITE, 0.45, 0.7));

    let cover = Stack::new()
        .push(picture(
            state.images(),
            entry.cover(),
            Length::Fill,
            Length::Fixed(sizing::CARD_IMAGE_HEIGHT),
            i18n,
        ))
        .push(
            container(heart_button)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .padding(spacing::XS),
        );

    let tags = entry
        .tags()
        .iter()
        .take(CARD_TAG_LIMIT)
        .fold(Row::new().spacing(spacing::XXS), |row, tag| row.push(tag_pill(tag)));

    let photos = i18n.tr_with_args(
        "gallery-photo-count",
        &[("count", &entry.image_count().to_string())],
    );

    let details = column![
        category_badge(entry),
        text(entry.title()).size(typography::TITLE_SM),
        text(entry.description()).size(typography::BODY_SM),
        tags,
        text(photos).size(typography::CAPTION),
    ]
    .spacing(spacing::XS)
    .padding(spacing::MD);

    let body = container(column![cover, details])
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card);

    button(body)
        .on_press(Message::Open(entry.id()))
        .padding(0)
        .style(styles::button::bare)
        .into()
}

pub(super) fn category_badge<'a>(entry: &GalleryEntry) -> Element<'a, Message> {
    container(
        row![
            icons::branded(icons::sized(
                icons::for_category(Some(entry.category())),
                sizing::ICON_SM
            )),
            text(entry.category().label()).size(typography::CAPTION),
        ]
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::container::badge)
    .into()
}

pub(super) fn tag_pill<'a>(tag: &str) -> Element<'a, Message> {
    container(text(format!("#{tag}")).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::badge)
        .into()
}

/// Image from the cache, or a placeholder while loading or after failure.
pub(super) fn picture<'a>(
    images: &'a ImagePrefetchCache,
    url: &str,
    width: Length,
    height: Length,
    i18n: &I18n,
) -> Element<'a, Message> {
    match images.status(url) {
        ImageStatus::Ready(data) => image(data.handle.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        ImageStatus::Loading | ImageStatus::Unrequested => {
            placeholder(i18n.tr("gallery-image-loading"), width, height)
        }
        ImageStatus::Failed => placeholder(i18n.tr("gallery-image-unavailable"), width, height),
    }
}

fn placeholder<'a>(label: String, width: Length, height: Length) -> Element<'a, Message> {
    Container::new(
        column![
            icons::themed(icons::sized(icons::camera(), sizing::ICON_LG)),
            text(label).size(typography::CAPTION),
        ]
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center),
    )
    .width(width)
    .height(height)
    .center_x(width)
    .center_y(height)
    .style(styles::container::image_placeholder)
    .into()
}

fn no_results<'a>(i18n: &I18n) -> Element<'a, Message> {
    column![
        icons::themed(icons::sized(icons::camera(), sizing::ICON_XL)),
        text(i18n.tr("gallery-no-results-title")).size(typography::TITLE_MD),
        text(i18n.tr("gallery-no-results-hint")).size(typography::BODY),
        Space::new().height(spacing::XL),
    ]
    .spacing(spacing::SM)
    .align_x(alignment::Horizontal::Center)
    .into()
}
