// SPDX-License-Identifier: MPL-2.0
//! Page scaffolding: hero banner, centered sections and feature cards.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{column, container, text, Column, Row, Svg};
use iced::{alignment, Element, Font, Length};

const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Full-width banner with an icon, a heading and a lead paragraph.
pub fn hero<'a, Message: 'a>(
    icon: Svg<'static>,
    title: String,
    subtitle: String,
) -> Element<'a, Message> {
    let content = column![
        icons::tinted(icons::sized(icon, sizing::ICON_XL), palette::WHITE),
        text(title).size(typography::HERO).font(BOLD),
        text(subtitle).size(typography::BODY_LG),
    ]
    .spacing(spacing::SM)
    .align_x(alignment::Horizontal::Center)
    .max_width(sizing::CONTENT_MAX_WIDTH);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .style(styles::container::hero)
        .into()
}

/// Centers `content` within the content width.
pub fn section<'a, Message: 'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(container(content).max_width(sizing::CONTENT_MAX_WIDTH))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .into()
}

/// Same as [`section`] on the alternate background.
pub fn band<'a, Message: 'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(section(content))
        .width(Length::Fill)
        .style(styles::container::band)
        .into()
}

pub fn heading<'a, Message: 'a>(title: String, lead: Option<String>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(text(title).size(typography::TITLE_LG).font(BOLD));
    if let Some(lead) = lead {
        column = column.push(text(lead).size(typography::BODY_LG));
    }
    column.into()
}

/// Card with a branded icon, a title and a short paragraph.
pub fn feature_card<'a, Message: 'a>(
    icon: Svg<'static>,
    title: String,
    body: String,
) -> Element<'a, Message> {
    container(
        column![
            icons::branded(icons::sized(icon, sizing::ICON_LG)),
            text(title).size(typography::TITLE_SM).font(BOLD),
            text(body).size(typography::BODY),
        ]
        .spacing(spacing::SM),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card)
    .into()
}

/// Lays `items` out in rows of `columns`.
pub fn grid<'a, Message: 'a>(
    items: Vec<Element<'a, Message>>,
    columns: usize,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing::LG);
    let mut row = Row::new().spacing(spacing::LG);
    let mut filled = 0;
    for item in items {
        row = row.push(item);
        filled += 1;
        if filled == columns {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::LG);
            filled = 0;
        }
    }
    if filled > 0 {
        rows = rows.push(row);
    }
    rows.into()
}
