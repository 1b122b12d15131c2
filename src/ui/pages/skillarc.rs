// SPDX-License-Identifier: MPL-2.0
//! SkillArc: the student learning programme, shown as a standalone page
//! without the page transition.

use super::{Link, ViewContext};
use crate::app::route::Route;
use crate::ui::components::page;
use crate::ui::design_tokens::spacing;
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, column, text, Column, Svg};
use iced::{alignment, Element, Length};

const TRACKS: [(fn() -> Svg<'static>, &str, &str); 3] = [
    (icons::code, "skillarc-track-web-title", "skillarc-track-web-body"),
    (icons::search, "skillarc-track-data-title", "skillarc-track-data-body"),
    (icons::camera, "skillarc-track-design-title", "skillarc-track-design-body"),
];

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Link> {
    let i18n = ctx.i18n;

    let tracks = TRACKS
        .iter()
        .map(|&(icon, title, body)| page::feature_card(icon(), i18n.tr(title), i18n.tr(body)))
        .collect();

    let actions = column![
        button(text(i18n.tr("skillarc-apply")))
            .on_press(Link::Navigate(Route::InternshipApplication))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary),
        button(text(i18n.tr("skillarc-back-home")))
            .on_press(Link::Navigate(Route::Home))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::secondary),
    ]
    .spacing(spacing::SM)
    .align_x(alignment::Horizontal::Center);

    Column::new()
        .push(page::hero(
            icons::calendar(),
            i18n.tr("skillarc-hero-title"),
            i18n.tr("skillarc-hero-subtitle"),
        ))
        .push(page::section(
            column![
                page::heading(i18n.tr("skillarc-tracks-title"), None),
                page::grid(tracks, ctx.columns.min(TRACKS.len())),
                actions,
            ]
            .spacing(spacing::XL)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into(),
        ))
        .into()
}
