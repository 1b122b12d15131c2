// SPDX-License-Identifier: MPL-2.0
//! Landing page.

use super::{Link, ViewContext};
use crate::app::route::Route;
use crate::ui::components::page;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, column, row, text, Column, Svg};
use iced::{alignment, Element, Length};

/// Highlight cards: icon, title key, body key.
const HIGHLIGHTS: [(fn() -> Svg<'static>, &str, &str); 3] = [
    (icons::code, "home-highlight-build-title", "home-highlight-build-body"),
    (icons::users, "home-highlight-team-title", "home-highlight-team-body"),
    (icons::briefcase, "home-highlight-partner-title", "home-highlight-partner-body"),
];

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Link> {
    let i18n = ctx.i18n;

    let actions = row![
        button(text(i18n.tr("home-cta-services")))
            .on_press(Link::Navigate(Route::Services))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary),
        button(text(i18n.tr("home-cta-careers")))
            .on_press(Link::Navigate(Route::Career))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::secondary),
    ]
    .spacing(spacing::SM);

    let hero = column![
        page::hero(
            icons::building(),
            i18n.tr("home-hero-title"),
            i18n.tr("home-hero-subtitle"),
        ),
        page::band(
            column![actions]
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .into()
        ),
    ];

    let highlights = HIGHLIGHTS
        .iter()
        .map(|&(icon, title, body)| page::feature_card(icon(), i18n.tr(title), i18n.tr(body)))
        .collect();

    let what_we_do = page::section(
        column![
            page::heading(
                i18n.tr("home-what-title"),
                Some(i18n.tr("home-what-lead"))
            ),
            page::grid(highlights, ctx.columns.min(HIGHLIGHTS.len())),
        ]
        .spacing(spacing::XL)
        .into(),
    );

    let contact = page::band(
        column![
            text(i18n.tr("home-contact-title")).size(typography::TITLE_MD),
            button(text(i18n.tr("home-contact-cta")))
                .on_press(Link::Navigate(Route::Contact))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        ]
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into(),
    );

    Column::new()
        .push(hero)
        .push(what_we_do)
        .push(contact)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let _ = view(ViewContext {
            i18n: &i18n,
            columns: 3,
        });
    }
}
