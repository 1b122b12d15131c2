// SPDX-License-Identifier: MPL-2.0
//! About Us page: story, mission and vision, values.

use super::{Link, ViewContext};
use crate::app::route::Route;
use crate::ui::components::page;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, column, text, Column, Svg};
use iced::{alignment, Element, Length};

/// Year the company was founded.
const FOUNDED: i32 = 2023;

const VALUES: [(fn() -> Svg<'static>, &str, &str); 4] = [
    (icons::code, "about-value-craft-title", "about-value-craft-body"),
    (icons::users, "about-value-people-title", "about-value-people-body"),
    (icons::heart, "about-value-care-title", "about-value-care-body"),
    (icons::checkmark, "about-value-trust-title", "about-value-trust-body"),
];

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Link> {
    let i18n = ctx.i18n;

    let story = page::section(
        column![
            page::heading(i18n.tr("about-story-title"), None),
            text(i18n.tr_with_args(
                "about-story-body",
                &[("year", &FOUNDED.to_string())]
            ))
            .size(typography::BODY_LG),
        ]
        .spacing(spacing::LG)
        .into(),
    );

    let purpose = page::band(
        page::grid(
            vec![
                page::feature_card(
                    icons::briefcase(),
                    i18n.tr("about-mission-title"),
                    i18n.tr("about-mission-body"),
                ),
                page::feature_card(
                    icons::search(),
                    i18n.tr("about-vision-title"),
                    i18n.tr("about-vision-body"),
                ),
            ],
            ctx.columns.min(2),
        ),
    );

    let values = VALUES
        .iter()
        .map(|&(icon, title, body)| page::feature_card(icon(), i18n.tr(title), i18n.tr(body)))
        .collect();

    let values = page::section(
        column![
            page::heading(i18n.tr("about-values-title"), None),
            page::grid(values, ctx.columns.min(VALUES.len())),
            button(text(i18n.tr("about-gallery-cta")))
                .on_press(Link::Navigate(Route::Gallery))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        ]
        .spacing(spacing::XL)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into(),
    );

    Column::new()
        .push(page::hero(
            icons::users(),
            i18n.tr("about-hero-title"),
            i18n.tr("about-hero-subtitle"),
        ))
        .push(story)
        .push(purpose)
        .push(values)
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
            columns: 1,
        });
    }
}
