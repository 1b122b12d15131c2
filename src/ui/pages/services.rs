// SPDX-License-Identifier: MPL-2.0
//! Services page: what the company builds for clients.

use super::{Link, ViewContext};
use crate::app::route::Route;
use crate::ui::components::page;
use crate::ui::design_tokens::spacing;
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, column, text, Column, Svg};
use iced::{alignment, Element, Length};

/// Offered services: icon and i18n key stem (`<stem>-title`, `<stem>-body`).
pub const SERVICES: [(fn() -> Svg<'static>, &str); 6] = [
    (icons::code, "service-web"),
    (icons::phone, "service-mobile"),
    (icons::building, "service-cloud"),
    (icons::search, "service-data"),
    (icons::camera, "service-design"),
    (icons::briefcase, "service-consulting"),
];

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Link> {
    let i18n = ctx.i18n;

    let cards = SERVICES
        .iter()
        .map(|&(icon, stem)| {
            page::feature_card(
                icon(),
                i18n.tr(&format!("{stem}-title")),
                i18n.tr(&format!("{stem}-body")),
            )
        })
        .collect();

    let offer = page::section(
        column![
            page::heading(
                i18n.tr("services-offer-title"),
                Some(i18n.tr("services-offer-lead"))
            ),
            page::grid(cards, ctx.columns),
        ]
        .spacing(spacing::XL)
        .into(),
    );

    let cta = page::band(
        column![
            page::heading(i18n.tr("services-cta-title"), None),
            button(text(i18n.tr("services-cta-button")))
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
        .push(page::hero(
            icons::code(),
            i18n.tr("services-hero-title"),
            i18n.tr("services-hero-subtitle"),
        ))
        .push(offer)
        .push(cta)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn every_service_is_translated() {
        let i18n = I18n::default();
        for (_, stem) in SERVICES {
            assert!(!i18n.tr(&format!("{stem}-title")).starts_with("MISSING"));
            assert!(!i18n.tr(&format!("{stem}-body")).starts_with("MISSING"));
        }
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let _ = view(ViewContext {
            i18n: &i18n,
            columns: 3,
        });
    }
}
