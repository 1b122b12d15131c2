// SPDX-License-Identifier: MPL-2.0
//! Contact page: address, email, phone and social profiles.

use super::{Link, ViewContext};
use crate::ui::components::page;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::footer::{
    CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, INSTAGRAM_URL, LINKEDIN_URL,
};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, column, container, row, text, Column, Svg};
use iced::{alignment, Element, Length};

const MAILTO: &str = "mailto:lumbini.technologies01@gmail.com";
const TEL: &str = "tel:+919848294006";

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Link> {
    let i18n = ctx.i18n;

    let channels = vec![
        channel(
            icons::mail(),
            i18n.tr("contact-email-title"),
            CONTACT_EMAIL,
            Some(MAILTO),
        ),
        channel(
            icons::phone(),
            i18n.tr("contact-phone-title"),
            CONTACT_PHONE,
            Some(TEL),
        ),
        channel(
            icons::map_pin(),
            i18n.tr("contact-office-title"),
            CONTACT_LOCATION,
            None,
        ),
    ];

    let social = row![
        social_button(icons::linkedin(), "LinkedIn", LINKEDIN_URL),
        social_button(icons::instagram(), "Instagram", INSTAGRAM_URL),
    ]
    .spacing(spacing::SM);

    let body = page::section(
        column![
            page::heading(
                i18n.tr("contact-reach-title"),
                Some(i18n.tr("contact-reach-lead"))
            ),
            page::grid(channels, ctx.columns.min(3)),
            text(i18n.tr("contact-social-title")).size(typography::TITLE_SM),
            social,
        ]
        .spacing(spacing::XL)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into(),
    );

    Column::new()
        .push(page::hero(
            icons::mail(),
            i18n.tr("contact-hero-title"),
            i18n.tr("contact-hero-subtitle"),
        ))
        .push(body)
        .into()
}

fn channel<'a>(
    icon: Svg<'static>,
    title: String,
    value: &'static str,
    link: Option<&'static str>,
) -> Element<'a, Link> {
    let value = button(text(value).size(typography::BODY_LG))
        .on_press_maybe(link.map(Link::OpenUrl))
        .padding(0)
        .style(styles::button::link(false));

    container(
        column![
            icons::branded(icons::sized(icon, sizing::ICON_LG)),
            text(title).size(typography::TITLE_SM),
            value,
        ]
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card)
    .into()
}

fn social_button<'a>(icon: Svg<'static>, label: &'static str, url: &'static str) -> Element<'a, Link> {
    button(
        row![icons::themed(icons::sized(icon, sizing::ICON_SM)), text(label)]
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(Link::OpenUrl(url))
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::secondary)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn links_match_footer_details() {
        assert!(MAILTO.ends_with(CONTACT_EMAIL));
        let digits: String = CONTACT_PHONE.chars().filter(char::is_ascii_digit).collect();
        assert!(TEL.ends_with(&digits));
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
