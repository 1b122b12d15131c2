// SPDX-License-Identifier: MPL-2.0
//! Site footer and the floating scroll-to-top button.
//!
//! The newsletter form is a stub: Subscribe never transmits the address, it
//! only asks the parent to show an informational toast.

use crate::app::route::Route;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, column, container, row, rule, text, text_input, Column, Row, Space};
use iced::{alignment::Vertical, Element, Length};

pub const LINKEDIN_URL: &str =
    "https://www.linkedin.com/company/lumbini-technologies/?viewAsMember=true";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/lumbini_technologies/";
pub const CONTACT_EMAIL: &str = "lumbini.technologies01@gmail.com";
pub const CONTACT_PHONE: &str = "+91 98482 94006";
pub const CONTACT_LOCATION: &str = "Vijayawada, India";

/// Quick links: label key and target.
const QUICK_LINKS: [(&str, Route); 6] = [
    ("nav-home", Route::Home),
    ("nav-about-us", Route::About),
    ("nav-services", Route::Services),
    ("nav-products", Route::Products),
    ("footer-careers", Route::Career),
    ("nav-contact", Route::Contact),
];

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub year: i32,
}

#[derive(Debug, Clone)]
pub enum Message {
    NewsletterEmailChanged(String),
    Subscribe,
    Navigate(Route),
    OpenUrl(&'static str),
    ScrollToTop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Route),
    /// Subscribe pressed; nothing was sent anywhere.
    NewsletterStub,
    OpenUrl(&'static str),
    ScrollToTop,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    newsletter_email: String,
}

impl State {
    #[must_use]
    pub fn newsletter_email(&self) -> &str {
        &self.newsletter_email
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NewsletterEmailChanged(value) => {
                self.newsletter_email = value;
                Event::None
            }
            Message::Subscribe => Event::NewsletterStub,
            Message::Navigate(route) => Event::Navigate(route),
            Message::OpenUrl(url) => Event::OpenUrl(url),
            Message::ScrollToTop => Event::ScrollToTop,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let brand = column![
            text(i18n.tr("brand-name")).size(typography::TITLE_MD),
            text(i18n.tr("footer-tagline")).size(typography::BODY_SM),
        ]
        .spacing(spacing::XS)
        .width(Length::FillPortion(2));

        let quick_links = QUICK_LINKS.iter().fold(
            Column::new()
                .spacing(spacing::XXS)
                .push(heading(i18n.tr("footer-quick-links"))),
            |col, &(key, route)| {
                col.push(
                    button(text(i18n.tr(key)).size(typography::BODY_SM))
                        .padding(0)
                        .on_press(Message::Navigate(route))
                        .style(styles::button::footer_link),
                )
            },
        );

        let contact = column![
            heading(i18n.tr("footer-contact")),
            contact_line(icons::map_pin(), CONTACT_LOCATION),
            contact_line(icons::mail(), CONTACT_EMAIL),
            contact_line(icons::phone(), CONTACT_PHONE),
        ]
        .spacing(spacing::XS);

        let newsletter = column![
            heading(i18n.tr("footer-newsletter")),
            text(i18n.tr("footer-newsletter-blurb")).size(typography::BODY_SM),
            row![
                text_input(&i18n.tr("footer-newsletter-placeholder"), &self.newsletter_email)
                    .on_input(Message::NewsletterEmailChanged)
                    .on_submit(Message::Subscribe)
                    .padding(spacing::XS)
                    .style(styles::text_input::footer_field),
                button(text(i18n.tr("footer-subscribe")).size(typography::BODY_SM))
                    .on_press(Message::Subscribe)
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::button::primary),
            ]
            .spacing(spacing::XS),
        ]
        .spacing(spacing::XS)
        .width(Length::FillPortion(2));

        let grid = Row::new()
            .spacing(spacing::XL)
            .push(brand)
            .push(quick_links.width(Length::FillPortion(1)))
            .push(contact.width(Length::FillPortion(2)))
            .push(newsletter);

        let copyright = i18n.tr_with_args("footer-copyright", &[("year", &ctx.year.to_string())]);
        let bottom = row![
            text(copyright).size(typography::CAPTION),
            Space::new().width(Length::Fill),
            button(text(i18n.tr("footer-privacy")).size(typography::CAPTION))
                .padding(0)
                .style(styles::button::footer_link),
            button(text(i18n.tr("footer-terms")).size(typography::CAPTION))
                .padding(0)
                .style(styles::button::footer_link),
            social(icons::linkedin(), LINKEDIN_URL),
            social(icons::instagram(), INSTAGRAM_URL),
        ]
        .spacing(spacing::MD)
        .align_y(Vertical::Center);

        container(
            column![grid, rule::horizontal(1), bottom]
                .spacing(spacing::LG)
                .max_width(sizing::CONTENT_MAX_WIDTH),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .style(styles::container::footer)
        .into()
    }
}

/// Floating button, shown by the parent once scrolled past the threshold.
pub fn scroll_top_button<'a>() -> Element<'a, Message> {
    button(icons::tinted(
        icons::sized(icons::arrow_up(), sizing::ICON_MD),
        iced::Color::WHITE,
    ))
    .on_press(Message::ScrollToTop)
    .padding(spacing::SM)
    .style(styles::button::primary)
    .into()
}

fn heading<'a>(label: String) -> Element<'a, Message> {
    text(label).size(typography::TITLE_SM).into()
}

fn contact_line<'a>(icon: iced::widget::Svg<'static>, label: &'static str) -> Element<'a, Message> {
    row![
        icons::tinted(icons::sized(icon, sizing::ICON_SM), iced::Color::WHITE),
        text(label).size(typography::BODY_SM),
    ]
    .spacing(spacing::XS)
    .align_y(Vertical::Center)
    .into()
}

fn social<'a>(icon: iced::widget::Svg<'static>, url: &'static str) -> Element<'a, Message> {
    button(icons::tinted(icons::sized(icon, sizing::ICON_SM), iced::Color::WHITE))
        .on_press(Message::OpenUrl(url))
        .padding(spacing::XXS)
        .style(styles::button::footer_link)
        .into()
}

/// Opens `url` in the system browser.
pub fn open_url(url: &str) {
    if let Err(err) = open::that_detached(url) {
        tracing::warn!(url, %err, "failed to open link");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_is_a_stub() {
        let mut state = State::default();
        state.update(Message::NewsletterEmailChanged("me@example.com".into()));

        let event = state.update(Message::Subscribe);

        assert_eq!(event, Event::NewsletterStub);
        assert_eq!(state.newsletter_email(), "me@example.com");
    }

    #[test]
    fn quick_links_cover_main_pages() {
        let routes: Vec<_> = QUICK_LINKS.iter().map(|&(_, r)| r).collect();
        assert_eq!(
            routes,
            vec![
                Route::Home,
                Route::About,
                Route::Services,
                Route::Products,
                Route::Career,
                Route::Contact
            ]
        );
    }

    #[test]
    fn links_bubble_up() {
        let mut state = State::default();
        assert_eq!(
            state.update(Message::Navigate(Route::Career)),
            Event::Navigate(Route::Career)
        );
        assert_eq!(
            state.update(Message::OpenUrl(INSTAGRAM_URL)),
            Event::OpenUrl(INSTAGRAM_URL)
        );
        assert_eq!(state.update(Message::ScrollToTop), Event::ScrollToTop);
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let _ = state.view(ViewContext {
            i18n: &i18n,
            year: 2026,
        });
        let _ = scroll_top_button();
    }
}
