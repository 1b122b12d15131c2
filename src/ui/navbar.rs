// SPDX-License-Identifier: MPL-2.0
//! Site navigation bar.
//!
//! Brand on the left, page links on the right. The About Us trigger opens a
//! dropdown with About Us and Gallery. Below the collapse width the links move
//! into a column opened by the hamburger button. The bar turns opaque with a
//! shadow once the page has scrolled past the sticky offset.

use crate::app::route::Route;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text, Column, Container, Row, Space};
use iced::{alignment::Vertical, Element, Length, Padding};

/// Routes listed in the bar, in order. `None` marks the About Us dropdown.
const LINKS: [Option<Route>; 7] = [
    Some(Route::Home),
    None,
    Some(Route::Services),
    Some(Route::Products),
    Some(Route::Career),
    Some(Route::Contact),
    Some(Route::Login),
];

/// Entries of the About Us dropdown.
const ABOUT_ITEMS: [Route; 2] = [Route::About, Route::Gallery];

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub route: Route,
    /// Page scrolled past the sticky offset.
    pub sticky: bool,
    /// Window narrower than the collapse width.
    pub compact: bool,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    ToggleAbout,
    Navigate(Route),
    CycleTheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Route),
    CycleTheme,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    menu_open: bool,
    about_open: bool,
}

impl State {
    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn about_open(&self) -> bool {
        self.about_open
    }

    /// Closes the hamburger menu and the About dropdown.
    pub fn close(&mut self) {
        self.menu_open = false;
        self.about_open = false;
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ToggleMenu => {
                self.menu_open = !self.menu_open;
                if !self.menu_open {
                    self.about_open = false;
                }
                Event::None
            }
            Message::ToggleAbout => {
                self.about_open = !self.about_open;
                Event::None
            }
            Message::Navigate(route) => {
                self.close();
                Event::Navigate(route)
            }
            Message::CycleTheme => Event::CycleTheme,
        }
    }

    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let brand = button(
            text(ctx.i18n.tr("brand-name"))
                .size(typography::TITLE_SM)
                .font(iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..iced::Font::DEFAULT
                }),
        )
        .on_press(Message::Navigate(Route::Home))
        .padding(spacing::XS)
        .style(styles::button::link(false));

        let theme_toggle =
            button(text(ctx.i18n.tr(ctx.theme_mode.i18n_key())).size(typography::BODY_SM))
                .on_press(Message::CycleTheme)
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::secondary);

        let mut bar = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(brand)
            .push(Space::new().width(Length::Fill));

        if ctx.compact {
            let hamburger = button(icons::themed(icons::sized(
                if self.menu_open {
                    icons::cross()
                } else {
                    icons::hamburger()
                },
                sizing::ICON_MD,
            )))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(styles::button::link(false));
            bar = bar.push(theme_toggle).push(hamburger);
        } else {
            bar = bar
                .push(
                    Row::with_children(self.link_elements(&ctx))
                        .spacing(spacing::XS)
                        .align_y(Vertical::Center),
                )
                .push(theme_toggle);
        }

        let mut content = Column::new()
            .width(Length::Fill)
            .push(Container::new(bar).center_y(Length::Fixed(sizing::NAVBAR_HEIGHT)));

        if ctx.compact && self.menu_open {
            content = content.push(
                Column::with_children(self.link_elements(&ctx)).spacing(spacing::XXS),
            );
        }
        if self.about_open && (!ctx.compact || self.menu_open) {
            content = content.push(about_dropdown(&ctx));
        }

        Container::new(content)
            .width(Length::Fill)
            .padding([0.0, spacing::LG])
            .style(styles::container::navbar(ctx.sticky))
            .into()
    }

    fn link_elements<'a>(&self, ctx: &ViewContext<'a>) -> Vec<Element<'a, Message>> {
        LINKS
            .into_iter()
            .map(|entry| match entry {
                Some(route) => link(ctx, route),
                None => about_trigger(ctx, self.about_open),
            })
            .collect()
    }
}

fn link<'a>(ctx: &ViewContext<'a>, route: Route) -> Element<'a, Message> {
    button(text(ctx.i18n.tr(route.title_key())).size(typography::BODY))
        .on_press(Message::Navigate(route))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::link(ctx.route == route))
        .into()
}

/// The trigger is highlighted on either of its child routes.
fn about_trigger<'a>(ctx: &ViewContext<'a>, open: bool) -> Element<'a, Message> {
    let active = ABOUT_ITEMS.contains(&ctx.route);
    let chevron = icons::themed(icons::sized(icons::chevron_down(), sizing::ICON_SM));
    let label = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(text(ctx.i18n.tr("nav-about-us")).size(typography::BODY))
        .push(chevron);

    button(label)
        .on_press(Message::ToggleAbout)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::link(active || open))
        .into()
}

fn about_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = ABOUT_ITEMS.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, &route| {
            column.push(
                button(text(ctx.i18n.tr(route.title_key())).size(typography::BODY))
                    .on_press(Message::Navigate(route))
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::button::link(ctx.route == route)),
            )
        },
    );

    Row::new()
        .push(Space::new().width(Length::Fill))
        .push(
            Container::new(items)
                .width(Length::Fixed(sizing::DROPDOWN_WIDTH))
                .padding(spacing::XS)
                .style(styles::container::dropdown),
        )
        .padding(Padding::ZERO.bottom(spacing::SM))
        .into()
}
