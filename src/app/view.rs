// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: navbar over the scrolling page and footer, the
//! scroll-to-top button, the open modal, then the toasts.

use super::route::Route;
use super::update::PAGE_SCROLLABLE_ID;
use super::Message;
use crate::i18n::I18n;
use crate::ui::career::{self, form};
use crate::ui::design_tokens::spacing;
use crate::ui::footer;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications::{self, toast};
use crate::ui::pages::{self, about, admin, contact, home, login, products, services, skillarc};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::transition::{self, Frame};
use crate::ui::widgets::scroll_gate;
use iced::widget::{column, container, scrollable, Id, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub route: Route,
    pub frame: Frame,
    pub theme_mode: ThemeMode,
    pub navbar: &'a navbar::State,
    pub footer: &'a footer::State,
    pub gallery: &'a gallery::State,
    pub career: &'a career::State,
    pub internship: &'a form::State,
    pub products: &'a products::State,
    pub login: &'a login::State,
    pub notifications: &'a notifications::Manager,
    pub scroll_locked: bool,
    pub sticky: bool,
    pub show_scroll_top: bool,
    pub compact: bool,
    pub columns: usize,
    pub spinner_angle: f32,
    pub year: i32,
}

/// Renders the current page with its chrome and overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let navbar = ctx
        .navbar
        .view(navbar::ViewContext {
            i18n,
            route: ctx.route,
            sticky: ctx.sticky,
            compact: ctx.compact,
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Navbar);

    let footer = ctx
        .footer
        .view(footer::ViewContext {
            i18n,
            year: ctx.year,
        })
        .map(Message::Footer);

    let body = column![transition::view(view_page(&ctx), ctx.frame), footer].width(Length::Fill);

    let page = scrollable(body)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let main = container(column![navbar, scroll_gate(page, ctx.scroll_locked)])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(main);

    if ctx.show_scroll_top {
        layers = layers.push(
            container(footer::scroll_top_button().map(Message::Footer))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Left)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::LG),
        );
    }

    if let Some(modal) = view_modal(&ctx) {
        layers = layers.push(modal);
    }

    layers
        .push(toast::view_overlay(ctx.notifications, i18n).map(Message::Notification))
        .into()
}

fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let page_ctx = pages::ViewContext {
        i18n,
        columns: ctx.columns,
    };

    match ctx.route {
        Route::Home => home::view(page_ctx).map(Message::Page),
        Route::About => about::view(page_ctx).map(Message::Page),
        Route::Gallery => ctx
            .gallery
            .view(gallery::ViewContext {
                i18n,
                columns: ctx.columns,
            })
            .map(Message::Gallery),
        Route::Services => services::view(page_ctx).map(Message::Page),
        Route::Career => ctx
            .career
            .view(career::ViewContext {
                i18n,
                spinner_angle: ctx.spinner_angle,
                columns: ctx.columns,
            })
            .map(Message::Career),
        Route::Products => ctx
            .products
            .view(i18n, ctx.columns, ctx.spinner_angle)
            .map(Message::Products),
        Route::Contact => contact::view(page_ctx).map(Message::Page),
        Route::Login => ctx.login.view(i18n).map(Message::Login),
        Route::InternshipApplication => {
            career::standalone(ctx.internship, i18n, ctx.spinner_angle).map(Message::Internship)
        }
        Route::SkillArc => skillarc::view(page_ctx).map(Message::Page),
        Route::Admin => admin::view(page_ctx).map(Message::Page),
    }
}

fn view_modal<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    match ctx.route {
        Route::Gallery => ctx
            .gallery
            .modal(ctx.i18n)
            .map(|modal| modal.map(Message::Gallery)),
        Route::Career => ctx
            .career
            .modal(ctx.i18n, ctx.spinner_angle)
            .map(|modal| modal.map(Message::Career)),
        _ => None,
    }
}
