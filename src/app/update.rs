// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Route changes go through [`navigate`]: pages wrapped in the transition
//! play their exit before the swap, plain pages swap at once. Either way the
//! swap itself happens in [`commit`], which tears the old page down, scrolls
//! to the top and lets the new page start its loading.

use super::config::{self, Config};
use super::message::Arrow;
use super::persisted_state::AppState;
use super::route::Route;
use super::Message;
use crate::domain::scroll::ScrollLock;
use crate::ui::career::{self, form};
use crate::ui::footer;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::pages::{login, products, Link};
use crate::ui::theming::ThemeMode;
use crate::ui::transition::Transition;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Size, Task, Theme};
use std::path::PathBuf;
use std::time::Instant;

/// Id of the scrollable holding the page and the footer.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Mutable view of the app handed to the handlers.
pub struct UpdateContext<'a> {
    pub config: &'a mut Config,
    pub route: &'a mut Route,
    pub transition: &'a mut Transition<Route>,
    pub theme_mode: &'a mut ThemeMode,
    pub theme: &'a mut Theme,
    pub navbar: &'a mut navbar::State,
    pub footer: &'a mut footer::State,
    pub gallery: &'a mut gallery::State,
    pub career: &'a mut career::State,
    pub internship: &'a mut form::State,
    pub products: &'a mut products::State,
    pub login: &'a mut login::State,
    pub notifications: &'a mut notifications::Manager,
    pub scroll_lock: &'a mut ScrollLock,
    pub scroll_offset: &'a mut f32,
    pub window_width: &'a mut f32,
    pub app_state: &'a mut AppState,
    pub now: &'a mut Instant,
}

/// Requests a route change.
pub fn navigate(ctx: &mut UpdateContext<'_>, target: Route) -> Task<Message> {
    ctx.navbar.close();

    if target == *ctx.route && ctx.transition.pending().is_none() {
        return scroll_to_top(ctx);
    }

    let now = Instant::now();
    *ctx.now = now;

    match (ctx.route.is_animated(), target.is_animated()) {
        (true, true) => {
            tracing::debug!(from = ctx.route.path(), to = target.path(), "page exit started");
            ctx.transition.start(target, now);
            Task::none()
        }
        (false, true) => {
            ctx.transition.cancel();
            let task = commit(ctx, target);
            ctx.transition.enter(now);
            task
        }
        (_, false) => {
            ctx.transition.cancel();
            commit(ctx, target)
        }
    }
}

/// Swaps the visible page to `target`.
pub fn commit(ctx: &mut UpdateContext<'_>, target: Route) -> Task<Message> {
    let previous = std::mem::replace(ctx.route, target);
    if previous != target {
        leave(ctx, previous);
        tracing::info!(from = previous.path(), to = target.path(), "route changed");
    }
    ctx.navbar.close();

    let enter = match target {
        Route::Gallery => ctx.gallery.enter().map(Message::Gallery),
        Route::Products => ctx.products.enter().map(Message::Products),
        _ => Task::none(),
    };

    Task::batch([scroll_to_top(ctx), enter])
}

/// Releases what `route` holds: modals, scroll lock, submissions in flight.
fn leave(ctx: &mut UpdateContext<'_>, route: Route) {
    match route {
        Route::Gallery => ctx.gallery.teardown(ctx.scroll_lock),
        Route::Career => ctx.career.teardown(),
        Route::InternshipApplication => {
            if ctx.internship.abort() {
                tracing::info!("application submission abandoned");
            }
        }
        _ => {}
    }
}

fn scroll_to_top(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.scroll_offset = 0.0;
    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset { x: 0.0, y: 0.0 })
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.now = now;
    ctx.notifications.tick(now);
    match ctx.transition.tick(now) {
        Some(target) => commit(ctx, target),
        None => Task::none(),
    }
}

pub fn handle_resize(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_width = size.width;
    if size.width >= config::NAVBAR_COLLAPSE_WIDTH && ctx.navbar.menu_open() {
        ctx.navbar.close();
    }
    Task::none()
}

/// Escape closes the topmost overlay: gallery slideshow, application
/// dialog (aborting a submission in flight), then the navbar menu.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.gallery.handle_escape(ctx.scroll_lock) {
        return ctx.gallery.enter().map(Message::Gallery);
    }
    if ctx.career.handle_escape() {
        return Task::none();
    }
    ctx.navbar.close();
    Task::none()
}

pub fn handle_arrow(ctx: &mut UpdateContext<'_>, arrow: Arrow) -> Task<Message> {
    if !ctx.gallery.is_modal_open() {
        return Task::none();
    }
    let message = match arrow {
        Arrow::Left => gallery::Message::PreviousImage,
        Arrow::Right => gallery::Message::NextImage,
    };
    handle_gallery_message(ctx, message)
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match ctx.navbar.update(message) {
        navbar::Event::None => Task::none(),
        navbar::Event::Navigate(route) => navigate(ctx, route),
        navbar::Event::CycleTheme => {
            cycle_theme(ctx);
            Task::none()
        }
    }
}

fn cycle_theme(ctx: &mut UpdateContext<'_>) {
    let mode = ctx.theme_mode.cycle();
    *ctx.theme_mode = mode;
    *ctx.theme = mode.to_theme();
    ctx.config.general.theme_mode = mode;
    tracing::debug!(?mode, "theme mode changed");

    if let Err(err) = config::save(ctx.config) {
        tracing::warn!(error = %err, "failed to save settings");
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

pub fn handle_footer_message(ctx: &mut UpdateContext<'_>, message: footer::Message) -> Task<Message> {
    match ctx.footer.update(message) {
        footer::Event::None => Task::none(),
        footer::Event::Navigate(route) => navigate(ctx, route),
        footer::Event::NewsletterStub => {
            ctx.notifications
                .push(Notification::info("notification-newsletter-stub"));
            Task::none()
        }
        footer::Event::OpenUrl(url) => {
            footer::open_url(url);
            Task::none()
        }
        footer::Event::ScrollToTop => scroll_to_top(ctx),
    }
}

pub fn handle_link(ctx: &mut UpdateContext<'_>, link: Link) -> Task<Message> {
    match link {
        Link::Navigate(route) => navigate(ctx, route),
        Link::OpenUrl(url) => {
            footer::open_url(url);
            Task::none()
        }
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let (event, task) = ctx.gallery.update(message, ctx.scroll_lock);
    match event {
        gallery::Event::None => {}
        gallery::Event::OpenUrl(url) => footer::open_url(&url),
        gallery::Event::LinkCopied => ctx
            .notifications
            .push(Notification::success("notification-link-copied")),
    }
    task.map(Message::Gallery)
}

pub fn handle_career_message(
    ctx: &mut UpdateContext<'_>,
    message: career::Message,
) -> Task<Message> {
    let (event, task) = ctx.career.update(message);
    match event {
        career::Event::None => {}
        career::Event::Submitted(receipt) => submitted(ctx, receipt.reference.as_deref()),
        career::Event::Failed(err) => failed(ctx, err.i18n_key()),
        career::Event::ResumeDirectoryChanged(dir) => remember_resume_directory(ctx, dir),
    }
    task.map(Message::Career)
}

pub fn handle_internship_message(
    ctx: &mut UpdateContext<'_>,
    message: form::Message,
) -> Task<Message> {
    let (event, task) = ctx.internship.update(message);
    match event {
        form::Event::None | form::Event::Dismissed => {}
        form::Event::Succeeded(receipt) => submitted(ctx, receipt.reference.as_deref()),
        form::Event::Failed(err) => failed(ctx, err.i18n_key()),
        form::Event::ResumeDirectoryChanged(dir) => remember_resume_directory(ctx, dir),
    }
    task.map(Message::Internship)
}

fn submitted(ctx: &mut UpdateContext<'_>, reference: Option<&str>) {
    tracing::info!(reference, "application submitted");
    ctx.notifications.dismiss_prefixed("error-submission-");
    ctx.notifications
        .push(Notification::success("notification-application-submitted"));
}

fn failed(ctx: &mut UpdateContext<'_>, key: &'static str) {
    tracing::warn!(key, "application submission failed");
    ctx.notifications.dismiss_prefixed("error-submission-");
    ctx.notifications.push(Notification::error(key));
}

fn remember_resume_directory(ctx: &mut UpdateContext<'_>, dir: PathBuf) {
    ctx.app_state.last_resume_directory = Some(dir);
    if let Some(warning) = ctx.app_state.save() {
        ctx.notifications.push(Notification::warning(warning));
    }
}

pub fn handle_login_message(ctx: &mut UpdateContext<'_>, message: login::Message) -> Task<Message> {
    match ctx.login.update(message) {
        login::Event::None => {}
        login::Event::Unavailable => ctx
            .notifications
            .push(Notification::info("notification-login-unavailable")),
        login::Event::Incomplete => ctx
            .notifications
            .push(Notification::warning("notification-login-incomplete")),
    }
    Task::none()
}
