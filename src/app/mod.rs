// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the site pages.
//!
//! The `App` struct wires together the pages, the navbar and footer, the
//! page transition and the toasts, and translates their events into side
//! effects like config persistence, route changes or opening links. Routing
//! policy (which pages animate, what happens when a page is left) lives in
//! [`update`].

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
pub mod route;
mod subscription;
mod update;
mod view;

pub use message::{Arrow, Flags, Message};

use crate::domain::gallery::Catalog;
use crate::domain::scroll::ScrollLock;
use crate::i18n::I18n;
use crate::infrastructure::submission;
use crate::media::{image_client, PrefetchConfig};
use crate::ui::career::{self, form};
use crate::ui::footer;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::pages::{login, products};
use crate::ui::theming::ThemeMode;
use crate::ui::transition::Transition;
use crate::ui::widgets::spinner;
use chrono::Datelike;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use route::Route;
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    route: Route,
    transition: Transition<Route>,
    theme_mode: ThemeMode,
    /// Resolved once per mode change; `System` asks the OS.
    theme: Theme,
    navbar: navbar::State,
    footer: footer::State,
    gallery: gallery::State,
    career: career::State,
    /// Form of the standalone `/internship-application` page.
    internship: form::State,
    products: products::State,
    login: login::State,
    notifications: notifications::Manager,
    scroll_lock: ScrollLock,
    /// Vertical offset of the page scrollable, in logical pixels.
    scroll_offset: f32,
    window_width: f32,
    /// Persisted application state (last resume directory).
    app_state: persisted_state::AppState,
    started: Instant,
    now: Instant,
    year: i32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("theme_mode", &self.theme_mode)
            .field("scroll_offset", &self.scroll_offset)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Cards per grid row for a window of `width` logical pixels.
#[must_use]
pub fn columns_for(width: f32) -> usize {
    match width {
        w if w >= 1280.0 => 4,
        w if w >= 1024.0 => 3,
        w if w >= 640.0 => 2,
        _ => 1,
    }
}

impl App {
    /// Loads the config and persisted state, then opens the initial route.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut app = Self::from_parts(flags.lang, config, app_state);
        for warning in [config_warning, state_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(warning));
        }

        let initial = flags
            .route
            .as_deref()
            .map_or(Route::Home, Route::from_path);
        let task = app.open_initial(initial);
        (app, task)
    }

    /// Builds the app from already loaded settings, on the Home route.
    fn from_parts(
        lang: Option<String>,
        config: Config,
        app_state: persisted_state::AppState,
    ) -> Self {
        let i18n = I18n::new(lang, &config);
        let theme_mode = config.general.theme_mode;
        let submitter = submission::from_config(&config.career);
        let client = match image_client() {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!(error = %err, "image client unavailable, gallery images disabled");
                None
            }
        };
        let cache = PrefetchConfig {
            max_bytes: config.gallery.cache_bytes(),
            max_images: config.gallery.cache_entries(),
        };
        let resume_directory = app_state.last_resume_directory.clone();
        let catalog = Catalog::company().unwrap_or_else(|err| {
            tracing::error!(error = %err, "gallery catalog is invalid");
            Catalog::default()
        });
        let now = Instant::now();

        Self {
            i18n,
            route: Route::Home,
            transition: Transition::default(),
            theme_mode,
            theme: theme_mode.to_theme(),
            navbar: navbar::State::default(),
            footer: footer::State::default(),
            gallery: gallery::State::new(catalog, cache, client),
            career: career::State::new(submitter.clone(), resume_directory.clone()),
            internship: form::State::new(submitter, resume_directory),
            products: products::State::default(),
            login: login::State::default(),
            notifications: notifications::Manager::new(),
            scroll_lock: ScrollLock::default(),
            scroll_offset: 0.0,
            window_width: WINDOW_DEFAULT_WIDTH,
            app_state,
            started: now,
            now,
            year: chrono::Local::now().year(),
            config,
        }
    }

    fn open_initial(&mut self, route: Route) -> Task<Message> {
        tracing::info!(route = route.path(), "opening initial page");
        let mut ctx = self.update_context();
        update::commit(&mut ctx, route)
    }

    fn title(&self) -> String {
        let page = self.i18n.tr(self.route.title_key());
        self.i18n.tr_with_args("window-title", &[("page", page.as_str())])
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.transition.is_animating(),
            self.is_loading(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    /// Something shows a spinner.
    fn is_loading(&self) -> bool {
        self.products.is_loading()
            || self.career.form().submission().is_in_flight()
            || self.internship.submission().is_in_flight()
    }

    fn spinner_angle(&self) -> f32 {
        spinner::angle_at(self.now.saturating_duration_since(self.started).as_secs_f32())
    }

    fn is_sticky(&self) -> bool {
        self.scroll_offset > config::NAVBAR_STICKY_OFFSET
    }

    fn shows_scroll_top(&self) -> bool {
        self.scroll_offset > config::SCROLL_TOP_BUTTON_OFFSET
    }

    fn is_compact(&self) -> bool {
        self.window_width < config::NAVBAR_COLLAPSE_WIDTH
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            config: &mut self.config,
            route: &mut self.route,
            transition: &mut self.transition,
            theme_mode: &mut self.theme_mode,
            theme: &mut self.theme,
            navbar: &mut self.navbar,
            footer: &mut self.footer,
            gallery: &mut self.gallery,
            career: &mut self.career,
            internship: &mut self.internship,
            products: &mut self.products,
            login: &mut self.login,
            notifications: &mut self.notifications,
            scroll_lock: &mut self.scroll_lock,
            scroll_offset: &mut self.scroll_offset,
            window_width: &mut self.window_width,
            app_state: &mut self.app_state,
            now: &mut self.now,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Navbar(message) => update::handle_navbar_message(&mut ctx, message),
            Message::Footer(message) => update::handle_footer_message(&mut ctx, message),
            Message::Page(link) => update::handle_link(&mut ctx, link),
            Message::Gallery(message) => update::handle_gallery_message(&mut ctx, message),
            Message::Career(message) => update::handle_career_message(&mut ctx, message),
            Message::Internship(message) => update::handle_internship_message(&mut ctx, message),
            Message::Products(message) => ctx.products.update(message).map(Message::Products),
            Message::Login(message) => update::handle_login_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.update(message);
                Task::none()
            }
            Message::Scrolled(viewport) => {
                *ctx.scroll_offset = viewport.absolute_offset().y;
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::WindowResized(size) => update::handle_resize(&mut ctx, size),
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::ArrowPressed(arrow) => update::handle_arrow(&mut ctx, arrow),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            route: self.route,
            frame: self.transition.frame(self.now),
            theme_mode: self.theme_mode,
            navbar: &self.navbar,
            footer: &self.footer,
            gallery: &self.gallery,
            career: &self.career,
            internship: &self.internship,
            products: &self.products,
            login: &self.login,
            notifications: &self.notifications,
            scroll_locked: self.scroll_lock.is_locked(),
            sticky: self.is_sticky(),
            show_scroll_top: self.shows_scroll_top(),
            compact: self.is_compact(),
            columns: columns_for(self.window_width),
            spinner_angle: self.spinner_angle(),
            year: self.year,
        })
    }
}
