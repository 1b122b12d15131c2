// SPDX-License-Identifier: MPL-2.0
//! Login page.
//!
//! Only the form is rendered. There is no account backend: Sign In checks
//! that both fields are filled and reports that sign-in is unavailable.
//! The password is never logged or stored beyond this state.

use crate::i18n::I18n;
use crate::ui::components::page;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, column, container, text, text_input};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    SignIn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Sign In pressed with both fields filled.
    Unavailable,
    /// Sign In pressed with a blank field.
    Incomplete,
}

#[derive(Default)]
pub struct State {
    email: String,
    password: String,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.password = value;
                Event::None
            }
            Message::SignIn => {
                if self.email.trim().is_empty() || self.password.is_empty() {
                    Event::Incomplete
                } else {
                    self.password.clear();
                    Event::Unavailable
                }
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let form = column![
            text(i18n.tr("login-form-title")).size(typography::TITLE_MD),
            text_input(&i18n.tr("login-email-placeholder"), &self.email)
                .on_input(Message::EmailChanged)
                .padding(spacing::SM)
                .style(styles::text_input::field),
            text_input(&i18n.tr("login-password-placeholder"), &self.password)
                .on_input(Message::PasswordChanged)
                .on_submit(Message::SignIn)
                .secure(true)
                .padding(spacing::SM)
                .style(styles::text_input::field),
            button(text(i18n.tr("login-submit")))
                .on_press(Message::SignIn)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::primary),
        ]
        .spacing(spacing::MD);

        column![
            page::hero(
                icons::users(),
                i18n.tr("login-hero-title"),
                i18n.tr("login-hero-subtitle"),
            ),
            page::section(
                container(
                    container(form)
                        .max_width(sizing::FORM_WIDTH)
                        .padding(spacing::LG)
                        .style(styles::container::card)
                )
                .width(Length::Fill)
                .center_x(Length::Fill)
                .into()
            ),
        ]
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_incomplete() {
        let mut state = State::default();
        assert_eq!(state.update(Message::SignIn), Event::Incomplete);
        state.update(Message::EmailChanged("me@example.com".into()));
        assert_eq!(state.update(Message::SignIn), Event::Incomplete);
    }

    #[test]
    fn sign_in_is_unavailable_and_forgets_password() {
        let mut state = State::default();
        state.update(Message::EmailChanged("me@example.com".into()));
        state.update(Message::PasswordChanged("hunter2".into()));

        assert_eq!(state.update(Message::SignIn), Event::Unavailable);
        assert!(state.password.is_empty());
        assert_eq!(state.email(), "me@example.com");
    }

    #[test]
    fn debug_hides_password() {
        let mut state = State::default();
        state.update(Message::PasswordChanged("hunter2".into()));
        assert!(!format!("{state:?}").contains("hunter2"));
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let _ = State::default().view(&i18n);
    }
}
