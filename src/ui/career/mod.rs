// SPDX-License-Identifier: MPL-2.0
//! Career page: hero with team figures, benefits, the open internship and
//! the application modal.
//!
//! The same [`form`] component also backs the standalone
//! `/internship-application` page, see [`standalone`].

pub mod form;

use crate::application::port::SharedSubmitter;
use crate::domain::career::{Receipt, SubmissionError, INTERNSHIP_POSITION};
use crate::i18n::I18n;
use crate::ui::components::page;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{
    button, column, container, mouse_area, opaque, row, scrollable, text, Column, Container, Row,
    Space, Stack,
};
use iced::{alignment, Element, Length, Task};
use std::path::PathBuf;

/// Headline figures shown in the hero: value and label key.
const STATS: [(&str, &str); 3] = [
    ("20+", "career-stat-team"),
    ("1", "career-stat-internships"),
    ("Bengaluru", "career-stat-workspace"),
];

/// Benefit cards: icon, title key, body key.
const BENEFITS: [(fn() -> iced::widget::Svg<'static>, &str, &str); 4] = [
    (icons::code, "career-benefit-tech-title", "career-benefit-tech-body"),
    (icons::users, "career-benefit-team-title", "career-benefit-team-body"),
    (icons::briefcase, "career-benefit-growth-title", "career-benefit-growth-body"),
    (icons::building, "career-benefit-office-title", "career-benefit-office-body"),
];

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub spinner_angle: f32,
    pub columns: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    Apply,
    CloseModal,
    Form(form::Message),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Submitted(Receipt),
    Failed(SubmissionError),
    ResumeDirectoryChanged(PathBuf),
}

pub struct State {
    form: form::State,
    modal_open: bool,
}

impl State {
    #[must_use]
    pub fn new(submitter: SharedSubmitter, resume_directory: Option<PathBuf>) -> Self {
        Self {
            form: form::State::new(submitter, resume_directory),
            modal_open: false,
        }
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    #[must_use]
    pub fn form(&self) -> &form::State {
        &self.form
    }

    /// Closes the modal and aborts any submission in flight. Called when the
    /// page is left.
    pub fn teardown(&mut self) {
        self.close();
    }

    /// Escape closes the modal, aborting a submission in flight. Returns
    /// whether it was open.
    pub fn handle_escape(&mut self) -> bool {
        let was_open = self.modal_open;
        self.close();
        was_open
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::Apply => {
                self.modal_open = true;
                (Event::None, Task::none())
            }
            Message::CloseModal => {
                self.close();
                (Event::None, Task::none())
            }
            Message::Form(message) => {
                let (event, task) = self.form.update(message);
                let task = task.map(Message::Form);
                let event = match event {
                    form::Event::None => Event::None,
                    form::Event::Succeeded(receipt) => {
                        self.modal_open = false;
                        Event::Submitted(receipt)
                    }
                    form::Event::Failed(err) => Event::Failed(err),
                    form::Event::Dismissed => {
                        self.modal_open = false;
                        Event::None
                    }
                    form::Event::ResumeDirectoryChanged(dir) => Event::ResumeDirectoryChanged(dir),
                };
                (event, task)
            }
        }
    }

    fn close(&mut self) {
        self.form.abort();
        self.modal_open = false;
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let stats = STATS.iter().fold(
            Row::new().spacing(spacing::XL),
            |row, &(value, key)| {
                row.push(
                    column![
                        text(value).size(typography::TITLE_LG),
                        text(i18n.tr(key)).size(typography::BODY_SM),
                    ]
                    .align_x(alignment::Horizontal::Center),
                )
            },
        );

        let banner = container(
            row![
                icons::tinted(icons::sized(icons::info(), sizing::ICON_SM), palette::INFO_500),
                text(i18n.tr("career-banner")).size(typography::BODY_SM),
            ]
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center),
        )
        .padding(spacing::SM)
        .style(styles::container::info_banner);

        let hero = column![
            page::hero(
                icons::briefcase(),
                i18n.tr("career-hero-title"),
                i18n.tr("career-hero-subtitle"),
            ),
            page::band(
                column![stats, banner]
                    .spacing(spacing::LG)
                    .align_x(alignment::Horizontal::Center)
                    .width(Length::Fill)
                    .into()
            ),
        ];

        let benefits = BENEFITS
            .iter()
            .map(|&(icon, title, body)| page::feature_card(icon(), i18n.tr(title), i18n.tr(body)))
            .collect();

        let why = page::section(
            column![
                page::heading(i18n.tr("career-why-title"), Some(i18n.tr("career-why-lead"))),
                page::grid(benefits, ctx.columns.min(BENEFITS.len())),
            ]
            .spacing(spacing::XL)
            .into(),
        );

        let internship = container(
            column![
                row![
                    icons::branded(icons::sized(icons::briefcase(), sizing::ICON_LG)),
                    text(INTERNSHIP_POSITION).size(typography::TITLE_SM),
                ]
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center),
                text(i18n.tr("career-internship-body")).size(typography::BODY),
                button(text(i18n.tr("career-apply-now")))
                    .on_press(Message::Apply)
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary),
            ]
            .spacing(spacing::MD),
        )
        .width(Length::Fill)
        .max_width(sizing::FORM_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::card);

        let openings = page::band(
            column![
                page::heading(i18n.tr("career-openings-title"), None),
                internship
            ]
            .spacing(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .into(),
        );

        Column::new().push(hero).push(why).push(openings).into()
    }

    /// The application dialog, drawn by the parent above everything else.
    pub fn modal<'a>(&'a self, i18n: &'a I18n, spinner_angle: f32) -> Option<Element<'a, Message>> {
        if !self.modal_open {
            return None;
        }

        // Closing stays available while a submission is in flight and aborts it.
        let close = button(icons::themed(icons::sized(icons::cross(), sizing::ICON_MD)))
            .on_press(Message::CloseModal)
            .padding(spacing::XS)
            .style(styles::button::link(false));

        let body = self
            .form
            .view(form::ViewContext {
                i18n,
                spinner_angle,
                cancellable: true,
            })
            .map(Message::Form);

        let dialog = Container::new(
            column![row![Space::new().width(Length::Fill), close], scrollable(body)]
                .spacing(spacing::XS),
        )
        .width(Length::Fixed(sizing::FORM_WIDTH + 2.0 * spacing::LG))
        .padding(spacing::LG)
        .style(styles::container::modal);

        let veil = mouse_area(
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::veil),
        )
        .on_press(Message::CloseModal);

        Some(
            Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(veil)
                .push(
                    container(opaque(dialog))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .center(Length::Fill)
                        .padding(spacing::LG),
                )
                .into(),
        )
    }
}

/// The application form as a full page, for `/internship-application`.
pub fn standalone<'a>(
    form: &'a form::State,
    i18n: &'a I18n,
    spinner_angle: f32,
) -> Element<'a, form::Message> {
    let body = form.view(form::ViewContext {
        i18n,
        spinner_angle,
        cancellable: false,
    });

    Column::new()
        .push(page::hero(
            icons::briefcase(),
            i18n.tr("internship-page-title"),
            i18n.tr("internship-page-subtitle"),
        ))
        .push(page::section(
            container(body)
                .width(Length::Fill)
                .center_x(Length::Fill)
                .into(),
        ))
        .into()
}
