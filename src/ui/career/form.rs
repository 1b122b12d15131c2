// SPDX-License-Identifier: MPL-2.0
//! Internship application form component.
//!
//! Shared by the Career page modal and the standalone
//! `/internship-application` page. The component owns the form fields, the
//! submission state and the abort handle of the in-flight submission; the
//! parent decides what to do with the outcome (toasts, closing the modal).

use crate::application::port::SharedSubmitter;
use crate::domain::career::{
    ApplicationForm, Receipt, ResumeFile, SubmissionError, SubmissionState, ValidationError,
    INTERNSHIP_POSITION,
};
use crate::domain::career::form::RESUME_EXTENSIONS;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::widgets::Spinner;
use iced::task;
use iced::widget::{
    button, column, container, row, text, text_editor, text_input, Column, Row, Space,
};
use iced::{alignment, Element, Length, Task};
use std::path::PathBuf;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Angle of the busy spinner, in radians.
    pub spinner_angle: f32,
    /// Whether a Cancel button is shown next to Submit.
    pub cancellable: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    CoverLetterEdited(text_editor::Action),
    BrowseResume,
    ResumePicked(Option<PathBuf>),
    ClearResume,
    Submit,
    Cancel,
    Submitted(Result<Receipt, SubmissionError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Succeeded(Receipt),
    Failed(SubmissionError),
    /// Cancel pressed while no submission was in flight.
    Dismissed,
    /// A resume was chosen from this directory.
    ResumeDirectoryChanged(PathBuf),
}

pub struct State {
    form: ApplicationForm,
    cover_letter: text_editor::Content,
    submission: SubmissionState,
    validation: Option<ValidationError>,
    submitter: SharedSubmitter,
    in_flight: Option<task::Handle>,
    resume_directory: Option<PathBuf>,
}

impl State {
    #[must_use]
    pub fn new(submitter: SharedSubmitter, resume_directory: Option<PathBuf>) -> Self {
        Self {
            form: ApplicationForm::new(),
            cover_letter: text_editor::Content::new(),
            submission: SubmissionState::default(),
            validation: None,
            submitter,
            in_flight: None,
            resume_directory,
        }
    }

    #[must_use]
    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    #[must_use]
    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    #[must_use]
    pub fn validation(&self) -> Option<ValidationError> {
        self.validation
    }

    /// Aborts the in-flight submission, if any. Returns whether one was
    /// running.
    pub fn abort(&mut self) -> bool {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        let cancelled = self.submission.cancel();
        if cancelled {
            tracing::info!("application submission aborted");
        }
        cancelled
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::NameChanged(value) => self.edit(|form| form.name = value),
            Message::EmailChanged(value) => self.edit(|form| form.email = value),
            Message::PhoneChanged(value) => self.edit(|form| form.phone = value),
            Message::CoverLetterEdited(action) => {
                self.cover_letter.perform(action);
                let text = self.cover_letter.text();
                self.edit(|form| form.cover_letter = text);
            }
            Message::BrowseResume => {
                if !self.submission.controls_enabled() {
                    return (Event::None, Task::none());
                }
                return (
                    Event::None,
                    Task::perform(
                        pick_resume(self.resume_directory.clone()),
                        Message::ResumePicked,
                    ),
                );
            }
            Message::ResumePicked(None) => {}
            Message::ResumePicked(Some(path)) => match ResumeFile::new(path) {
                Ok(resume) => {
                    let directory = resume.path().parent().map(PathBuf::from);
                    self.form.resume = Some(resume);
                    self.validation = None;
                    if let Some(directory) = directory {
                        self.resume_directory = Some(directory.clone());
                        return (Event::ResumeDirectoryChanged(directory), Task::none());
                    }
                }
                Err(err) => self.validation = Some(err),
            },
            Message::ClearResume => self.edit(|form| form.resume = None),
            Message::Submit => return (Event::None, self.submit()),
            Message::Cancel => {
                if self.submission.controls_enabled() {
                    return (Event::Dismissed, Task::none());
                }
            }
            Message::Submitted(outcome) => {
                self.in_flight = None;
                if !self.submission.finish(outcome.clone()) {
                    tracing::debug!("dropping outcome of an abandoned submission");
                    return (Event::None, Task::none());
                }
                return match outcome {
                    Ok(receipt) => {
                        tracing::info!(reference = ?receipt.reference, "application submitted");
                        self.form = ApplicationForm::new();
                        self.cover_letter = text_editor::Content::new();
                        self.submission = SubmissionState::Editing;
                        (Event::Succeeded(receipt), Task::none())
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "application submission failed");
                        (Event::Failed(err), Task::none())
                    }
                };
            }
        }
        (Event::None, Task::none())
    }

    fn edit(&mut self, apply: impl FnOnce(&mut ApplicationForm)) {
        if !self.submission.controls_enabled() {
            return;
        }
        apply(&mut self.form);
        self.validation = None;
    }

    fn submit(&mut self) -> Task<Message> {
        let application = match self.form.validate() {
            Ok(application) => application,
            Err(err) => {
                tracing::debug!(error = %err, "application rejected by validation");
                self.validation = Some(err);
                return Task::none();
            }
        };
        if !self.submission.begin() {
            return Task::none();
        }
        self.validation = None;
        tracing::info!(submitter = self.submitter.name(), "submitting application");

        let (task, handle) =
            Task::perform(self.submitter.submit(application), Message::Submitted).abortable();
        self.in_flight = Some(handle);
        task
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let enabled = self.submission.controls_enabled();

        let field = |label_key: &str,
                     placeholder_key: &str,
                     value: &'a str,
                     on_input: fn(String) -> Message| {
            let input = text_input(&i18n.tr(placeholder_key), value)
                .padding(spacing::SM)
                .size(typography::BODY_LG)
                .style(styles::text_input::field);
            let input = if enabled { input.on_input(on_input) } else { input };
            column![label(i18n.tr(label_key)), input].spacing(spacing::XXS)
        };

        let cover_letter = column![
            label(i18n.tr("career-form-cover-letter")),
            {
                let editor = text_editor(&self.cover_letter)
                    .placeholder(i18n.tr("career-form-cover-letter-placeholder"))
                    .height(Length::Fixed(sizing::TEXTAREA_HEIGHT));
                if enabled {
                    editor.on_action(Message::CoverLetterEdited)
                } else {
                    editor
                }
            },
        ]
        .spacing(spacing::XXS);

        let mut form = Column::new()
            .spacing(spacing::MD)
            .push(
                column![
                    text(i18n.tr("career-form-title")).size(typography::TITLE_MD),
                    text(INTERNSHIP_POSITION).size(typography::BODY_SM),
                ]
                .spacing(spacing::XXS),
            )
            .push(field(
                "career-form-name",
                "career-form-name-placeholder",
                &self.form.name,
                Message::NameChanged,
            ))
            .push(field(
                "career-form-email",
                "career-form-email-placeholder",
                &self.form.email,
                Message::EmailChanged,
            ))
            .push(field(
                "career-form-phone",
                "career-form-phone-placeholder",
                &self.form.phone,
                Message::PhoneChanged,
            ))
            .push(self.resume_picker(i18n, enabled))
            .push(cover_letter);

        if let Some(err) = self.validation {
            form = form.push(banner(i18n.tr(err.i18n_key())));
        }
        if let Some(err) = self.submission.error() {
            form = form.push(banner(i18n.tr(err.i18n_key())));
        }

        form.push(self.controls(&ctx, enabled))
            .width(Length::Fill)
            .max_width(sizing::FORM_WIDTH)
            .into()
    }

    fn resume_picker<'a>(&'a self, i18n: &I18n, enabled: bool) -> Element<'a, Message> {
        let browse = button(
            row![
                icons::themed(icons::sized(icons::upload(), sizing::ICON_SM)),
                text(i18n.tr("career-form-resume-browse")),
            ]
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center),
        )
        .on_press_maybe(enabled.then_some(Message::BrowseResume))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

        let mut picker = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(browse);

        picker = match &self.form.resume {
            Some(resume) => picker
                .push(text(resume.file_name()).size(typography::BODY_SM))
                .push(
                    button(icons::themed(icons::sized(icons::cross(), sizing::ICON_SM)))
                        .on_press_maybe(enabled.then_some(Message::ClearResume))
                        .padding(spacing::XXS)
                        .style(styles::button::link(false)),
                ),
            None => picker.push(
                text(i18n.tr_with_args(
                    "career-form-resume-hint",
                    &[("formats", &RESUME_EXTENSIONS.join(", ").to_uppercase())],
                ))
                .size(typography::CAPTION),
            ),
        };

        column![label(i18n.tr("career-form-resume")), picker]
            .spacing(spacing::XXS)
            .into()
    }

    fn controls<'a>(&'a self, ctx: &ViewContext<'a>, enabled: bool) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let submit_label: Element<'a, Message> = if self.submission.is_in_flight() {
            row![
                Spinner::new(palette::WHITE, ctx.spinner_angle)
                    .size(sizing::ICON_SM)
                    .into_element(),
                text(i18n.tr("career-form-submitting")),
            ]
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .into()
        } else {
            text(i18n.tr("career-form-submit")).into()
        };

        let submit = button(submit_label)
            .on_press_maybe(enabled.then_some(Message::Submit))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary);

        let mut controls = Row::new()
            .spacing(spacing::SM)
            .push(Space::new().width(Length::Fill));
        if ctx.cancellable {
            controls = controls.push(
                button(text(i18n.tr("career-form-cancel")))
                    .on_press_maybe(enabled.then_some(Message::Cancel))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::secondary),
            );
        }
        controls.push(submit).into()
    }
}

fn label<'a>(value: String) -> Element<'a, Message> {
    text(value).size(typography::BODY_SM).into()
}

fn banner<'a>(message: String) -> Element<'a, Message> {
    container(
        row![
            icons::tinted(icons::sized(icons::warning(), sizing::ICON_SM), palette::ERROR_500),
            text(message).size(typography::BODY_SM),
        ]
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::error_banner)
    .into()
}

/// Opens the native picker filtered to accepted resume formats.
async fn pick_resume(start: Option<PathBuf>) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title("Select your resume")
        .add_filter("Resume", &RESUME_EXTENSIONS);

    if let Some(dir) = start {
        if dir.exists() {
            dialog = dialog.set_directory(&dir);
        }
    }

    dialog.pick_file().await.map(|h| h.path().to_path_buf())
}
