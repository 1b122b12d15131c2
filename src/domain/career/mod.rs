// SPDX-License-Identifier: MPL-2.0
//! Internship application domain.
//!
//! - [`form`]: editable form fields and validation into an [`Application`]
//! - [`submission`]: tagged submission state and failure reasons

pub mod form;
pub mod submission;

pub use form::{Application, ApplicationForm, ResumeFile, ValidationError, INTERNSHIP_POSITION};
pub use submission::{Receipt, SubmissionError, SubmissionState};
