// SPDX-License-Identifier: MPL-2.0
//! Submission lifecycle of an application.
//!
//! State moves `Editing -> Submitting -> Succeeded | Failed`. A failed
//! submission can be retried; cancelling an in-flight one returns to
//! `Editing`.

use std::fmt;

/// Why a submission did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Could not reach the endpoint.
    Network(String),
    /// The endpoint did not answer in time.
    Timeout,
    /// The endpoint answered with a non-success status.
    Rejected(u16),
    /// The resume file could not be read.
    Resume(String),
}

impl SubmissionError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SubmissionError::Network(_) => "error-submission-network",
            SubmissionError::Timeout => "error-submission-timeout",
            SubmissionError::Rejected(_) => "error-submission-rejected",
            SubmissionError::Resume(_) => "error-submission-resume",
        }
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Network(msg) => write!(f, "Network error: {msg}"),
            SubmissionError::Timeout => write!(f, "The server did not respond in time"),
            SubmissionError::Rejected(status) => {
                write!(f, "The server rejected the application (HTTP {status})")
            }
            SubmissionError::Resume(msg) => write!(f, "Could not read resume: {msg}"),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Acknowledgement returned by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Receipt {
    /// Reference echoed by the endpoint, if any.
    pub reference: Option<String>,
}

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Editing,
    Submitting,
    Succeeded(Receipt),
    Failed(SubmissionError),
}

impl SubmissionState {
    /// Moves to `Submitting`. Returns `false` if a submission is already in
    /// flight or has already succeeded.
    pub fn begin(&mut self) -> bool {
        match self {
            SubmissionState::Editing | SubmissionState::Failed(_) => {
                *self = SubmissionState::Submitting;
                true
            }
            SubmissionState::Submitting | SubmissionState::Succeeded(_) => false,
        }
    }

    /// Records the outcome of the in-flight submission.
    ///
    /// Outcomes arriving when nothing is in flight (e.g. after a cancel) are
    /// dropped and `false` is returned.
    pub fn finish(&mut self, outcome: Result<Receipt, SubmissionError>) -> bool {
        if !self.is_in_flight() {
            return false;
        }
        *self = match outcome {
            Ok(receipt) => SubmissionState::Succeeded(receipt),
            Err(error) => SubmissionState::Failed(error),
        };
        true
    }

    /// Abandons an in-flight submission. Returns `true` if one was in flight.
    pub fn cancel(&mut self) -> bool {
        if self.is_in_flight() {
            *self = SubmissionState::Editing;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Submit and Cancel controls are disabled only while in flight.
    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        !self.is_in_flight()
    }

    #[must_use]
    pub fn error(&self) -> Option<&SubmissionError> {
        match self {
            SubmissionState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_editing_with_enabled_controls() {
        let state = SubmissionState::default();
        assert_eq!(state, SubmissionState::Editing);
        assert!(state.controls_enabled());
    }

    #[test]
    fn success_path() {
        let mut state = SubmissionState::default();
        assert!(state.begin());
        assert!(!state.controls_enabled());
        assert!(state.finish(Ok(Receipt::default())));
        assert!(matches!(state, SubmissionState::Succeeded(_)));
        assert!(state.controls_enabled());
    }

    #[test]
    fn failure_reenables_controls_and_allows_retry() {
        let mut state = SubmissionState::default();
        state.begin();
        state.finish(Err(SubmissionError::Timeout));
        assert_eq!(state.error(), Some(&SubmissionError::Timeout));
        assert!(state.controls_enabled());
        assert!(state.begin());
        assert!(state.error().is_none());
    }

    #[test]
    fn double_begin_is_refused() {
        let mut state = SubmissionState::default();
        assert!(state.begin());
        assert!(!state.begin());
    }

    #[test]
    fn late_outcome_after_cancel_is_ignored() {
        let mut state = SubmissionState::default();
        state.begin();
        assert!(state.cancel());
        assert!(!state.finish(Ok(Receipt::default())));
        assert_eq!(state, SubmissionState::Editing);
    }

    #[test]
    fn cancel_when_idle_is_noop() {
        let mut state = SubmissionState::Failed(SubmissionError::Rejected(500));
        assert!(!state.cancel());
        assert!(state.error().is_some());
    }

    #[test]
    fn error_keys_and_messages() {
        let error = SubmissionError::Rejected(422);
        assert_eq!(error.i18n_key(), "error-submission-rejected");
        assert!(error.to_string().contains("422"));
    }
}
