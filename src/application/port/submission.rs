// SPDX-License-Identifier: MPL-2.0
//! Application submission port.

use crate::domain::career::{Application, Receipt, SubmissionError};
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Delivers a validated application somewhere and reports the outcome.
///
/// The returned future owns everything it needs, so the caller can drop or
/// abort it at any point to cancel the submission.
pub trait ApplicationSubmitter: Send + Sync {
    /// Submits `application`.
    fn submit(&self, application: Application) -> BoxFuture<'static, Result<Receipt, SubmissionError>>;

    /// Short adapter name for logs.
    fn name(&self) -> &'static str;
}

/// Submitter shared between the career page and the full-page form.
pub type SharedSubmitter = Arc<dyn ApplicationSubmitter>;
