// SPDX-License-Identifier: MPL-2.0
//! Offline submitter used when no endpoint is configured.

use crate::app::config::DEFAULT_SIMULATED_DELAY_MS;
use crate::application::port::ApplicationSubmitter;
use crate::domain::career::{Application, Receipt, SubmissionError};
use futures_util::future::BoxFuture;
use std::time::Duration;

/// Waits a fixed delay, then reports success without sending anything.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SIMULATED_DELAY_MS))
    }
}

impl ApplicationSubmitter for SimulatedSubmitter {
    fn submit(&self, application: Application) -> BoxFuture<'static, Result<Receipt, SubmissionError>> {
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(position = %application.position, "application accepted (simulated)");
            Ok(Receipt::default())
        })
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::career::ApplicationForm;
    use std::time::Duration;

    fn application() -> Application {
        ApplicationForm {
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
            phone: "040 2345 6789".into(),
            ..ApplicationForm::default()
        }
        .validate()
        .expect("valid form")
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_after_delay() {
        let submitter = SimulatedSubmitter::default();
        let start = tokio::time::Instant::now();
        let receipt = submitter.submit(application()).await;
        assert_eq!(receipt, Ok(Receipt::default()));
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn not_done_before_delay() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(500));
        let outcome =
            tokio::time::timeout(Duration::from_millis(499), submitter.submit(application())).await;
        assert!(outcome.is_err(), "must still be pending");
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_future_cancels() {
        let submitter = SimulatedSubmitter::default();
        let handle = tokio::spawn(submitter.submit(application()));
        handle.abort();
        let joined = handle.await;
        assert!(joined.is_err_and(|e| e.is_cancelled()));
    }
}
