// SPDX-License-Identifier: MPL-2.0
//! [`ApplicationSubmitter`](crate::application::port::ApplicationSubmitter) adapters.

mod http;
mod simulated;

pub use http::HttpSubmitter;
pub use simulated::SimulatedSubmitter;

use crate::app::config::CareerConfig;
use crate::application::port::SharedSubmitter;
use std::sync::Arc;

/// Picks the adapter for `config`: HTTP when an endpoint is set, simulated
/// otherwise or when the HTTP client cannot be built.
#[must_use]
pub fn from_config(config: &CareerConfig) -> SharedSubmitter {
    if let Some(endpoint) = config.endpoint() {
        match HttpSubmitter::new(endpoint, config.timeout()) {
            Ok(submitter) => {
                tracing::info!(endpoint, "applications will be posted over HTTP");
                return Arc::new(submitter);
            }
            Err(err) => {
                tracing::error!(endpoint, error = %err, "HTTP submitter unavailable, falling back to simulation");
            }
        }
    }
    Arc::new(SimulatedSubmitter::new(config.simulated_delay()))
}
