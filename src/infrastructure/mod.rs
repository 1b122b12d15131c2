// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, wrapping HTTP and timers.
//!
//! # Available Adapters
//!
//! - [`submission`]: application delivery ([`HttpSubmitter`], [`SimulatedSubmitter`])

pub mod submission;

pub use submission::{HttpSubmitter, SimulatedSubmitter};
