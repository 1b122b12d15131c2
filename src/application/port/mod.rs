// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`submission`]: Delivery of internship applications
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so adapters can be shared behind an `Arc`
//! - No `async fn`: methods return boxed futures that callers wrap in a `Task`

pub mod submission;

pub use submission::{ApplicationSubmitter, SharedSubmitter};
