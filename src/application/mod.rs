// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use lumbini_site::application::port::ApplicationSubmitter;
//! use lumbini_site::infrastructure::SimulatedSubmitter;
//!
//! let submitter = SimulatedSubmitter::default();
//! let future = submitter.submit(application);
//! ```

pub mod port;
