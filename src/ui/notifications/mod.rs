// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! - [`notification`]: a message key, severity and lifetime
//! - [`manager`]: queue with a cap on visible toasts
//! - [`toast`]: rendering, bottom-right corner
//!
//! Success and info toasts last 3 s, warnings 5 s, errors stay until
//! dismissed.

mod manager;
mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
