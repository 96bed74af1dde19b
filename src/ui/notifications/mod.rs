// SPDX-License-Identifier: MPL-2.0
//! Toast notifications reporting the outcome of add-data operations.
//!
//! - [`notification`]: the toast value and its severity
//! - [`manager`]: queue with a cap on visible toasts and auto-dismiss
//! - [`toast`]: rendering
//!
//! Successes and infos vanish after 3s, warnings after 5s, errors stay until
//! dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
