// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Used for the few things that can go wrong at runtime: an unreadable
//! config file at startup and links the system opener refuses. Warnings
//! stay for 5s, errors until dismissed, and at most three toasts are shown.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
