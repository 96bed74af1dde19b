// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::NOTIFICATION_TICK_MS;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Forwards dropped files while the Add Data panel is showing.
pub fn create_file_drop_subscription(upload_view_open: bool) -> Subscription<Message> {
    if !upload_view_open {
        return Subscription::none();
    }
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        _ => None,
    })
}

/// Ticks only while toasts are on screen or waiting.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
