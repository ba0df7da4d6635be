// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes keep the fit-to-viewport math honest, dropped files act
//! like a file-dialog selection, and a timer tick runs only while a
//! notification is waiting to auto-dismiss.

use super::{App, Message};
use crate::config::NOTIFICATION_TICK_MS;
use iced::{event, time, window, Subscription};
use std::time::Duration;

pub fn subscription(app: &App) -> Subscription<Message> {
    let events = event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileSelected(Some(path)))
        }
        _ => None,
    });

    if app.notifications.has_auto_dismiss() {
        Subscription::batch([
            events,
            time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick),
        ])
    } else {
        events
    }
}
