// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the measurement session, the loaded
//! image and the notification queue, and translates messages into side
//! effects like file dialogs and calibration requests. Policy decisions
//! (window sizing, which state a calibration failure may touch) are kept
//! close to the update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::calibration::RequestToken;
use crate::config::{
    self, Config, DEFAULT_SERVICE_URL, DEFAULT_WHEEL_ZOOM_FACTOR, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH, SIDEBAR_WIDTH, TOOLBAR_HEIGHT, UNIT_LABEL, WINDOW_DEFAULT_HEIGHT,
    WINDOW_DEFAULT_WIDTH,
};
use crate::media::ImageData;
use crate::session::Session;
use crate::ui::notifications;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::path::PathBuf;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    image: Option<ImageData>,
    notifications: notifications::Manager,
    /// Token of the most recent upload; completions with older tokens are
    /// stale and ignored.
    current_upload: RequestToken,
    /// Whether an upload/calibration round-trip is in flight.
    calibrating: bool,
    window_size: Size,
    service_url: String,
    wheel_zoom_factor: f32,
    unit_label: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            session: Session::new(),
            image: None,
            notifications: notifications::Manager::new(),
            current_upload: RequestToken::default(),
            calibrating: false,
            window_size: Size::new(
                WINDOW_DEFAULT_WIDTH as f32,
                WINDOW_DEFAULT_HEIGHT as f32,
            ),
            service_url: DEFAULT_SERVICE_URL.to_string(),
            wheel_zoom_factor: DEFAULT_WHEEL_ZOOM_FACTOR,
            unit_label: UNIT_LABEL.to_string(),
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// image loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not load configuration, using defaults");
            Config::default()
        });

        let mut app = App::default();
        if let Some(url) = flags.service_url.or(config.service_url) {
            app.service_url = url;
        }
        if let Some(factor) = config.wheel_zoom_factor {
            if factor.is_finite() && factor > 1.0 {
                app.wheel_zoom_factor = factor;
            }
        }
        if let Some(unit) = config.unit_label {
            app.unit_label = unit;
        }

        let task = match flags.file_path {
            Some(path) => app.begin_upload(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match (&self.image, self.calibrating) {
            (_, true) => String::from("Iced Caliper - calibrating..."),
            (Some(_), false) => String::from("Iced Caliper - ready"),
            (None, false) => String::from("Iced Caliper"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// The region available to the image canvas: the window minus the
    /// toolbar and the measurement sidebar.
    fn viewer_size(&self) -> Size {
        Size::new(
            (self.window_size.width - SIDEBAR_WIDTH).max(1.0),
            (self.window_size.height - TOOLBAR_HEIGHT).max(1.0),
        )
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
