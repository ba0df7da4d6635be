// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::calibration::{Calibration, RequestToken};
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::{notifications, overlay};
use std::path::PathBuf;
use std::time::Instant;

/// Command-line flags received from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional image to open on startup.
    pub file_path: Option<String>,
    /// Overrides the configured calibration service URL.
    pub service_url: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Trigger the open file dialog.
    OpenFileDialog,
    /// Result from the open file dialog (or a file dropped on the window).
    FileSelected(Option<PathBuf>),
    /// Result of loading an image and calibrating it against the service.
    CalibrationCompleted {
        token: RequestToken,
        result: Result<(ImageData, Calibration), Error>,
    },
    /// Pointer gestures coming from the measurement canvas.
    Overlay(overlay::Message),
    /// Re-fit the image to the viewport and clear measurements.
    ResetView,
    Notification(notifications::Message),
    WindowResized(iced::Size),
    /// Periodic tick for notification auto-dismissal.
    Tick(Instant),
}
