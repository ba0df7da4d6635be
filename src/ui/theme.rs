// SPDX-License-Identifier: MPL-2.0
//! Colors used by the measurement overlay and notification toasts.

use iced::Color;

/// Fill color of measurement point markers.
#[must_use]
pub fn marker_color() -> Color {
    Color::from_rgb(0.85, 0.13, 0.13)
}

/// Stroke color of measurement lines.
#[must_use]
pub fn line_color() -> Color {
    Color::from_rgb(0.12, 0.29, 0.85)
}

/// Color of distance labels.
#[must_use]
pub fn label_color() -> Color {
    Color::BLACK
}

/// Background behind the image surface.
#[must_use]
pub fn surface_color() -> Color {
    Color::from_rgb(0.93, 0.93, 0.93)
}

/// Toast background for error notifications.
#[must_use]
pub fn toast_error_color() -> Color {
    Color::from_rgb(0.75, 0.16, 0.16)
}

/// Toast background for informational notifications.
#[must_use]
pub fn toast_info_color() -> Color {
    Color::from_rgb(0.16, 0.42, 0.75)
}

/// Toast background for success notifications.
#[must_use]
pub fn toast_success_color() -> Color {
    Color::from_rgb(0.16, 0.55, 0.32)
}
