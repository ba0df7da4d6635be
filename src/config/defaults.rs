// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Calibration Service Defaults
// ==========================================================================

/// Default endpoint of the marker-detection service.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000/process_image";

/// Unit suffix appended to measurement labels.
pub const UNIT_LABEL: &str = "cm";

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale factor applied per wheel notch (zoom out uses the reciprocal).
pub const DEFAULT_WHEEL_ZOOM_FACTOR: f32 = 1.1;

/// Minimum allowed view scale.
pub const MIN_SCALE: f32 = 0.01;

/// Maximum allowed view scale.
pub const MAX_SCALE: f32 = 100.0;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Marker dot radius in screen pixels (kept constant regardless of zoom).
pub const MARKER_RADIUS: f32 = 3.0;

/// Measurement line width in screen pixels.
pub const LINE_WIDTH: f32 = 1.0;

/// Distance label font size in screen pixels.
pub const LABEL_SIZE: f32 = 14.0;

// ==========================================================================
// Interaction Defaults
// ==========================================================================

/// Maximum delay between two presses that counts as a double-click.
pub const DOUBLE_CLICK_MS: u64 = 400;

/// Maximum cursor travel between two presses that counts as a double-click.
pub const DOUBLE_CLICK_SLOP: f32 = 4.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default window width in pixels.
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;

/// Default window height in pixels.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;

/// Minimum window width in pixels.
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Minimum window height in pixels.
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Height of the top toolbar.
pub const TOOLBAR_HEIGHT: f32 = 48.0;

/// Width of the measurement sidebar.
pub const SIDEBAR_WIDTH: f32 = 220.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Poll interval for auto-dismissing notifications, in milliseconds.
pub const NOTIFICATION_TICK_MS: u64 = 250;
