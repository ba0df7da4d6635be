// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles display and dismissal of toast notifications.
//! Errors stay until dismissed; informational toasts expire on their own.

use iced::Color;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::theme;

/// Maximum number of notifications visible at once; older ones are dropped.
const MAX_VISIBLE: usize = 3;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation completed successfully (auto-dismissed).
    Success,
    /// Informational message (auto-dismissed).
    Info,
    /// Error requiring attention (manual dismiss).
    Error,
}

impl Severity {
    /// Returns the toast background color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => theme::toast_success_color(),
            Severity::Info => theme::toast_info_color(),
            Severity::Error => theme::toast_error_color(),
        }
    }

    /// Returns the auto-dismiss duration, or `None` for manual dismissal.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(4)),
            Severity::Error => None,
        }
    }
}

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn is_expired(&self, now: Instant) -> bool {
        match self.severity.auto_dismiss_duration() {
            Some(duration) => now.duration_since(self.created_at) >= duration,
            None => false,
        }
    }
}

/// Manages the set of visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification, dropping the oldest one when more than
    /// `MAX_VISIBLE` would be showing.
    pub fn push(&mut self, notification: Notification) {
        self.visible.push_front(notification);
        while self.visible.len() > MAX_VISIBLE {
            self.visible.pop_back();
        }
    }

    /// Dismisses a notification by its ID. Returns `true` when found.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            true
        } else {
            false
        }
    }

    /// Drops notifications whose auto-dismiss window has elapsed.
    pub fn prune_expired(&mut self, now: Instant) {
        self.visible.retain(|n| !n.is_expired(now));
    }

    /// Whether any visible notification will expire on its own, which is
    /// when the app needs a ticking subscription.
    #[must_use]
    pub fn has_auto_dismiss(&self) -> bool {
        self.visible
            .iter()
            .any(|n| n.severity().auto_dismiss_duration().is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_at_most_max_visible() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::error(format!("error {i}")));
        }
        assert_eq!(manager.iter().count(), MAX_VISIBLE);
        // Newest first.
        assert_eq!(manager.iter().next().unwrap().message(), "error 4");
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut manager = Manager::new();
        let toast = Notification::error("boom");
        let id = toast.id();
        manager.push(toast);

        assert!(manager.dismiss(id));
        assert!(manager.is_empty());
        assert!(!manager.dismiss(id));
    }

    #[test]
    fn errors_never_expire() {
        let mut manager = Manager::new();
        manager.push(Notification::error("persistent"));
        manager.prune_expired(Instant::now() + Duration::from_secs(3600));
        assert_eq!(manager.iter().count(), 1);
        assert!(!manager.has_auto_dismiss());
    }

    #[test]
    fn info_expires_after_its_window() {
        let mut manager = Manager::new();
        manager.push(Notification::info("transient"));
        assert!(manager.has_auto_dismiss());

        manager.prune_expired(Instant::now());
        assert_eq!(manager.iter().count(), 1);

        manager.prune_expired(Instant::now() + Duration::from_secs(10));
        assert!(manager.is_empty());
    }
}
