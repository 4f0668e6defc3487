//! # Notifications Widget
//!
//! Toast notification system using egui-notify for operation results
//! and session warnings.

use egui_notify::Toasts;

use crate::app::state::NotificationKind;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one toast of the given severity.
    pub fn push(&mut self, kind: NotificationKind, message: String) {
        match kind {
            NotificationKind::Success => {
                self.toasts.success(message);
            }
            NotificationKind::Error => {
                self.toasts.error(message);
            }
            NotificationKind::Warning => {
                self.toasts.warning(message);
            }
            NotificationKind::Info => {
                self.toasts.info(message);
            }
        }
    }

    /// Render queued notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
