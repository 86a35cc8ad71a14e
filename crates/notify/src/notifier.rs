//! Single-slot notification emitter with generation-checked expiry.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::clock::{Clock, SystemClock};
use crate::notification::{Notification, NotificationKind};

/// Default display window for a notification.
pub const DEFAULT_DISPLAY_MS: i64 = 3_000;

/// Handle to the expiry scheduled for one notification.
///
/// Passing a ticket back to [`Notifier::expire`] clears the slot only if no
/// newer notification has replaced the one the ticket was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryTicket {
    pub generation: u64,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct Shown {
    notification: Notification,
    generation: u64,
    expires_at: DateTime<Utc>,
}

/// Holds at most one visible notification.
///
/// Every [`notify`](Notifier::notify) replaces the slot, bumps the generation
/// and restarts the display window.
#[derive(Debug, Clone)]
pub struct Notifier {
    clock: Arc<dyn Clock>,
    display_for: Duration,
    generation: u64,
    slot: Option<Shown>,
}

impl Notifier {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_display_window(clock, Duration::milliseconds(DEFAULT_DISPLAY_MS))
    }

    pub fn with_display_window(clock: Arc<dyn Clock>, display_for: Duration) -> Self {
        Self {
            clock,
            display_for,
            generation: 0,
            slot: None,
        }
    }

    pub fn display_window(&self) -> Duration {
        self.display_for
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) -> ExpiryTicket {
        self.generation += 1;
        let expires_at = self.clock.now() + self.display_for;
        let notification = Notification::new(kind, message);
        tracing::debug!(kind = %notification.kind, message = %notification.message, generation = self.generation, "notification shown");

        self.slot = Some(Shown {
            notification,
            generation: self.generation,
            expires_at,
        });

        ExpiryTicket {
            generation: self.generation,
            expires_at,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) -> ExpiryTicket {
        self.notify(NotificationKind::Success, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> ExpiryTicket {
        self.notify(NotificationKind::Info, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> ExpiryTicket {
        self.notify(NotificationKind::Warning, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> ExpiryTicket {
        self.notify(NotificationKind::Error, message)
    }

    /// Fire the expiry scheduled by `ticket`.
    ///
    /// Returns `true` if the slot was cleared. A stale ticket is ignored.
    pub fn expire(&mut self, ticket: ExpiryTicket) -> bool {
        let current = matches!(&self.slot, Some(shown) if shown.generation == ticket.generation);
        if current {
            self.slot = None;
        }
        current
    }

    /// Clear the slot if its display window has elapsed.
    ///
    /// Meant to be called from the host's event loop; returns the notification
    /// that was taken down, if any.
    pub fn tick(&mut self) -> Option<Notification> {
        let now = self.clock.now();
        let due = matches!(&self.slot, Some(shown) if now >= shown.expires_at);
        if due {
            self.slot.take().map(|shown| shown.notification)
        } else {
            None
        }
    }

    /// The notification currently on screen, if its window has not elapsed.
    pub fn current(&self) -> Option<&Notification> {
        let now = self.clock.now();
        self.slot
            .as_ref()
            .filter(|shown| now < shown.expires_at)
            .map(|shown| &shown.notification)
    }

    /// Ticket for the notification currently in the slot.
    pub fn pending(&self) -> Option<ExpiryTicket> {
        self.slot.as_ref().map(|shown| ExpiryTicket {
            generation: shown.generation,
            expires_at: shown.expires_at,
        })
    }

    pub fn dismiss(&mut self) {
        self.slot = None;
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
