//! `glowcart-notify`: auto-expiring user-facing status messages.
//!
//! The list managers push a message after each user action; the host UI reads
//! [`Notifier::current`] and drives expiry with [`Notifier::tick`] (or fires a
//! specific [`ExpiryTicket`]). Time comes from an injected [`Clock`].

pub mod clock;
pub mod notification;
pub mod notifier;

pub use clock::{Clock, ManualClock, SystemClock};
pub use notification::{Notification, NotificationKind};
pub use notifier::{DEFAULT_DISPLAY_MS, ExpiryTicket, Notifier};
