use crate::error::ClientError;
use std::sync::Arc;
use tokio::sync::watch;

/// Fallback message when the backend reports no application error.
pub const GENERIC_ALERT_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
}

/// `Alert` is the notification surfaced to the presentation layer when an
/// operation fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    /// Normalizes a failed operation into a user-facing alert, preferring
    /// the backend's application error message over the generic fallback.
    pub fn from_error(error: &ClientError) -> Self {
        Alert {
            kind: AlertKind::Error,
            message: error
                .api_message()
                .unwrap_or_else(|| GENERIC_ALERT_MESSAGE.to_string()),
        }
    }
}

/// Single-slot, last-write-wins broadcast of the most recent alert.
/// Alerts are neither queued nor deduplicated; the next failure from any
/// store overwrites the slot.
#[derive(Debug, Clone)]
pub struct AlertChannel {
    sender: Arc<watch::Sender<Option<Alert>>>,
}

impl AlertChannel {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn publish(&self, alert: Alert) {
        self.sender.send_replace(Some(alert));
    }

    /// Receiver observing every overwrite of the slot.
    pub fn subscribe(&self) -> watch::Receiver<Option<Alert>> {
        self.sender.subscribe()
    }

    /// The most recently published alert, if any.
    pub fn last(&self) -> Option<Alert> {
        self.sender.borrow().clone()
    }
}

impl Default for AlertChannel {
    fn default() -> Self {
        Self::new()
    }
}
