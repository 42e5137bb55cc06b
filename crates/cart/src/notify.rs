//! Notification sink contract for UI toast messages.
//!
//! The store announces user-visible outcomes (added to cart, order placed,
//! empty-cart checkout) through an [`EventSink`]. Quantity changes and
//! removals are deliberately silent; the UI only toasts the three outcomes
//! above. The sink is a fire-and-forget collaborator: it must not fail and it
//! must not call back into the store.

use std::sync::{Arc, Mutex, PoisonError};

/// Severity of a notification, mapped by the UI to toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A completed user action.
    Success,
    /// A rejected or empty-handed user action.
    Error,
}

/// Receiver for human-readable cart outcome messages.
pub trait EventSink {
    /// Announce an outcome message.
    fn notify(&self, message: &str, severity: Severity);
}

/// Sink that drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&self, _message: &str, _severity: Severity) {}
}

/// Sink that forwards notifications to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => tracing::info!(target: "marigold::toast", "{message}"),
            Severity::Error => tracing::warn!(target: "marigold::toast", "{message}"),
        }
    }
}

/// Sink that records every notification, for tests and diagnostics.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    messages: Arc<Mutex<Vec<(String, Severity)>>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<(String, Severity)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl EventSink for RecordingSink {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((message.to_owned(), severity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_preserves_order() {
        let sink = RecordingSink::new();
        sink.notify("first", Severity::Success);
        sink.notify("second", Severity::Error);

        let messages = sink.messages();
        assert_eq!(
            messages,
            vec![
                ("first".to_owned(), Severity::Success),
                ("second".to_owned(), Severity::Error),
            ]
        );
    }

    #[test]
    fn test_clones_share_the_record() {
        let sink = RecordingSink::new();
        let observer = sink.clone();
        sink.notify("added", Severity::Success);
        assert_eq!(observer.messages().len(), 1);
    }
}
