//! Intermediate capture notifications.
//!
//! A capability publishes every captured image it produces; any number of
//! subscribers receive them through a `tokio::sync::broadcast` channel,
//! independent of whoever started the verification.

use tokio::sync::broadcast;

use crate::DocumentType;

/// Default number of buffered events before slow subscribers start lagging.
pub const DEFAULT_CAPTURE_CAPACITY: usize = 16;

/// One captured image, tagged with the document being scanned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureEvent {
    pub document: DocumentType,
    pub payload: Vec<u8>,
}

impl CaptureEvent {
    /// Payload size in whole kilobytes.
    pub fn size_kb(&self) -> usize {
        self.payload.len() / 1024
    }
}

/// Cloneable publisher handle for [`CaptureEvent`]s.
#[derive(Clone)]
pub struct CaptureEvents {
    tx: broadcast::Sender<CaptureEvent>,
}

impl CaptureEvents {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Get a receiver for every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<CaptureEvent> {
        self.tx.subscribe()
    }

    /// Publish an event. Returns the number of subscribers that received it.
    pub fn publish(&self, event: CaptureEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for CaptureEvents {
    fn default() -> Self {
        Self::new(DEFAULT_CAPTURE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(kb: usize) -> CaptureEvent {
        CaptureEvent {
            document: DocumentType::Passport,
            payload: vec![0u8; kb * 1024 + 100],
        }
    }

    #[tokio::test]
    async fn all_subscribers_receive_published_event() {
        let events = CaptureEvents::default();
        let mut rx1 = events.subscribe();
        let mut rx2 = events.subscribe();

        assert_eq!(events.publish(photo(3)), 2);
        assert_eq!(rx1.recv().await.unwrap().size_kb(), 3);
        assert_eq!(rx2.recv().await.unwrap().document, DocumentType::Passport);
    }

    #[test]
    fn publish_without_subscribers_is_noop() {
        let events = CaptureEvents::default();
        assert_eq!(events.subscriber_count(), 0);
        assert_eq!(events.publish(photo(1)), 0);
    }
}
