//! Logging subscriber for intermediate capture events.

use bkyc_types::{CaptureEvent, CaptureEvents};
use bkyc_utils::format_size;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Log every capture received on `rx` until the publisher is dropped.
///
/// Returns the number of events logged.
pub async fn log_capture_events(mut rx: broadcast::Receiver<CaptureEvent>) -> usize {
    let mut logged = 0;
    loop {
        match rx.recv().await {
            Ok(event) => {
                info!(
                    document = %event.document,
                    size_kb = event.size_kb(),
                    size = %format_size(event.payload.len()),
                    "received intermediate capture"
                );
                logged += 1;
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "capture logger fell behind; events dropped");
            }
            Err(RecvError::Closed) => break,
        }
    }
    logged
}

/// Subscribe to `events` and log them on a background task.
pub fn spawn_capture_logger(events: &CaptureEvents) -> JoinHandle<usize> {
    tokio::spawn(log_capture_events(events.subscribe()))
}
