//! Payload size formatting helpers.

/// Format a byte count to a human-readable string.
///
/// Sizes are truncated, never rounded up: 2047 bytes is "1 KB".
pub fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{} MB", bytes / (1024 * 1024))
    }
}
