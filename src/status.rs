//! Status display sinks.
//!
//! Ingestion reports progress as short human-readable strings, e.g. `"512.0 kb"`.

/// Receives progress text.
pub trait StatusSink {
    /// Replace the displayed status with `text`.
    fn set_status_text(&mut self, text: &str);
}

/// Logs every status update at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingStatus;

impl StatusSink for TracingStatus {
    fn set_status_text(&mut self, text: &str) {
        tracing::info!(status = %text, "status");
    }
}

/// Keeps every status update, newest last.
#[derive(Debug, Clone, Default)]
pub struct RecordingStatus {
    history: Vec<String>,
}

impl RecordingStatus {
    /// All updates in order.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The most recent update.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl StatusSink for RecordingStatus {
    fn set_status_text(&mut self, text: &str) {
        self.history.push(text.to_owned());
    }
}

/// Format a byte count as kilobytes with one decimal.
#[must_use]
pub fn format_kilobytes(bytes: u64) -> String {
    format!("{:.1} kb", bytes as f64 / 1024.0)
}
