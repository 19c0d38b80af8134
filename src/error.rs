//! Request errors and the side channel for swallowed failures.

use std::collections::VecDeque;
use std::time::SystemTime;

use parking_lot::Mutex;
use thiserror::Error;

/// Fallback text when a failure carries no usable diagnostic.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A failed call to the knowledge-base service.
///
/// `detail` is the structured message supplied by the server (if any),
/// `message` is the failure's own description (transport or status line).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    pub status: Option<u16>,
    pub detail: Option<String>,
    pub message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            detail: None,
            message: message.into(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Best text to show a user: server detail, then own message, then `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        non_blank(self.detail.as_deref())
            .or_else(|| non_blank(Some(&self.message)))
            .unwrap_or(fallback)
            .to_string()
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|s| s.as_u16()),
            detail: None,
            message: err.to_string(),
        }
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

/// A failure that was logged but never shown to the user.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: SystemTime,
    pub source: &'static str,
    pub message: String,
}

/// Bounded in-memory log of swallowed errors (oldest evicted first).
pub struct ErrorRegistry {
    capacity: usize,
    entries: Mutex<VecDeque<ErrorRecord>>,
}

impl ErrorRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    pub fn record(&self, source: &'static str, message: impl Into<String>) {
        let mut entries = self.entries.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(ErrorRecord {
            timestamp: SystemTime::now(),
            source,
            message: message.into(),
        });
    }

    /// Snapshot of recorded errors, oldest first.
    pub fn recent(&self) -> Vec<ErrorRecord> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_detail() {
        let err = RequestError::new("Request failed with status code 404")
            .with_status(404)
            .with_detail("Article not found.");
        assert_eq!(err.user_message(UNKNOWN_ERROR), "Article not found.");
    }

    #[test]
    fn user_message_falls_back_to_message() {
        let err = RequestError::new("connection refused").with_detail("   ");
        assert_eq!(err.user_message(UNKNOWN_ERROR), "connection refused");
    }

    #[test]
    fn user_message_falls_back_to_generic_text() {
        let err = RequestError::new("");
        assert_eq!(err.user_message(UNKNOWN_ERROR), "Unknown error");
    }

    #[test]
    fn registry_evicts_oldest() {
        let registry = ErrorRegistry::new(2);
        registry.record("record_view", "first");
        registry.record("record_view", "second");
        registry.record("record_view", "third");

        let messages: Vec<String> = registry.recent().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["second", "third"]);
    }
}
