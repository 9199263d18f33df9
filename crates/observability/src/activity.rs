//! Request activity sink.

use chrono::{DateTime, Utc};

/// One observed request: what was asked, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    /// HTTP method, e.g. `GET`.
    pub method: String,
    /// Requested path including the query string.
    pub path: String,
    /// When the request was observed.
    pub at: DateTime<Utc>,
}

/// Sink for request activity.
///
/// A single method on purpose: implementations observe traffic, they can
/// never reject or alter it.
pub trait ActivityLog: Send + Sync + 'static {
    fn record(&self, record: ActivityRecord);
}

/// Emits activity through the process-wide tracing subscriber.
#[derive(Debug, Default)]
pub struct TracingActivityLog;

impl ActivityLog for TracingActivityLog {
    fn record(&self, record: ActivityRecord) {
        tracing::info!(
            method = %record.method,
            path = %record.path,
            at = %record.at.to_rfc3339(),
            "request"
        );
    }
}

/// In-memory sink for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryActivityLog {
    inner: std::sync::Mutex<Vec<ActivityRecord>>,
}

impl InMemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<ActivityRecord> {
        self.inner.lock().unwrap().clone()
    }
}

impl ActivityLog for InMemoryActivityLog {
    fn record(&self, record: ActivityRecord) {
        self.inner.lock().unwrap().push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(method: &str, path: &str) -> ActivityRecord {
        ActivityRecord {
            method: method.to_string(),
            path: path.to_string(),
            at: Utc::now(),
        }
    }

    #[test]
    fn in_memory_log_keeps_records_in_order() {
        let log = InMemoryActivityLog::new();

        log.record(record("GET", "/products"));
        log.record(record("POST", "/products"));
        log.record(record("GET", "/products?page=2"));

        let all = log.all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].method, "GET");
        assert_eq!(all[1].method, "POST");
        assert_eq!(all[2].path, "/products?page=2");
    }

    #[test]
    fn in_memory_log_starts_empty() {
        assert!(InMemoryActivityLog::new().all().is_empty());
    }
}
