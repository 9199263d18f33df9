//! Tracing, logging, and the request activity sink (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Request activity records and sinks.
pub mod activity;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use activity::{ActivityLog, ActivityRecord, InMemoryActivityLog, TracingActivityLog};
