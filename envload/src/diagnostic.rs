//! Diagnostic records emitted by every load
//!
//! Each call to a loader produces exactly one [`LoadEvent`]. Where it goes is
//! decided by the [`DiagnosticSink`] the [`Loader`](crate::Loader) was built
//! with: [`TracingSink`] forwards to `tracing`, [`RecordingSink`] keeps the
//! events in memory for assertions.

use crate::error::FallbackReason;
use std::sync::Mutex;

/// Outcome of a single load.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The environment value was parsed and returned.
    Loaded {
        /// `Debug` rendering of the parsed value
        value: String,
    },
    /// The default was returned.
    Fallback {
        reason: FallbackReason,
        /// `Debug` rendering of the default
        default: String,
    },
}

/// One record per loader call.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadEvent {
    pub key: String,
    pub outcome: Outcome,
}

impl LoadEvent {
    pub(crate) fn loaded(key: &str, value: &impl std::fmt::Debug) -> Self {
        Self {
            key: key.to_string(),
            outcome: Outcome::Loaded {
                value: format!("{value:?}"),
            },
        }
    }

    pub(crate) fn fallback(
        key: &str,
        reason: FallbackReason,
        default: &impl std::fmt::Debug,
    ) -> Self {
        Self {
            key: key.to_string(),
            outcome: Outcome::Fallback {
                reason,
                default: format!("{default:?}"),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, Outcome::Fallback { .. })
    }
}

/// Destination for [`LoadEvent`]s.
pub trait DiagnosticSink {
    fn record(&self, event: &LoadEvent);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn record(&self, event: &LoadEvent) {
        (**self).record(event)
    }
}

/// Forwards events to `tracing` under the `envload` target.
///
/// Malformed values are logged at `warn`, everything else at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &LoadEvent) {
        let key = event.key.as_str();
        match &event.outcome {
            Outcome::Loaded { value } => {
                tracing::info!(target: "envload", key, value = %value, "loaded environment variable");
            }
            Outcome::Fallback {
                reason: reason @ FallbackReason::Malformed { .. },
                default,
            } => {
                tracing::warn!(
                    target: "envload",
                    key,
                    reason = %reason,
                    default = %default,
                    "invalid environment variable, using default"
                );
            }
            Outcome::Fallback { reason, default } => {
                tracing::info!(
                    target: "envload",
                    key,
                    reason = %reason,
                    default = %default,
                    "environment variable unavailable, using default"
                );
            }
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<LoadEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<LoadEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Most recent event, if any.
    pub fn last(&self) -> Option<LoadEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, event: &LoadEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
    }
}
