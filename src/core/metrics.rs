//! Dispatch metrics for observability
//!
//! Counts how many console calls a [`LeveledSink`](super::LeveledSink)
//! forwarded to its sink, how many it swallowed, and how often its dispatch
//! table was rebuilt.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters kept by every leveled sink
///
/// # Example
///
/// ```
/// use console_proxy::DispatchMetrics;
///
/// let metrics = DispatchMetrics::new();
/// metrics.record_forwarded();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.forwarded(), 1);
/// assert_eq!(metrics.suppressed(), 1);
/// ```
#[derive(Debug)]
pub struct DispatchMetrics {
    /// Calls that reached the underlying sink
    forwarded: AtomicU64,

    /// Calls answered by a no-op because the method was inactive
    suppressed: AtomicU64,

    /// Number of dispatch table rebuilds (construction counts as one)
    rebuilds: AtomicU64,
}

impl DispatchMetrics {
    pub const fn new() -> Self {
        Self {
            forwarded: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            rebuilds: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn forwarded(&self) -> u64 {
        self.forwarded.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds.load(Ordering::Relaxed)
    }

    /// Record a forwarded call, returning the previous count
    #[inline]
    pub fn record_forwarded(&self) -> u64 {
        self.forwarded.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a suppressed call, returning the previous count
    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rebuild(&self) -> u64 {
        self.rebuilds.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of calls that were suppressed, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no calls have been made.
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.suppressed() as f64;
        let total = self.forwarded() as f64 + suppressed;
        if total == 0.0 {
            0.0
        } else {
            (suppressed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.forwarded.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.rebuilds.store(0, Ordering::Relaxed);
    }
}

impl Default for DispatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DispatchMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            forwarded: AtomicU64::new(self.forwarded()),
            suppressed: AtomicU64::new(self.suppressed()),
            rebuilds: AtomicU64::new(self.rebuilds()),
        }
    }
}
