//! Cumulative processing counters
//!
//! Counters live for as long as the owning processor and never decrease.
//! Every increment is mirrored to the `metrics` facade.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::ProcessorConfig;
use crate::error::{CoreError, CoreResult};
use crate::types::MetricsSnapshot;

/// Facade counter: items emitted by successful calls
pub const ITEMS_PROCESSED_TOTAL: &str = "batchline_items_processed_total";
/// Facade counter: calls that failed after validation
pub const CALLS_FAILED_TOTAL: &str = "batchline_calls_failed_total";
/// Facade counter: calls rejected by validation
pub const CALLS_REJECTED_TOTAL: &str = "batchline_calls_rejected_total";

/// Processed / failed counters owned by one processor
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    processed: AtomicU64,
    failed: AtomicU64,
}

impl MetricsRecorder {
    /// Create zeroed recorder
    #[must_use]
    pub const fn new() -> Self {
        Self {
            processed: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    /// Add `count` emitted items, returning the new total
    ///
    /// # Errors
    /// Returns error if the counter would overflow
    pub fn record_processed(&self, count: usize) -> CoreResult<u64> {
        let count = u64::try_from(count)
            .map_err(|_| CoreError::internal("processed count does not fit in u64"))?;

        let previous = self
            .processed
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                current.checked_add(count)
            })
            .map_err(|_| CoreError::internal("processed counter overflow"))?;

        metrics::counter!(ITEMS_PROCESSED_TOTAL).increment(count);
        Ok(previous + count)
    }

    /// Count one failed call
    pub fn record_failure(&self) {
        // saturates at u64::MAX instead of wrapping
        if self
            .failed
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                current.checked_add(1)
            })
            .is_err()
        {
            tracing::warn!("failed call counter saturated");
        }
        metrics::counter!(CALLS_FAILED_TOTAL).increment(1);
    }

    /// Count one call rejected by validation; internal counters are untouched
    pub fn record_rejected(&self) {
        metrics::counter!(CALLS_REJECTED_TOTAL).increment(1);
    }

    /// Total emitted items
    #[must_use]
    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Acquire)
    }

    /// Total failed calls
    #[must_use]
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Acquire)
    }

    /// Point-in-time view of the counters
    #[must_use]
    pub fn snapshot(&self, config: &ProcessorConfig) -> MetricsSnapshot {
        MetricsSnapshot::new(self.processed(), self.failed(), config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recorder_is_zeroed() {
        let recorder = MetricsRecorder::new();
        assert_eq!(recorder.processed(), 0);
        assert_eq!(recorder.failed(), 0);
    }

    #[test]
    fn test_processed_accumulates() -> CoreResult<()> {
        let recorder = MetricsRecorder::new();
        assert_eq!(recorder.record_processed(94)?, 94);
        assert_eq!(recorder.record_processed(0)?, 94);
        assert_eq!(recorder.record_processed(6)?, 100);
        assert_eq!(recorder.processed(), 100);
        Ok(())
    }

    #[test]
    fn test_processed_overflow_is_error() -> CoreResult<()> {
        let recorder = MetricsRecorder::new();
        recorder.processed.store(u64::MAX - 1, Ordering::Release);

        assert!(matches!(
            recorder.record_processed(2),
            Err(CoreError::Internal { .. })
        ));
        assert_eq!(recorder.processed(), u64::MAX - 1);
        assert_eq!(recorder.record_processed(1)?, u64::MAX);
        Ok(())
    }

    #[test]
    fn test_failures_and_rejections() {
        let recorder = MetricsRecorder::new();
        recorder.record_failure();
        recorder.record_failure();
        recorder.record_rejected();
        assert_eq!(recorder.failed(), 2);
        assert_eq!(recorder.processed(), 0);
    }

    #[test]
    fn test_failure_counter_saturates() {
        let recorder = MetricsRecorder::new();
        recorder.failed.store(u64::MAX - 1, Ordering::Release);

        recorder.record_failure();
        assert_eq!(recorder.failed(), u64::MAX);
        recorder.record_failure();
        assert_eq!(recorder.failed(), u64::MAX);
    }

    #[test]
    fn test_snapshot_success_rate() -> CoreResult<()> {
        let recorder = MetricsRecorder::new();
        let config = ProcessorConfig::default();

        let empty = recorder.snapshot(&config);
        assert_eq!(empty.total_processed, 0);
        assert!(empty.success_rate.abs() < f64::EPSILON);

        recorder.record_processed(3)?;
        recorder.record_failure();
        let snapshot = recorder.snapshot(&config);
        assert!((snapshot.success_rate - 0.75_f64).abs() < f64::EPSILON);
        assert_eq!(snapshot.config, config);
        Ok(())
    }
}
