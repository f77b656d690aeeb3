//! Processor event sink
//!
//! Processors report lifecycle events through a [`ProcessorObserver`] handed
//! to them at construction. [`TracingObserver`] forwards everything to
//! `tracing`; tests substitute their own implementation.

use crate::config::ProcessorConfig;
use crate::engine::batch_processor::BatchStats;
use crate::engine::factory::ProcessorKind;
use crate::engine::transform::ItemError;
use crate::error::CoreError;

/// Receives events emitted while a processor is built and used
pub trait ProcessorObserver: Send + Sync {
    /// Processor was constructed
    fn initialized(&self, kind: ProcessorKind, config: &ProcessorConfig);

    /// Input failed validation; nothing was processed
    fn input_rejected(&self);

    /// One item could not be transformed and was dropped
    fn item_skipped(&self, index: usize, error: &ItemError);

    /// A batch finished
    fn batch_processed(&self, stats: &BatchStats);

    /// A call failed outside validation and per-item handling
    fn call_failed(&self, error: &CoreError);
}

/// Observer that emits `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ProcessorObserver for TracingObserver {
    fn initialized(&self, kind: ProcessorKind, config: &ProcessorConfig) {
        tracing::info!(
            kind = %kind,
            batch_size = config.batch_size,
            timeout = config.timeout,
            retry_count = config.retry_count,
            enable_caching = config.enable_caching,
            "Processor initialized"
        );
    }

    fn input_rejected(&self) {
        tracing::debug!("Input rejected by validation");
    }

    fn item_skipped(&self, index: usize, error: &ItemError) {
        tracing::warn!(index, %error, "Failed to process item");
    }

    fn batch_processed(&self, stats: &BatchStats) {
        tracing::debug!(
            batch = stats.batch_index,
            items = stats.total_items,
            kept = stats.kept,
            filtered = stats.filtered,
            skipped = stats.skipped,
            "Batch processed"
        );
    }

    fn call_failed(&self, error: &CoreError) {
        tracing::error!(%error, "Processing failed");
    }
}

/// Observer that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProcessorObserver for NoopObserver {
    fn initialized(&self, _kind: ProcessorKind, _config: &ProcessorConfig) {}

    fn input_rejected(&self) {}

    fn item_skipped(&self, _index: usize, _error: &ItemError) {}

    fn batch_processed(&self, _stats: &BatchStats) {}

    fn call_failed(&self, _error: &CoreError) {}
}
