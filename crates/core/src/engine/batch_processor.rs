//! Batch processor
//!
//! Splits a validated sequence into fixed-size batches and runs every item
//! through the transform and threshold filter. Batching never changes the
//! output; it only shapes the per-batch statistics reported to the observer.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;

use crate::engine::observer::ProcessorObserver;
use crate::engine::transform::{self, ItemOutcome};

/// Batch processor errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// Invalid configuration
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration {
        /// The reason for the invalid configuration
        reason: String,
    },
}

/// Batch processing result
pub type BatchResult<T> = Result<T, BatchError>;

/// Statistics for a single batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Zero-based position of the batch
    pub batch_index: usize,
    /// Items in the batch
    pub total_items: usize,
    /// Items that passed the filter
    pub kept: usize,
    /// Items transformed but filtered out
    pub filtered: usize,
    /// Items that could not be transformed
    pub skipped: usize,
}

/// Output of a full run over all batches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutput {
    /// Kept values in input order
    pub results: Vec<Number>,
    /// Per-batch statistics in batch order
    pub batches: Vec<BatchStats>,
}

impl BatchOutput {
    /// Total items skipped across all batches
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.batches.iter().map(|b| b.skipped).sum()
    }

    /// Total items filtered out across all batches
    #[must_use]
    pub fn filtered(&self) -> usize {
        self.batches.iter().map(|b| b.filtered).sum()
    }
}

/// Fixed-size batch runner
#[derive(Debug, Clone, Copy)]
pub struct BatchProcessor {
    batch_size: usize,
}

impl BatchProcessor {
    /// Creates new batch processor
    ///
    /// # Errors
    /// Returns error if `batch_size` is zero
    pub fn new(batch_size: usize) -> BatchResult<Self> {
        if batch_size == 0 {
            return Err(BatchError::InvalidConfiguration {
                reason: "Batch size cannot be zero".to_string(),
            });
        }

        Ok(Self { batch_size })
    }

    /// Configured batch size
    #[must_use]
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Run every batch of `items` in order
    pub fn run(&self, items: &[Value], observer: &dyn ProcessorObserver) -> BatchOutput {
        let mut output = BatchOutput {
            results: Vec::with_capacity(items.len()),
            batches: Vec::with_capacity(items.len().div_ceil(self.batch_size)),
        };

        for (batch_index, batch) in items.chunks(self.batch_size).enumerate() {
            let offset = batch_index * self.batch_size;
            let stats =
                Self::process_batch(batch_index, offset, batch, observer, &mut output.results);
            observer.batch_processed(&stats);
            output.batches.push(stats);
        }

        output
    }

    /// Process a single batch, appending kept values to `results`
    fn process_batch(
        batch_index: usize,
        offset: usize,
        batch: &[Value],
        observer: &dyn ProcessorObserver,
        results: &mut Vec<Number>,
    ) -> BatchStats {
        let mut stats = BatchStats {
            batch_index,
            total_items: batch.len(),
            ..BatchStats::default()
        };

        for (i, item) in batch.iter().enumerate() {
            match transform::evaluate(item) {
                ItemOutcome::Kept(value) => {
                    results.push(value);
                    stats.kept += 1;
                }
                ItemOutcome::Filtered(_) => stats.filtered += 1,
                ItemOutcome::Skipped(error) => {
                    observer.item_skipped(offset + i, &error);
                    stats.skipped += 1;
                }
            }
        }

        stats
    }
}
