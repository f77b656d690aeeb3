//! Processor capability and the `improved` implementation
//!
//! `process` moves through validation, the batch run and metrics recording.
//! Rejected input leaves the counters alone; any error after validation is
//! turned into a failure result and counted once.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::config::ProcessorConfig;
use crate::engine::batch_processor::BatchProcessor;
use crate::engine::factory::ProcessorKind;
use crate::engine::observer::{ProcessorObserver, TracingObserver};
use crate::engine::recorder::MetricsRecorder;
use crate::engine::validator;
use crate::error::CoreResult;
use crate::types::{MetricsSnapshot, ProcessingResult};

/// Operations every processor kind provides
pub trait Processor: Send + Sync {
    /// Kind tag this processor was built for
    fn kind(&self) -> ProcessorKind;

    /// Whether `data` is acceptable input. Never mutates state.
    fn validate(&self, data: &Value) -> bool;

    /// Validate, batch, transform and filter `data`
    fn process(&self, data: &Value) -> ProcessingResult;

    /// Current cumulative counters
    fn metrics(&self) -> MetricsSnapshot;
}

/// Default processor: affine transform with threshold filter
pub struct ImprovedProcessor {
    config: ProcessorConfig,
    metrics: MetricsRecorder,
    observer: Arc<dyn ProcessorObserver>,
}

impl ImprovedProcessor {
    /// Create processor reporting through `tracing`
    #[must_use]
    pub fn new(config: ProcessorConfig) -> Self {
        Self::with_observer(config, Arc::new(TracingObserver))
    }

    /// Create processor reporting through `observer`
    #[must_use]
    pub fn with_observer(config: ProcessorConfig, observer: Arc<dyn ProcessorObserver>) -> Self {
        observer.initialized(ProcessorKind::Improved, &config);
        Self {
            config,
            metrics: MetricsRecorder::new(),
            observer,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    fn run(&self, items: &[Value]) -> CoreResult<ProcessingResult> {
        let batcher = BatchProcessor::new(self.config.batch_size)?;
        let output = batcher.run(items, self.observer.as_ref());

        self.metrics.record_processed(output.results.len())?;
        Ok(ProcessingResult::success(
            output.results,
            self.metrics.snapshot(&self.config),
        ))
    }
}

impl Default for ImprovedProcessor {
    fn default() -> Self {
        Self::new(ProcessorConfig::default())
    }
}

impl fmt::Debug for ImprovedProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImprovedProcessor")
            .field("config", &self.config)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl Processor for ImprovedProcessor {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Improved
    }

    fn validate(&self, data: &Value) -> bool {
        validator::validate(data)
    }

    fn process(&self, data: &Value) -> ProcessingResult {
        let Some(items) = validator::as_sequence(data) else {
            self.observer.input_rejected();
            self.metrics.record_rejected();
            return ProcessingResult::validation_failed();
        };

        match self.run(items) {
            Ok(result) => result,
            Err(error) => {
                self.observer.call_failed(&error);
                self.metrics.record_failure();
                ProcessingResult::failure(error.to_string())
            }
        }
    }

    fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot(&self.config)
    }
}
