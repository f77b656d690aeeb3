//! Result Types
//!
//! Records returned from a `process` call.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::config::ProcessorConfig;

/// Error text of a call rejected by input validation
pub const VALIDATION_FAILED: &str = "Validation failed";

/// Point-in-time view of a processor's cumulative counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Items emitted across all successful calls
    pub total_processed: u64,

    /// Calls that failed after passing validation
    pub total_failed: u64,

    /// `processed / max(1, processed + failed)`
    pub success_rate: f64,

    /// Configuration the processor runs with
    pub config: ProcessorConfig,
}

impl MetricsSnapshot {
    /// Build snapshot, deriving the success rate
    #[must_use]
    pub fn new(total_processed: u64, total_failed: u64, config: ProcessorConfig) -> Self {
        let denominator = total_processed.saturating_add(total_failed).max(1);
        #[allow(clippy::cast_precision_loss)]
        let success_rate = total_processed as f64 / denominator as f64;

        Self {
            total_processed,
            total_failed,
            success_rate,
            config,
        }
    }
}

/// Outcome of a single `process` call
///
/// `data` is set exactly when `success` is true, `error` exactly when it is
/// false. `metrics` accompanies successful calls only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingResult {
    /// Whether the call succeeded
    pub success: bool,

    /// Kept values in input order
    pub data: Option<Vec<Number>>,

    /// Error description if the call failed
    pub error: Option<String>,

    /// Counters after the call
    pub metrics: Option<MetricsSnapshot>,
}

impl ProcessingResult {
    /// Create successful result
    #[must_use]
    pub const fn success(data: Vec<Number>, metrics: MetricsSnapshot) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            metrics: Some(metrics),
        }
    }

    /// Create failed result
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            metrics: None,
        }
    }

    /// Create result for input that failed validation
    #[must_use]
    pub fn validation_failed() -> Self {
        Self::failure(VALIDATION_FAILED)
    }

    /// Convert into a `Result`, discarding the metrics snapshot
    ///
    /// # Errors
    /// Returns the error description if the call failed
    pub fn into_result(self) -> Result<Vec<Number>, String> {
        let success = self.success;
        match (self.data, self.error) {
            (Some(data), None) if success => Ok(data),
            (_, Some(error)) => Err(error),
            _ => Err("Malformed processing result".to_string()),
        }
    }
}
