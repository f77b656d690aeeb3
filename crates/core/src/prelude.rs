//! Batchline Core Prelude
//!
//! Common imports for batchline core functionality.
//!
//! ```rust
//! use batchline_core::prelude::*;
//!
//! let processor = ImprovedProcessor::with_observer(
//!     ProcessorConfig::with_batch_size(4),
//!     Arc::new(NoopObserver),
//! );
//! let result = processor.process(&json!([1, 6, "x"]));
//! assert_eq!(result.data, Some(vec![Number::from(103)]));
//! ```

pub use crate::config::ProcessorConfig;
pub use crate::engine::{
    ImprovedProcessor, NoopObserver, Processor, ProcessorFactory, ProcessorKind,
    ProcessorObserver, TracingObserver,
};
pub use crate::error::{CoreError, CoreResult};
pub use crate::types::{MetricsSnapshot, ProcessingResult};

// Re-export commonly used external types
pub use serde_json::{json, Number, Value};
pub use std::sync::Arc;
