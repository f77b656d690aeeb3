//! Batchline Engine - validate, batch, transform, filter, count
//!
//! # Architecture
//!
//! ```text
//!   input ──► validator ──► batch_processor ──► metrics ──► ProcessingResult
//!                │              │   (per item)
//!                │              └──► transform ──► threshold filter
//!                └── rejected: "Validation failed", counters untouched
//! ```
//!
//! Processors are built through [`ProcessorFactory`] from a
//! [`ProcessorKind`] tag and report events through a
//! [`ProcessorObserver`].

pub mod batch_processor;
pub mod factory;
pub mod observer;
pub mod processor;
pub mod recorder;
pub mod transform;
pub mod validator;

pub use batch_processor::{BatchError, BatchOutput, BatchProcessor, BatchResult, BatchStats};
pub use factory::{ProcessorFactory, ProcessorKind};
pub use observer::{NoopObserver, ProcessorObserver, TracingObserver};
pub use processor::{ImprovedProcessor, Processor};
pub use recorder::MetricsRecorder;
pub use transform::{ItemError, ItemOutcome};
