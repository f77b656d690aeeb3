//! Batchline Core - validate, batch, transform and filter numeric sequences
//!
//! A processor accepts a JSON array, splits it into fixed-size batches,
//! maps every number through `y = x * 6 + 67`, keeps the values above 99 and
//! tracks how many items it has emitted across calls.
//!
//! # Features
//!
//! - **No panics**: invalid input and internal errors come back as a
//!   [`ProcessingResult`] with `success == false`
//! - **Per-item isolation**: an item that cannot be transformed is skipped,
//!   the rest of the call proceeds
//! - **Cumulative metrics**: processed / failed counters with success rate
//! - **Pluggable events**: construction, skipped items and failures are
//!   reported through a [`ProcessorObserver`]
//!
//! # Architecture
//!
//! - [`config`] - Processor configuration and loaders
//! - [`engine`] - Validator, batch processor, transform, recorder, factory
//! - [`types`] - Result records returned to callers
//!
//! # Example
//!
//! ```rust
//! use batchline_core::{CoreResult, Processor, ProcessorFactory};
//! use serde_json::Value;
//!
//! fn main() -> CoreResult<()> {
//!     let processor = ProcessorFactory::create("improved")?;
//!     let input = Value::from((0..100).collect::<Vec<i64>>());
//!
//!     let result = processor.process(&input);
//!     assert!(result.success);
//!     assert_eq!(result.data.map(|d| d.len()), Some(94));
//!     Ok(())
//! }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::large_stack_arrays,
    clippy::indexing_slicing,
    missing_docs
)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::correctness,
    clippy::suspicious,
    clippy::perf,
    clippy::style,
    clippy::complexity,
    clippy::unreachable,
    clippy::redundant_pattern_matching,
    clippy::manual_let_else,
    clippy::unnecessary_wraps,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::float_cmp
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Public modules
pub mod config;
pub mod error;
pub mod prelude;
pub mod types;

// Core functionality modules
pub mod engine;

// Re-exports for convenience
pub use config::ProcessorConfig;
pub use engine::{
    ImprovedProcessor, NoopObserver, Processor, ProcessorFactory, ProcessorKind,
    ProcessorObserver, TracingObserver,
};
pub use error::{CoreError, CoreResult};
pub use types::{MetricsSnapshot, ProcessingResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
