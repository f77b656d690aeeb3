//! Batchline Core Types
//!
//! Value records handed back to callers.

pub mod result;

// Re-exports for convenience
pub use result::*;
