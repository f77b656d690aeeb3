//! Processor construction by kind tag

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::ProcessorConfig;
use crate::engine::observer::{ProcessorObserver, TracingObserver};
use crate::engine::processor::{ImprovedProcessor, Processor};
use crate::error::{CoreError, CoreResult};

/// Closed set of processor kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorKind {
    /// Affine transform with threshold filter
    #[default]
    Improved,
}

impl ProcessorKind {
    /// Tag used to request this kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Improved => "improved",
        }
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessorKind {
    type Err = CoreError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "improved" => Ok(Self::Improved),
            other => Err(CoreError::invalid_argument(format!(
                "Unknown processor type: {other}"
            ))),
        }
    }
}

/// Builds processors from kind tags
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessorFactory;

impl ProcessorFactory {
    /// Create processor for `tag` with default configuration
    ///
    /// # Errors
    /// Returns `CoreError::InvalidArgument` if `tag` is not a known kind
    pub fn create(tag: &str) -> CoreResult<Box<dyn Processor>> {
        Self::create_with_config(tag, ProcessorConfig::default())
    }

    /// Create processor for `tag` with `config`
    ///
    /// # Errors
    /// Returns `CoreError::InvalidArgument` if `tag` is not a known kind
    pub fn create_with_config(tag: &str, config: ProcessorConfig) -> CoreResult<Box<dyn Processor>> {
        let kind = tag.parse()?;
        Ok(Self::build(kind, config, Arc::new(TracingObserver)))
    }

    /// Create the default kind with default configuration
    #[must_use]
    pub fn create_default() -> Box<dyn Processor> {
        Self::build(
            ProcessorKind::default(),
            ProcessorConfig::default(),
            Arc::new(TracingObserver),
        )
    }

    /// Create processor of `kind` reporting through `observer`
    #[must_use]
    pub fn build(
        kind: ProcessorKind,
        config: ProcessorConfig,
        observer: Arc<dyn ProcessorObserver>,
    ) -> Box<dyn Processor> {
        match kind {
            ProcessorKind::Improved => Box::new(ImprovedProcessor::with_observer(config, observer)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_kind() -> CoreResult<()> {
        assert_eq!("improved".parse::<ProcessorKind>()?, ProcessorKind::Improved);
        assert_eq!(ProcessorKind::default().to_string(), "improved");
        Ok(())
    }

    #[test]
    fn test_unknown_kind_named_in_error() {
        let err = "bogus".parse::<ProcessorKind>().err();
        assert!(matches!(err, Some(CoreError::InvalidArgument { .. })));
        assert!(err.is_some_and(|e| e.to_string().contains("bogus")));

        // tags are case sensitive
        assert!("Improved".parse::<ProcessorKind>().is_err());
    }

    #[test]
    fn test_create_improved() -> CoreResult<()> {
        let processor = ProcessorFactory::create("improved")?;
        assert_eq!(processor.kind(), ProcessorKind::Improved);
        assert!(processor.process(&json!([6])).success);
        Ok(())
    }

    #[test]
    fn test_create_bogus() {
        let result = ProcessorFactory::create("bogus");
        assert!(matches!(result, Err(CoreError::InvalidArgument { ref message }) if message.contains("bogus")));
    }

    #[test]
    fn test_create_with_config() -> CoreResult<()> {
        let processor =
            ProcessorFactory::create_with_config("improved", ProcessorConfig::with_batch_size(3))?;
        assert_eq!(processor.metrics().config.batch_size, 3);
        Ok(())
    }

    #[test]
    fn test_kind_serde_tag() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_value(ProcessorKind::Improved)?, json!("improved"));
        Ok(())
    }
}
