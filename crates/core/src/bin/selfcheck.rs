//! Process `0..=99` with the default processor and print the outcome.
//!
//! Configuration comes from `BATCHLINE_*` environment variables, logging
//! verbosity from `RUST_LOG`.

#![deny(unused_imports)]

use anyhow::{Context, Result};
use batchline_core::{ProcessorConfig, ProcessorFactory, ProcessorKind};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ProcessorConfig::from_env().context("loading configuration")?;
    let processor =
        ProcessorFactory::create_with_config(ProcessorKind::Improved.as_str(), config)?;

    let input = Value::from((0..100).collect::<Vec<i64>>());
    let result = processor.process(&input);

    println!("Processing result: {}", result.success);
    match &result.metrics {
        Some(metrics) => println!("Metrics: {}", serde_json::to_string_pretty(metrics)?),
        None => println!("Metrics: none"),
    }

    if let Some(error) = result.error {
        anyhow::bail!("self-check failed: {error}");
    }
    Ok(())
}
