//! Serde round trips for the configuration and metrics types.
//!
//! Run with `cargo test --features serde`.

#![cfg(feature = "serde")]

use ringfifo_rs::{Config, InlineFifo, Metrics, LARGE_CONFIG};

#[test]
fn test_config_round_trip() -> anyhow::Result<()> {
    let config = LARGE_CONFIG.with_metrics(true);
    let json = serde_json::to_string(&config)?;
    assert_eq!(json, r#"{"ring_bits":16,"enable_metrics":true}"#);

    let back: Config = serde_json::from_str(&json)?;
    assert_eq!(back, config);
    assert_eq!(back.capacity(), 65536);
    Ok(())
}

#[test]
fn test_deserialized_config_still_needs_validate() -> anyhow::Result<()> {
    let config: Config = serde_json::from_str(r#"{"ring_bits":40,"enable_metrics":false}"#)?;
    assert!(config.validate().is_err());
    Ok(())
}

#[test]
fn test_metrics_round_trip() -> anyhow::Result<()> {
    let mut fifo = InlineFifo::<u8, 4>::new().with_metrics(true);
    fifo.enqueue(&[1, 2, 3, 4, 5, 6]);
    let mut out = [0u8; 8];
    fifo.dequeue(&mut out);

    let metrics = fifo.metrics();
    let json = serde_json::to_string(&metrics)?;
    let back: Metrics = serde_json::from_str(&json)?;
    assert_eq!(back, metrics);
    assert_eq!(back.elements_enqueued, 4);
    assert_eq!(back.truncated_enqueues, 1);
    assert_eq!(back.short_dequeues, 1);
    Ok(())
}
