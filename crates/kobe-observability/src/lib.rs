//! # kobe-observability
//!
//! Structured tracing for the Kobe scoring engine: subscriber setup driven by
//! `KOBE_LOG` or [`ObservabilityConfig`](kobe_core::config::ObservabilityConfig),
//! span macros per operation, and structured events.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
