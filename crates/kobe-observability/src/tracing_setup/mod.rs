//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kobe_core::config::ObservabilityConfig;

/// Environment variable holding an `EnvFilter` directive string.
pub const ENV_LOG_FILTER: &str = "KOBE_LOG";

const FALLBACK_FILTER: &str = "info";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects `KOBE_LOG` for filtering and defaults to `info`.
/// Idempotent: only the first call in a process installs a subscriber.
pub fn init_tracing() {
    init_from_config(&ObservabilityConfig::default());
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).json())
            .with(filter)
            .try_init();
    });
}

/// Initialize tracing from configuration. `KOBE_LOG` wins over `log_level`.
pub fn init_from_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(std::env::var(ENV_LOG_FILTER).ok().as_deref(), config);
        let (json, plain) = if config.json {
            let layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .json();
            (Some(layer), None)
        } else {
            (None, Some(fmt::layer().with_target(true)))
        };
        let _ = tracing_subscriber::registry()
            .with(json)
            .with(plain)
            .with(filter)
            .try_init();
    });
}

/// Pick the filter directive: env override, then config level, then `info`.
/// Invalid directives fall through to the next candidate.
pub fn resolve_filter(env_value: Option<&str>, config: &ObservabilityConfig) -> EnvFilter {
    env_value
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_new(&config.log_level).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_FILTER))
}
