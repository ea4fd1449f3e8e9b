//! Tracing setup for applications embedding pigeon-config
//!
//! The library itself only emits events: `debug` for every file read,
//! decoded or written to the temp directory and for adapter registration,
//! `trace` for placeholders left unexpanded.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Install a compact stdout subscriber filtered by `RUST_LOG`, falling back
/// to `info`.
pub fn init() -> InitResult {
    init_with_default("info")
}

/// Install a compact stdout subscriber filtered by `RUST_LOG`, falling back
/// to `directive` (for example `pigeon_config=debug`) when it is unset.
///
/// Fails if `directive` does not parse or a global subscriber is already
/// installed.
pub fn init_with_default(directive: &str) -> InitResult {
    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(directive))?;

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(default = directive, "pigeon-config logging initialized");
    Ok(())
}
