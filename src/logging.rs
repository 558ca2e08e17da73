// ABOUTME: Production logging setup with env-filter support
// ABOUTME: Initializes the tracing subscriber from RUST_LOG
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize logging from the `RUST_LOG` environment variable
///
/// Falls back to `info` when `RUST_LOG` is unset.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init_from_env() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
