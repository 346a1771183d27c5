//! Logger setup
//!
//! `env_logger` behind the `log` facade. Level comes from `RUST_LOG`, falling
//! back to `warn`. The TUI owns the terminal, so logs can be redirected to a
//! file instead of stderr.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::Path;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the global logger
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a logger is already
/// installed.
pub fn init_logger(log_file: Option<&Path>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
        builder.write_style(env_logger::WriteStyle::Never);
    }

    builder.try_init().context("Failed to initialize logger")
}
