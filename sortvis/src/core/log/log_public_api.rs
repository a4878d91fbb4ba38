// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::TracingConfig;
use crate::ok;

/// Global default subscriber, which once set, can't be unset or changed.
///
/// Logging is **DISABLED** by **default**.
///
/// If you don't call this function w/ a value other than
/// [`tracing_core::LevelFilter::OFF`], then logging won't be enabled. It won't matter if
/// you use the [`tracing::info!`], [`tracing::debug!`], etc. macros.
///
/// The argument can be anything that converts into a [`TracingConfig`], eg a
/// [`tracing::Level`], a [`tracing_core::LevelFilter`], or a
/// [`super::WriterConfig`]. Look at the `From` impls in [`super::tracing_config`] for
/// the defaults (log to [`super::DEFAULT_LOG_FILE_NAME`]).
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is already
/// installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}
