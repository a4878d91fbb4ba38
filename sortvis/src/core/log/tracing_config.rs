// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::tracing_init::try_create_layers;
use crate::ok;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where the logs go and how verbose they are. Logs only ever go to a file, since the
/// chart owns stdout while it is on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// `String` is the file path to use for the log file. Eg: `log.txt` or
/// `/tmp/sortvis.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    File(String),
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Install a global default subscriber, which once set, can't be unset or changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or if a global subscriber has
    /// already been installed.
    pub fn install_global(self) -> miette::Result<()> {
        let Some(layers) = try_create_layers(self)? else {
            return ok!();
        };
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|err| miette::miette!("Failed to install tracing subscriber: {err}"))
    }
}

mod tracing_config_options {
    use super::{DEFAULT_LOG_FILE_NAME, LevelFilter, TracingConfig, WriterConfig};

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_level_converts_to_file_config() {
        let config: TracingConfig = tracing::Level::INFO.into();
        assert_eq2!(config.get_level_filter(), LevelFilter::INFO);
        assert_eq2!(
            config.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
    }

    #[test]
    fn test_level_filter_converts_to_file_config() {
        let config = TracingConfig::from(LevelFilter::DEBUG);
        assert_eq2!(
            config,
            TracingConfig {
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
                level_filter: LevelFilter::DEBUG,
            }
        );
    }
}
