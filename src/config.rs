//! Runtime configuration resolved from the environment.

use camino::Utf8PathBuf;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable overriding the directory holding the data file.
pub const DATA_HOME_ENV: &str = "KBOARD_HOME";

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_ENV: &str = "KBOARD_LOG";

/// File name of the data file inside the data directory.
pub const DATA_FILE_NAME: &str = ".kboard.db";

/// Log filter used when [`LOG_FILTER_ENV`] is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Errors raised while resolving configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither the override nor a home directory is available.
    #[error(
        "cannot locate a home directory; set {} to choose where data is stored",
        DATA_HOME_ENV
    )]
    NoHomeDirectory,

    /// The resolved location is not valid UTF-8.
    #[error("data file location is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    data_file: Utf8PathBuf,
}

impl Config {
    /// Resolves configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when no data location can be determined.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(env::var_os(DATA_HOME_ENV), dirs::home_dir())
    }

    /// Resolves configuration from an optional data-directory override and
    /// the user's home directory.
    ///
    /// An empty override is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDirectory`] when neither location is
    /// available, or [`ConfigError::NonUtf8Path`] when the chosen location
    /// is not UTF-8.
    pub fn resolve(
        data_home: Option<OsString>,
        user_home: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let directory = data_home
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or(user_home)
            .ok_or(ConfigError::NoHomeDirectory)?;
        let data_file = Utf8PathBuf::from_path_buf(directory.join(DATA_FILE_NAME))
            .map_err(ConfigError::NonUtf8Path)?;
        Ok(Self { data_file })
    }

    /// Creates configuration pointing at an explicit data file.
    #[must_use]
    pub const fn with_data_file(data_file: Utf8PathBuf) -> Self {
        Self { data_file }
    }

    /// Returns the location of the data file.
    #[must_use]
    pub fn data_file(&self) -> &camino::Utf8Path {
        &self.data_file
    }
}
