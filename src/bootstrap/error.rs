use std::fmt;

use crate::app::AppError;
use crate::database::DatabaseError;

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type BootstrapResult<T> = Result<T, BootstrapError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingVariable { name: &'static str },
    MissingKey { key: &'static str },
    Malformed { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingVariable { name } => {
                write!(f, "Firebase config variable {name} is not set")
            }
            ConfigError::MissingKey { key } => {
                write!(f, "Firebase config is missing the \"{key}\" key")
            }
            ConfigError::Malformed { message } => write!(f, "Malformed Firebase config: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure while bootstrapping the client. SDK errors are carried unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    Config(ConfigError),
    App(AppError),
    Database(DatabaseError),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Config(err) => err.fmt(f),
            BootstrapError::App(err) => err.fmt(f),
            BootstrapError::Database(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for BootstrapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BootstrapError::Config(err) => Some(err),
            BootstrapError::App(err) => Some(err),
            BootstrapError::Database(err) => Some(err),
        }
    }
}

impl From<ConfigError> for BootstrapError {
    fn from(err: ConfigError) -> Self {
        BootstrapError::Config(err)
    }
}

impl From<AppError> for BootstrapError {
    fn from(err: AppError) -> Self {
        BootstrapError::App(err)
    }
}

impl From<DatabaseError> for BootstrapError {
    fn from(err: DatabaseError) -> Self {
        BootstrapError::Database(err)
    }
}
