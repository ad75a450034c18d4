use std::sync::LazyLock;

pub(crate) use crate::logger::{apply_log_level, set_user_log_handler};
pub use crate::logger::{LogCallback, LogCallbackParams, LogLevel, LogOptions, Logger};

pub static LOGGER: LazyLock<Logger> = LazyLock::new(|| Logger::new("@firebase/app"));
