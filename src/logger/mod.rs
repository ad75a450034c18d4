//! Named loggers with a process-wide level and optional user callbacks.
//!
//! Each module keeps a `static LOGGER: LazyLock<Logger>` named after the package it
//! belongs to (`@firebase/app`, `@firebase/database`, ...). [`set_log_level`] adjusts
//! every live logger at once and [`set_user_log_handler`] forwards records to an
//! application callback in addition to the default stdout/stderr handler.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, LazyLock, Mutex, RwLock, Weak};

static GLOBAL_LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);
static INSTANCES: LazyLock<Mutex<Vec<Weak<LoggerInner>>>> =
    LazyLock::new(|| Mutex::new(Vec::new()));
static GLOBAL_USER_HANDLER: RwLock<Option<SharedLogHandler>> = RwLock::new(None);

type SharedLogHandler = Arc<dyn Fn(&Logger, LogLevel, &[LogArgument]) + Send + Sync + 'static>;

#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

impl Logger {
    pub fn new(name: impl Into<String>) -> Self {
        // The global callback is read under the instances lock.
        let mut instances = INSTANCES.lock().unwrap_or_else(|poison| poison.into_inner());
        let inner = Arc::new(LoggerInner::new(name.into()));
        instances.push(Arc::downgrade(&inner));
        Self { inner }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_u8(self.inner.log_level.load(Ordering::SeqCst))
    }

    pub fn set_log_level<L>(&self, level: L) -> Result<(), LogError>
    where
        L: IntoLogLevel,
    {
        let level = level.into_log_level()?;
        self.inner.log_level.store(level as u8, Ordering::SeqCst);
        Ok(())
    }

    /// Replaces the default handler that prints to stdout/stderr.
    pub fn set_log_handler<F>(&self, handler: F)
    where
        F: Fn(&Logger, LogLevel, &[LogArgument]) + Send + Sync + 'static,
    {
        *self
            .inner
            .log_handler
            .write()
            .unwrap_or_else(|poison| poison.into_inner()) = Arc::new(handler);
    }

    pub fn reset_log_handler(&self) {
        *self
            .inner
            .log_handler
            .write()
            .unwrap_or_else(|poison| poison.into_inner()) = Arc::new(default_log_handler);
    }

    pub fn has_user_log_handler(&self) -> bool {
        self.user_log_handler().is_some()
    }

    pub fn debug(&self, arg: impl IntoLogArgument) {
        self.dispatch(LogLevel::Debug, vec![arg.into_log_argument()]);
    }

    pub fn log(&self, arg: impl IntoLogArgument) {
        self.dispatch(LogLevel::Verbose, vec![arg.into_log_argument()]);
    }

    pub fn info(&self, arg: impl IntoLogArgument) {
        self.dispatch(LogLevel::Info, vec![arg.into_log_argument()]);
    }

    pub fn info_with<I, T>(&self, args: I)
    where
        I: IntoIterator<Item = T>,
        T: IntoLogArgument,
    {
        let arguments = args.into_iter().map(IntoLogArgument::into_log_argument).collect();
        self.dispatch(LogLevel::Info, arguments);
    }

    pub fn warn(&self, arg: impl IntoLogArgument) {
        self.dispatch(LogLevel::Warn, vec![arg.into_log_argument()]);
    }

    pub fn error(&self, arg: impl IntoLogArgument) {
        self.dispatch(LogLevel::Error, vec![arg.into_log_argument()]);
    }

    fn dispatch(&self, level: LogLevel, arguments: Vec<LogArgument>) {
        if let Some(handler) = self.user_log_handler() {
            handler(self, level, &arguments);
        }
        let handler = self
            .inner
            .log_handler
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone();
        handler(self, level, &arguments);
    }

    fn user_log_handler(&self) -> Option<SharedLogHandler> {
        self.inner
            .user_log_handler
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }

    fn set_user_handler(&self, handler: Option<SharedLogHandler>) {
        *self
            .inner
            .user_log_handler
            .write()
            .unwrap_or_else(|poison| poison.into_inner()) = handler;
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("log_level", &self.log_level())
            .finish()
    }
}

struct LoggerInner {
    name: String,
    log_level: AtomicU8,
    log_handler: RwLock<SharedLogHandler>,
    user_log_handler: RwLock<Option<SharedLogHandler>>,
}

impl LoggerInner {
    fn new(name: String) -> Self {
        Self {
            name,
            log_level: AtomicU8::new(GLOBAL_LOG_LEVEL.load(Ordering::SeqCst)),
            log_handler: RwLock::new(Arc::new(default_log_handler)),
            user_log_handler: RwLock::new(
                GLOBAL_USER_HANDLER
                    .read()
                    .unwrap_or_else(|poison| poison.into_inner())
                    .clone(),
            ),
        }
    }
}

fn default_log_handler(logger: &Logger, level: LogLevel, args: &[LogArgument]) {
    if level < logger.log_level() || level == LogLevel::Silent {
        return;
    }

    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let message = build_message(args);
    let line = if message.is_empty() {
        format!("[{now}]  {}:", logger.name())
    } else {
        format!("[{now}]  {}: {message}", logger.name())
    };

    match level {
        LogLevel::Warn | LogLevel::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

fn build_message(args: &[LogArgument]) -> String {
    args.iter()
        .filter_map(LogArgument::to_message_fragment)
        .collect::<Vec<_>>()
        .join(" ")
}

fn with_instances<F>(mut f: F)
where
    F: FnMut(Logger),
{
    let mut instances = INSTANCES.lock().unwrap_or_else(|poison| poison.into_inner());
    instances.retain(|weak| match weak.upgrade() {
        Some(inner) => {
            f(Logger { inner });
            true
        }
        None => false,
    });
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    Debug = 0,
    Verbose = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Silent = 5,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Verbose => "verbose",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Silent => "silent",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Debug,
            1 => LogLevel::Verbose,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Silent,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "verbose" => Ok(LogLevel::Verbose),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "silent" => Ok(LogLevel::Silent),
            other => Err(LogError::InvalidLogLevel(other.to_string())),
        }
    }
}

pub trait IntoLogLevel {
    fn into_log_level(self) -> Result<LogLevel, LogError>;
}

impl IntoLogLevel for LogLevel {
    fn into_log_level(self) -> Result<LogLevel, LogError> {
        Ok(self)
    }
}

impl IntoLogLevel for &str {
    fn into_log_level(self) -> Result<LogLevel, LogError> {
        LogLevel::from_str(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Threshold for the user callback; defaults to each logger's own level.
    pub level: Option<LogLevel>,
}

#[derive(Debug, Clone)]
pub struct LogCallbackParams {
    pub level: LogLevel,
    pub message: String,
    pub args: Vec<Value>,
    pub logger_type: String,
}

pub type LogCallback = Arc<dyn Fn(LogCallbackParams) + Send + Sync + 'static>;

#[derive(Debug, Clone, PartialEq)]
pub enum LogArgument {
    Text(String),
    Value(Value),
}

impl LogArgument {
    fn to_message_fragment(&self) -> Option<String> {
        match self {
            LogArgument::Text(text) | LogArgument::Value(Value::String(text)) => Some(text.clone()),
            LogArgument::Value(Value::Null) => None,
            LogArgument::Value(other) => Some(other.to_string()),
        }
    }

    fn to_callback_value(&self) -> Value {
        match self {
            LogArgument::Text(text) => Value::String(text.clone()),
            LogArgument::Value(value) => value.clone(),
        }
    }
}

pub trait IntoLogArgument {
    fn into_log_argument(self) -> LogArgument;
}

impl IntoLogArgument for LogArgument {
    fn into_log_argument(self) -> LogArgument {
        self
    }
}

impl IntoLogArgument for String {
    fn into_log_argument(self) -> LogArgument {
        LogArgument::Text(self)
    }
}

impl IntoLogArgument for &str {
    fn into_log_argument(self) -> LogArgument {
        LogArgument::Text(self.to_owned())
    }
}

impl IntoLogArgument for Value {
    fn into_log_argument(self) -> LogArgument {
        LogArgument::Value(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    InvalidLogLevel(String),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::InvalidLogLevel(level) => {
                write!(f, "Invalid value \"{level}\" assigned to `logLevel`")
            }
        }
    }
}

impl std::error::Error for LogError {}

/// Sets the level of every existing logger and of loggers created afterwards.
pub fn set_log_level<L>(level: L) -> Result<(), LogError>
where
    L: IntoLogLevel,
{
    apply_log_level(level.into_log_level()?);
    Ok(())
}

pub(crate) fn apply_log_level(level: LogLevel) {
    GLOBAL_LOG_LEVEL.store(level as u8, Ordering::SeqCst);
    with_instances(|logger| {
        logger.inner.log_level.store(level as u8, Ordering::SeqCst);
    });
}

/// Installs (or with `None`, removes) a callback on every logger, including loggers created
/// afterwards.
pub fn set_user_log_handler(callback: Option<LogCallback>, options: Option<LogOptions>) {
    let custom_level = options.unwrap_or_default().level;
    let handler = callback.map(|callback| -> SharedLogHandler {
        Arc::new(move |instance: &Logger, level: LogLevel, args: &[LogArgument]| {
            let threshold = custom_level.unwrap_or_else(|| instance.log_level());
            if level < threshold {
                return;
            }
            callback(LogCallbackParams {
                level,
                message: build_message(args),
                args: args.iter().map(LogArgument::to_callback_value).collect(),
                logger_type: instance.name().to_owned(),
            });
        })
    });

    *GLOBAL_USER_HANDLER
        .write()
        .unwrap_or_else(|poison| poison.into_inner()) = handler.clone();
    with_instances(|logger| logger.set_user_handler(handler.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static TEST_GUARD: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

    fn reset_logging() {
        set_log_level(LogLevel::Info).unwrap();
        set_user_log_handler(None, None);
    }

    fn capture(logger: &Logger) -> Arc<Mutex<Vec<(LogLevel, String)>>> {
        let records = Arc::new(Mutex::new(Vec::new()));
        let handler_records = Arc::clone(&records);
        logger.set_log_handler(move |instance, level, args| {
            if level < instance.log_level() {
                return;
            }
            handler_records
                .lock()
                .unwrap()
                .push((level, build_message(args)));
        });
        records
    }

    fn emit_all(logger: &Logger) {
        logger.debug("debug message");
        logger.log("verbose message");
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
    }

    #[test]
    fn log_methods_respect_global_level() {
        let _guard = TEST_GUARD.lock().unwrap();
        reset_logging();
        let logger = Logger::new("@firebase/logger-level-test");
        set_log_level(LogLevel::Debug).unwrap();
        let records = capture(&logger);

        emit_all(&logger);

        let stored = records.lock().unwrap();
        assert_eq!(stored.len(), 5);
        assert_eq!(stored[0], (LogLevel::Debug, "debug message".to_string()));
        reset_logging();
    }

    #[test]
    fn log_level_parsed_from_string() {
        let _guard = TEST_GUARD.lock().unwrap();
        reset_logging();
        let logger = Logger::new("@firebase/logger-string-level");
        set_log_level("warn").unwrap();
        let records = capture(&logger);

        emit_all(&logger);

        let levels: Vec<_> = records.lock().unwrap().iter().map(|(level, _)| *level).collect();
        assert_eq!(levels, [LogLevel::Warn, LogLevel::Error]);
        reset_logging();
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        assert_eq!(
            set_log_level("loud"),
            Err(LogError::InvalidLogLevel("loud".into()))
        );
    }

    #[test]
    fn user_log_handler_receives_arguments() {
        let _guard = TEST_GUARD.lock().unwrap();
        reset_logging();
        let logger = Logger::new("@firebase/logger-user-handler");
        logger.set_log_handler(|_, _, _| {});
        let name = logger.name().to_owned();

        let captured = Arc::new(Mutex::new(Vec::new()));
        let captured_cb = Arc::clone(&captured);
        set_user_log_handler(
            Some(Arc::new(move |params: LogCallbackParams| {
                if params.logger_type == name {
                    captured_cb.lock().unwrap().push(params);
                }
            })),
            None,
        );
        assert!(logger.has_user_log_handler());

        logger.info_with(vec![
            LogArgument::Text("connected to".into()),
            LogArgument::Value(json!({"ns": "demo"})),
        ]);
        logger.debug("filtered out");

        let records = captured.lock().unwrap().clone();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, LogLevel::Info);
        assert_eq!(records[0].message, "connected to {\"ns\":\"demo\"}");
        assert_eq!(records[0].args.len(), 2);
        reset_logging();
        assert!(!logger.has_user_log_handler());
    }

    #[test]
    fn user_handler_respects_custom_level() {
        let _guard = TEST_GUARD.lock().unwrap();
        reset_logging();
        let logger = Logger::new("@firebase/logger-custom-threshold");
        logger.set_log_handler(|_, _, _| {});
        let name = logger.name().to_owned();

        let captured = Arc::new(Mutex::new(Vec::new()));
        let captured_cb = Arc::clone(&captured);
        set_user_log_handler(
            Some(Arc::new(move |params: LogCallbackParams| {
                if params.logger_type == name {
                    captured_cb.lock().unwrap().push(params.level);
                }
            })),
            Some(LogOptions {
                level: Some(LogLevel::Warn),
            }),
        );

        emit_all(&logger);

        assert_eq!(
            captured.lock().unwrap().as_slice(),
            &[LogLevel::Warn, LogLevel::Error]
        );
        reset_logging();
    }

    #[test]
    fn user_handler_reaches_loggers_created_later() {
        let _guard = TEST_GUARD.lock().unwrap();
        reset_logging();
        let captured = Arc::new(Mutex::new(Vec::new()));
        let captured_cb = Arc::clone(&captured);
        set_user_log_handler(
            Some(Arc::new(move |params: LogCallbackParams| {
                if params.logger_type == "@firebase/logger-late" {
                    captured_cb.lock().unwrap().push(params.message);
                }
            })),
            None,
        );

        let logger = Logger::new("@firebase/logger-late");
        logger.set_log_handler(|_, _, _| {});
        assert!(logger.has_user_log_handler());
        logger.info("hello");

        assert_eq!(captured.lock().unwrap().as_slice(), &["hello".to_string()]);
        reset_logging();
        assert!(!Logger::new("@firebase/logger-after-reset").has_user_log_handler());
    }

    #[test]
    fn apply_log_level_reaches_existing_and_later_loggers() {
        let _guard = TEST_GUARD.lock().unwrap();
        reset_logging();
        let existing = Logger::new("@firebase/logger-apply-existing");

        apply_log_level(LogLevel::Error);

        assert_eq!(existing.log_level(), LogLevel::Error);
        assert_eq!(
            Logger::new("@firebase/logger-apply-later").log_level(),
            LogLevel::Error
        );
        reset_logging();
    }
}
