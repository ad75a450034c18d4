//! # Firebase App
//!
//! The client handle ([`FirebaseApp`]) and the process-wide app registry.
//!
//! Apps are registered by name (the default name is [`DEFAULT_ENTRY_NAME`]). Initializing an
//! app that already exists with identical options returns the existing handle, which is what
//! lets repeated bootstrap attempts share a single client.
//!
//! ## Example
//!
//! ```
//! use firebase_rtdb_bootstrap::app::{get_app, initialize_app, FirebaseOptions};
//!
//! let options = FirebaseOptions {
//!     project_id: Some("demo-project".into()),
//!     database_url: Some("https://demo-project.firebaseio.com".into()),
//!     ..Default::default()
//! };
//! let app = initialize_app(options, None)?;
//! assert!(get_app(None)?.ptr_eq(&app));
//! # Ok::<(), firebase_rtdb_bootstrap::app::AppError>(())
//! ```

mod api;
mod constants;
mod errors;
mod logger;
pub(crate) mod registry;
mod types;

#[doc(inline)]
pub use api::{
    delete_app, get_app, get_apps, initialize_app, on_log, set_log_level, SDK_VERSION,
};

#[doc(inline)]
pub use constants::DEFAULT_ENTRY_NAME;

#[doc(inline)]
pub use errors::{AppError, AppResult};

#[doc(inline)]
pub use logger::{LogCallback, LogCallbackParams, LogLevel, LogOptions, Logger, LOGGER};

#[doc(inline)]
pub use registry::{add_component, get_provider, register_component};

#[doc(inline)]
pub use types::{
    deep_equal_config, deep_equal_options, get_default_app_config, FirebaseApp,
    FirebaseAppConfig, FirebaseAppSettings, FirebaseOptions,
};
