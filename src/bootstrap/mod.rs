//! # Client bootstrap
//!
//! Idempotent, environment-gated initialization of the Firebase client handle and its
//! Realtime Database handle.
//!
//! - [`ClientConfig`] holds the project's web config, read from `PUBLIC_FIREBASE_*` variables.
//! - [`ExecutionContext`] says whether the code runs in a browser; elsewhere nothing is created.
//! - [`ClientBootstrap::initialize`] creates the default app, or reuses it if one is registered,
//!   and derives the database handle for the configured endpoint.
//! - [`shared_client`] and [`init_shared`] keep one [`ClientHandles`] for the whole process.
//!
//! ```
//! use firebase_rtdb_bootstrap::bootstrap::{ClientBootstrap, ClientConfig, ExecutionContext};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_json(serde_json::json!({
//!     "apiKey": "K",
//!     "authDomain": "d",
//!     "databaseURL": "https://x.firebaseio.com",
//!     "projectId": "p",
//!     "storageBucket": "b",
//!     "messagingSenderId": "1",
//!     "appId": "a",
//!     "measurementId": "m"
//! }))?;
//!
//! let server = ClientBootstrap::new(config.clone(), ExecutionContext::Server).initialize()?;
//! assert!(server.app.is_none() && server.database.is_none());
//!
//! let browser = ClientBootstrap::new(config, ExecutionContext::Browser).initialize()?;
//! assert_eq!(browser.database.unwrap().url(), "https://x.firebaseio.com");
//! # Ok(())
//! # }
//! ```

mod config;
mod context;
mod error;
mod initializer;
mod shared;

#[doc(inline)]
pub use config::{
    ClientConfig, API_KEY_VAR, APP_ID_VAR, AUTH_DOMAIN_VAR, CONFIG_VARIABLES, DATABASE_URL_VAR,
    MEASUREMENT_ID_VAR, MESSAGING_SENDER_ID_VAR, PROJECT_ID_VAR, STORAGE_BUCKET_VAR,
};

#[doc(inline)]
pub use context::ExecutionContext;

#[doc(inline)]
pub use error::{BootstrapError, BootstrapResult, ConfigError, ConfigResult};

#[doc(inline)]
pub use initializer::{ClientBootstrap, ClientHandles};

#[doc(inline)]
pub use shared::{init_shared, shared_client, try_shared_client};
