//! # Firebase Realtime Database handle
//!
//! Derives a [`Database`] handle from a [`FirebaseApp`](crate::app::FirebaseApp). Each handle is
//! bound to one endpoint, either the app's `database_url`, an explicit URL passed to
//! [`get_database_for_url`], or the default instance of the app's project
//! (`https://<project_id>-default-rtdb.firebaseio.com`).
//!
//! Handles are cached per app and per endpoint, so every caller shares the same instance.
//! Setting `FIREBASE_DATABASE_EMULATOR_HOST=host:port` points new handles at a local emulator.
//!
//! Reads, writes and listeners are not part of this crate.
//!
//! ```
//! use firebase_rtdb_bootstrap::app::{initialize_app, FirebaseOptions};
//! use firebase_rtdb_bootstrap::database::get_database;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let app = initialize_app(
//!     FirebaseOptions {
//!         project_id: Some("demo".into()),
//!         database_url: Some("https://demo.firebaseio.com".into()),
//!         ..Default::default()
//!     },
//!     None,
//! )?;
//! let database = get_database(Some(app))?;
//! assert_eq!(database.url(), "https://demo.firebaseio.com");
//! # Ok(())
//! # }
//! ```

mod api;
mod constants;
pub mod error;
mod repo_info;

#[doc(inline)]
pub use api::{get_database, get_database_for_url, Database};

#[doc(inline)]
pub use error::{DatabaseError, DatabaseErrorCode, DatabaseResult};

#[doc(inline)]
pub use repo_info::RepoInfo;
