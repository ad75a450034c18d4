//! # firebase-rtdb-bootstrap
//!
//! Browser-side initialization of a Firebase Realtime Database client.
//!
//! The crate assembles the project's web config from `PUBLIC_FIREBASE_*` environment values,
//! initializes the client only when running in a browser, reuses an already-registered client
//! instead of creating a second one, and hands out the client handle together with the
//! database handle derived from it. See [`bootstrap`] for the entry points.
//!
//! Reads, writes, listeners and authentication are out of scope.

pub mod app;
pub mod bootstrap;
pub mod component;
pub mod database;
pub mod logger;
pub mod platform;

#[cfg(test)]
pub(crate) mod test_support;
