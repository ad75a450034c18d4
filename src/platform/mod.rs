//! Runtime environment probing shared by the app, database and bootstrap layers.

pub mod environment;
