#![cfg(not(target_arch = "wasm32"))]

use firebase_rtdb_bootstrap::app::{get_apps, initialize_app, AppError, FirebaseOptions};
use firebase_rtdb_bootstrap::bootstrap::{ClientConfig, ConfigError, API_KEY_VAR, CONFIG_VARIABLES};
use std::env;

#[test]
fn empty_options_without_defaults_are_rejected() {
    for name in CONFIG_VARIABLES {
        env::remove_var(name);
    }
    for name in [
        "__FIREBASE_DEFAULTS__",
        "__FIREBASE_DEFAULTS_PATH",
        "FIREBASE_CONFIG",
        "FIREBASE_OPTIONS",
        "FIREBASE_WEBAPP_CONFIG",
    ] {
        env::remove_var(name);
    }

    assert_eq!(
        initialize_app(FirebaseOptions::default(), None).unwrap_err(),
        AppError::NoOptions
    );
    assert!(get_apps().is_empty());
    assert_eq!(
        ClientConfig::from_env().unwrap_err(),
        ConfigError::MissingVariable { name: API_KEY_VAR }
    );
}
