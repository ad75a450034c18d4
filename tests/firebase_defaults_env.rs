#![cfg(not(target_arch = "wasm32"))]

use firebase_rtdb_bootstrap::app::{get_default_app_config, initialize_app, FirebaseOptions};
use firebase_rtdb_bootstrap::bootstrap::{ClientConfig, CONFIG_VARIABLES};
use firebase_rtdb_bootstrap::database::get_database;
use std::env;

const DEFAULTS: &str = r#"{
    "config": {
        "apiKey": "K",
        "authDomain": "p.firebaseapp.com",
        "databaseURL": "https://p-default-rtdb.firebaseio.com",
        "projectId": "p",
        "storageBucket": "p.appspot.com",
        "messagingSenderId": "1",
        "appId": "1:1:web:a",
        "measurementId": "G-M"
    },
    "emulatorHosts": { "database": "127.0.0.1:9001" }
}"#;

#[test]
fn defaults_variable_supplies_config_and_emulator() {
    for name in CONFIG_VARIABLES {
        env::remove_var(name);
    }
    env::remove_var("FIREBASE_DATABASE_EMULATOR_HOST");
    env::set_var("__FIREBASE_DEFAULTS__", DEFAULTS);

    let config = ClientConfig::from_env().expect("config from defaults");
    assert_eq!(config.project_id, "p");
    assert_eq!(config.database_url, "https://p-default-rtdb.firebaseio.com");

    let options = get_default_app_config().expect("default options");
    assert_eq!(options, config.to_options());

    // Empty options fall back to the published defaults.
    let app = initialize_app(FirebaseOptions::default(), None).expect("initialize app");
    assert_eq!(app.options(), options);

    let database = get_database(Some(app)).expect("database handle");
    assert!(database.is_emulator());
    assert_eq!(database.host(), "127.0.0.1:9001");
    assert_eq!(database.namespace(), "p-default-rtdb");
}
