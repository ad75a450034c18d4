#![cfg(not(target_arch = "wasm32"))]

use firebase_rtdb_bootstrap::app::get_default_app_config;
use firebase_rtdb_bootstrap::bootstrap::{ClientConfig, CONFIG_VARIABLES};
use std::env;

#[test]
fn firebase_config_key_value_pairs_are_parsed() {
    for name in CONFIG_VARIABLES {
        env::remove_var(name);
    }
    env::remove_var("__FIREBASE_DEFAULTS__");
    env::remove_var("__FIREBASE_DEFAULTS_PATH");
    env::set_var(
        "FIREBASE_CONFIG",
        "apiKey=K, authDomain=d, databaseURL=https://kv.firebaseio.com, projectId=kv, \
         storageBucket=b, messagingSenderId=1, appId=a, measurementId=m",
    );

    let config = ClientConfig::from_env().expect("config from FIREBASE_CONFIG");
    assert_eq!(config.project_id, "kv");
    assert_eq!(config.database_url, "https://kv.firebaseio.com");
    assert_eq!(config.measurement_id, "m");

    let options = get_default_app_config().expect("default options");
    assert_eq!(options.project_id.as_deref(), Some("kv"));
}
