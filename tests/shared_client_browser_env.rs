#![cfg(not(target_arch = "wasm32"))]

use firebase_rtdb_bootstrap::app::get_apps;
use firebase_rtdb_bootstrap::bootstrap::{shared_client, CONFIG_VARIABLES, DATABASE_URL_VAR};
use std::env;

#[test]
fn shared_client_reads_public_variables_in_browser_mode() {
    env::set_var("FIREBASE_ENV_FORCE", "browser");
    for name in CONFIG_VARIABLES {
        env::set_var(name, format!("env-{name}"));
    }
    env::set_var(DATABASE_URL_VAR, "https://env-project.firebaseio.com");

    let first = shared_client().expect("shared client");
    let second = shared_client().expect("shared client again");
    assert!(std::ptr::eq(first, second));

    let app = first.app.as_ref().expect("client handle");
    assert_eq!(
        app.options().api_key.as_deref(),
        Some("env-PUBLIC_FIREBASE_API_KEY")
    );
    let database = first.database.as_ref().expect("database handle");
    assert_eq!(database.url(), "https://env-project.firebaseio.com");
    assert_eq!(database.namespace(), "env-project");
    assert_eq!(get_apps().len(), 1);
}
