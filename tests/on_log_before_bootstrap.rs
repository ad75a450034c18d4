#![cfg(not(target_arch = "wasm32"))]

use firebase_rtdb_bootstrap::app::{on_log, set_log_level, LogCallbackParams, LogLevel, LOGGER};
use firebase_rtdb_bootstrap::bootstrap::{ClientBootstrap, ClientConfig, ExecutionContext};
use std::sync::{Arc, Mutex};

#[test]
fn callback_installed_before_first_bootstrap_receives_records() {
    let records = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&records);
    set_log_level(LogLevel::Debug);
    on_log(
        Some(Arc::new(move |params: LogCallbackParams| {
            sink.lock().unwrap().push((params.logger_type, params.message));
        })),
        None,
    )
    .unwrap();

    let config = ClientConfig {
        api_key: "K".into(),
        auth_domain: "d".into(),
        database_url: "https://x.firebaseio.com".into(),
        project_id: "p".into(),
        storage_bucket: "b".into(),
        messaging_sender_id: "1".into(),
        app_id: "a".into(),
        measurement_id: "m".into(),
    };
    ClientBootstrap::new(config, ExecutionContext::Browser)
        .initialize()
        .expect("initialize");

    assert_eq!(LOGGER.log_level(), LogLevel::Debug);
    let records = records.lock().unwrap();
    let from = |logger: &str, prefix: &str| {
        records
            .iter()
            .any(|(name, message)| name == logger && message.starts_with(prefix))
    };
    assert!(from("@firebase/app", "Initialized Firebase App"));
    assert!(from("@firebase/database", "Creating database handle"));
    assert!(from("@firebase/bootstrap", "Firebase client ready"));
}
