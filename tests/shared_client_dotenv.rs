#![cfg(not(target_arch = "wasm32"))]

use firebase_rtdb_bootstrap::bootstrap::{shared_client, CONFIG_VARIABLES};
use std::{env, fs, process};

#[test]
fn shared_client_loads_dotenv_file() {
    for name in CONFIG_VARIABLES {
        env::remove_var(name);
    }
    env::remove_var("__FIREBASE_DEFAULTS__");
    env::remove_var("FIREBASE_ENV_FORCE");
    env::remove_var("FIREBASE_DATABASE_EMULATOR_HOST");

    let dir = env::temp_dir().join(format!("rtdb-bootstrap-dotenv-{}", process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(".env"),
        "FIREBASE_ENV_FORCE=browser\n\
         PUBLIC_FIREBASE_API_KEY=K\n\
         PUBLIC_FIREBASE_AUTH_DOMAIN=dotenv.firebaseapp.com\n\
         PUBLIC_FIREBASE_DATABASE_URL=https://dotenv-db.firebaseio.com\n\
         PUBLIC_FIREBASE_PROJECT_ID=dotenv\n\
         PUBLIC_FIREBASE_STORAGE_BUCKET=dotenv.appspot.com\n\
         PUBLIC_FIREBASE_MESSAGING_SENDER_ID=1\n\
         PUBLIC_FIREBASE_APP_ID=1:1:web:dotenv\n\
         PUBLIC_FIREBASE_MEASUREMENT_ID=G-DOTENV\n",
    )
    .unwrap();
    env::set_current_dir(&dir).unwrap();

    let handles = shared_client().expect("shared client");
    let database = handles.database().expect("database handle");
    assert_eq!(database.url(), "https://dotenv-db.firebaseio.com");
    assert_eq!(
        handles.app().unwrap().options().project_id.as_deref(),
        Some("dotenv")
    );
    assert_eq!(env::var("PUBLIC_FIREBASE_PROJECT_ID").as_deref(), Ok("dotenv"));

    fs::remove_dir_all(&dir).ok();
}
