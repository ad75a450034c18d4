#[cfg(not(target_arch = "wasm32"))]
use std::env;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::app::FirebaseOptions;
use crate::bootstrap::error::{ConfigError, ConfigResult};
use crate::platform::environment;

pub const API_KEY_VAR: &str = "PUBLIC_FIREBASE_API_KEY";
pub const AUTH_DOMAIN_VAR: &str = "PUBLIC_FIREBASE_AUTH_DOMAIN";
pub const DATABASE_URL_VAR: &str = "PUBLIC_FIREBASE_DATABASE_URL";
pub const PROJECT_ID_VAR: &str = "PUBLIC_FIREBASE_PROJECT_ID";
pub const STORAGE_BUCKET_VAR: &str = "PUBLIC_FIREBASE_STORAGE_BUCKET";
pub const MESSAGING_SENDER_ID_VAR: &str = "PUBLIC_FIREBASE_MESSAGING_SENDER_ID";
pub const APP_ID_VAR: &str = "PUBLIC_FIREBASE_APP_ID";
pub const MEASUREMENT_ID_VAR: &str = "PUBLIC_FIREBASE_MEASUREMENT_ID";

/// Every variable [`ClientConfig::from_env`] reads, in field order.
pub const CONFIG_VARIABLES: [&str; 8] = [
    API_KEY_VAR,
    AUTH_DOMAIN_VAR,
    DATABASE_URL_VAR,
    PROJECT_ID_VAR,
    STORAGE_BUCKET_VAR,
    MESSAGING_SENDER_ID_VAR,
    APP_ID_VAR,
    MEASUREMENT_ID_VAR,
];

/// JSON keys of a `firebaseConfig` object, in field order.
const CONFIG_KEYS: [&str; 8] = [
    "apiKey",
    "authDomain",
    "databaseURL",
    "projectId",
    "storageBucket",
    "messagingSenderId",
    "appId",
    "measurementId",
];

/// The web config of one Firebase project.
///
/// Values are taken as given; they are not checked against each other or against the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub api_key: String,
    pub auth_domain: String,
    #[serde(rename = "databaseURL", alias = "databaseUrl")]
    pub database_url: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: String,
}

impl ClientConfig {
    /// Reads the `PUBLIC_FIREBASE_*` variables from the process environment. On `wasm32` the
    /// values are the ones set when the crate was compiled.
    ///
    /// When none of them are set, the config published through `__FIREBASE_DEFAULTS__` or
    /// `FIREBASE_CONFIG` is used instead.
    pub fn from_env() -> ConfigResult<Self> {
        resolve(public_variable, environment::default_app_config_json)
    }

    /// Resolves every field through `lookup`. Fails on the first variable it returns `None` for.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let [api_key, auth_domain, database_url, project_id, storage_bucket, messaging_sender_id, app_id, measurement_id] =
            CONFIG_VARIABLES.map(|name| lookup(name).ok_or(ConfigError::MissingVariable { name }));
        Ok(Self {
            api_key: api_key?,
            auth_domain: auth_domain?,
            database_url: database_url?,
            project_id: project_id?,
            storage_bucket: storage_bucket?,
            messaging_sender_id: messaging_sender_id?,
            app_id: app_id?,
            measurement_id: measurement_id?,
        })
    }

    /// Parses a `firebaseConfig` JSON object (`{"apiKey": ..., "databaseURL": ...}`).
    ///
    /// Fails with [`ConfigError::MissingKey`] naming the first absent key.
    pub fn from_json(value: Value) -> ConfigResult<Self> {
        if let Some(key) = value.as_object().and_then(missing_key) {
            return Err(ConfigError::MissingKey { key });
        }
        serde_json::from_value(value).map_err(|err| ConfigError::Malformed {
            message: err.to_string(),
        })
    }

    pub fn to_options(&self) -> FirebaseOptions {
        self.clone().into()
    }
}

impl From<ClientConfig> for FirebaseOptions {
    fn from(config: ClientConfig) -> Self {
        FirebaseOptions {
            api_key: Some(config.api_key),
            auth_domain: Some(config.auth_domain),
            database_url: Some(config.database_url),
            project_id: Some(config.project_id),
            storage_bucket: Some(config.storage_bucket),
            messaging_sender_id: Some(config.messaging_sender_id),
            app_id: Some(config.app_id),
            measurement_id: Some(config.measurement_id),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn public_variable(name: &str) -> Option<String> {
    env::var(name).ok()
}

// No process environment in the browser; the values are baked in at compile time.
#[cfg(target_arch = "wasm32")]
fn public_variable(name: &str) -> Option<String> {
    let value = match name {
        API_KEY_VAR => option_env!("PUBLIC_FIREBASE_API_KEY"),
        AUTH_DOMAIN_VAR => option_env!("PUBLIC_FIREBASE_AUTH_DOMAIN"),
        DATABASE_URL_VAR => option_env!("PUBLIC_FIREBASE_DATABASE_URL"),
        PROJECT_ID_VAR => option_env!("PUBLIC_FIREBASE_PROJECT_ID"),
        STORAGE_BUCKET_VAR => option_env!("PUBLIC_FIREBASE_STORAGE_BUCKET"),
        MESSAGING_SENDER_ID_VAR => option_env!("PUBLIC_FIREBASE_MESSAGING_SENDER_ID"),
        APP_ID_VAR => option_env!("PUBLIC_FIREBASE_APP_ID"),
        MEASUREMENT_ID_VAR => option_env!("PUBLIC_FIREBASE_MEASUREMENT_ID"),
        _ => None,
    };
    value.map(str::to_owned)
}

fn missing_key(object: &Map<String, Value>) -> Option<&'static str> {
    CONFIG_KEYS.into_iter().find(|key| {
        !object.contains_key(*key) && !(*key == "databaseURL" && object.contains_key("databaseUrl"))
    })
}

fn resolve<L, D>(lookup: L, defaults: D) -> ConfigResult<ClientConfig>
where
    L: Fn(&str) -> Option<String>,
    D: FnOnce() -> Option<Map<String, Value>>,
{
    let any_set = CONFIG_VARIABLES.into_iter().any(|name| lookup(name).is_some());
    if any_set {
        return ClientConfig::from_lookup(lookup);
    }

    match defaults() {
        Some(json) => ClientConfig::from_json(Value::Object(json)),
        None => Err(ConfigError::MissingVariable {
            name: CONFIG_VARIABLES[0],
        }),
    }
}
