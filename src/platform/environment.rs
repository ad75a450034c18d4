//! Runtime environment detection and default configuration discovery.
//!
//! Configuration is looked up in this order:
//! 1. `__FIREBASE_DEFAULTS__`: a JSON object in an environment variable
//!    (or, on `wasm32` with `wasm-web`, a global of the same name);
//! 2. `__FIREBASE_DEFAULTS_PATH`: a path to a file holding that JSON object;
//! 3. `FIREBASE_CONFIG`, `FIREBASE_OPTIONS`, `FIREBASE_WEBAPP_CONFIG`: inline JSON, a path to a
//!    JSON file, or `key=value,key=value` pairs.

use std::env;
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use serde_json::{Map, Value};

const CONFIG_VARIABLES: [&str; 3] = ["FIREBASE_CONFIG", "FIREBASE_OPTIONS", "FIREBASE_WEBAPP_CONFIG"];

/// Environment variable that forces the detected runtime (`browser` or `node`).
pub const FORCE_ENVIRONMENT_VARIABLE: &str = "FIREBASE_ENV_FORCE";

/// Environment variable that points Realtime Database handles at a local emulator.
pub const DATABASE_EMULATOR_HOST_VARIABLE: &str = "FIREBASE_DATABASE_EMULATOR_HOST";

/// Returns the parsed `__FIREBASE_DEFAULTS__` object when available.
fn firebase_defaults() -> Option<Value> {
    defaults_from_env()
        .or_else(defaults_from_path)
        .or_else(defaults_from_global)
}

fn defaults_from_env() -> Option<Value> {
    let raw = env::var("__FIREBASE_DEFAULTS__").ok()?;
    parse_json_object(&raw)
}

fn defaults_from_path() -> Option<Value> {
    let path = env::var("__FIREBASE_DEFAULTS_PATH").ok()?;
    match fs::read_to_string(&path) {
        Ok(content) => parse_json_object(&content),
        Err(err) => {
            log::debug!("unable to read Firebase defaults from {path}: {err}");
            None
        }
    }
}

#[cfg(all(target_arch = "wasm32", feature = "wasm-web"))]
fn defaults_from_global() -> Option<Value> {
    use wasm_bindgen::JsValue;

    let global = js_sys::global();
    let value = js_sys::Reflect::get(&global, &JsValue::from_str("__FIREBASE_DEFAULTS__")).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let serialized = js_sys::JSON::stringify(&value).ok()?.as_string()?;
    parse_json_object(&serialized)
}

#[cfg(not(all(target_arch = "wasm32", feature = "wasm-web")))]
fn defaults_from_global() -> Option<Value> {
    None
}

fn parse_json_object(raw: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(json) if json.is_object() => Some(json),
        Ok(_) => {
            log::debug!("ignoring Firebase config that is not a JSON object");
            None
        }
        Err(_) => None,
    }
}

fn parse_config_source(raw: &str) -> Option<Value> {
    if let Some(json) = parse_json_object(raw) {
        return Some(json);
    }

    if let Some(path) = treat_as_path(raw) {
        if let Some(json) = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| parse_json_object(&contents))
        {
            return Some(json);
        }
        log::debug!("Firebase config file {path} does not contain a JSON object");
    }

    parse_key_value_config(raw)
}

#[cfg(not(target_arch = "wasm32"))]
fn treat_as_path(raw: &str) -> Option<String> {
    if raw.contains('=') {
        return None;
    }
    let trimmed = raw.trim();
    Path::new(trimmed).exists().then(|| trimmed.to_string())
}

#[cfg(target_arch = "wasm32")]
fn treat_as_path(_raw: &str) -> Option<String> {
    None
}

fn parse_key_value_config(raw: &str) -> Option<Value> {
    let mut map = Map::new();
    for entry in raw.split(',') {
        let Some((key, value)) = entry.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
    (!map.is_empty()).then_some(Value::Object(map))
}

fn firebase_config_from_env() -> Option<Value> {
    CONFIG_VARIABLES.iter().find_map(|name| {
        let raw = env::var(name).ok()?;
        let parsed = parse_config_source(&raw);
        if parsed.is_none() {
            log::debug!("{name} is set but could not be parsed as Firebase config");
        }
        parsed
    })
}

/// Retrieves the default app configuration as a JSON map when available.
pub fn default_app_config_json() -> Option<Map<String, Value>> {
    if let Some(config) = firebase_defaults()
        .as_ref()
        .and_then(|defaults| defaults.get("config"))
        .and_then(Value::as_object)
    {
        return Some(config.clone());
    }

    firebase_config_from_env()?.as_object().cloned()
}

/// Returns the `host:port` of the Realtime Database emulator, if one is configured.
pub fn database_emulator_host() -> Option<String> {
    if let Ok(host) = env::var(DATABASE_EMULATOR_HOST_VARIABLE) {
        let host = host.trim();
        if !host.is_empty() {
            return Some(host.to_string());
        }
    }

    firebase_defaults()?
        .get("emulatorHosts")?
        .get("database")?
        .as_str()
        .map(str::to_string)
}

fn force_environment() -> Option<String> {
    firebase_defaults()
        .and_then(|defaults| defaults.get("forceEnvironment").cloned())
        .or_else(|| env::var(FORCE_ENVIRONMENT_VARIABLE).ok().map(Value::String))
        .and_then(|value| match value {
            Value::String(text) => Some(text.to_lowercase()),
            _ => None,
        })
}

/// Returns `true` if the runtime should behave as a browser environment.
pub fn is_browser() -> bool {
    if let Some(forced) = force_environment() {
        return forced == "browser";
    }

    #[cfg(all(target_arch = "wasm32", feature = "wasm-web"))]
    {
        use wasm_bindgen::JsCast;
        js_sys::global().dyn_into::<web_sys::Window>().is_ok()
    }

    #[cfg(not(all(target_arch = "wasm32", feature = "wasm-web")))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_configs() {
        let value = parse_key_value_config("apiKey=foo, projectId=my-proj,broken,=x").unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("apiKey").unwrap().as_str(), Some("foo"));
        assert_eq!(map.get("projectId").unwrap().as_str(), Some("my-proj"));
    }

    #[test]
    fn key_value_config_without_pairs_is_none() {
        assert!(parse_key_value_config("nothing here").is_none());
    }

    #[test]
    fn non_object_json_is_ignored() {
        assert!(parse_json_object("[1, 2, 3]").is_none());
        assert!(parse_json_object("\"text\"").is_none());
        assert!(parse_json_object("{\"apiKey\":\"k\"}").is_some());
    }

    #[test]
    fn parse_config_source_accepts_files_and_json() {
        let json = parse_config_source("{\"apiKey\":\"foo\"}").unwrap();
        assert_eq!(json["apiKey"], "foo");

        let mut path = env::temp_dir();
        path.push(format!(
            "firebase_rtdb_bootstrap_test_{}.json",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::write(&path, "{\"projectId\":\"demo\"}").unwrap();
        let file_json = parse_config_source(&path.to_string_lossy()).unwrap();
        assert_eq!(file_json["projectId"], "demo");
        let _ = fs::remove_file(path);
    }
}
