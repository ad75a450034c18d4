use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::app::errors::{AppError, AppResult};
use crate::component::types::DynService;
use crate::component::ComponentContainer;
use crate::platform::environment;

/// Options identifying the backing Firebase project.
///
/// Field names (de)serialize in the camelCase form used by Firebase web config snippets, so a
/// `firebaseConfig` object can be parsed directly with `serde_json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirebaseOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_domain: Option<String>,
    #[serde(rename = "databaseURL", alias = "databaseUrl", skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_sender_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
}

impl FirebaseOptions {
    /// Returns `true` when at least one field carries a value.
    pub fn is_defined(&self) -> bool {
        self.api_key.is_some()
            || self.auth_domain.is_some()
            || self.database_url.is_some()
            || self.project_id.is_some()
            || self.storage_bucket.is_some()
            || self.messaging_sender_id.is_some()
            || self.app_id.is_some()
            || self.measurement_id.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FirebaseAppSettings {
    pub name: Option<String>,
    pub automatic_data_collection_enabled: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirebaseAppConfig {
    pub name: Arc<str>,
    pub automatic_data_collection_enabled: bool,
}

impl FirebaseAppConfig {
    pub fn new(name: impl Into<String>, automatic: bool) -> Self {
        Self {
            name: Arc::from(name.into()),
            automatic_data_collection_enabled: automatic,
        }
    }
}

/// Client handle. Clones share state; use [`FirebaseApp::ptr_eq`] to test identity.
#[derive(Clone)]
pub struct FirebaseApp {
    inner: Arc<FirebaseAppInner>,
}

struct FirebaseAppInner {
    options: FirebaseOptions,
    config: FirebaseAppConfig,
    is_deleted: AtomicBool,
    container: ComponentContainer,
}

impl FirebaseApp {
    pub(crate) fn new(
        options: FirebaseOptions,
        config: FirebaseAppConfig,
        container: ComponentContainer,
    ) -> Self {
        let app = Self {
            inner: Arc::new(FirebaseAppInner {
                options,
                config,
                is_deleted: AtomicBool::new(false),
                container,
            }),
        };
        let root: DynService = Arc::new(app.clone());
        app.inner.container.attach_root_service(root);
        app
    }

    pub fn name(&self) -> &str {
        &self.inner.config.name
    }

    pub fn options(&self) -> FirebaseOptions {
        self.inner.options.clone()
    }

    pub fn config(&self) -> FirebaseAppConfig {
        self.inner.config.clone()
    }

    pub fn automatic_data_collection_enabled(&self) -> bool {
        self.inner.config.automatic_data_collection_enabled
    }

    pub fn container(&self) -> ComponentContainer {
        self.inner.container.clone()
    }

    /// Returns `true` if both handles refer to the same underlying app.
    pub fn ptr_eq(&self, other: &FirebaseApp) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn is_deleted(&self) -> bool {
        self.inner.is_deleted.load(Ordering::SeqCst)
    }

    pub(crate) fn set_is_deleted(&self, value: bool) {
        self.inner.is_deleted.store(value, Ordering::SeqCst);
    }

    pub fn check_destroyed(&self) -> AppResult<()> {
        if self.is_deleted() {
            return Err(AppError::AppDeleted {
                app_name: self.name().to_owned(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for FirebaseApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirebaseApp")
            .field("name", &self.name())
            .field("project_id", &self.inner.options.project_id)
            .field("is_deleted", &self.is_deleted())
            .finish()
    }
}

/// Options published through `__FIREBASE_DEFAULTS__` or the `FIREBASE_CONFIG` family of
/// environment variables, if any.
pub fn get_default_app_config() -> Option<FirebaseOptions> {
    let json = environment::default_app_config_json()?;
    match serde_json::from_value::<FirebaseOptions>(serde_json::Value::Object(json)) {
        Ok(options) if options.is_defined() => Some(options),
        Ok(_) => None,
        Err(err) => {
            log::debug!("ignoring malformed default Firebase config: {err}");
            None
        }
    }
}

pub fn deep_equal_options(a: &FirebaseOptions, b: &FirebaseOptions) -> bool {
    a == b
}

pub fn deep_equal_config(a: &FirebaseAppConfig, b: &FirebaseAppConfig) -> bool {
    a == b
}
