use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::app::{self, FirebaseApp, FirebaseOptions, Logger};
use crate::component::types::{ComponentError, DynService, InstanceFactoryOptions};
use crate::component::{Component, ComponentContainer};
use crate::database::constants::{DATABASE_COMPONENT_NAME, DEFAULT_DATABASE_DOMAIN};
use crate::database::error::{internal_error, invalid_argument, DatabaseResult};
use crate::database::repo_info::RepoInfo;
use crate::platform::environment;

static LOGGER: LazyLock<Logger> = LazyLock::new(|| Logger::new("@firebase/database"));

/// Database handle bound to a single Realtime Database endpoint of one app.
#[derive(Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

struct DatabaseInner {
    app: FirebaseApp,
    url: String,
    repo_info: RepoInfo,
}

impl Database {
    fn new(app: FirebaseApp, url: String, repo_info: RepoInfo) -> Self {
        Self {
            inner: Arc::new(DatabaseInner {
                app,
                url,
                repo_info,
            }),
        }
    }

    pub fn app(&self) -> &FirebaseApp {
        &self.inner.app
    }

    /// The endpoint this handle was created for, as configured.
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    pub fn namespace(&self) -> &str {
        self.inner.repo_info.namespace()
    }

    /// Host requests are sent to; differs from [`Self::url`] when an emulator is configured.
    pub fn host(&self) -> &str {
        self.inner.repo_info.host()
    }

    pub fn is_secure(&self) -> bool {
        self.inner.repo_info.is_secure()
    }

    pub fn is_emulator(&self) -> bool {
        self.inner.repo_info.is_emulator()
    }

    pub fn repo_info(&self) -> &RepoInfo {
        &self.inner.repo_info
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("app", &self.app().name())
            .field("url", &self.url())
            .field("emulator", &self.is_emulator())
            .finish()
    }
}

static DATABASE_COMPONENT: LazyLock<()> = LazyLock::new(|| {
    let component = Component::new(DATABASE_COMPONENT_NAME, Arc::new(database_factory))
        .with_multiple_instances(true);
    app::register_component(component);
});

fn database_factory(
    container: &ComponentContainer,
    options: InstanceFactoryOptions,
) -> Result<DynService, ComponentError> {
    let failed = |reason: String| ComponentError::InitializationFailed {
        name: DATABASE_COMPONENT_NAME.to_string(),
        reason,
    };

    let app = container
        .root_service::<FirebaseApp>()
        .ok_or_else(|| failed("Firebase app not attached to component container".to_string()))?;

    let url = match options.instance_identifier {
        Some(url) => url,
        None => resolve_database_url(&app.options()).map_err(|err| failed(err.to_string()))?,
    };
    let repo_info = repo_info_for(&url).map_err(|err| failed(err.to_string()))?;

    LOGGER.debug(format!(
        "Creating database handle for app '{}' at {}",
        app.name(),
        repo_info.connection_url()
    ));
    Ok(Arc::new(Database::new((*app).clone(), url, repo_info)) as DynService)
}

fn ensure_registered() {
    LazyLock::force(&DATABASE_COMPONENT);
}

/// Endpoint configured for the app: `database_url`, or the default-instance URL derived from
/// `project_id`.
fn resolve_database_url(options: &FirebaseOptions) -> DatabaseResult<String> {
    if let Some(url) = options
        .database_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
    {
        return Ok(url.to_string());
    }

    match options.project_id.as_deref() {
        Some(project_id) if !project_id.trim().is_empty() => Ok(format!(
            "https://{}-default-rtdb.{DEFAULT_DATABASE_DOMAIN}",
            project_id.trim()
        )),
        _ => Err(invalid_argument(
            "Can't determine Firebase Database URL. Be sure to include a Project ID when calling initialize_app()",
        )),
    }
}

fn repo_info_for(url: &str) -> DatabaseResult<RepoInfo> {
    let info = RepoInfo::parse(url)?;
    Ok(match environment::database_emulator_host() {
        Some(host) => info.with_emulator_host(host),
        None => info,
    })
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn resolve_app(app: Option<FirebaseApp>) -> DatabaseResult<FirebaseApp> {
    let app = match app {
        Some(app) => app,
        None => app::get_app(None).map_err(|err| internal_error(err.to_string()))?,
    };
    app.check_destroyed()
        .map_err(|err| internal_error(err.to_string()))?;
    Ok(app)
}

fn database_for(app: &FirebaseApp, url: &str) -> DatabaseResult<Arc<Database>> {
    ensure_registered();
    let url = normalize_url(url);
    // Surface URL problems as invalid-argument before the provider wraps them.
    repo_info_for(&url)?;

    app::get_provider(app, DATABASE_COMPONENT_NAME)
        .get_immediate::<Database>(Some(url.as_str()))
        .map_err(|err| internal_error(err.to_string()))?
        .ok_or_else(|| internal_error("Database component not available"))
}

/// Returns the database handle for the app's configured endpoint.
///
/// `None` selects the default app. Repeated calls for the same app return the same handle.
pub fn get_database(app: Option<FirebaseApp>) -> DatabaseResult<Arc<Database>> {
    let app = resolve_app(app)?;
    let url = resolve_database_url(&app.options())?;
    database_for(&app, &url)
}

/// Returns the database handle for an explicit endpoint of the app.
pub fn get_database_for_url(app: Option<FirebaseApp>, url: &str) -> DatabaseResult<Arc<Database>> {
    let app = resolve_app(app)?;
    database_for(&app, url)
}
