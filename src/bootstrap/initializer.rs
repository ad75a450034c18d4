use std::sync::{Arc, LazyLock};

use crate::app::{get_app, get_apps, initialize_app, FirebaseApp, Logger};
use crate::bootstrap::config::ClientConfig;
use crate::bootstrap::context::ExecutionContext;
use crate::bootstrap::error::BootstrapResult;
use crate::database::{get_database, Database};

pub(crate) static LOGGER: LazyLock<Logger> = LazyLock::new(|| Logger::new("@firebase/bootstrap"));

/// The client handle and the database handle derived from it.
///
/// Both are `None` when initialization was skipped outside a browser.
#[derive(Clone, Debug, Default)]
pub struct ClientHandles {
    pub app: Option<FirebaseApp>,
    pub database: Option<Arc<Database>>,
}

impl ClientHandles {
    pub fn app(&self) -> Option<&FirebaseApp> {
        self.app.as_ref()
    }

    pub fn database(&self) -> Option<&Arc<Database>> {
        self.database.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.app.is_some()
    }
}

/// Builds the client handles for one config in one execution context.
#[derive(Clone, Debug)]
pub struct ClientBootstrap {
    config: ClientConfig,
    context: ExecutionContext,
}

impl ClientBootstrap {
    pub fn new(config: ClientConfig, context: ExecutionContext) -> Self {
        Self { config, context }
    }

    /// Reads the config from the environment and detects the execution context.
    pub fn from_environment() -> BootstrapResult<Self> {
        Ok(Self::new(ClientConfig::from_env()?, ExecutionContext::detect()))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn context(&self) -> ExecutionContext {
        self.context
    }

    /// Creates or reuses the default app and derives its database handle.
    ///
    /// Outside a browser nothing is registered and empty handles are returned. When an app is
    /// already registered (a second load of the calling module, for instance) the default app
    /// is reused instead of being created again. SDK errors are returned as they are.
    pub fn initialize(&self) -> BootstrapResult<ClientHandles> {
        if !self.context.is_browser() {
            LOGGER.debug("Skipping Firebase initialization outside the browser");
            return Ok(ClientHandles::default());
        }

        let options = self.config.to_options();
        let app = if get_apps().is_empty() {
            initialize_app(options, None)?
        } else {
            let existing = get_app(None)?;
            if existing.options() != options {
                LOGGER.warn(format!(
                    "Reusing Firebase App '{}' whose options differ from the supplied config",
                    existing.name()
                ));
            }
            existing
        };
        let database = get_database(Some(app.clone()))?;

        LOGGER.debug(format!(
            "Firebase client ready for project {:?} at {}",
            app.options().project_id.unwrap_or_default(),
            database.url()
        ));
        Ok(ClientHandles {
            app: Some(app),
            database: Some(database),
        })
    }
}
