use once_cell::sync::OnceCell;

use crate::bootstrap::config::ClientConfig;
use crate::bootstrap::context::ExecutionContext;
use crate::bootstrap::error::BootstrapResult;
use crate::bootstrap::initializer::{ClientBootstrap, ClientHandles, LOGGER};

static SHARED_CLIENT: OnceCell<ClientHandles> = OnceCell::new();

/// Process-wide client handles, initialized from the environment on first use.
///
/// Loads `.env` if present, detects the execution context and, in a browser, reads the
/// `PUBLIC_FIREBASE_*` config (compile-time values on `wasm32`, where `.env` is skipped).
/// Outside a browser the config is not read and the handles stay empty. A failed attempt is
/// not cached, so a later call tries again.
pub fn shared_client() -> BootstrapResult<&'static ClientHandles> {
    SHARED_CLIENT.get_or_try_init(|| -> BootstrapResult<ClientHandles> {
        #[cfg(not(target_arch = "wasm32"))]
        load_dotenv();
        let context = ExecutionContext::detect();
        if !context.is_browser() {
            LOGGER.debug("Skipping Firebase initialization outside the browser");
            return Ok(ClientHandles::default());
        }
        ClientBootstrap::new(ClientConfig::from_env()?, context).initialize()
    })
}

/// Process-wide client handles built by `bootstrap` on first use.
///
/// Once the handles exist, later calls return them and `bootstrap` is dropped unused.
pub fn init_shared(bootstrap: ClientBootstrap) -> BootstrapResult<&'static ClientHandles> {
    if let Some(handles) = SHARED_CLIENT.get() {
        LOGGER.debug("Shared Firebase client already initialized; reusing it");
        return Ok(handles);
    }
    SHARED_CLIENT.get_or_try_init(|| bootstrap.initialize())
}

/// The shared handles, if a previous call created them.
pub fn try_shared_client() -> Option<&'static ClientHandles> {
    SHARED_CLIENT.get()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => LOGGER.debug(format!("Loaded environment from {}", path.display())),
        Err(err) if err.not_found() => {}
        Err(err) => LOGGER.warn(format!("Ignoring unreadable .env file: {err}")),
    }
}
