use crate::platform::environment;

/// Where the bootstrap code is running.
///
/// Client handles are only created in [`ExecutionContext::Browser`]; server-side rendering and
/// build steps get empty handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExecutionContext {
    Browser,
    Server,
}

impl ExecutionContext {
    /// Probes the runtime: a `Window` global on `wasm32` with the `wasm-web` feature, or
    /// `FIREBASE_ENV_FORCE=browser`.
    pub fn detect() -> Self {
        Self::from(environment::is_browser())
    }

    pub fn is_browser(self) -> bool {
        self == ExecutionContext::Browser
    }
}

impl From<bool> for ExecutionContext {
    fn from(is_browser: bool) -> Self {
        if is_browser {
            ExecutionContext::Browser
        } else {
            ExecutionContext::Server
        }
    }
}
