//! Per-app service container.
//!
//! Services (such as the Realtime Database handle) register a [`Component`] once per process.
//! Every [`FirebaseApp`](crate::app::FirebaseApp) owns a [`ComponentContainer`] whose
//! [`Provider`]s lazily build and cache one instance per identifier.

mod component;
pub mod constants;
pub mod container;
pub mod provider;
pub mod types;

pub use component::Component;
pub use constants::DEFAULT_ENTRY_NAME;
pub use container::ComponentContainer;
pub use provider::Provider;
pub use types::{ComponentError, DynService, InstanceFactory, InstanceFactoryOptions};

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard};


static GLOBAL_COMPONENTS: LazyLock<Mutex<HashMap<Arc<str>, Component>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

pub(crate) fn global_components() -> MutexGuard<'static, HashMap<Arc<str>, Component>> {
    GLOBAL_COMPONENTS
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

/// Records a component in the process-wide table. Returns `false` if the name is taken.
pub fn register_component(component: Component) -> bool {
    let mut guard = global_components();
    if guard.contains_key(component.name()) {
        return false;
    }
    guard.insert(Arc::from(component.name()), component);
    true
}
