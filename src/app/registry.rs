use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, MutexGuard};

use crate::app::logger::LOGGER;
use crate::app::types::FirebaseApp;
use crate::component::{self, Component, Provider};

/// Every live app in the process, keyed by app name.
static APPS: LazyLock<Mutex<HashMap<String, FirebaseApp>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

pub(crate) fn apps_guard() -> MutexGuard<'static, HashMap<String, FirebaseApp>> {
    APPS.lock().unwrap_or_else(|poison| poison.into_inner())
}

/// Attaches a component to the given app, logging failures for debugging.
pub fn add_component(app: &FirebaseApp, component: &Component) {
    if let Err(err) = app.container().add_component(component.clone()) {
        LOGGER.debug(format!(
            "Component {} failed to register with FirebaseApp {}: {err}",
            component.name(),
            app.name()
        ));
    }
}

/// Registers a global component and propagates it to already-initialized apps.
pub fn register_component(component: Component) -> bool {
    if !component::register_component(component.clone()) {
        return false;
    }

    for app in apps_guard().values() {
        add_component(app, &component);
    }
    true
}

/// Components registered so far, to be attached to a newly created app.
pub(crate) fn registered_components() -> Vec<Component> {
    component::global_components().values().cloned().collect()
}

/// Fetches the provider for the named component on `app`.
pub fn get_provider(app: &FirebaseApp, name: &str) -> Provider {
    app.container().get_provider(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::api;
    use crate::app::types::FirebaseOptions;
    use crate::component::{DynService, InstanceFactory};
    use crate::test_support::registry_lock;
    use std::sync::Arc;

    fn test_options() -> FirebaseOptions {
        FirebaseOptions {
            api_key: Some("internal-test-key".into()),
            app_id: Some("1:987:web:test".into()),
            project_id: Some("internal-test".into()),
            ..Default::default()
        }
    }

    fn unit_component(name: &str) -> Component {
        let factory: InstanceFactory = Arc::new(|_, _| Ok(Arc::new(()) as DynService));
        Component::new(name, factory)
    }

    #[test]
    fn add_component_attaches_to_app() {
        let _lock = registry_lock();
        let app = api::initialize_app(test_options(), None).expect("app init");
        add_component(&app, &unit_component("registry-internal-comp"));
        assert!(get_provider(&app, "registry-internal-comp").is_component_set());
    }

    #[test]
    fn register_component_propagates_to_existing_apps() {
        let _lock = registry_lock();
        let app = api::initialize_app(test_options(), None).expect("app init");

        assert!(register_component(unit_component("registry-late")));
        assert!(get_provider(&app, "registry-late").is_component_set());
        assert!(!register_component(unit_component("registry-late")));
    }

    #[test]
    fn registered_components_attach_to_new_apps() {
        let _lock = registry_lock();
        register_component(unit_component("registry-early"));
        let app = api::initialize_app(test_options(), None).expect("app init");
        assert!(get_provider(&app, "registry-early").is_component_set());
    }
}
