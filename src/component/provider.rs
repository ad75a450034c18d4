use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crate::component::component::Component;
use crate::component::constants::DEFAULT_ENTRY_NAME;
use crate::component::container::{ComponentContainer, ComponentContainerInner};
use crate::component::types::{ComponentError, DynService, InstanceFactoryOptions};

/// Lazily builds and caches the instances of one component inside one container.
#[derive(Clone)]
pub struct Provider {
    inner: Arc<ProviderInner>,
}

struct ProviderInner {
    name: Arc<str>,
    container: Weak<ComponentContainerInner>,
    component: Mutex<Option<Component>>,
    instances: Mutex<HashMap<Arc<str>, DynService>>,
}

impl Provider {
    pub(crate) fn new(name: &str, container: &ComponentContainer) -> Self {
        Self {
            inner: Arc::new(ProviderInner {
                name: Arc::from(name),
                container: Arc::downgrade(&container.inner),
                component: Mutex::new(None),
                instances: Mutex::new(HashMap::new()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn is_component_set(&self) -> bool {
        self.component().is_some()
    }

    pub fn is_initialized(&self, identifier: Option<&str>) -> bool {
        let id = self.normalize_identifier(identifier);
        self.instances().contains_key(&id)
    }

    /// Drops every cached instance.
    pub fn delete(&self) {
        self.instances().clear();
    }

    /// Returns the cached instance for `identifier`, building it on first use. Yields `None`
    /// when no component is attached.
    pub fn get_immediate<T>(&self, identifier: Option<&str>) -> Result<Option<Arc<T>>, ComponentError>
    where
        T: Any + Send + Sync + 'static,
    {
        match self.get_or_initialize(identifier)? {
            Some(service) => Ok(service.downcast::<T>().ok()),
            None => Ok(None),
        }
    }

    pub fn set_component(&self, component: Component) -> Result<(), ComponentError> {
        if component.name() != self.name() {
            return Err(ComponentError::MismatchingComponent {
                expected: self.name().to_string(),
                found: component.name().to_string(),
            });
        }

        let mut guard = self.component();
        if guard.is_some() {
            return Err(ComponentError::ComponentAlreadyProvided {
                name: self.name().to_string(),
            });
        }
        *guard = Some(component);
        Ok(())
    }

    fn get_or_initialize(&self, identifier: Option<&str>) -> Result<Option<DynService>, ComponentError> {
        let id = self.normalize_identifier(identifier);

        if let Some(instance) = self.instances().get(&id) {
            return Ok(Some(instance.clone()));
        }

        let Some(component) = self.component().clone() else {
            return Ok(None);
        };

        let container = self
            .inner
            .container
            .upgrade()
            .map(|inner| ComponentContainer { inner })
            .ok_or_else(|| ComponentError::InitializationFailed {
                name: self.name().to_string(),
                reason: "container dropped".into(),
            })?;

        let options = InstanceFactoryOptions::new(
            (id.as_ref() != DEFAULT_ENTRY_NAME).then(|| id.to_string()),
        );
        let instance = (component.instance_factory)(&container, options).map_err(|err| {
            ComponentError::InitializationFailed {
                name: self.name().to_string(),
                reason: err.to_string(),
            }
        })?;

        // A racing caller may have stored an instance first; keep that one.
        let stored = self.instances().entry(id).or_insert(instance).clone();
        Ok(Some(stored))
    }

    fn normalize_identifier(&self, identifier: Option<&str>) -> Arc<str> {
        let multiple = self
            .component()
            .as_ref()
            .is_some_and(Component::multiple_instances);
        match identifier {
            Some(id) if multiple => Arc::from(id),
            _ => Arc::from(DEFAULT_ENTRY_NAME),
        }
    }

    fn component(&self) -> MutexGuard<'_, Option<Component>> {
        self.inner
            .component
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn instances(&self) -> MutexGuard<'_, HashMap<Arc<str>, DynService>> {
        self.inner
            .instances
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}
