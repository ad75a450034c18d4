use std::fmt;
use std::sync::Arc;

use crate::component::types::InstanceFactory;

/// A named service factory that can be attached to any app's container. Instances are built
/// on first lookup.
#[derive(Clone)]
pub struct Component {
    name: Arc<str>,
    pub(crate) instance_factory: InstanceFactory,
    multiple_instances: bool,
}

impl Component {
    pub fn new(name: impl Into<String>, instance_factory: InstanceFactory) -> Self {
        Self {
            name: Arc::from(name.into()),
            instance_factory,
            multiple_instances: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether instances are keyed by identifier instead of collapsing onto the default entry.
    pub fn multiple_instances(&self) -> bool {
        self.multiple_instances
    }

    pub fn with_multiple_instances(mut self, multiple: bool) -> Self {
        self.multiple_instances = multiple;
        self
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("multiple_instances", &self.multiple_instances)
            .finish()
    }
}
