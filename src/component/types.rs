use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::component::container::ComponentContainer;

pub type DynService = Arc<dyn Any + Send + Sync>;

#[derive(Debug, Clone, Default)]
pub struct InstanceFactoryOptions {
    pub instance_identifier: Option<String>,
}

impl InstanceFactoryOptions {
    pub fn new(instance_identifier: Option<String>) -> Self {
        Self {
            instance_identifier,
        }
    }
}

pub type InstanceFactory = Arc<
    dyn Fn(&ComponentContainer, InstanceFactoryOptions) -> Result<DynService, ComponentError>
        + Send
        + Sync,
>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    MismatchingComponent { expected: String, found: String },
    ComponentAlreadyProvided { name: String },
    InitializationFailed { name: String, reason: String },
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentError::MismatchingComponent { expected, found } => {
                write!(f, "Component {found} cannot satisfy provider for {expected}")
            }
            ComponentError::ComponentAlreadyProvided { name } => {
                write!(f, "Component {name} has already been registered")
            }
            ComponentError::InitializationFailed { name, reason } => {
                write!(f, "Component {name} failed to initialize: {reason}")
            }
        }
    }
}

impl std::error::Error for ComponentError {}
