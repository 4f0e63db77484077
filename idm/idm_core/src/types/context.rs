//! The context a store sets up around each operation.
//!
//! Context initializers registered on a store configuration populate an
//! `IdentityContext` before the store acts on it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::ConfigValue;

/// Operational context handed to context initializers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityContext {
    /// The partition the operation runs in, if any.
    partition: Option<String>,

    /// Attributes set by initializers.
    attributes: HashMap<String, ConfigValue>,
}

impl IdentityContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context bound to a partition.
    pub fn for_partition(partition: impl Into<String>) -> Self {
        Self {
            partition: Some(partition.into()),
            attributes: HashMap::new(),
        }
    }

    /// The partition this context is bound to.
    pub fn partition(&self) -> Option<&str> {
        self.partition.as_deref()
    }

    /// Set an attribute, returning the previous value.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.attributes.insert(name.into(), value.into())
    }

    /// Get an attribute.
    pub fn attribute(&self, name: &str) -> Option<&ConfigValue> {
        self.attributes.get(name)
    }

    /// All attributes.
    pub fn attributes(&self) -> &HashMap<String, ConfigValue> {
        &self.attributes
    }
}
