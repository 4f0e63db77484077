//! Credential handler registrations.

use std::collections::HashMap;

use idm_core::{ConfigValue, CredentialHandlerRef};

/// Registered credential handlers, their properties, and whether the store
/// handles credentials at all.
///
/// Handlers keep their registration order and may repeat. A store consuming
/// this registration lets later handlers override earlier ones for the same
/// credential kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialRegistration {
    handlers: Vec<CredentialHandlerRef>,
    properties: HashMap<String, ConfigValue>,
    enabled: bool,
}

impl CredentialRegistration {
    /// Create an empty registration with credentials disabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_handler(&mut self, handler: CredentialHandlerRef) {
        self.handlers.push(handler);
    }

    pub(crate) fn set_property(&mut self, name: String, value: ConfigValue) -> Option<ConfigValue> {
        self.properties.insert(name, value)
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn merge(&mut self, other: &CredentialRegistration) {
        self.handlers.extend(other.handlers.iter().cloned());
        self.properties
            .extend(other.properties.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.enabled = other.enabled;
    }

    /// Handlers in registration order.
    pub fn handlers(&self) -> &[CredentialHandlerRef] {
        &self.handlers
    }

    /// Handler properties.
    pub fn properties(&self) -> &HashMap<String, ConfigValue> {
        &self.properties
    }

    /// A single handler property.
    pub fn property(&self, name: &str) -> Option<&ConfigValue> {
        self.properties.get(name)
    }

    /// Whether credentials are supported.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
