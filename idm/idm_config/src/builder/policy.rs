//! Accumulation of store policy declarations.
//!
//! A `StorePolicyBuilder` collects supported and unsupported types,
//! relationship classifications, credential handler registrations and
//! context initializers. Once validated it stops accepting declarations and
//! can be resolved into an immutable [`StorePolicy`].

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use idm_core::{
    ConfigValue, ConfigurationError, ContextInitializer, CredentialHandlerRef, Error,
    IdentityOperation, IdentityOperations, ManagedType, RelationshipType, Result,
};
use log::{debug, trace};

use super::BuilderState;
use crate::model::{CredentialRegistration, RelationshipClassification, StorePolicy};

/// Accumulates the capability policy of one identity store.
#[derive(Debug, Clone, Default)]
pub struct StorePolicyBuilder {
    state: BuilderState,
    supported_types: HashMap<ManagedType, IdentityOperations>,
    unsupported_types: HashMap<ManagedType, IdentityOperations>,
    relationships: RelationshipClassification,
    credentials: CredentialRegistration,
    context_initializers: Vec<Arc<dyn ContextInitializer>>,
}

impl StorePolicyBuilder {
    /// Create an empty, open builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current builder state.
    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Whether the builder has been validated.
    pub fn is_validated(&self) -> bool {
        self.state == BuilderState::Validated
    }

    fn ensure_open(&self) -> Result<()> {
        match self.state {
            BuilderState::Open => Ok(()),
            BuilderState::Validated => Err(ConfigurationError::AlreadyValidated.into()),
        }
    }

    fn insert_supported(&mut self, types: impl IntoIterator<Item = ManagedType>) {
        for managed_type in types {
            // An existing entry is left as is, including any narrowing.
            self.supported_types
                .entry(managed_type)
                .or_insert_with(IdentityOperations::all);
        }
    }

    /// Declare types as supported with every operation enabled.
    ///
    /// Types that are already supported are left untouched. Fails with
    /// `InvalidArgument` when no type is given.
    pub fn support_type(&mut self, types: &[ManagedType]) -> Result<&mut Self> {
        self.ensure_open()?;
        if types.is_empty() {
            return Err(Error::invalid_argument(
                "at least one managed type must be given",
            ));
        }

        debug!("Supporting {} managed type(s)", types.len());
        self.insert_supported(types.iter().cloned());
        Ok(self)
    }

    /// Disable operations on a type.
    ///
    /// An empty `operations` slice disables every operation. The type does
    /// not have to be declared supported.
    pub fn unsupport_type(
        &mut self,
        managed_type: &ManagedType,
        operations: &[IdentityOperation],
    ) -> Result<&mut Self> {
        self.ensure_open()?;

        let disabled = if operations.is_empty() {
            IdentityOperations::all()
        } else {
            IdentityOperations::from(operations)
        };

        debug!("Unsupporting {} for {}", disabled, managed_type);
        *self
            .unsupported_types
            .entry(managed_type.clone())
            .or_insert_with(IdentityOperations::empty) |= disabled;
        Ok(self)
    }

    /// Classify relationship types as global and support them.
    pub fn support_global_relationship(&mut self, types: &[RelationshipType]) -> Result<&mut Self> {
        self.ensure_open()?;
        if types.is_empty() {
            return Err(Error::invalid_argument(
                "at least one relationship type must be given",
            ));
        }

        debug!("Supporting {} global relationship type(s)", types.len());
        self.relationships.add_global(types);
        self.insert_supported(types.iter().map(|t| t.managed_type().clone()));
        Ok(self)
    }

    /// Classify relationship types as self-scoped and support them.
    pub fn support_self_relationship(&mut self, types: &[RelationshipType]) -> Result<&mut Self> {
        self.ensure_open()?;
        if types.is_empty() {
            return Err(Error::invalid_argument(
                "at least one relationship type must be given",
            ));
        }

        debug!("Supporting {} self relationship type(s)", types.len());
        self.relationships.add_self(types);
        self.insert_supported(types.iter().map(|t| t.managed_type().clone()));
        Ok(self)
    }

    /// Support the built-in identity, relationship and partition types and
    /// enable credentials.
    pub fn support_all_features(&mut self) -> Result<&mut Self> {
        self.support_type(&ManagedType::defaults())?;
        self.support_credentials(true)
    }

    /// Append a context initializer.
    pub fn add_context_initializer(
        &mut self,
        initializer: Arc<dyn ContextInitializer>,
    ) -> Result<&mut Self> {
        self.ensure_open()?;
        trace!("Adding context initializer {}", initializer.id());
        self.context_initializers.push(initializer);
        Ok(self)
    }

    /// Set a credential handler property. The last value set for a name wins.
    pub fn set_credential_handler_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Result<&mut Self> {
        self.ensure_open()?;
        let name = name.into();
        trace!("Setting credential handler property {}", name);
        self.credentials.set_property(name, value.into());
        Ok(self)
    }

    /// Append a credential handler.
    pub fn add_credential_handler(&mut self, handler: CredentialHandlerRef) -> Result<&mut Self> {
        self.ensure_open()?;
        trace!("Adding credential handler {}", handler);
        self.credentials.add_handler(handler);
        Ok(self)
    }

    /// Enable or disable credential support.
    pub fn support_credentials(&mut self, enabled: bool) -> Result<&mut Self> {
        self.ensure_open()?;
        self.credentials.set_enabled(enabled);
        Ok(self)
    }

    /// Seed this builder with every declaration of a resolved policy.
    ///
    /// Operation sets are merged with anything already declared, handlers
    /// and initializers are appended, properties are overwritten and the
    /// credentials flag is taken from the policy.
    pub fn read_from(&mut self, policy: &StorePolicy) -> Result<&mut Self> {
        self.ensure_open()?;

        for (managed_type, operations) in policy.supported_types() {
            *self
                .supported_types
                .entry(managed_type.clone())
                .or_insert_with(IdentityOperations::empty) |= *operations;
        }
        for (managed_type, operations) in policy.unsupported_types() {
            *self
                .unsupported_types
                .entry(managed_type.clone())
                .or_insert_with(IdentityOperations::empty) |= *operations;
        }
        self.relationships.merge(policy.relationships());
        self.credentials.merge(policy.credentials());
        self.context_initializers
            .extend(policy.context_initializers().iter().cloned());

        debug!(
            "Read {} supported type(s) from an existing policy",
            policy.supported_types().len()
        );
        Ok(self)
    }

    /// Check that the accumulated declarations form a usable policy.
    ///
    /// Fails with `NoSupportedTypes` when nothing is supported. On success the
    /// builder moves to `Validated` and rejects further declarations.
    /// Validating again with the same state gives the same outcome.
    pub fn validate(&mut self) -> Result<()> {
        if self.supported_types.is_empty() {
            return Err(ConfigurationError::NoSupportedTypes.into());
        }
        if self.state == BuilderState::Open {
            debug!(
                "Store policy validated with {} supported type(s)",
                self.supported_types.len()
            );
            self.state = BuilderState::Validated;
        }
        Ok(())
    }

    /// Produce the immutable policy. The builder must be validated.
    pub fn resolve(&self) -> Result<StorePolicy> {
        if !self.is_validated() {
            return Err(ConfigurationError::NotValidated.into());
        }

        Ok(StorePolicy::new(
            self.supported_types.clone(),
            self.unsupported_types.clone(),
            self.relationships.clone(),
            self.credentials.clone(),
            self.context_initializers.clone(),
        ))
    }

    /// Supported types and their enabled operations.
    pub fn supported_types(&self) -> &HashMap<ManagedType, IdentityOperations> {
        &self.supported_types
    }

    /// Unsupported types and their disabled operations.
    pub fn unsupported_types(&self) -> &HashMap<ManagedType, IdentityOperations> {
        &self.unsupported_types
    }

    /// Relationship types classified as global.
    pub fn global_relationship_types(&self) -> &HashSet<RelationshipType> {
        self.relationships.global()
    }

    /// Relationship types classified as self-scoped.
    pub fn self_relationship_types(&self) -> &HashSet<RelationshipType> {
        self.relationships.self_scoped()
    }

    /// Context initializers in registration order.
    pub fn context_initializers(&self) -> &[Arc<dyn ContextInitializer>] {
        &self.context_initializers
    }

    /// Credential handlers in registration order.
    pub fn credential_handlers(&self) -> &[CredentialHandlerRef] {
        self.credentials.handlers()
    }

    /// Credential handler properties.
    pub fn credential_handler_properties(&self) -> &HashMap<String, ConfigValue> {
        self.credentials.properties()
    }

    /// Whether credentials are enabled.
    pub fn supports_credentials(&self) -> bool {
        self.credentials.is_enabled()
    }
}
