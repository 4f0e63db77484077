//! The resolved capability policy of an identity store.
//!
//! A `StorePolicy` is what a store consults before it performs an operation.
//! It is produced once by a validated [`StorePolicyBuilder`] and never
//! changes afterwards. Clones share the same backing data, so a policy can be
//! handed to any number of threads serving the store.
//!
//! Permission for an operation on a type is the combination of two ledgers:
//!
//! ```text
//! permitted(t, op) := op ∈ supported(t) ∧ op ∉ unsupported(t)
//! ```
//!
//! When the two disagree, the unsupported ledger wins.
//!
//! [`StorePolicyBuilder`]: crate::builder::StorePolicyBuilder

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use idm_core::{
    ConfigValue, ContextInitializer, CredentialHandlerRef, IdentityContext, IdentityOperation,
    IdentityOperations, ManagedType, RelationshipType, Result,
};
use log::trace;

use super::{CredentialRegistration, RelationshipClassification};

#[derive(Debug)]
struct PolicyData {
    supported_types: HashMap<ManagedType, IdentityOperations>,
    unsupported_types: HashMap<ManagedType, IdentityOperations>,
    relationships: RelationshipClassification,
    credentials: CredentialRegistration,
    context_initializers: Vec<Arc<dyn ContextInitializer>>,
}

/// An immutable, shareable capability policy.
#[derive(Debug, Clone)]
pub struct StorePolicy {
    data: Arc<PolicyData>,
}

impl StorePolicy {
    pub(crate) fn new(
        supported_types: HashMap<ManagedType, IdentityOperations>,
        unsupported_types: HashMap<ManagedType, IdentityOperations>,
        relationships: RelationshipClassification,
        credentials: CredentialRegistration,
        context_initializers: Vec<Arc<dyn ContextInitializer>>,
    ) -> Self {
        Self {
            data: Arc::new(PolicyData {
                supported_types,
                unsupported_types,
                relationships,
                credentials,
                context_initializers,
            }),
        }
    }

    /// The supported-types ledger as declared.
    pub fn supported_types(&self) -> &HashMap<ManagedType, IdentityOperations> {
        &self.data.supported_types
    }

    /// The unsupported-types ledger as declared.
    pub fn unsupported_types(&self) -> &HashMap<ManagedType, IdentityOperations> {
        &self.data.unsupported_types
    }

    /// Operations effectively permitted on a type.
    ///
    /// Empty for types that were never declared supported.
    pub fn supported_operations(&self, managed_type: &ManagedType) -> IdentityOperations {
        let supported = self
            .data
            .supported_types
            .get(managed_type)
            .copied()
            .unwrap_or(IdentityOperations::empty());
        supported - self.unsupported_operations(managed_type)
    }

    /// Operations explicitly disabled on a type.
    pub fn unsupported_operations(&self, managed_type: &ManagedType) -> IdentityOperations {
        self.data
            .unsupported_types
            .get(managed_type)
            .copied()
            .unwrap_or(IdentityOperations::empty())
    }

    /// Whether the operation is permitted on the type.
    pub fn supports(&self, managed_type: &ManagedType, operation: IdentityOperation) -> bool {
        self.supported_operations(managed_type)
            .contains_operation(operation)
    }

    /// Whether any operation is permitted on the type.
    pub fn supports_type(&self, managed_type: &ManagedType) -> bool {
        !self.supported_operations(managed_type).is_empty()
    }

    /// The relationship classification.
    pub fn relationships(&self) -> &RelationshipClassification {
        &self.data.relationships
    }

    /// Relationship types manageable across partitions.
    pub fn global_relationship_types(&self) -> &HashSet<RelationshipType> {
        self.data.relationships.global()
    }

    /// Relationship types manageable only within their own scope.
    pub fn self_relationship_types(&self) -> &HashSet<RelationshipType> {
        self.data.relationships.self_scoped()
    }

    /// Whether the relationship type is classified as global.
    pub fn is_global_relationship(&self, relationship: &RelationshipType) -> bool {
        self.data.relationships.is_global(relationship)
    }

    /// Whether the relationship type is classified as self-scoped.
    pub fn is_self_relationship(&self, relationship: &RelationshipType) -> bool {
        self.data.relationships.is_self(relationship)
    }

    /// The credential handler registration.
    pub fn credentials(&self) -> &CredentialRegistration {
        &self.data.credentials
    }

    /// Credential handlers in registration order.
    pub fn credential_handlers(&self) -> &[CredentialHandlerRef] {
        self.data.credentials.handlers()
    }

    /// Credential handler properties.
    pub fn credential_handler_properties(&self) -> &HashMap<String, ConfigValue> {
        self.data.credentials.properties()
    }

    /// A single credential handler property.
    pub fn credential_handler_property(&self, name: &str) -> Option<&ConfigValue> {
        self.data.credentials.property(name)
    }

    /// Whether the store handles credentials.
    pub fn supports_credentials(&self) -> bool {
        self.data.credentials.is_enabled()
    }

    /// Context initializers in registration order.
    pub fn context_initializers(&self) -> &[Arc<dyn ContextInitializer>] {
        &self.data.context_initializers
    }

    /// Run every context initializer against the context, in order.
    ///
    /// Stops at the first initializer that fails.
    pub fn initialize_context(&self, context: &mut IdentityContext) -> Result<()> {
        for initializer in &self.data.context_initializers {
            trace!("Running context initializer {}", initializer.id());
            initializer.initialize(context)?;
        }
        Ok(())
    }
}
