//! Store configuration builders.
//!
//! Every store sub-builder owns a [`StorePolicyBuilder`] and exposes the
//! policy declarations through [`IdentityStoreConfigurationBuilder`], whose
//! provided methods return the implementing builder so calls chain:
//!
//! ```
//! use idm_config::builder::IdentityStoreConfigurationBuilder;
//! use idm_config::stores::FileStoreConfigurationBuilder;
//! use idm_core::{IdentityOperation, ManagedType, RelationshipType};
//!
//! # fn main() -> idm_core::Result<()> {
//! let mut file = FileStoreConfigurationBuilder::default();
//! file.support_all_features()?
//!     .support_global_relationship(&[RelationshipType::new("Grant")?])?
//!     .unsupport_type(&ManagedType::partition(), &[IdentityOperation::Delete])?;
//! file.validate()?;
//!
//! let store = file.create()?;
//! assert!(!store.supports(&ManagedType::partition(), IdentityOperation::Delete));
//! # Ok(())
//! # }
//! ```

mod policy;

pub use policy::StorePolicyBuilder;

use std::sync::Arc;

use idm_core::{
    ConfigValue, ContextInitializer, CredentialHandlerRef, IdentityOperation, ManagedType,
    RelationshipType, Result,
};
use serde::{Deserialize, Serialize};

use crate::model::{IdentityStoreConfiguration, StorePolicy, StoreSettings};

/// Lifecycle state of a policy builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuilderState {
    /// Declarations are accepted.
    #[default]
    Open,

    /// Validation succeeded; the builder is read-only.
    Validated,
}

/// Fluent policy declarations shared by every store sub-builder.
pub trait IdentityStoreConfigurationBuilder {
    /// The policy accumulated so far.
    fn policy(&self) -> &StorePolicyBuilder;

    /// Mutable access to the policy.
    fn policy_mut(&mut self) -> &mut StorePolicyBuilder;

    /// Backend settings as currently configured.
    fn settings(&self) -> StoreSettings;

    /// See [`StorePolicyBuilder::support_type`].
    fn support_type(&mut self, types: &[ManagedType]) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.policy_mut().support_type(types)?;
        Ok(self)
    }

    /// See [`StorePolicyBuilder::unsupport_type`].
    fn unsupport_type(
        &mut self,
        managed_type: &ManagedType,
        operations: &[IdentityOperation],
    ) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.policy_mut().unsupport_type(managed_type, operations)?;
        Ok(self)
    }

    /// See [`StorePolicyBuilder::support_global_relationship`].
    fn support_global_relationship(&mut self, types: &[RelationshipType]) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.policy_mut().support_global_relationship(types)?;
        Ok(self)
    }

    /// See [`StorePolicyBuilder::support_self_relationship`].
    fn support_self_relationship(&mut self, types: &[RelationshipType]) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.policy_mut().support_self_relationship(types)?;
        Ok(self)
    }

    /// See [`StorePolicyBuilder::support_all_features`].
    fn support_all_features(&mut self) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.policy_mut().support_all_features()?;
        Ok(self)
    }

    /// See [`StorePolicyBuilder::add_context_initializer`].
    fn add_context_initializer(
        &mut self,
        initializer: Arc<dyn ContextInitializer>,
    ) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.policy_mut().add_context_initializer(initializer)?;
        Ok(self)
    }

    /// See [`StorePolicyBuilder::set_credential_handler_property`].
    fn set_credential_handler_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.policy_mut()
            .set_credential_handler_property(name, value)?;
        Ok(self)
    }

    /// See [`StorePolicyBuilder::add_credential_handler`].
    fn add_credential_handler(&mut self, handler: CredentialHandlerRef) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.policy_mut().add_credential_handler(handler)?;
        Ok(self)
    }

    /// See [`StorePolicyBuilder::support_credentials`].
    fn support_credentials(&mut self, enabled: bool) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.policy_mut().support_credentials(enabled)?;
        Ok(self)
    }

    /// See [`StorePolicyBuilder::read_from`].
    fn read_from(&mut self, policy: &StorePolicy) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.policy_mut().read_from(policy)?;
        Ok(self)
    }

    /// Validate the accumulated policy.
    fn validate(&mut self) -> Result<()> {
        self.policy_mut().validate()
    }

    /// Resolve into a store configuration. The policy must be validated.
    fn create(&self) -> Result<IdentityStoreConfiguration> {
        let policy = self.policy().resolve()?;
        Ok(IdentityStoreConfiguration::new(self.settings(), policy))
    }
}
