//! Multi-store configuration.
//!
//! `IdentityStoresConfigurationBuilder` owns one sub-builder per backend and
//! records which backends were configured. Navigating to a backend returns a
//! [`StoreBuilderHandle`] that declares policy on that backend and can move on
//! to another backend of the same aggregator:
//!
//! ```
//! use idm_config::builder::IdentityStoreConfigurationBuilder;
//! use idm_config::stores::{IdentityStoreConfigurationChildBuilder, IdentityStoresConfigurationBuilder};
//! use idm_config::model::StoreType;
//! use idm_core::{ManagedType, IdentityOperation};
//!
//! # fn main() -> idm_core::Result<()> {
//! let mut stores = IdentityStoresConfigurationBuilder::new();
//! stores
//!     .file()
//!     .support_type(&[ManagedType::partition()])?
//!     .ldap()
//!     .support_type(&[ManagedType::identity()])?
//!     .url("ldap://localhost:389");
//!
//! let configuration = stores.build()?;
//! let store = configuration
//!     .store_for(&ManagedType::identity(), IdentityOperation::Read)
//!     .unwrap();
//! assert_eq!(store.store_type(), StoreType::Ldap);
//! # Ok(())
//! # }
//! ```

mod file;
mod jpa;
mod ldap;

pub use file::FileStoreConfigurationBuilder;
pub use jpa::JpaStoreConfigurationBuilder;
pub use ldap::LdapStoreConfigurationBuilder;

use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use idm_core::{ConfigurationError, IdentityOperation, ManagedType, Result};
use log::debug;

use crate::builder::{IdentityStoreConfigurationBuilder, StorePolicyBuilder};
use crate::model::{IdentityStoreConfiguration, StoreSettings, StoreType};

/// Navigation between the store sub-builders of one aggregator.
pub trait IdentityStoreConfigurationChildBuilder {
    /// Configure the file-backed store.
    fn file(&mut self) -> StoreBuilderHandle<'_, FileStore>;

    /// Configure the database-backed store.
    fn jpa(&mut self) -> StoreBuilderHandle<'_, JpaStore>;

    /// Configure the directory-backed store.
    fn ldap(&mut self) -> StoreBuilderHandle<'_, LdapStore>;
}

/// Selects one sub-builder slot of the aggregator.
pub trait StoreKind {
    /// The sub-builder type in that slot.
    type Builder: IdentityStoreConfigurationBuilder;

    /// The store type of that slot.
    const STORE_TYPE: StoreType;

    fn builder(stores: &IdentityStoresConfigurationBuilder) -> &Self::Builder;

    fn builder_mut(stores: &mut IdentityStoresConfigurationBuilder) -> &mut Self::Builder;
}

/// The file-backed store slot.
#[derive(Debug)]
pub enum FileStore {}

/// The database-backed store slot.
#[derive(Debug)]
pub enum JpaStore {}

/// The directory-backed store slot.
#[derive(Debug)]
pub enum LdapStore {}

impl StoreKind for FileStore {
    type Builder = FileStoreConfigurationBuilder;
    const STORE_TYPE: StoreType = StoreType::File;

    fn builder(stores: &IdentityStoresConfigurationBuilder) -> &Self::Builder {
        &stores.file
    }

    fn builder_mut(stores: &mut IdentityStoresConfigurationBuilder) -> &mut Self::Builder {
        &mut stores.file
    }
}

impl StoreKind for JpaStore {
    type Builder = JpaStoreConfigurationBuilder;
    const STORE_TYPE: StoreType = StoreType::Jpa;

    fn builder(stores: &IdentityStoresConfigurationBuilder) -> &Self::Builder {
        &stores.jpa
    }

    fn builder_mut(stores: &mut IdentityStoresConfigurationBuilder) -> &mut Self::Builder {
        &mut stores.jpa
    }
}

impl StoreKind for LdapStore {
    type Builder = LdapStoreConfigurationBuilder;
    const STORE_TYPE: StoreType = StoreType::Ldap;

    fn builder(stores: &IdentityStoresConfigurationBuilder) -> &Self::Builder {
        &stores.ldap
    }

    fn builder_mut(stores: &mut IdentityStoresConfigurationBuilder) -> &mut Self::Builder {
        &mut stores.ldap
    }
}

/// Owns the configuration of every store backend.
#[derive(Debug, Default)]
pub struct IdentityStoresConfigurationBuilder {
    file: FileStoreConfigurationBuilder,
    jpa: JpaStoreConfigurationBuilder,
    ldap: LdapStoreConfigurationBuilder,
    configured: Vec<StoreType>,
}

impl IdentityStoresConfigurationBuilder {
    /// Create an aggregator with no store configured.
    pub fn new() -> Self {
        Self::default()
    }

    fn handle<S: StoreKind>(&mut self) -> StoreBuilderHandle<'_, S> {
        if !self.configured.contains(&S::STORE_TYPE) {
            debug!("Configuring {} identity store", S::STORE_TYPE);
            self.configured.push(S::STORE_TYPE);
        }
        StoreBuilderHandle {
            stores: self,
            _kind: PhantomData,
        }
    }

    /// Store types navigated to so far, in first-visit order.
    pub fn configured(&self) -> &[StoreType] {
        &self.configured
    }

    fn builder_for(&mut self, store_type: StoreType) -> &mut dyn IdentityStoreConfigurationBuilder {
        match store_type {
            StoreType::File => &mut self.file,
            StoreType::Jpa => &mut self.jpa,
            StoreType::Ldap => &mut self.ldap,
        }
    }

    /// Validate every configured store.
    ///
    /// Fails with `NoStoreConfigured` when no store was navigated to, and
    /// with the first store validation failure otherwise.
    pub fn validate(&mut self) -> Result<()> {
        if self.configured.is_empty() {
            return Err(ConfigurationError::NoStoreConfigured.into());
        }
        for store_type in self.configured.clone() {
            self.builder_for(store_type).validate()?;
        }
        Ok(())
    }

    /// Validate and resolve every configured store.
    pub fn build(&mut self) -> Result<IdentityStoresConfiguration> {
        self.validate()?;

        let mut stores = Vec::with_capacity(self.configured.len());
        for store_type in self.configured.clone() {
            stores.push(self.builder_for(store_type).create()?);
        }

        debug!("Built {} identity store configuration(s)", stores.len());
        Ok(IdentityStoresConfiguration { stores })
    }
}

impl IdentityStoreConfigurationChildBuilder for IdentityStoresConfigurationBuilder {
    fn file(&mut self) -> StoreBuilderHandle<'_, FileStore> {
        self.handle()
    }

    fn jpa(&mut self) -> StoreBuilderHandle<'_, JpaStore> {
        self.handle()
    }

    fn ldap(&mut self) -> StoreBuilderHandle<'_, LdapStore> {
        self.handle()
    }
}

/// A store sub-builder reached through its aggregator.
///
/// Policy declarations act on the selected sub-builder; backend settings are
/// reached through `Deref`; `file()`, `jpa()` and `ldap()` pass through to the
/// aggregator.
pub struct StoreBuilderHandle<'a, S: StoreKind> {
    stores: &'a mut IdentityStoresConfigurationBuilder,
    _kind: PhantomData<S>,
}

impl<S: StoreKind> Deref for StoreBuilderHandle<'_, S> {
    type Target = S::Builder;

    fn deref(&self) -> &Self::Target {
        S::builder(&*self.stores)
    }
}

impl<S: StoreKind> DerefMut for StoreBuilderHandle<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        S::builder_mut(self.stores)
    }
}

impl<S: StoreKind> IdentityStoreConfigurationBuilder for StoreBuilderHandle<'_, S> {
    fn policy(&self) -> &StorePolicyBuilder {
        S::builder(&*self.stores).policy()
    }

    fn policy_mut(&mut self) -> &mut StorePolicyBuilder {
        S::builder_mut(self.stores).policy_mut()
    }

    fn settings(&self) -> StoreSettings {
        S::builder(&*self.stores).settings()
    }
}

impl<S: StoreKind> IdentityStoreConfigurationChildBuilder for StoreBuilderHandle<'_, S> {
    fn file(&mut self) -> StoreBuilderHandle<'_, FileStore> {
        self.stores.file()
    }

    fn jpa(&mut self) -> StoreBuilderHandle<'_, JpaStore> {
        self.stores.jpa()
    }

    fn ldap(&mut self) -> StoreBuilderHandle<'_, LdapStore> {
        self.stores.ldap()
    }
}

/// The resolved configuration of every configured store.
#[derive(Debug, Clone)]
pub struct IdentityStoresConfiguration {
    stores: Vec<IdentityStoreConfiguration>,
}

impl IdentityStoresConfiguration {
    /// Store configurations in first-configured order.
    pub fn stores(&self) -> &[IdentityStoreConfiguration] {
        &self.stores
    }

    /// The configuration of a given backend, if it was configured.
    pub fn store(&self, store_type: StoreType) -> Option<&IdentityStoreConfiguration> {
        self.stores.iter().find(|s| s.store_type() == store_type)
    }

    /// The first store that permits the operation on the type.
    pub fn store_for(
        &self,
        managed_type: &ManagedType,
        operation: IdentityOperation,
    ) -> Option<&IdentityStoreConfiguration> {
        self.stores
            .iter()
            .find(|s| s.supports(managed_type, operation))
    }
}
