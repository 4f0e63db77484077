//! Directory-backed store configuration.

use crate::builder::{IdentityStoreConfigurationBuilder, StorePolicyBuilder};
use crate::model::{LdapStoreSettings, StoreSettings};

/// Builds the configuration of a directory-backed identity store.
#[derive(Debug, Clone, Default)]
pub struct LdapStoreConfigurationBuilder {
    settings: LdapStoreSettings,
    policy: StorePolicyBuilder,
}

impl LdapStoreConfigurationBuilder {
    /// URL of the directory server.
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.settings.url = Some(url.into());
        self
    }

    /// Distinguished name under which entries are stored.
    pub fn base_dn(&mut self, base_dn: impl Into<String>) -> &mut Self {
        self.settings.base_dn = Some(base_dn.into());
        self
    }

    /// Distinguished name the store binds as.
    pub fn bind_dn(&mut self, bind_dn: impl Into<String>) -> &mut Self {
        self.settings.bind_dn = Some(bind_dn.into());
        self
    }

    /// Credential used to bind to the directory.
    pub fn bind_credential(&mut self, credential: impl Into<String>) -> &mut Self {
        self.settings.bind_credential = Some(credential.into());
        self
    }
}

impl IdentityStoreConfigurationBuilder for LdapStoreConfigurationBuilder {
    fn policy(&self) -> &StorePolicyBuilder {
        &self.policy
    }

    fn policy_mut(&mut self) -> &mut StorePolicyBuilder {
        &mut self.policy
    }

    fn settings(&self) -> StoreSettings {
        StoreSettings::Ldap(self.settings.clone())
    }
}
