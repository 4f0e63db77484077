//! Database-backed store configuration.

use crate::builder::{IdentityStoreConfigurationBuilder, StorePolicyBuilder};
use crate::model::{JpaStoreSettings, StoreSettings};

/// Builds the configuration of a database-backed identity store.
#[derive(Debug, Clone, Default)]
pub struct JpaStoreConfigurationBuilder {
    settings: JpaStoreSettings,
    policy: StorePolicyBuilder,
}

impl JpaStoreConfigurationBuilder {
    /// Map entity names onto the store. Names already mapped are skipped.
    pub fn mapped_entity(&mut self, entities: &[&str]) -> &mut Self {
        for entity in entities {
            if !self.settings.mapped_entities.iter().any(|e| e == entity) {
                self.settings.mapped_entities.push(entity.to_string());
            }
        }
        self
    }
}

impl IdentityStoreConfigurationBuilder for JpaStoreConfigurationBuilder {
    fn policy(&self) -> &StorePolicyBuilder {
        &self.policy
    }

    fn policy_mut(&mut self) -> &mut StorePolicyBuilder {
        &mut self.policy
    }

    fn settings(&self) -> StoreSettings {
        StoreSettings::Jpa(self.settings.clone())
    }
}
