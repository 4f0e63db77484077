//! Resolved per-store configuration.
//!
//! Store settings are carried through to the backends untouched. Only the
//! policy half is interpreted by this crate.

use std::fmt;
use std::path::PathBuf;

use idm_core::{IdentityOperation, ManagedType};
use serde::{Deserialize, Serialize};

use super::StorePolicy;

/// The kind of backend a store configuration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreType {
    /// File-backed store.
    File,

    /// Database-backed store.
    Jpa,

    /// Directory-backed store.
    Ldap,
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Jpa => write!(f, "jpa"),
            Self::Ldap => write!(f, "ldap"),
        }
    }
}

/// Settings for a file-backed store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStoreSettings {
    /// Directory the store keeps its files in.
    pub working_directory: PathBuf,

    /// Whether existing files are kept when the store starts.
    #[serde(default)]
    pub preserve_state: bool,

    /// Whether writes happen asynchronously.
    #[serde(default)]
    pub async_write: bool,

    /// Number of threads used for asynchronous writes.
    #[serde(default = "default_async_thread_pool")]
    pub async_thread_pool: usize,
}

fn default_async_thread_pool() -> usize {
    5
}

impl Default for FileStoreSettings {
    fn default() -> Self {
        Self {
            working_directory: std::env::temp_dir().join("idm-store"),
            preserve_state: false,
            async_write: false,
            async_thread_pool: default_async_thread_pool(),
        }
    }
}

/// Settings for a database-backed store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JpaStoreSettings {
    /// Entity names mapped to managed types, in declaration order.
    #[serde(default)]
    pub mapped_entities: Vec<String>,
}

/// Settings for a directory-backed store.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LdapStoreSettings {
    /// Directory server URL.
    pub url: Option<String>,

    /// Base distinguished name.
    pub base_dn: Option<String>,

    /// Distinguished name used to bind.
    pub bind_dn: Option<String>,

    /// Credential used to bind.
    pub bind_credential: Option<String>,
}

impl fmt::Debug for LdapStoreSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LdapStoreSettings")
            .field("url", &self.url)
            .field("base_dn", &self.base_dn)
            .field("bind_dn", &self.bind_dn)
            .field("bind_credential", &self.bind_credential.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Backend-specific settings of a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreSettings {
    File(FileStoreSettings),
    Jpa(JpaStoreSettings),
    Ldap(LdapStoreSettings),
}

impl StoreSettings {
    /// The store type these settings belong to.
    pub fn store_type(&self) -> StoreType {
        match self {
            Self::File(_) => StoreType::File,
            Self::Jpa(_) => StoreType::Jpa,
            Self::Ldap(_) => StoreType::Ldap,
        }
    }
}

/// A fully resolved store configuration: backend settings plus policy.
#[derive(Debug, Clone)]
pub struct IdentityStoreConfiguration {
    settings: StoreSettings,
    policy: StorePolicy,
}

impl IdentityStoreConfiguration {
    pub(crate) fn new(settings: StoreSettings, policy: StorePolicy) -> Self {
        Self { settings, policy }
    }

    /// The store type.
    pub fn store_type(&self) -> StoreType {
        self.settings.store_type()
    }

    /// Backend settings.
    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// The resolved policy.
    pub fn policy(&self) -> &StorePolicy {
        &self.policy
    }

    /// Whether this store permits the operation on the type.
    pub fn supports(&self, managed_type: &ManagedType, operation: IdentityOperation) -> bool {
        self.policy.supports(managed_type, operation)
    }
}
