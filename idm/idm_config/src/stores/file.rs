//! File-backed store configuration.

use std::path::PathBuf;

use crate::builder::{IdentityStoreConfigurationBuilder, StorePolicyBuilder};
use crate::model::{FileStoreSettings, StoreSettings};

/// Builds the configuration of a file-backed identity store.
#[derive(Debug, Clone, Default)]
pub struct FileStoreConfigurationBuilder {
    settings: FileStoreSettings,
    policy: StorePolicyBuilder,
}

impl FileStoreConfigurationBuilder {
    /// Directory the store keeps its files in.
    pub fn working_directory(&mut self, directory: impl Into<PathBuf>) -> &mut Self {
        self.settings.working_directory = directory.into();
        self
    }

    /// Keep existing files when the store starts.
    pub fn preserve_state(&mut self, preserve: bool) -> &mut Self {
        self.settings.preserve_state = preserve;
        self
    }

    /// Write asynchronously.
    pub fn async_write(&mut self, enabled: bool) -> &mut Self {
        self.settings.async_write = enabled;
        self
    }

    /// Number of threads used for asynchronous writes.
    pub fn async_thread_pool(&mut self, size: usize) -> &mut Self {
        self.settings.async_thread_pool = size;
        self
    }
}

impl IdentityStoreConfigurationBuilder for FileStoreConfigurationBuilder {
    fn policy(&self) -> &StorePolicyBuilder {
        &self.policy
    }

    fn policy_mut(&mut self) -> &mut StorePolicyBuilder {
        &mut self.policy
    }

    fn settings(&self) -> StoreSettings {
        StoreSettings::File(self.settings.clone())
    }
}
