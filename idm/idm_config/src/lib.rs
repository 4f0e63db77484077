//! # IDM Config
//!
//! `idm_config` turns a sequence of policy declarations into the immutable
//! capability policy an identity store consults before it creates, reads,
//! updates or deletes anything.
//!
//! Key concepts:
//!
//! 1. **Supported and unsupported ledgers**: two independent maps from
//!    managed type to operations. An operation is permitted when it is
//!    supported and not unsupported.
//!
//! 2. **Relationship classification**: relationship types are global
//!    (manageable across partitions) or self-scoped. Classifying a type also
//!    supports it.
//!
//! 3. **Credentials and context**: ordered credential handler references with
//!    their properties, and ordered context initializers.
//!
//! 4. **Open and validated builders**: a builder accepts declarations until it
//!    is validated, then only resolves into a [`StorePolicy`].
//!
//! ```
//! use idm_config::StorePolicyBuilder;
//! use idm_core::{IdentityOperation, ManagedType};
//!
//! # fn main() -> idm_core::Result<()> {
//! let mut builder = StorePolicyBuilder::new();
//! builder
//!     .support_all_features()?
//!     .unsupport_type(&ManagedType::identity(), &[IdentityOperation::Update])?;
//! builder.validate()?;
//!
//! let policy = builder.resolve()?;
//! assert!(policy.supports(&ManagedType::identity(), IdentityOperation::Create));
//! assert!(!policy.supports(&ManagedType::identity(), IdentityOperation::Update));
//! assert!(policy.supports_credentials());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod model;
pub mod stores;

// Re-export key types and traits for convenience
pub use builder::{BuilderState, IdentityStoreConfigurationBuilder, StorePolicyBuilder};
pub use model::{
    CredentialRegistration, IdentityStoreConfiguration, RelationshipClassification, StorePolicy,
    StoreSettings, StoreType,
};
pub use stores::{
    FileStoreConfigurationBuilder, IdentityStoreConfigurationChildBuilder,
    IdentityStoresConfiguration, IdentityStoresConfigurationBuilder,
    JpaStoreConfigurationBuilder, LdapStoreConfigurationBuilder, StoreBuilderHandle,
};
