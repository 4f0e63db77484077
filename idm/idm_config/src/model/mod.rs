//! Resolved store configuration models.
//!
//! Everything here is read-only once produced by a builder.

pub mod credential;
pub mod policy;
pub mod relationship;
pub mod store;

pub use credential::CredentialRegistration;
pub use policy::StorePolicy;
pub use relationship::RelationshipClassification;
pub use store::{
    FileStoreSettings, IdentityStoreConfiguration, JpaStoreSettings, LdapStoreSettings,
    StoreSettings, StoreType,
};
