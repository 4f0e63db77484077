//! # IDM Core
//!
//! `idm_core` provides the building blocks shared by identity store
//! configurations and the stores that consume them: identifiers for managed
//! types, the identity operation set, the error hierarchy, configuration
//! values, and the interfaces of credential handlers and context
//! initializers.
//!
//! ## Crate Structure
//!
//! - **error**: Error types and the crate-wide `Result`
//! - **id**: Managed type, relationship type and credential handler identifiers
//! - **traits**: Collaborator interfaces
//! - **types**: Operations and the identity context
//! - **utils**: Configuration values

pub mod error;
pub mod id;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export key types and traits for convenience
pub use error::{ConfigurationError, Error, Result};
pub use id::{CredentialHandlerRef, ManagedType, RelationshipType, TypeKind};
pub use traits::{ContextInitializer, CredentialHandler};
pub use types::{IdentityContext, IdentityOperation, IdentityOperations};
pub use utils::ConfigValue;
