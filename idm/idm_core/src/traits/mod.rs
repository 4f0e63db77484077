//! Interfaces of the collaborators a store configuration refers to.
//!
//! Implementations live with the store backends; configurations only hold
//! references to them.

pub mod context;
pub mod credential;

pub use context::ContextInitializer;
pub use credential::CredentialHandler;
