//! Data types shared by store configurations and store backends.

pub mod context;
pub mod operation;

pub use context::IdentityContext;
pub use operation::{IdentityOperation, IdentityOperations};
