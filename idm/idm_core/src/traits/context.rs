//! Context initializer interface.

use std::fmt;

use crate::error::Result;
use crate::types::IdentityContext;

/// A hook a store invokes while setting up its operational context.
///
/// Initializers run in the order they were registered. Returning an error
/// stops the remaining initializers from running.
pub trait ContextInitializer: Send + Sync {
    /// An identifier for this initializer, used in logs and diagnostics.
    fn id(&self) -> &str;

    /// Populate the context.
    fn initialize(&self, context: &mut IdentityContext) -> Result<()>;
}

impl fmt::Debug for dyn ContextInitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextInitializer")
            .field("id", &self.id())
            .finish()
    }
}
