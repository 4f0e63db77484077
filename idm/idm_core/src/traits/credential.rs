//! Credential handler interface.
//!
//! Handlers are implemented by store backends and registered on a store
//! configuration by reference (see [`CredentialHandlerRef`]). A store may
//! register several handlers for the same credential kind; resolving which
//! one wins is the store's concern.
//!
//! [`CredentialHandlerRef`]: crate::id::CredentialHandlerRef

use std::collections::HashMap;

use crate::error::Result;
use crate::utils::ConfigValue;

/// A pluggable component responsible for validating one class of credentials.
///
/// # Examples
///
/// ```
/// use idm_core::id::CredentialHandlerRef;
/// use idm_core::traits::CredentialHandler;
/// use idm_core::{ConfigValue, Result};
/// use std::collections::HashMap;
///
/// struct PasswordHandler {
///     iterations: i64,
/// }
///
/// impl CredentialHandler for PasswordHandler {
///     fn name() -> &'static str {
///         "password"
///     }
///
///     fn setup(&mut self, properties: &HashMap<String, ConfigValue>) -> Result<()> {
///         if let Some(n) = properties.get("iterations").and_then(|v| v.as_integer()) {
///             self.iterations = n;
///         }
///         Ok(())
///     }
///
///     fn supports(&self, credential_kind: &str) -> bool {
///         credential_kind == "password"
///     }
/// }
///
/// assert_eq!(CredentialHandlerRef::of::<PasswordHandler>().name(), "password");
/// ```
pub trait CredentialHandler: Send + Sync {
    /// The name this handler is registered under.
    fn name() -> &'static str
    where
        Self: Sized;

    /// Configure the handler from the store's credential handler properties.
    fn setup(&mut self, properties: &HashMap<String, ConfigValue>) -> Result<()>;

    /// Whether this handler validates the given kind of credential.
    fn supports(&self, credential_kind: &str) -> bool;
}
