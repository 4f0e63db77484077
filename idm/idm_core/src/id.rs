//! Identifiers for the types an identity store manages.
//!
//! Managed types are named by a stable string tag paired with the category
//! they belong to, rather than by any runtime type information. The builder
//! compares them for equality only; the consuming store decides what each tag
//! means against its own entity model.
//!
//! # Examples
//!
//! ```
//! use idm_core::id::{ManagedType, RelationshipType, TypeKind};
//!
//! let user = ManagedType::new(TypeKind::Identity, "User").unwrap();
//! assert_eq!(user.to_string(), "identity:User");
//!
//! let grant = RelationshipType::new("Grant").unwrap();
//! assert_eq!(grant.managed_type().kind(), TypeKind::Relationship);
//!
//! // Only relationship-kind types can be classified as relationships.
//! assert!(RelationshipType::try_from(user).is_err());
//! ```

use crate::error::{Error, Result};
use crate::traits::CredentialHandler;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// The category a managed type belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// Identities such as users, groups and roles.
    Identity,

    /// Relationships between identities.
    Relationship,

    /// Partitions such as realms and tiers.
    Partition,

    /// Any other attributed type.
    Attributed,
}

impl TypeKind {
    /// Get the lowercase name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Relationship => "relationship",
            Self::Partition => "partition",
            Self::Attributed => "attributed",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "identity" => Ok(Self::Identity),
            "relationship" => Ok(Self::Relationship),
            "partition" => Ok(Self::Partition),
            "attributed" => Ok(Self::Attributed),
            other => Err(Error::invalid_argument(format!(
                "unknown type kind '{}'",
                other
            ))),
        }
    }
}

/// An identifier naming a category of entity an identity store can manage.
///
/// Two managed types are equal when both their kind and their name match.
/// Cloning is cheap; the name is shared.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawManagedType")]
pub struct ManagedType {
    kind: TypeKind,
    name: Arc<str>,
}

/// Unchecked wire form of a managed type.
#[derive(Deserialize)]
struct RawManagedType {
    kind: TypeKind,
    name: String,
}

impl TryFrom<RawManagedType> for ManagedType {
    type Error = Error;

    fn try_from(raw: RawManagedType) -> Result<Self> {
        Self::new(raw.kind, raw.name)
    }
}

impl ManagedType {
    /// Name of the built-in generic identity type.
    pub const IDENTITY_TYPE: &'static str = "IdentityType";

    /// Name of the built-in generic relationship type.
    pub const RELATIONSHIP: &'static str = "Relationship";

    /// Name of the built-in generic partition type.
    pub const PARTITION: &'static str = "Partition";

    /// Create a managed type from a kind and a name.
    ///
    /// Fails with `InvalidArgument` when the name is blank.
    pub fn new(kind: TypeKind, name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(Error::invalid_argument(
                "managed type name must not be blank",
            ));
        }

        Ok(Self {
            kind,
            name: Arc::from(name),
        })
    }

    fn builtin(kind: TypeKind, name: &'static str) -> Self {
        Self {
            kind,
            name: Arc::from(name),
        }
    }

    /// The generic identity type.
    pub fn identity() -> Self {
        Self::builtin(TypeKind::Identity, Self::IDENTITY_TYPE)
    }

    /// The generic relationship type.
    pub fn relationship() -> Self {
        Self::builtin(TypeKind::Relationship, Self::RELATIONSHIP)
    }

    /// The generic partition type.
    pub fn partition() -> Self {
        Self::builtin(TypeKind::Partition, Self::PARTITION)
    }

    /// The built-in identity, relationship and partition types, in that order.
    pub fn defaults() -> [Self; 3] {
        [Self::identity(), Self::relationship(), Self::partition()]
    }

    /// The kind of this type.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The name of this type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a relationship-kind type.
    pub fn is_relationship(&self) -> bool {
        self.kind == TypeKind::Relationship
    }
}

impl fmt::Display for ManagedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}

impl FromStr for ManagedType {
    type Err = Error;

    /// Parse the `kind:name` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self> {
        let (kind, name) = s.split_once(':').ok_or_else(|| {
            Error::invalid_argument(format!("managed type '{}' is not of the form kind:name", s))
        })?;
        Self::new(kind.parse()?, name)
    }
}

/// A managed type known to be of relationship kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "ManagedType", into = "ManagedType")]
pub struct RelationshipType(ManagedType);

impl RelationshipType {
    /// Create a relationship type with the given name.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        ManagedType::new(TypeKind::Relationship, name).map(Self)
    }

    /// The generic relationship type.
    pub fn generic() -> Self {
        Self(ManagedType::relationship())
    }

    /// The underlying managed type.
    pub fn managed_type(&self) -> &ManagedType {
        &self.0
    }

    /// Unwrap into the underlying managed type.
    pub fn into_managed_type(self) -> ManagedType {
        self.0
    }
}

impl TryFrom<ManagedType> for RelationshipType {
    type Error = Error;

    fn try_from(managed_type: ManagedType) -> Result<Self> {
        if managed_type.is_relationship() {
            Ok(Self(managed_type))
        } else {
            Err(Error::invalid_argument(format!(
                "{} is not a relationship type",
                managed_type
            )))
        }
    }
}

impl From<RelationshipType> for ManagedType {
    fn from(relationship: RelationshipType) -> Self {
        relationship.0
    }
}

impl AsRef<ManagedType> for RelationshipType {
    fn as_ref(&self) -> &ManagedType {
        &self.0
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A reference to a credential handler implementation, registered by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct CredentialHandlerRef(Arc<str>);

impl CredentialHandlerRef {
    /// Create a reference from a handler name.
    ///
    /// Fails with `InvalidArgument` when the name is blank.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(Error::invalid_argument(
                "credential handler name must not be blank",
            ));
        }
        Ok(Self(Arc::from(name)))
    }

    /// Reference the given handler implementation by its declared name.
    pub fn of<H: CredentialHandler>() -> Self {
        Self(Arc::from(H::name()))
    }

    /// The handler name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CredentialHandlerRef {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl fmt::Display for CredentialHandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
