//! Identity operations and operation sets.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An operation a store may perform on a managed type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl IdentityOperation {
    /// Every operation, in declaration order.
    pub const ALL: [IdentityOperation; 4] = [
        IdentityOperation::Create,
        IdentityOperation::Read,
        IdentityOperation::Update,
        IdentityOperation::Delete,
    ];

    /// Get the lowercase name of this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for IdentityOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentityOperation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "read" => Ok(Self::Read),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            other => Err(Error::invalid_argument(format!(
                "unknown identity operation '{}'",
                other
            ))),
        }
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    /// A set of identity operations stored as a bit field
    pub struct IdentityOperations: u8 {
        const CREATE = 0b0001;
        const READ = 0b0010;
        const UPDATE = 0b0100;
        const DELETE = 0b1000;
    }
}

impl IdentityOperations {
    /// Whether the given operation is in this set.
    pub fn contains_operation(&self, operation: IdentityOperation) -> bool {
        self.contains(Self::from(operation))
    }

    /// Add a single operation to this set.
    pub fn insert_operation(&mut self, operation: IdentityOperation) {
        self.insert(Self::from(operation));
    }

    /// Iterate the operations in this set in declaration order.
    pub fn operations(&self) -> impl Iterator<Item = IdentityOperation> + '_ {
        IdentityOperation::ALL
            .into_iter()
            .filter(move |op| self.contains_operation(*op))
    }
}

impl From<IdentityOperation> for IdentityOperations {
    fn from(operation: IdentityOperation) -> Self {
        match operation {
            IdentityOperation::Create => Self::CREATE,
            IdentityOperation::Read => Self::READ,
            IdentityOperation::Update => Self::UPDATE,
            IdentityOperation::Delete => Self::DELETE,
        }
    }
}

impl From<&[IdentityOperation]> for IdentityOperations {
    fn from(operations: &[IdentityOperation]) -> Self {
        operations
            .iter()
            .fold(Self::empty(), |set, op| set | Self::from(*op))
    }
}

impl FromIterator<IdentityOperation> for IdentityOperations {
    fn from_iter<I: IntoIterator<Item = IdentityOperation>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, op| set | Self::from(op))
    }
}

impl fmt::Display for IdentityOperations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, op) in self.operations().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", op)?;
        }
        write!(f, "]")
    }
}
