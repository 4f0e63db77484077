//! Relationship classification.
//!
//! Global relationships may span partitions; self relationships are managed
//! only within the partition or identity that owns them. The two sets are
//! kept independently. Classifying the same type both ways is allowed and
//! leaves it in both sets.

use std::collections::HashSet;

use idm_core::RelationshipType;

/// The global and self relationship sets of a store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipClassification {
    global: HashSet<RelationshipType>,
    self_scoped: HashSet<RelationshipType>,
}

impl RelationshipClassification {
    /// Create an empty classification.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_global(&mut self, types: &[RelationshipType]) {
        self.global.extend(types.iter().cloned());
    }

    pub(crate) fn add_self(&mut self, types: &[RelationshipType]) {
        self.self_scoped.extend(types.iter().cloned());
    }

    pub(crate) fn merge(&mut self, other: &RelationshipClassification) {
        self.global.extend(other.global.iter().cloned());
        self.self_scoped.extend(other.self_scoped.iter().cloned());
    }

    /// Relationship types manageable across partitions.
    pub fn global(&self) -> &HashSet<RelationshipType> {
        &self.global
    }

    /// Relationship types manageable only within their own scope.
    pub fn self_scoped(&self) -> &HashSet<RelationshipType> {
        &self.self_scoped
    }

    /// Whether the type is classified as global.
    pub fn is_global(&self, relationship: &RelationshipType) -> bool {
        self.global.contains(relationship)
    }

    /// Whether the type is classified as self-scoped.
    pub fn is_self(&self, relationship: &RelationshipType) -> bool {
        self.self_scoped.contains(relationship)
    }

    /// Types present in both sets.
    pub fn overlapping(&self) -> impl Iterator<Item = &RelationshipType> {
        self.global.intersection(&self.self_scoped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_are_independent() {
        let grant = RelationshipType::new("Grant").unwrap();
        let membership = RelationshipType::new("GroupMembership").unwrap();

        let mut classification = RelationshipClassification::new();
        classification.add_global(&[grant.clone()]);
        classification.add_self(&[membership.clone(), grant.clone()]);

        assert!(classification.is_global(&grant));
        assert!(classification.is_self(&grant));
        assert!(!classification.is_global(&membership));
        assert_eq!(classification.overlapping().collect::<Vec<_>>(), vec![&grant]);
    }
}
