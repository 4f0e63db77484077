use std::sync::Arc;
use std::thread;

use idm_config::{StorePolicy, StorePolicyBuilder};
use idm_core::{
    ConfigValue, ConfigurationError, ContextInitializer, CredentialHandlerRef, Error,
    IdentityContext, IdentityOperation, IdentityOperations, ManagedType, RelationshipType,
    Result, TypeKind,
};
use proptest::prelude::*;

fn resolved(builder: &mut StorePolicyBuilder) -> StorePolicy {
    builder.validate().unwrap();
    builder.resolve().unwrap()
}

fn operation_strategy() -> impl Strategy<Value = IdentityOperation> {
    prop::sample::select(IdentityOperation::ALL.to_vec())
}

fn managed_type_strategy() -> impl Strategy<Value = ManagedType> {
    (
        prop::sample::select(vec![
            TypeKind::Identity,
            TypeKind::Relationship,
            TypeKind::Partition,
            TypeKind::Attributed,
        ]),
        "[A-Z][a-z]{2,10}",
    )
        .prop_map(|(kind, name)| ManagedType::new(kind, name).unwrap())
}

proptest! {
    #[test]
    fn supported_type_permits_every_operation(managed in managed_type_strategy(), op in operation_strategy()) {
        let mut builder = StorePolicyBuilder::new();
        builder.support_type(&[managed.clone()]).unwrap();
        let policy = resolved(&mut builder);
        prop_assert!(policy.supports(&managed, op));
    }

    #[test]
    fn unsupport_wins_over_support(
        managed in managed_type_strategy(),
        disabled in prop::collection::vec(operation_strategy(), 1..4),
        probe in operation_strategy(),
    ) {
        let mut builder = StorePolicyBuilder::new();
        builder
            .support_type(&[managed.clone()])
            .unwrap()
            .unsupport_type(&managed, &disabled)
            .unwrap();
        let policy = resolved(&mut builder);
        prop_assert_eq!(policy.supports(&managed, probe), !disabled.contains(&probe));
    }

    #[test]
    fn declaration_order_does_not_change_outcome(managed in managed_type_strategy(), op in operation_strategy()) {
        let mut support_first = StorePolicyBuilder::new();
        support_first
            .support_type(&[managed.clone()])
            .unwrap()
            .unsupport_type(&managed, &[op])
            .unwrap();

        let mut unsupport_first = StorePolicyBuilder::new();
        unsupport_first
            .unsupport_type(&managed, &[op])
            .unwrap()
            .support_type(&[managed.clone()])
            .unwrap();

        let a = resolved(&mut support_first);
        let b = resolved(&mut unsupport_first);
        prop_assert_eq!(a.supported_operations(&managed), b.supported_operations(&managed));
    }
}

#[test]
fn unsupport_without_operations_disables_never_supported_type() {
    let group = ManagedType::new(TypeKind::Identity, "Group").unwrap();

    let mut builder = StorePolicyBuilder::new();
    builder
        .support_all_features()
        .unwrap()
        .unsupport_type(&group, &[])
        .unwrap();
    let policy = resolved(&mut builder);

    assert_eq!(policy.unsupported_operations(&group), IdentityOperations::all());
    assert!(!policy.supports_type(&group));
    for op in IdentityOperation::ALL {
        assert!(!policy.supports(&group, op));
    }
}

#[test]
fn unsupport_update_leaves_create_supported() {
    let user = ManagedType::new(TypeKind::Identity, "User").unwrap();
    let role = ManagedType::new(TypeKind::Identity, "Role").unwrap();

    let mut builder = StorePolicyBuilder::new();
    builder
        .support_type(&[user.clone()])
        .unwrap()
        .unsupport_type(&user, &[IdentityOperation::Update])
        .unwrap()
        .unsupport_type(&role, &[IdentityOperation::Update])
        .unwrap();
    let policy = resolved(&mut builder);

    assert!(!policy.supports(&user, IdentityOperation::Update));
    assert!(policy.supports(&user, IdentityOperation::Create));
    assert_eq!(
        policy.supported_operations(&user),
        IdentityOperations::CREATE | IdentityOperations::READ | IdentityOperations::DELETE
    );
    // Never supported, so create stays unsupported too.
    assert!(!policy.supports(&role, IdentityOperation::Create));
    // The raw ledger still shows the full declaration.
    assert_eq!(policy.supported_types()[&user], IdentityOperations::all());
}

#[test]
fn global_relationship_is_classified_and_supported() {
    let grant = RelationshipType::new("Grant").unwrap();

    let mut builder = StorePolicyBuilder::new();
    builder.support_global_relationship(&[grant.clone()]).unwrap();
    let policy = resolved(&mut builder);

    assert!(policy.is_global_relationship(&grant));
    assert!(!policy.is_self_relationship(&grant));
    assert_eq!(
        policy.supported_operations(grant.managed_type()),
        IdentityOperations::all()
    );
}

#[test]
fn relationship_may_be_both_global_and_self() {
    let membership = RelationshipType::new("GroupMembership").unwrap();

    let mut builder = StorePolicyBuilder::new();
    builder
        .support_global_relationship(&[membership.clone()])
        .unwrap()
        .support_self_relationship(&[membership.clone()])
        .unwrap();
    let policy = resolved(&mut builder);

    assert!(policy.is_global_relationship(&membership));
    assert!(policy.is_self_relationship(&membership));
    assert_eq!(policy.relationships().overlapping().count(), 1);
    assert_eq!(policy.supported_types().len(), 1);
}

#[test]
fn support_all_features_covers_defaults_only() {
    let mut builder = StorePolicyBuilder::new();
    builder.support_all_features().unwrap();
    let policy = resolved(&mut builder);

    assert!(policy.supports_credentials());
    assert_eq!(policy.supported_types().len(), 3);
    for managed in ManagedType::defaults() {
        assert!(policy.supports_type(&managed));
    }
    assert!(policy.global_relationship_types().is_empty());
    assert!(policy.self_relationship_types().is_empty());
    assert!(policy.credential_handlers().is_empty());
}

#[test]
fn validate_fails_only_without_supported_types() {
    let mut empty = StorePolicyBuilder::new();
    empty
        .support_credentials(true)
        .unwrap()
        .add_credential_handler(CredentialHandlerRef::new("password").unwrap())
        .unwrap();
    let first = empty.validate().unwrap_err();
    let second = empty.validate().unwrap_err();
    assert_eq!(first, Error::Configuration(ConfigurationError::NoSupportedTypes));
    assert_eq!(first, second);
    assert_eq!(
        first.to_string(),
        "Configuration error: The store configuration must have at least one supported type"
    );

    let mut populated = StorePolicyBuilder::new();
    populated.support_type(&[ManagedType::partition()]).unwrap();
    assert!(populated.validate().is_ok());
    assert!(populated.validate().is_ok());
}

#[test]
fn credential_property_last_write_wins() {
    let mut builder = StorePolicyBuilder::new();
    builder
        .support_all_features()
        .unwrap()
        .set_credential_handler_property("x", 1)
        .unwrap()
        .set_credential_handler_property("x", 2)
        .unwrap();
    let policy = resolved(&mut builder);

    assert_eq!(policy.credential_handler_properties().len(), 1);
    assert_eq!(
        policy.credential_handler_property("x"),
        Some(&ConfigValue::Integer(2))
    );
}

#[test]
fn credential_handlers_keep_order_and_duplicates() {
    let password = CredentialHandlerRef::new("password").unwrap();
    let totp = CredentialHandlerRef::new("totp").unwrap();

    let mut builder = StorePolicyBuilder::new();
    builder
        .support_all_features()
        .unwrap()
        .add_credential_handler(password.clone())
        .unwrap()
        .add_credential_handler(totp.clone())
        .unwrap()
        .add_credential_handler(password.clone())
        .unwrap()
        .support_credentials(false)
        .unwrap();
    let policy = resolved(&mut builder);

    assert_eq!(policy.credential_handlers(), &[password.clone(), totp, password]);
    assert!(!policy.supports_credentials());
}

struct Append(&'static str);

impl ContextInitializer for Append {
    fn id(&self) -> &str {
        self.0
    }

    fn initialize(&self, context: &mut IdentityContext) -> Result<()> {
        let mut trail = context
            .attribute("trail")
            .and_then(|v| v.as_array())
            .map(|a| a.to_vec())
            .unwrap_or_default();
        trail.push(ConfigValue::from(self.0));
        context.set_attribute("trail", ConfigValue::Array(trail));
        Ok(())
    }
}

struct Refuse;

impl ContextInitializer for Refuse {
    fn id(&self) -> &str {
        "refuse"
    }

    fn initialize(&self, _context: &mut IdentityContext) -> Result<()> {
        Err(Error::Context("partition is read-only".to_string()))
    }
}

#[test]
fn context_initializers_run_in_declared_order() {
    let tenant: Arc<dyn ContextInitializer> = Arc::new(Append("tenant"));
    let audit: Arc<dyn ContextInitializer> = Arc::new(Append("audit"));

    let mut builder = StorePolicyBuilder::new();
    builder
        .support_all_features()
        .unwrap()
        .add_context_initializer(tenant.clone())
        .unwrap()
        .add_context_initializer(audit)
        .unwrap()
        .add_context_initializer(tenant)
        .unwrap();
    let policy = resolved(&mut builder);

    let mut context = IdentityContext::for_partition("default");
    policy.initialize_context(&mut context).unwrap();
    assert_eq!(
        context.attribute("trail"),
        Some(&ConfigValue::from(vec!["tenant", "audit", "tenant"]))
    );
}

#[test]
fn failing_initializer_stops_the_chain() {
    let mut builder = StorePolicyBuilder::new();
    builder
        .support_all_features()
        .unwrap()
        .add_context_initializer(Arc::new(Append("first")))
        .unwrap()
        .add_context_initializer(Arc::new(Refuse))
        .unwrap()
        .add_context_initializer(Arc::new(Append("never")))
        .unwrap();
    let policy = resolved(&mut builder);

    let mut context = IdentityContext::new();
    let err = policy.initialize_context(&mut context).unwrap_err();
    assert!(matches!(err, Error::Context(_)));
    assert_eq!(
        context.attribute("trail"),
        Some(&ConfigValue::from(vec!["first"]))
    );
}

#[test]
fn resolved_policy_is_a_snapshot() {
    let user = ManagedType::new(TypeKind::Identity, "User").unwrap();

    let mut builder = StorePolicyBuilder::new();
    builder.support_type(&[user.clone()]).unwrap();
    let policy = resolved(&mut builder);

    // A reopened builder seeded from the policy does not reach back into it.
    let mut reopened = StorePolicyBuilder::new();
    reopened
        .read_from(&policy)
        .unwrap()
        .unsupport_type(&user, &[])
        .unwrap();
    assert!(policy.supports_type(&user));
    assert!(policy.unsupported_types().is_empty());

    // Copies taken from accessors are detached from the policy.
    let mut copy = policy.supported_types().clone();
    copy.clear();
    assert_eq!(policy.supported_types().len(), 1);
}

#[test]
fn resolved_policy_is_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorePolicy>();

    let mut builder = StorePolicyBuilder::new();
    builder.support_all_features().unwrap();
    let policy = resolved(&mut builder);

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let policy = policy.clone();
            thread::spawn(move || policy.supports(&ManagedType::identity(), IdentityOperation::Read))
        })
        .collect();

    for reader in readers {
        assert!(reader.join().unwrap());
    }
}
