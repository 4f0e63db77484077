use idm_config::{
    FileStoreConfigurationBuilder, IdentityStoreConfigurationBuilder,
    IdentityStoreConfigurationChildBuilder, IdentityStoresConfigurationBuilder, StoreSettings,
    StoreType,
};
use idm_core::{ConfigurationError, Error, IdentityOperation, ManagedType, RelationshipType};

#[test]
fn aggregator_without_stores_fails() {
    let mut stores = IdentityStoresConfigurationBuilder::new();
    assert_eq!(
        stores.build().unwrap_err(),
        Error::Configuration(ConfigurationError::NoStoreConfigured)
    );
}

#[test]
fn navigation_passes_through_to_the_aggregator() {
    let mut stores = IdentityStoresConfigurationBuilder::new();
    stores
        .jpa()
        .support_all_features()
        .unwrap()
        .mapped_entity(&["AccountEntity", "RoleEntity"]);
    stores
        .file()
        .support_type(&[ManagedType::partition()])
        .unwrap()
        .jpa()
        .mapped_entity(&["AccountEntity", "PartitionEntity"]);

    assert_eq!(stores.configured(), &[StoreType::Jpa, StoreType::File]);

    let configuration = stores.build().unwrap();
    assert_eq!(configuration.stores().len(), 2);

    let jpa = configuration.store(StoreType::Jpa).unwrap();
    match jpa.settings() {
        StoreSettings::Jpa(settings) => assert_eq!(
            settings.mapped_entities,
            vec!["AccountEntity", "RoleEntity", "PartitionEntity"]
        ),
        other => panic!("unexpected settings {:?}", other),
    }
    assert!(jpa.policy().supports_credentials());

    let file = configuration.store(StoreType::File).unwrap();
    assert!(file.supports(&ManagedType::partition(), IdentityOperation::Delete));
    assert!(!file.supports(&ManagedType::identity(), IdentityOperation::Read));
    assert!(configuration.store(StoreType::Ldap).is_none());
}

#[test]
fn one_invalid_store_aborts_the_build() {
    let mut stores = IdentityStoresConfigurationBuilder::new();
    stores.file().support_all_features().unwrap();
    stores.ldap().url("ldap://localhost:389");

    let err = stores.build().unwrap_err();
    assert_eq!(err, Error::Configuration(ConfigurationError::NoSupportedTypes));
}

#[test]
fn store_for_picks_first_permitting_store() {
    let user = ManagedType::new(idm_core::TypeKind::Identity, "User").unwrap();

    let mut stores = IdentityStoresConfigurationBuilder::new();
    stores
        .ldap()
        .support_type(&[user.clone()])
        .unwrap()
        .unsupport_type(&user, &[IdentityOperation::Create])
        .unwrap()
        .base_dn("dc=example,dc=com");
    stores
        .file()
        .support_type(&[user.clone()])
        .unwrap()
        .support_self_relationship(&[RelationshipType::generic()])
        .unwrap();

    let configuration = stores.build().unwrap();
    assert_eq!(
        configuration
            .store_for(&user, IdentityOperation::Read)
            .map(|s| s.store_type()),
        Some(StoreType::Ldap)
    );
    assert_eq!(
        configuration
            .store_for(&user, IdentityOperation::Create)
            .map(|s| s.store_type()),
        Some(StoreType::File)
    );
    assert!(configuration
        .store_for(&ManagedType::partition(), IdentityOperation::Read)
        .is_none());
}

#[test]
fn store_builder_closes_after_validation() {
    let mut file = FileStoreConfigurationBuilder::default();
    file.working_directory("/var/lib/idm")
        .preserve_state(true)
        .async_write(true)
        .async_thread_pool(2);
    file.support_all_features().unwrap();
    file.validate().unwrap();

    assert!(matches!(
        file.support_type(&[ManagedType::identity()]),
        Err(Error::Configuration(ConfigurationError::AlreadyValidated))
    ));

    let store = file.create().unwrap();
    match store.settings() {
        StoreSettings::File(settings) => {
            assert_eq!(settings.working_directory.to_str(), Some("/var/lib/idm"));
            assert!(settings.preserve_state);
            assert!(settings.async_write);
            assert_eq!(settings.async_thread_pool, 2);
        }
        other => panic!("unexpected settings {:?}", other),
    }
}

#[test]
fn create_before_validation_fails() {
    let mut file = FileStoreConfigurationBuilder::default();
    file.support_all_features().unwrap();
    assert_eq!(
        file.create().unwrap_err(),
        Error::Configuration(ConfigurationError::NotValidated)
    );
}

#[test]
fn store_settings_serialize_with_type_tag() {
    let mut stores = IdentityStoresConfigurationBuilder::new();
    stores
        .ldap()
        .support_all_features()
        .unwrap()
        .url("ldap://localhost:389");
    let configuration = stores.build().unwrap();

    let json = serde_json::to_value(configuration.stores()[0].settings()).unwrap();
    assert_eq!(json["type"], "ldap");
    assert_eq!(json["url"], "ldap://localhost:389");
}
