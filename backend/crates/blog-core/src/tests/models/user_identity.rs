use crate::{CoreError, MAX_UID_LENGTH, Role, UserIdentity, validate_uid};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_no_email_when_new_default_then_email_is_empty_and_role_viewer() {
    let identity = UserIdentity::new_default("u1", None);

    assert_that!(identity.uid.as_str(), eq("u1"));
    assert_that!(identity.email, some(eq("")));
    assert_that!(identity.role, eq(Role::Viewer));
    assert_that!(identity.full_name, none());
}

#[test]
fn given_identity_when_serialized_then_uses_camel_case_keys() {
    let mut identity = UserIdentity::new_default("u1", Some("a@b.c".into()));
    identity.full_name = Some("Ada Lovelace".into());
    identity.linked_in = Some("ada".into());
    identity.job_description = Some("Engineer".into());

    let value = serde_json::to_value(&identity).unwrap();

    assert_eq!(value["uid"], "u1");
    assert_eq!(value["role"], "Viewer");
    assert_eq!(value["fullName"], "Ada Lovelace");
    assert_eq!(value["linkedIn"], "ada");
    assert_eq!(value["jobDescription"], "Engineer");
    assert!(value.get("createdAt").is_some());
    assert!(value.get("bio").is_none());
}

#[test]
fn given_document_without_role_when_deserialized_then_defaults_to_viewer() {
    let value = json!({
        "uid": "u2",
        "createdAt": "2024-01-01T00:00:00Z"
    });

    let identity: UserIdentity = serde_json::from_value(value).unwrap();

    assert_that!(identity.role, eq(Role::Viewer));
    assert_that!(identity.email, none());
}

#[test]
fn given_admin_document_when_deserialized_then_role_is_kept() {
    let value = json!({
        "uid": "u3",
        "email": "root@example.com",
        "role": "Admin",
        "subscribed": true,
        "createdAt": "2024-01-01T00:00:00Z"
    });

    let identity: UserIdentity = serde_json::from_value(value).unwrap();

    assert_that!(identity.role, eq(Role::Admin));
    assert_that!(identity.subscribed, some(eq(true)));
}

#[test]
fn given_empty_uid_when_validated_then_error_names_field() {
    let result = validate_uid("   ");

    match result {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("uid")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_oversized_uid_when_validated_then_error() {
    let uid = "x".repeat(MAX_UID_LENGTH + 1);

    assert!(validate_uid(&uid).is_err());
    assert!(validate_uid(&"x".repeat(MAX_UID_LENGTH)).is_ok());
}
