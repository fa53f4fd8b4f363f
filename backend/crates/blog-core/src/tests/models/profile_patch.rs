use crate::{ProfilePatch, Role, UserIdentity};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_default_patch_then_is_empty() {
    assert!(ProfilePatch::default().is_empty());
    assert!(
        !ProfilePatch {
            subscribed: Some(false),
            ..Default::default()
        }
        .is_empty()
    );
}

#[test]
fn given_patch_when_applied_then_only_present_fields_change() {
    let mut identity = UserIdentity::new_default("u1", Some("old@example.com".into()));
    identity.bio = Some("keep me".into());
    identity.role = Role::Admin;
    let created_at = identity.created_at;

    let patch = ProfilePatch {
        username: Some("ada".into()),
        company: Some("Analytical Engines".into()),
        ..Default::default()
    };
    identity.apply(&patch);

    assert_that!(identity.username, some(eq("ada")));
    assert_that!(identity.company, some(eq("Analytical Engines")));
    assert_that!(identity.bio, some(eq("keep me")));
    assert_that!(identity.email, some(eq("old@example.com")));
    assert_that!(identity.role, eq(Role::Admin));
    assert_that!(identity.created_at, eq(created_at));
}

#[test]
fn given_patch_json_with_role_when_deserialized_then_role_is_ignored() {
    let patch: ProfilePatch = serde_json::from_value(json!({
        "role": "Admin",
        "fullName": "Ada"
    }))
    .unwrap();

    let value = serde_json::to_value(&patch).unwrap();

    assert_that!(patch.full_name, some(eq("Ada")));
    assert!(value.get("role").is_none());
    assert_eq!(value, json!({ "fullName": "Ada" }));
}
