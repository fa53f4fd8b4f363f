use crate::Role;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Viewer.as_str(), "Viewer");
    assert_eq!(Role::Admin.as_str(), "Admin");
    assert_eq!(Role::Admin.to_string(), "Admin");
}

#[test]
fn test_role_default_is_viewer() {
    assert_eq!(Role::default(), Role::Viewer);
}

#[test]
fn test_role_serializes_as_variant_name() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"Admin\"");
    let role: Role = serde_json::from_str("\"Viewer\"").unwrap();
    assert_eq!(role, Role::Viewer);
}
