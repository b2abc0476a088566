//! Tests for the `.rpdk-config` project settings loader.

use cfn_hook::{CfnHookError, ProjectSettings};

#[test]
fn loads_type_name_from_settings_file() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        tmp.path(),
        r#"{ "typeName": "MyCompany::Testing::MyHook", "artifact_type": "HOOK" }"#,
    )
    .unwrap();

    let settings = ProjectSettings::load_from(tmp.path()).unwrap();
    assert_eq!(settings.type_name, "MyCompany::Testing::MyHook");
}

#[test]
fn missing_settings_file_is_an_invalid_project() {
    let dir = tempfile::tempdir().unwrap();
    let err = ProjectSettings::load_from(&dir.path().join(".rpdk-config")).unwrap_err();
    assert!(matches!(err, CfnHookError::InvalidProject { .. }));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn malformed_settings_file_is_an_invalid_project() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "not json").unwrap();
    let err = ProjectSettings::load_from(tmp.path()).unwrap_err();
    assert!(matches!(err, CfnHookError::InvalidProject { .. }));
}

#[test]
fn non_hook_projects_are_rejected() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        tmp.path(),
        r#"{ "typeName": "MyCompany::Testing::MyResource", "artifact_type": "RESOURCE" }"#,
    )
    .unwrap();
    let err = ProjectSettings::load_from(tmp.path()).unwrap_err();
    assert!(matches!(err, CfnHookError::InvalidProject { .. }));
}
