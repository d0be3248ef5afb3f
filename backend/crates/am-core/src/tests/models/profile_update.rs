use crate::{ProfileUpdate, Role};

use googletest::prelude::*;

#[test]
fn given_empty_object_when_deserialized_then_update_is_empty() {
    let update: ProfileUpdate = serde_json::from_str("{}").unwrap();

    assert!(update.is_empty());
}

#[test]
fn given_null_skills_when_deserialized_then_skills_become_empty_list() {
    let update: ProfileUpdate = serde_json::from_str(r#"{"skills":null}"#).unwrap();

    assert_eq!(update.skills, Some(Vec::new()));
    assert!(!update.is_empty());
}

#[test]
fn given_absent_skills_when_deserialized_then_skills_untouched() {
    let update: ProfileUpdate = serde_json::from_str(r#"{"bio":"hello"}"#).unwrap();

    assert_that!(update.skills, none());
    assert_that!(update.bio.as_deref(), some(eq("hello")));
}

#[test]
fn given_camel_case_keys_when_deserialized_then_fields_are_read() {
    let update: ProfileUpdate =
        serde_json::from_str(r#"{"jobTitle":"Producer","role":"admin"}"#).unwrap();

    assert_that!(update.job_title.as_deref(), some(eq("Producer")));
    assert_that!(update.role, some(eq(Role::Admin)));
}
