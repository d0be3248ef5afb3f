use crate::{DEMO_USER_ID, PLACEHOLDER_EMAIL, PLACEHOLDER_NAME, ProfileUpdate, Role, UserIdentity};

use googletest::prelude::*;

// =============================================================================
// Fabrication
// =============================================================================

#[test]
fn given_email_when_demo_then_builds_deterministic_identity() {
    // When
    let user = UserIdentity::demo("ops@4am.test");

    // Then
    assert_that!(user.id.as_str(), eq(DEMO_USER_ID));
    assert_that!(user.email.as_str(), eq("ops@4am.test"));
    assert_that!(user.name.as_str(), eq("ops"));
    assert_that!(user.role, eq(Role::User));
    assert_that!(user.skills, is_empty());
}

#[test]
fn given_email_without_at_sign_when_demo_then_keeps_email_verbatim() {
    let user = UserIdentity::demo("not-an-email");

    assert_that!(user.email.as_str(), eq("not-an-email"));
    assert_that!(user.name.as_str(), eq("not-an-email"));
}

#[test]
fn given_blank_email_when_demo_then_name_is_placeholder() {
    let user = UserIdentity::demo("");

    assert_that!(user.name.as_str(), eq(PLACEHOLDER_NAME));
    assert_that!(user.email.as_str(), eq(""));
}

#[test]
fn given_provider_when_from_provider_then_seeds_name_and_email() {
    let user = UserIdentity::from_provider("google");

    assert_that!(user.id.as_str(), eq(DEMO_USER_ID));
    assert_that!(user.name.as_str(), eq("Google User"));
    assert_that!(user.email.as_str(), eq("user@google.com"));
}

#[test]
fn given_mixed_case_provider_with_spaces_when_from_provider_then_domain_is_normalized() {
    let user = UserIdentity::from_provider("Git Hub");

    assert_that!(user.name.as_str(), eq("Git Hub User"));
    assert_that!(user.email.as_str(), eq("user@github.com"));
}

#[test]
fn given_blank_provider_when_from_provider_then_uses_default_provider() {
    let user = UserIdentity::from_provider("  ");

    assert_that!(user.name.as_str(), eq("Oauth User"));
    assert_that!(user.email.as_str(), eq("user@oauth.com"));
}

#[test]
fn given_blank_name_and_email_when_registered_then_placeholders_are_used() {
    let user = UserIdentity::registered("1700000000000", " ", "");

    assert_that!(user.id.as_str(), eq("1700000000000"));
    assert_that!(user.name.as_str(), eq(PLACEHOLDER_NAME));
    assert_that!(user.email.as_str(), eq(PLACEHOLDER_EMAIL));
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn given_identity_with_profile_when_serialized_then_uses_camel_case_and_omits_absent_fields() {
    // Given
    let mut user = UserIdentity::demo("ops@4am.test");
    user.job_title = Some("Strategist".into());

    // When
    let json = serde_json::to_value(&user).unwrap();

    // Then
    assert_that!(json["jobTitle"].as_str(), some(eq("Strategist")));
    assert_that!(json.get("bio"), none());
    assert_that!(json["skills"].as_array().map(Vec::len), some(eq(0)));
}

#[test]
fn given_record_without_skills_when_deserialized_then_skills_is_empty_list() {
    let json = r#"{"id":"7","name":"Ada","email":"ada@4am.test","role":"admin"}"#;

    let user: UserIdentity = serde_json::from_str(json).unwrap();

    assert_that!(user.skills, is_empty());
    assert_that!(user.role, eq(Role::Admin));
}

#[test]
fn given_record_with_null_fields_when_deserialized_then_defaults_apply() {
    let json = r#"{"id":"7","name":null,"skills":null,"role":null}"#;

    let user: UserIdentity = serde_json::from_str(json).unwrap();

    assert_that!(user.name.as_str(), eq(""));
    assert_that!(user.skills, is_empty());
    assert_that!(user.role, eq(Role::User));
}

#[test]
fn given_record_without_id_when_deserialized_then_fails() {
    let json = r#"{"name":"Ada"}"#;

    assert!(serde_json::from_str::<UserIdentity>(json).is_err());
}

#[test]
fn given_full_identity_when_serialize_roundtrip_then_preserves_all_fields() {
    let mut original = UserIdentity::registered("42", "Ada", "ada@4am.test");
    original.bio = Some("Night owl".into());
    original.website = Some("https://4am.test".into());
    original.skills = vec!["seo".into(), "copy".into()];

    let json = serde_json::to_string(&original).unwrap();
    let restored: UserIdentity = serde_json::from_str(&json).unwrap();

    assert_that!(restored, eq(&original));
}

// =============================================================================
// Profile merge
// =============================================================================

#[test]
fn given_partial_update_when_applied_then_only_present_fields_change() {
    // Given
    let mut user = UserIdentity::demo("ops@4am.test");
    user.bio = Some("before".into());

    // When
    user.apply(ProfileUpdate {
        location: Some("Lisbon".into()),
        skills: Some(vec!["paid social".into()]),
        ..Default::default()
    });

    // Then
    assert_that!(user.location.as_deref(), some(eq("Lisbon")));
    assert_that!(user.bio.as_deref(), some(eq("before")));
    assert_that!(user.name.as_str(), eq("ops"));
    assert_eq!(user.skills, vec!["paid social".to_string()]);
}

#[test]
fn given_renamed_identity_when_display_name_then_uses_new_name() {
    let mut user = UserIdentity::demo("ops@4am.test");

    user.apply(ProfileUpdate {
        name: Some("Ops Team".into()),
        ..Default::default()
    });

    assert_that!(user.display_name(), eq("Ops Team"));
}

#[test]
fn given_blank_name_when_display_name_then_falls_back_to_email() {
    let mut user = UserIdentity::demo("ops@4am.test");
    user.name = String::new();

    assert_that!(user.display_name(), eq("ops@4am.test"));
}
