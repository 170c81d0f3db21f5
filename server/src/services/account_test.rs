use super::*;
use crate::state::test_helpers::test_app_state;

fn new_user(name: &str, email: &str, username: &str, password: &str) -> NewUser {
    NewUser { name: name.into(), email: email.into(), username: username.into(), password: password.into() }
}

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_lowercases_and_trims() {
    assert_eq!(normalize_email("  Ada@Example.COM "), Some("ada@example.com".into()));
}

#[test]
fn normalize_email_rejects_malformed_addresses() {
    for email in ["", "plain", "@example.com", "ada@", "a@b@c", "a b@example.com"] {
        assert_eq!(normalize_email(email), None, "{email:?}");
    }
}

// =============================================================================
// NewUser::normalized
// =============================================================================

#[test]
fn normalized_trims_name_and_username_but_not_password() {
    let user = new_user(" Ada ", "ADA@example.com", " ada ", " pw ").normalized().unwrap();
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.username, "ada");
    assert_eq!(user.password, " pw ");
}

#[test]
fn normalized_checks_email_before_other_fields() {
    let err = new_user("", "nope", "", "").normalized().unwrap_err();
    assert!(matches!(err, AccountError::InvalidEmail));
}

#[test]
fn normalized_requires_every_field() {
    for user in [
        new_user(" ", "a@b.com", "ada", "pw"),
        new_user("Ada", "a@b.com", "", "pw"),
        new_user("Ada", "a@b.com", "ada", ""),
    ] {
        assert!(matches!(user.normalized(), Err(AccountError::MissingFields)), "{user:?}");
    }
}

// =============================================================================
// UserRecord
// =============================================================================

#[test]
fn user_record_serializes_public_fields_only() {
    let record = UserRecord {
        id: Uuid::nil(),
        name: "Ada".into(),
        email: "ada@example.com".into(),
        username: "ada".into(),
        created_at: "2024-01-02T03:04:05Z".into(),
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
    assert_eq!(json["created_at"], "2024-01-02T03:04:05Z");
    assert_eq!(json.as_object().unwrap().len(), 5);
}

#[test]
fn user_columns_alias_the_users_table() {
    assert!(USER_COLUMNS.contains("u.id"));
    assert!(USER_COLUMNS.contains("AS created_at"));
}

// =============================================================================
// validation runs before any database access
// =============================================================================

#[tokio::test]
async fn register_rejects_invalid_email_without_touching_the_database() {
    let state = test_app_state();
    let err = register(&state.pool, &new_user("Ada", "not-an-email", "ada", "pw")).await.unwrap_err();
    assert!(matches!(err, AccountError::InvalidEmail));
}

#[tokio::test]
async fn register_surfaces_database_errors() {
    let state = test_app_state();
    let err = register(&state.pool, &new_user("Ada", "ada@example.com", "ada", "pw")).await.unwrap_err();
    assert!(matches!(err, AccountError::Db(_)));
}

#[tokio::test]
async fn login_surfaces_database_errors() {
    let state = test_app_state();
    let err = login(&state.pool, "ada", "pw").await.unwrap_err();
    assert!(matches!(err, AccountError::Db(_)));
}
