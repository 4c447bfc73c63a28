use crate::errors::ModelError;
use crate::user;

#[test]
fn accepts_ordinary_name_and_email() {
    assert!(user::validate_name("Alice").is_ok());
    assert!(user::validate_email("alice@example.com").is_ok());
}

#[test]
fn rejects_blank_name() {
    let err = user::validate_name("   ").unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
}

#[test]
fn rejects_email_without_at_sign() {
    let err = user::validate_email("alice.example.com").unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
}
