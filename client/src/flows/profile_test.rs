use super::*;
use crate::flows::test_support::{Call, MockApi, account, run, signed_in, signed_out};
use crate::net::api::ApiError;

fn ada() -> UserAccount {
    account("42", "Ada", "Lovelace", "ada@example.com")
}

// =============================================================
// changes
// =============================================================

#[test]
fn untouched_form_produces_empty_changes() {
    let form = ProfileForm::from_account(&ada());
    assert_eq!(changes(&ada(), &form), Ok(ProfileChanges::default()));
}

#[test]
fn only_changed_fields_are_sent() {
    let form = ProfileForm { lastname: "Byron".to_owned(), password: "n3w".to_owned(), ..ProfileForm::from_account(&ada()) };
    assert_eq!(
        changes(&ada(), &form),
        Ok(ProfileChanges { firstname: None, lastname: Some("Byron".to_owned()), password: Some("n3w".to_owned()) })
    );
}

#[test]
fn clearing_a_name_is_rejected() {
    let form = ProfileForm { firstname: "  ".to_owned(), ..ProfileForm::from_account(&ada()) };
    let errors = changes(&ada(), &form).unwrap_err();
    assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
}

// =============================================================
// update
// =============================================================

#[test]
fn update_replaces_session_with_returned_account() {
    let updated = account("42", "Augusta", "Lovelace", "ada@example.com");
    let api = MockApi::returning(updated.clone());
    let session = signed_in(ada());
    let form = ProfileForm { firstname: "Augusta".to_owned(), ..ProfileForm::from_account(&ada()) };

    let outcome = run(update(&api, &session, &form)).unwrap();

    assert_eq!(outcome.notice, "User is updated successfully!");
    assert_eq!(session.current(), Some(updated));
    assert_eq!(
        api.calls(),
        vec![Call::Update(
            "42".to_owned(),
            ProfileChanges { firstname: Some("Augusta".to_owned()), ..ProfileChanges::default() }
        )]
    );
}

#[test]
fn rejected_update_keeps_old_account() {
    let api = MockApi::failing(ApiError::Rejected { message: None });
    let session = signed_in(ada());
    let form = ProfileForm { firstname: "Augusta".to_owned(), ..ProfileForm::from_account(&ada()) };

    let err = run(update(&api, &session, &form)).unwrap_err();

    assert_eq!(err, FlowError::Api(ApiError::Rejected { message: None }));
    assert_eq!(session.current(), Some(ada()));
}

#[test]
fn update_without_session_makes_no_request() {
    let api = MockApi::returning(ada());
    let session = signed_out();

    let err = run(update(&api, &session, &ProfileForm::default())).unwrap_err();

    assert_eq!(err, FlowError::NotSignedIn);
    assert!(api.calls().is_empty());
}

#[test]
fn invalid_update_makes_no_request() {
    let api = MockApi::returning(ada());
    let session = signed_in(ada());
    let form = ProfileForm { lastname: String::new(), ..ProfileForm::from_account(&ada()) };

    let err = run(update(&api, &session, &form)).unwrap_err();

    assert!(err.field_errors().is_some());
    assert!(api.calls().is_empty());
}

// =============================================================
// delete / sign-out
// =============================================================

#[test]
fn delete_clears_session() {
    let api = MockApi::returning(ada());
    let session = signed_in(ada());

    let outcome = run(delete(&api, &session)).unwrap();

    assert_eq!(outcome.redirect, Some("/login"));
    assert_eq!(session.current(), None);
    assert_eq!(api.calls(), vec![Call::Delete("42".to_owned())]);
}

#[test]
fn failed_delete_keeps_session() {
    let api = MockApi::failing(ApiError::Rejected { message: Some("User not found".to_owned()) });
    let session = signed_in(ada());

    assert!(run(delete(&api, &session)).is_err());
    assert_eq!(session.current(), Some(ada()));
}

#[test]
fn sign_out_clears_session() {
    let api = MockApi::returning(ada());
    let session = signed_in(ada());

    run(sign_out(&api, &session)).unwrap();

    assert_eq!(session.current(), None);
    assert_eq!(api.calls(), vec![Call::SignOut]);
}

#[test]
fn sign_out_transport_failure_keeps_session() {
    let api = MockApi::failing(ApiError::Transport("offline".to_owned()));
    let session = signed_in(ada());

    let err = run(sign_out(&api, &session)).unwrap_err();

    assert_eq!(err.to_string(), "request failed: offline");
    assert_eq!(session.current(), Some(ada()));
}
