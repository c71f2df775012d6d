use super::*;
use crate::api::MemoryTokenStore;

fn alice() -> User {
    User {
        id: 1,
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        last_login: None,
        block_status: 0,
    }
}

#[test]
fn default_session_is_anonymous() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}

#[test]
fn sign_in_sets_user_and_flag() {
    let mut session = Session::default();
    session.sign_in(alice());
    assert!(session.is_authenticated());
    assert_eq!(session.user().map(|u| u.id), Some(1));
}

#[test]
fn setters_are_independent() {
    let mut session = Session::default();
    session.set_authenticated(true);
    assert!(session.is_authenticated());
    assert!(session.user().is_none());
    session.set_user(Some(alice()));
    session.set_authenticated(false);
    assert!(session.user().is_some());
}

#[test]
fn logout_clears_session_and_blanks_token() {
    let mut session = Session::default();
    session.sign_in(alice());
    let tokens = MemoryTokenStore::with_token("tok");

    logout(&mut session, &tokens).unwrap();

    assert_eq!(session, Session::default());
    assert_eq!(tokens.raw(), "");
}
