use super::*;
use crate::net::types::User;

#[test]
fn should_redirect_unauth_when_idle_and_no_user() {
    let state = AuthState::default();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_unauth_while_login_pending() {
    let state = AuthState::login_start();
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_unauth_when_authenticated() {
    let state = AuthState::login_success(User { name: "alice".to_owned() });
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_redirect_unauth_after_failed_login() {
    let state = AuthState::login_fail("user not found".to_owned());
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_redirect_authed_only_when_authenticated() {
    assert!(should_redirect_authed(&AuthState::login_success(User {
        name: "alice".to_owned(),
    })));
    assert!(!should_redirect_authed(&AuthState::default()));
    assert!(!should_redirect_authed(&AuthState::login_start()));
}
