use super::*;

#[test]
fn should_redirect_unauth_when_settled_and_logged_out() {
    assert!(should_redirect_unauth(false, false));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(true, false));
}

#[test]
fn should_not_redirect_when_authenticated() {
    assert!(!should_redirect_unauth(false, true));
    assert!(!should_redirect_unauth(true, true));
}
