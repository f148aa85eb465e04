use super::*;

fn user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        email: "user@example.com".to_owned(),
        role,
        name: None,
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn initial_snapshot_is_loading_and_signed_out() {
    let state = AuthSnapshot::initial();
    assert!(state.is_loading);
    assert!(!state.is_authenticated);
    assert!(!state.is_admin);
    assert!(state.user.is_none());
}

#[test]
fn default_matches_initial() {
    assert_eq!(AuthSnapshot::default(), AuthSnapshot::initial());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn session_established_sets_flags_and_finishes_loading() {
    let next = AuthSnapshot::initial().apply(AuthEvent::SessionEstablished(Session::from_user(user(Role::User))));
    assert!(next.is_authenticated);
    assert!(!next.is_admin);
    assert!(!next.is_loading);
    assert_eq!(next.user.as_ref().map(|u| u.email.as_str()), Some("user@example.com"));
}

#[test]
fn admin_role_grants_elevation_at_session_creation() {
    let session = Session::from_user(user(Role::Admin));
    assert!(session.is_admin);
    let next = AuthSnapshot::initial().apply(AuthEvent::SessionEstablished(session));
    assert!(next.is_admin);
}

#[test]
fn explicit_session_flag_is_kept_even_when_role_disagrees() {
    let session = Session {
        user: user(Role::User),
        is_admin: true,
    };
    let next = AuthSnapshot::initial().apply(AuthEvent::SessionEstablished(session));
    assert!(next.is_admin);
    assert_eq!(next.user.map(|u| u.role), Some(Role::User));
}

#[test]
fn session_cleared_from_loading_resolves_to_signed_out() {
    let next = AuthSnapshot::initial().apply(AuthEvent::SessionCleared);
    assert_eq!(next, AuthSnapshot::signed_out());
    assert!(!next.is_loading);
}

#[test]
fn logout_resets_to_unauthenticated_defaults() {
    let signed_in = AuthSnapshot::initial().apply(AuthEvent::SessionEstablished(Session::from_user(user(Role::Admin))));
    let next = signed_in.apply(AuthEvent::SessionCleared);
    assert!(!next.is_authenticated);
    assert!(!next.is_admin);
    assert!(next.user.is_none());
    assert_eq!(next.user.as_ref().map(|u| u.email.as_str()), None);
}
