use super::*;
use crate::net::types::User;

// =============================================================
// Helpers
// =============================================================

fn signed_in(role: Option<Role>) -> AuthState {
    AuthState { user: Some(User { id: "u1".to_owned(), role, ..User::default() }), loading: false }
}

fn signed_out() -> AuthState {
    AuthState { user: None, loading: false }
}

// =============================================================
// decide
// =============================================================

#[test]
fn loading_never_redirects() {
    let states = [
        AuthState { user: None, loading: true },
        AuthState { loading: true, ..signed_in(Some(Role::Admin)) },
        AuthState { loading: true, ..signed_in(None) },
    ];
    for state in states {
        for required in [&[][..], &[Role::Citizen][..], &Role::ALL[..]] {
            assert_eq!(decide(&state, required), GuardDecision::Loading);
        }
    }
}

#[test]
fn anonymous_always_goes_to_login() {
    for role in Role::ALL {
        assert_eq!(decide(&signed_out(), &[role]), GuardDecision::RedirectLogin);
    }
    assert_eq!(decide(&signed_out(), &Role::ALL), GuardDecision::RedirectLogin);
}

#[test]
fn missing_role_is_treated_as_unauthenticated() {
    assert_eq!(decide(&signed_in(None), &[Role::Citizen]), GuardDecision::RedirectLogin);
}

#[test]
fn wrong_role_goes_home() {
    assert_eq!(decide(&signed_in(Some(Role::Citizen)), &[Role::Admin]), GuardDecision::RedirectHome);
    assert_eq!(decide(&signed_in(Some(Role::Judiciary)), &[Role::Citizen, Role::Official]), GuardDecision::RedirectHome);
}

#[test]
fn empty_role_set_goes_home() {
    assert_eq!(decide(&signed_in(Some(Role::Admin)), &[]), GuardDecision::RedirectHome);
}

#[test]
fn matching_role_renders() {
    assert_eq!(decide(&signed_in(Some(Role::Citizen)), &[Role::Citizen]), GuardDecision::Render);
    for role in Role::ALL {
        assert_eq!(decide(&signed_in(Some(role)), &Role::ALL), GuardDecision::Render);
    }
}

#[test]
fn redirect_targets_distinguish_login_and_home() {
    let cfg = PortalConfig::default();
    assert_eq!(GuardDecision::RedirectLogin.redirect_target(&cfg), Some("/login"));
    assert_eq!(GuardDecision::RedirectHome.redirect_target(&cfg), Some("/"));
    assert_eq!(GuardDecision::Loading.redirect_target(&cfg), None);
    assert_eq!(GuardDecision::Render.redirect_target(&cfg), None);
}

// =============================================================
// landing_path
// =============================================================

#[test]
fn landing_path_matches_role_dashboards() {
    assert_eq!(landing_path(Role::Admin), "/admin/dashboard");
    assert_eq!(landing_path(Role::Official), "/official/dashboard");
    assert_eq!(landing_path(Role::Judiciary), "/judiciary/dashboard");
    assert_eq!(landing_path(Role::Citizen), "/citizen/dashboard");
}
