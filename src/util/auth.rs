//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same decision: wait while auth loads,
//! send anonymous or malformed sessions to login, and send authenticated users
//! without the required role home.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::PortalConfig;
use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Outcome of a protected-route check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth still loading; show a placeholder and do not redirect.
    Loading,
    /// Not authenticated, or the session carries no usable role.
    RedirectLogin,
    /// Authenticated but not allowed here.
    RedirectHome,
    Render,
}

impl GuardDecision {
    /// Route to navigate to, if this decision redirects.
    pub fn redirect_target(self, config: &PortalConfig) -> Option<&str> {
        match self {
            Self::RedirectLogin => Some(&config.login_path),
            Self::RedirectHome => Some(&config.home_path),
            Self::Loading | Self::Render => None,
        }
    }
}

/// Decide what a route guarded by `required` should do for `state`.
pub fn decide(state: &AuthState, required: &[Role]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    let Some(user) = &state.user else {
        return GuardDecision::RedirectLogin;
    };
    let Some(role) = user.role else {
        leptos::logging::warn!("user {} has no valid role; treating session as invalid", user.id);
        return GuardDecision::RedirectLogin;
    };
    if required.is_empty() || !required.contains(&role) {
        return GuardDecision::RedirectHome;
    }
    GuardDecision::Render
}

/// Dashboard a freshly authenticated user lands on.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Citizen => "/citizen/dashboard",
        Role::Official => "/official/dashboard",
        Role::Admin => "/admin/dashboard",
        Role::Judiciary => "/judiciary/dashboard",
    }
}
