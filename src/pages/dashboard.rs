//! Role dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each role gets a protected landing route. Application lists, case files,
//! and statistics are served by other pages; these views only greet the user
//! in the active language and host the session header.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::protected_route::ViewError;
use crate::components::session_header::SessionHeader;
use crate::net::types::Role;
use crate::state::boundary::PortalContext;

/// Translation keys for a dashboard's heading and subtitle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardCopy {
    pub title_key: &'static str,
    pub subtitle_key: &'static str,
}

pub fn dashboard_copy(role: Role) -> DashboardCopy {
    match role {
        Role::Citizen => DashboardCopy { title_key: "dashboard.welcomeBack", subtitle_key: "dashboard.manageApplications" },
        Role::Official => DashboardCopy { title_key: "official.welcomeBack", subtitle_key: "official.dailyOverview" },
        Role::Admin => DashboardCopy { title_key: "admin.dashboard", subtitle_key: "admin.departmentStats" },
        Role::Judiciary => DashboardCopy { title_key: "dashboard.welcomeBack", subtitle_key: "dashboard.dailyOverview" },
    }
}

fn dashboard(role: Role) -> Result<AnyView, ViewError> {
    let ctx = use_context::<PortalContext>().ok_or_else(|| ViewError::Render("portal context missing".to_owned()))?;
    let name = ctx
        .with_untracked(|c| c.auth().user().map(|user| user.display_name().to_owned()))
        .ok_or(ViewError::MissingUser)?;
    let copy = dashboard_copy(role);
    let t = move |key: &'static str| ctx.with(|c| c.t(key).to_owned());

    Ok(view! {
        <div class="dashboard-page">
            <SessionHeader/>
            <section class="dashboard-page__welcome">
                <h1>{move || t(copy.title_key)} ", " {name}</h1>
                <p>{move || t(copy.subtitle_key)}</p>
            </section>
        </div>
    }
    .into_any())
}

pub fn citizen() -> Result<AnyView, ViewError> {
    dashboard(Role::Citizen)
}

pub fn official() -> Result<AnyView, ViewError> {
    dashboard(Role::Official)
}

pub fn admin() -> Result<AnyView, ViewError> {
    dashboard(Role::Admin)
}

pub fn judiciary() -> Result<AnyView, ViewError> {
    dashboard(Role::Judiciary)
}
