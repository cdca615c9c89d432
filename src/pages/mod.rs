//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages are plain functions returning
//! `Result<AnyView, ViewError>` and are mounted through `ProtectedRoute`.

pub mod auth_callback;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod settings;
