//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `PortalContext` signal provided by the
//! app shell.

pub mod fault_card;
pub mod language_selector;
pub mod protected_route;
pub mod session_header;
