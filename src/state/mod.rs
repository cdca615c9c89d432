//! Client-side session and locale state.
//!
//! DESIGN
//! ======
//! State is split by concern (`session` storage, `auth`, `locale`) and joined
//! in `boundary::AppContext`, which the app shell provides as one context
//! signal. Each piece of state has a single writer.

pub mod auth;
pub mod boundary;
pub mod locale;
pub mod preference_sync;
pub mod session;
pub mod translations;
