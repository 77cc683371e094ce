//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form/session signals and delegates Auth API calls and
//! navigation decisions to `util::auth`.

pub mod login;
pub mod profile;
pub mod register;
