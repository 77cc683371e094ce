//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `navigate` isolates the router behind a trait and `auth` holds the session
//! gate operations built on top of it, keeping pages thin and testable.

pub mod auth;
pub mod navigate;
