//! Networking modules for the Auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the cookie-authenticated REST calls and `types` defines the
//! JSON bodies they carry.

pub mod api;
pub mod types;
