//! Per-view form state for the login and register views.
//!
//! Form fields are sent exactly as typed; the Auth API owns validation.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::fmt;

use crate::net::api::ApiError;
use crate::net::types::{Credentials, REDACTED, RegistrationRequest, Role};

/// Submission status shared by both forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub busy: bool,
    pub error: Option<String>,
}

impl FormStatus {
    /// Mark a submission as started. Returns `false` if one is already in
    /// flight, in which case the caller must not send another request.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        true
    }

    /// Record the outcome of the in-flight submission.
    pub fn settle(&mut self, result: Result<(), ApiError>) {
        self.busy = false;
        self.error = result.err().map(|e| e.to_string());
    }
}

/// Fields of the login form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm").field("email", &self.email).field("password", &REDACTED).finish()
    }
}

impl LoginForm {
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.clone(), password: self.password.clone() }
    }
}

/// Fields of the register form. Role defaults to watcher.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("role", &self.role)
            .finish()
    }
}

impl RegisterForm {
    #[must_use]
    pub fn request(&self) -> RegistrationRequest {
        RegistrationRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role,
        }
    }

    /// Apply a `<select>` value; unknown tags leave the role unchanged.
    pub fn set_role_tag(&mut self, tag: &str) {
        if let Some(role) = Role::from_tag(tag) {
            self.role = role;
        }
    }
}
