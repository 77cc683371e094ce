//! Wire DTOs exchanged with the Auth API.
//!
//! DESIGN
//! ======
//! Field names match the Auth API JSON bodies exactly so serde needs no
//! renames beyond the lowercase role tag. Request types are transient: built
//! per submit and dropped once the request resolves.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role chosen at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Player,
    #[default]
    Watcher,
}

impl Role {
    /// Every selectable role, in the order the register form lists them.
    pub const ALL: [Role; 2] = [Role::Watcher, Role::Player];

    /// Wire/tag form (`"player"` / `"watcher"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Watcher => "watcher",
        }
    }

    /// Human label for the register form's select box.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Watcher => "Watcher",
        }
    }

    /// Parse a `<select>` value back into a role.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "player" => Some(Self::Player),
            "watcher" => Some(Self::Watcher),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity returned by `GET /me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// Stand-in printed by `Debug` wherever a password field would appear.
pub(crate) const REDACTED: &str = "<redacted>";

/// Body of `POST /login`.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").field("email", &self.email).field("password", &REDACTED).finish()
    }
}

/// Body of `POST /register`.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("role", &self.role)
            .finish()
    }
}
