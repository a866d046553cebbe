//! Identity collaborator contract.
//!
//! The current user is supplied from outside the store (a session slot or
//! explicit overrides). This module only reads it and turns the admin role
//! into an [`AdminGrant`] capability.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::{CivicError, Result};
use crate::slot::Slot;

/// User role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = CivicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(CivicError::validation(
                "role",
                format!("unrecognized value '{other}' (expected user, admin)"),
            )),
        }
    }
}

/// The signed-in user as provided by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Role,
}

impl CurrentUser {
    /// Ownership identity used by [`crate::view::for_user`].
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            email: Some(self.email.clone()).filter(|e| !e.is_empty()),
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Obtain the capability required for status changes and deletes.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` unless the user has the admin role.
    pub fn require_admin(&self) -> Result<AdminGrant> {
        if self.is_admin() {
            Ok(AdminGrant { _private: () })
        } else {
            Err(CivicError::Forbidden {
                role: self.role.to_string(),
            })
        }
    }
}

/// Require an admin among an optional current user.
///
/// # Errors
///
/// Returns `Forbidden` if there is no user or the user is not an admin.
pub fn require_admin(user: Option<&CurrentUser>) -> Result<AdminGrant> {
    user.map_or_else(
        || {
            Err(CivicError::Forbidden {
                role: "anonymous".to_string(),
            })
        },
        CurrentUser::require_admin,
    )
}

/// Proof that the caller holds the admin role.
///
/// Only [`CurrentUser::require_admin`] constructs one.
#[derive(Debug)]
pub struct AdminGrant {
    _private: (),
}

/// Fields a record can be matched on for "my issues" views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub id: Option<i64>,
    pub email: Option<String>,
}

/// Contents of the session slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(default)]
    pub user: Option<CurrentUser>,
    #[serde(default)]
    pub is_authenticated: bool,
}

impl SessionSnapshot {
    /// The user, only when the session is authenticated.
    #[must_use]
    pub fn current_user(self) -> Option<CurrentUser> {
        if self.is_authenticated { self.user } else { None }
    }
}

/// Read the current user from a session slot.
///
/// Missing, unreadable or malformed sessions mean nobody is signed in.
#[must_use]
pub fn load_session(slot: &dyn Slot) -> Option<CurrentUser> {
    let text = match slot.read() {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(e) => {
            warn!(slot = slot.name(), error = %e, "Failed to read session");
            return None;
        }
    };

    match serde_json::from_str::<SessionSnapshot>(&text) {
        Ok(session) => session.current_user(),
        Err(e) => {
            warn!(slot = slot.name(), error = %e, "Ignoring malformed session");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::MemorySlot;

    fn admin() -> CurrentUser {
        CurrentUser {
            id: Some(2),
            email: "admin@example.com".to_string(),
            name: "Test Admin".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn admin_gets_grant() {
        assert!(admin().require_admin().is_ok());
        assert!(require_admin(Some(&admin())).is_ok());
    }

    #[test]
    fn user_and_anonymous_are_forbidden() {
        let mut user = admin();
        user.role = Role::User;
        assert!(matches!(
            user.require_admin(),
            Err(CivicError::Forbidden { role }) if role == "user"
        ));
        assert!(matches!(
            require_admin(None),
            Err(CivicError::Forbidden { role }) if role == "anonymous"
        ));
    }

    #[test]
    fn identity_drops_empty_email() {
        let mut user = admin();
        user.email = String::new();
        assert_eq!(
            user.identity(),
            Identity {
                id: Some(2),
                email: None
            }
        );
    }

    #[test]
    fn session_requires_authenticated_flag() {
        let slot = MemorySlot::with_contents(
            "user",
            r#"{"user":{"id":1,"email":"user@example.com","name":"Test User","role":"user"},"isAuthenticated":false}"#,
        );
        assert!(load_session(&slot).is_none());

        slot.write(
            r#"{"user":{"id":1,"email":"user@example.com","name":"Test User","role":"user"},"isAuthenticated":true}"#,
        )
        .unwrap();
        let user = load_session(&slot).unwrap();
        assert_eq!(user.name, "Test User");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn malformed_session_means_nobody() {
        let slot = MemorySlot::with_contents("user", "not json");
        assert!(load_session(&slot).is_none());
        assert!(load_session(&MemorySlot::new("user")).is_none());
    }

    #[test]
    fn role_parse() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert!("root".parse::<Role>().unwrap_err().is_validation());
    }
}
