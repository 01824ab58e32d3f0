use crate::error::{SessionError, SessionResult};
use procure_model::{Role, User, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The signed-in user.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub name: String,
    token: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Session {
    #[must_use]
    pub fn new(user_id: UserId, name: impl Into<String>, token: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            user_id,
            name: name.into(),
            token: token.into(),
            roles,
        }
    }

    /// Builds a session from a login response.
    #[must_use]
    pub fn for_user(user: &User, token: impl Into<String>) -> Self {
        Self::new(user.id, user.name.clone(), token, user.roles.clone())
    }

    /// Parses a stored session, rejecting one without a token.
    pub fn from_json(json: &str) -> SessionResult<Self> {
        let session: Self = serde_json::from_str(json)?;
        if session.token.trim().is_empty() {
            return Err(SessionError::Invalid("missing token".to_string()));
        }
        Ok(session)
    }

    /// The bearer token for API requests.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// The highest-precedence role held, if any.
    #[must_use]
    pub fn primary_role(&self) -> Option<Role> {
        Role::PRECEDENCE.into_iter().find(|role| self.has_role(*role))
    }

    /// Where this user lands after logging in.
    ///
    /// Users with no recognised role land on the faculty page, which only
    /// lists their own proposals.
    #[must_use]
    pub fn landing_route(&self) -> &'static str {
        match self.primary_role() {
            Some(Role::Admin) => "/admin",
            Some(Role::Approver) => "/approver",
            Some(Role::Purchaser) => "/purchaser",
            Some(Role::Faculty) | None => "/faculty",
        }
    }

    /// Fails with [`SessionError::Forbidden`] unless the user holds `role`.
    pub fn authorize(&self, role: Role) -> SessionResult<()> {
        if self.has_role(role) {
            Ok(())
        } else {
            Err(SessionError::Forbidden(role))
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("name", &self.name)
            .field("token", &"<redacted>")
            .field("roles", &self.roles)
            .finish()
    }
}
