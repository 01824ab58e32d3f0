use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user role. A user may hold several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(alias = "admin", alias = "ADMIN")]
    Admin,
    #[serde(alias = "approver", alias = "APPROVER")]
    Approver,
    #[serde(alias = "purchaser", alias = "PURCHASER")]
    Purchaser,
    #[serde(alias = "faculty", alias = "FACULTY")]
    Faculty,
}

impl Role {
    /// All roles, highest privilege first. Landing-page selection walks
    /// this list and stops at the first role a user holds.
    pub const PRECEDENCE: [Role; 4] = [Role::Admin, Role::Approver, Role::Purchaser, Role::Faculty];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Approver => "Approver",
            Self::Purchaser => "Purchaser",
            Self::Faculty => "Faculty",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::PRECEDENCE
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownRole(s.to_string()))
    }
}
