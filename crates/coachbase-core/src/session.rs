use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// The authenticated caller of a request. Authorization predicates in the
/// lookup collaborators are evaluated against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub role: Role,
}

impl Session {
    /// Parse a session from the raw identity forwarded by the authorizer.
    pub fn parse(user_id: &str, role: &str) -> Result<Self, CoreError> {
        Ok(Self {
            user_id: Uuid::parse_str(user_id.trim())?,
            role: role.parse()?,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether this caller may author programs and meal plans.
    pub fn can_author(&self) -> bool {
        matches!(self.role, Role::Coach | Role::Admin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    Athlete,
    Coach,
    Admin,
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "athlete" => Ok(Role::Athlete),
            "coach" => Ok(Role::Coach),
            "admin" => Ok(Role::Admin),
            other => Err(CoreError::InvalidRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Athlete => "athlete",
            Role::Coach => "coach",
            Role::Admin => "admin",
        };
        f.write_str(s)
    }
}
