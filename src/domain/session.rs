use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role stored under the `userType` key at login and cleared at logout.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Regular shopper.
    User,
    /// Seller with access to the product-management dashboard.
    Agent,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UserType::User => "user",
            UserType::Agent => "agent",
        };
        f.write_str(label)
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "user" => Ok(UserType::User),
            "agent" => Ok(UserType::Agent),
            other => Err(other.to_string()),
        }
    }
}

/// Explicit session context loaded from the store at request start and
/// passed to page services, instead of ambient global reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Role of the signed-in visitor, if any.
    pub user_type: Option<UserType>,
}

impl Session {
    /// Session of a visitor who has not signed in.
    pub fn anonymous() -> Self {
        Self { user_type: None }
    }

    pub fn signed_in(user_type: UserType) -> Self {
        Self {
            user_type: Some(user_type),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_type.is_some()
    }

    pub fn is_agent(&self) -> bool {
        matches!(self.user_type, Some(UserType::Agent))
    }
}
