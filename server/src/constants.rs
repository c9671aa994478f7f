//! Fixed literals shared by the API and the rendered pages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Base address of the JSON API when `API_BASE_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Account roles known to the rental front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Owner,
    Manager,
    Tenant,
}

/// Account lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountStatus {
    Active,
    Inactive,
    Pending,
}

pub const ROLES: [Role; 3] = [Role::Owner, Role::Manager, Role::Tenant];

pub const ACCOUNT_STATUSES: [AccountStatus; 3] = [
    AccountStatus::Active,
    AccountStatus::Inactive,
    AccountStatus::Pending,
];

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Manager => "MANAGER",
            Self::Tenant => "TENANT",
        }
    }
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Pending => "PENDING",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role or status literal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown literal: {0}")]
pub struct UnknownLiteral(pub String);

impl FromStr for Role {
    type Err = UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ROLES
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLiteral(s.to_string()))
    }
}

impl FromStr for AccountStatus {
    type Err = UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ACCOUNT_STATUSES
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLiteral(s.to_string()))
    }
}

/// Response for GET /api/constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantsResponse {
    pub api_base_url: String,
    pub roles: Vec<Role>,
    pub statuses: Vec<AccountStatus>,
}

impl ConstantsResponse {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            roles: ROLES.to_vec(),
            statuses: ACCOUNT_STATUSES.to_vec(),
        }
    }
}
