use serde::{Deserialize, Serialize};

/// Store keys holding the persisted owner identity
pub mod keys {
    /// Key for the logged-in owner's display name
    pub const OWNER_NAME: &str = "ownerName";

    /// Key for the logged-in owner's role label
    pub const OWNER_ROLE: &str = "ownerRole";
}

/// Role assigned when `login` is called without one
pub const DEFAULT_OWNER_ROLE: &str = "owner";

/// Who is logged in.
///
/// The authenticated flag exposed to consumers is derived from this variant, so
/// it can never disagree with the presence of an owner name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OwnerState {
    #[default]
    Unauthenticated,
    Authenticated {
        name: String,
        role: String,
    },
}

impl OwnerState {
    pub fn authenticated(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self::Authenticated {
            name: name.into(),
            role: role.into(),
        }
    }

    pub fn owner_name(&self) -> Option<&str> {
        match self {
            Self::Authenticated { name, .. } => Some(name),
            Self::Unauthenticated => None,
        }
    }

    pub fn owner_role(&self) -> Option<&str> {
        match self {
            Self::Authenticated { role, .. } => Some(role),
            Self::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            owner_name: self.owner_name().map(str::to_string),
            owner_role: self.owner_role().map(str::to_string),
            is_authenticated: self.is_authenticated(),
        }
    }
}

/// Read-only view of the session handed to consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub owner_name: Option<String>,
    pub owner_role: Option<String>,
    pub is_authenticated: bool,
}

impl SessionSnapshot {
    pub fn unauthenticated() -> Self {
        OwnerState::Unauthenticated.snapshot()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::unauthenticated()
    }
}
