//! Marketplace roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role chosen at registration. Never changes afterwards.
///
/// Wire format: lowercase string (`"client"`, `"trainer"`, `"nutritionist"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Client,
    Trainer,
    Nutritionist,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Trainer => "trainer",
            Self::Nutritionist => "nutritionist",
        }
    }

    /// Human-readable label shown next to a member's name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Trainer => "Trainer",
            Self::Nutritionist => "Nutritionist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Self::Client),
            "trainer" => Ok(Self::Trainer),
            "nutritionist" => Ok(Self::Nutritionist),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}
