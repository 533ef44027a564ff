//! Purchasable content kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Discriminator stored in `purchases.content_type`.
///
/// Only workouts and nutrition plans can be bought; advice is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Workout,
    Nutrition,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content type: {0}")]
pub struct UnknownContentKind(pub String);

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Workout => "workout",
            Self::Nutrition => "nutrition",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Workout => "Workout Plan",
            Self::Nutrition => "Nutrition Plan",
        }
    }

    /// Static price in cents. Not persisted and not configurable by authors.
    pub fn price_cents(self) -> u32 {
        match self {
            Self::Workout => 2999,
            Self::Nutrition => 2499,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = UnknownContentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workout" => Ok(Self::Workout),
            "nutrition" => Ok(Self::Nutrition),
            other => Err(UnknownContentKind(other.to_owned())),
        }
    }
}
