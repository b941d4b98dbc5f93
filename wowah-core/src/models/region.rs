//! Game Data API regions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Battle.net region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// North America.
    Us,
    /// Europe.
    Eu,
    /// Korea.
    #[default]
    Kr,
    /// Taiwan.
    Tw,
    /// China.
    Cn,
}

impl Region {
    /// Returns all regions.
    pub fn all() -> &'static [Region] {
        &[Self::Us, Self::Eu, Self::Kr, Self::Tw, Self::Cn]
    }

    /// Lowercase region code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Eu => "eu",
            Self::Kr => "kr",
            Self::Tw => "tw",
            Self::Cn => "cn",
        }
    }

    /// Base URL of the WoW Game Data API.
    pub fn api_base(&self) -> String {
        match self {
            Self::Cn => "https://gateway.battlenet.com.cn/data/wow".to_string(),
            _ => format!("https://{}.api.blizzard.com/data/wow", self.as_str()),
        }
    }

    /// Host of the OAuth token endpoint.
    pub fn token_host(&self) -> String {
        match self {
            Self::Cn => "https://oauth.battlenet.com.cn".to_string(),
            _ => format!("https://{}.battle.net", self.as_str()),
        }
    }

    /// Namespace for static documents (items, classes).
    pub fn static_namespace(&self) -> String {
        format!("static-{}", self.as_str())
    }

    /// Namespace for dynamic documents (realms, auctions).
    pub fn dynamic_namespace(&self) -> String {
        format!("dynamic-{}", self.as_str())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|region| region.as_str() == lower)
            .ok_or_else(|| CoreError::UnknownRegion(s.to_string()))
    }
}
