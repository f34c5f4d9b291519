// Link list selection
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkSelectionMode {
    #[default]
    Top,
    Recent,
}

impl LinkSelectionMode {
    pub fn toggle(self) -> Self {
        match self {
            LinkSelectionMode::Top => LinkSelectionMode::Recent,
            LinkSelectionMode::Recent => LinkSelectionMode::Top,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkSelectionMode::Top => "top",
            LinkSelectionMode::Recent => "recent",
        }
    }
}

impl fmt::Display for LinkSelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown link selection mode: {0}")]
pub struct UnknownSelectionMode(String);

impl FromStr for LinkSelectionMode {
    type Err = UnknownSelectionMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(LinkSelectionMode::Top),
            "recent" => Ok(LinkSelectionMode::Recent),
            other => Err(UnknownSelectionMode(other.to_string())),
        }
    }
}
