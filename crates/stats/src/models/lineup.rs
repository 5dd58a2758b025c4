use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which side of the plate a batter hits from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum BattingSide {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    /// Switch hitter
    #[serde(rename = "S")]
    Switch,
}

impl FromStr for BattingSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "L" => Ok(Self::Left),
            "R" => Ok(Self::Right),
            "S" => Ok(Self::Switch),
            other => Err(format!("Unknown batting side: {}", other)),
        }
    }
}

impl fmt::Display for BattingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "L"),
            Self::Right => write!(f, "R"),
            Self::Switch => write!(f, "S"),
        }
    }
}

/// One slot of a posted batting order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupEntry {
    pub name: String,
    #[serde(rename = "bats")]
    pub batting_side: BattingSide,
}

/// Today's lineups keyed by team code, each in batting order.
pub type Lineups = BTreeMap<String, Vec<LineupEntry>>;
