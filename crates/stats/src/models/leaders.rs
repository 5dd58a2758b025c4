use serde::{Deserialize, Serialize};

/// Which leaderboard of the league leaders page to read.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LeaderBoard {
    BattingAverage,
    Hits,
}

impl LeaderBoard {
    /// Element id of the board on the leaders page.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::BattingAverage => "leaderboard_batting_batting_avg",
            Self::Hits => "leaderboard_batting_H",
        }
    }
}

/// A single leaderboard row. The value is kept as displayed ("0.342", "187").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderEntry {
    pub name: String,
    pub team: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AverageLeader {
    pub name: String,
    pub team: String,
    pub avg: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HitsLeader {
    pub name: String,
    pub team: String,
    pub hits: String,
}

impl From<LeaderEntry> for AverageLeader {
    fn from(entry: LeaderEntry) -> Self {
        Self {
            name: entry.name,
            team: entry.team,
            avg: entry.value,
        }
    }
}

impl From<LeaderEntry> for HitsLeader {
    fn from(entry: LeaderEntry) -> Self {
        Self {
            name: entry.name,
            team: entry.team,
            hits: entry.value,
        }
    }
}

/// Result of the top batters query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Leaderboards {
    pub avg: Vec<AverageLeader>,
    pub hits: Vec<HitsLeader>,
}
