use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the `playerArray` blob embedded in the matchup page.
///
/// Stat fields arrive as either numbers or strings depending on the day, so
/// they are kept as raw JSON values and passed through untouched. Records
/// without a batter name cannot be keyed and are dropped by the extractor.
#[derive(Clone, Debug, Deserialize)]
pub struct MatchupRecord {
    #[serde(default)]
    pub batter: Option<String>,
    #[serde(default)]
    pub batter_team: Value,
    #[serde(default)]
    pub pitcher: Value,
    #[serde(default)]
    pub pitcher_team: Value,
    #[serde(default)]
    pub pa: Value,
    #[serde(default)]
    pub ab: Value,
    #[serde(default)]
    pub h: Value,
    #[serde(default)]
    pub bb: Value,
    #[serde(default)]
    pub batting_avg: Value,
}

/// Career batter-vs-pitcher line for today's probable matchup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchupLine {
    #[serde(rename = "Batter Team")]
    pub batter_team: Value,
    #[serde(rename = "Pitcher")]
    pub pitcher: Value,
    #[serde(rename = "Pitcher Team")]
    pub pitcher_team: Value,
    #[serde(rename = "PA")]
    pub plate_appearances: Value,
    #[serde(rename = "AB")]
    pub at_bats: Value,
    #[serde(rename = "H")]
    pub hits: Value,
    #[serde(rename = "BB")]
    pub walks: Value,
    #[serde(rename = "AVG")]
    pub average: Value,
}

impl From<MatchupRecord> for MatchupLine {
    fn from(record: MatchupRecord) -> Self {
        Self {
            batter_team: record.batter_team,
            pitcher: record.pitcher,
            pitcher_team: record.pitcher_team,
            plate_appearances: record.pa,
            at_bats: record.ab,
            hits: record.h,
            walks: record.bb,
            average: record.batting_avg,
        }
    }
}

/// Matchup lines keyed by batter name.
pub type Matchups = BTreeMap<String, MatchupLine>;
