use serde::{Deserialize, Serialize};

/// Rolling batting summary over the most recent games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatterSummary {
    #[serde(rename = "Current Streak")]
    pub current_streak: u32,
    #[serde(rename = "Longest Streak")]
    pub longest_streak: u32,
    #[serde(rename = "H")]
    pub hits: u32,
    #[serde(rename = "PA")]
    pub plate_appearances: u32,
    #[serde(rename = "AB")]
    pub at_bats: u32,
    #[serde(rename = "BB")]
    pub walks: u32,
    #[serde(rename = "SO")]
    pub strikeouts: u32,
    /// Batting average with 3 decimals, "NaN" without at-bats.
    #[serde(rename = "AVG")]
    pub average: String,
}

/// Rolling pitching summary over the most recent appearances.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PitcherSummary {
    #[serde(rename = "IP")]
    pub innings_pitched: f64,
    #[serde(rename = "H")]
    pub hits: u32,
    #[serde(rename = "BB")]
    pub walks: u32,
    #[serde(rename = "SO")]
    pub strikeouts: u32,
    #[serde(rename = "Batters Faced")]
    pub batters_faced: u32,
    #[serde(rename = "Ground Balls")]
    pub ground_balls: u32,
    #[serde(rename = "Fly Balls")]
    pub fly_balls: u32,
    #[serde(rename = "Line Drives")]
    pub line_drives: u32,
    #[serde(rename = "Pop Ups")]
    pub pop_ups: u32,
    #[serde(rename = "Pitches/G")]
    pub pitches_per_game: String,
    #[serde(rename = "Strikes/G")]
    pub strikes_per_game: String,
}
