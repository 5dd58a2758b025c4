//! URLs of every page the pipeline reads.

use crate::extract::GamelogScheme;

const REFERENCE_BASE_URL: &str = "https://www.baseball-reference.com";
const MATCHUP_URL: &str = "https://swishanalytics.com/optimus/mlb/batter-vs-pitcher-stats";
const LINEUPS_URL: &str = "https://swishanalytics.com/optimus/mlb/lineups";

/// Page locations for one season.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteUrls {
    season: i32,
}

impl SiteUrls {
    pub fn new(season: i32) -> Self {
        Self { season }
    }

    pub fn season(&self) -> i32 {
        self.season
    }

    /// Team roster page, e.g. `/teams/NYM/2024.shtml`.
    pub fn team(&self, team: &str) -> String {
        format!(
            "{}/teams/{}/{}.shtml",
            REFERENCE_BASE_URL,
            urlencoding::encode(team),
            self.season
        )
    }

    /// Player gamelog page for the batting (`t=b`) or pitching (`t=p`) log.
    pub fn gamelog(&self, identifier: &str, scheme: GamelogScheme) -> String {
        format!(
            "{}/players/gl.fcgi?id={}&t={}&year={}",
            REFERENCE_BASE_URL,
            urlencoding::encode(identifier),
            scheme.query_flag(),
            self.season
        )
    }

    pub fn batting_leaders(&self) -> String {
        format!(
            "{}/leagues/majors/{}-batting-leaders.shtml",
            REFERENCE_BASE_URL, self.season
        )
    }

    pub fn lineups(&self) -> String {
        LINEUPS_URL.to_string()
    }

    pub fn batter_vs_pitcher(&self) -> String {
        MATCHUP_URL.to_string()
    }
}
