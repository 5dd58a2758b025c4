use std::sync::Arc;

use crate::models::{BatterSummary, IdentifierTable, Lineups, Matchups, PitcherSummary};

/// Everything the stats service keeps in its daily cache.
#[derive(Clone, Debug)]
pub enum CachedValue {
    /// Raw page body, re-extracted on every read.
    Page(Arc<str>),
    Identifiers(Arc<IdentifierTable>),
    Batter(BatterSummary),
    Pitcher(PitcherSummary),
    Lineups(Arc<Lineups>),
    Matchups(Arc<Matchups>),
}

impl CachedValue {
    pub fn as_page(&self) -> Option<&Arc<str>> {
        match self {
            Self::Page(page) => Some(page),
            _ => None,
        }
    }

    pub fn as_identifiers(&self) -> Option<&Arc<IdentifierTable>> {
        match self {
            Self::Identifiers(table) => Some(table),
            _ => None,
        }
    }
}

/// Cache keys used by the stats service.
pub mod keys {
    pub const BATTING_LEADERS: &str = "battingLeaders";
    pub const LINEUPS: &str = "lineups";
    pub const BATTER_VS_PITCHER: &str = "batterVsPitcher";

    pub fn team(team: &str) -> String {
        format!("team-{}", team)
    }

    pub fn batting_gamelog(name: &str) -> String {
        format!("gamelog-batting-{}", name)
    }

    pub fn pitching_gamelog(name: &str) -> String {
        format!("gamelog-pitching-{}", name)
    }
}
