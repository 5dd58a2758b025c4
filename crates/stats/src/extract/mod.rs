//! Page extraction.
//!
//! Turns fetched page bodies into the typed records the pipeline works on.
//! Extraction is synchronous and never touches the network. Structural
//! misses come back as empty collections; the service decides which empty
//! result is an error.
//!
//! | Operation | Page | Output |
//! |-----------|------|--------|
//! | [`PageExtractor::gamelog_rows`] | player gamelog | date-ascending rows |
//! | [`PageExtractor::identifier_table`] | team roster | name to identifier |
//! | [`PageExtractor::leaders`] | league leaders | one leaderboard |
//! | [`PageExtractor::lineups`] | daily lineups | batting orders by team |
//! | [`PageExtractor::matchups`] | batter vs pitcher | lines by batter |

mod gamelog;
mod leaders;
mod lineups;
mod matchups;
mod roster;

pub(crate) use matchups::BLOB_MISSING;

use crate::errors::StatsError;
use crate::models::{IdentifierTable, LeaderBoard, LeaderEntry, Lineups, Matchups, RowRecord};

/// Which gamelog table a player page is read with.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GamelogScheme {
    Batting,
    Pitching,
}

impl GamelogScheme {
    /// Id of the gamelog table; rows carry ids prefixed with it.
    pub fn table_id(self) -> &'static str {
        match self {
            Self::Batting => "batting_gamelogs",
            Self::Pitching => "pitching_gamelogs",
        }
    }

    /// Value of the `t` query parameter selecting this log.
    pub fn query_flag(self) -> &'static str {
        match self {
            Self::Batting => "b",
            Self::Pitching => "p",
        }
    }
}

/// Extracts typed records from raw pages.
pub trait PageExtractor: Send + Sync {
    /// Per-game rows, oldest first. Empty when the gamelog table is missing.
    fn gamelog_rows(&self, page: &str, scheme: GamelogScheme) -> Vec<RowRecord>;

    /// Active players of a team roster page.
    fn identifier_table(&self, page: &str) -> IdentifierTable;

    fn leaders(&self, page: &str, board: LeaderBoard) -> Vec<LeaderEntry>;

    fn lineups(&self, page: &str) -> Lineups;

    /// Matchup lines from the embedded player blob.
    ///
    /// Unlike the other operations this one can fail: a page without the
    /// blob is [`StatsError::Extraction`], a malformed blob is
    /// [`StatsError::Parse`].
    fn matchups(&self, page: &str) -> Result<Matchups, StatsError>;
}

/// Default extractor using CSS selectors and regular expressions.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlExtractor;

impl HtmlExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl PageExtractor for HtmlExtractor {
    fn gamelog_rows(&self, page: &str, scheme: GamelogScheme) -> Vec<RowRecord> {
        gamelog::extract_rows(page, scheme)
    }

    fn identifier_table(&self, page: &str) -> IdentifierTable {
        roster::extract_identifiers(page)
    }

    fn leaders(&self, page: &str, board: LeaderBoard) -> Vec<LeaderEntry> {
        leaders::extract_leaders(page, board)
    }

    fn lineups(&self, page: &str) -> Lineups {
        lineups::extract_lineups(page)
    }

    fn matchups(&self, page: &str) -> Result<Matchups, StatsError> {
        matchups::extract_matchups(page)
    }
}

/// Trimmed text content of an element with inner whitespace collapsed.
fn element_text(element: scraper::ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
