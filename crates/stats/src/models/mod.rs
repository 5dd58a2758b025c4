//! Stats models
//!
//! This module contains the data types flowing through the pipeline:
//! - `types` - Type aliases for identifiers (TeamCode, SiteIdentifier)
//! - `row` - Per-game row records produced by extraction (RowRecord)
//! - `identifier_table` - Per-team display name to identifier mapping
//! - `summary` - Aggregated gamelog results (BatterSummary, PitcherSummary)
//! - `lineup` - Posted batting orders (LineupEntry, BattingSide)
//! - `leaders` - League leaderboards (LeaderEntry, Leaderboards)
//! - `matchup` - Batter vs pitcher lines (MatchupRecord, MatchupLine)

mod identifier_table;
mod leaders;
mod lineup;
mod matchup;
mod row;
mod summary;
mod types;

pub use identifier_table::IdentifierTable;
pub use leaders::{AverageLeader, HitsLeader, LeaderBoard, LeaderEntry, Leaderboards};
pub use lineup::{BattingSide, LineupEntry, Lineups};
pub use matchup::{MatchupLine, MatchupRecord, Matchups};
pub use row::RowRecord;
pub use summary::{BatterSummary, PitcherSummary};
pub use types::{SiteIdentifier, TeamCode};
