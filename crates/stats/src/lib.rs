//! Dugout Stats Crate
//!
//! This crate scrapes, normalizes and caches recent-form baseball statistics
//! for the Dugout query server.
//!
//! # Overview
//!
//! The stats crate supports:
//! - Batter summaries over the last 31 games, with hit streaks
//! - Pitcher summaries over the last 6 appearances
//! - League batting average and hits leaders
//! - Posted lineups and batter vs pitcher matchups
//! - A write-once cache scoped to the current calendar day
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   StatsService   | --> |   DailyCache     |  (write-once per day)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! |      Flow        |  (ordered steps, first error aborts)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |  ResolverChain   | --> |  PageFetcher     |  (reqwest, politeness delay)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  PageExtractor   |  (scraper + regex)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    aggregate     |  (windowed sums, streaks)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`StatsService`] - One async operation per query type
//! - [`DailyCache`] - Date-partitioned, first-write-wins store
//! - [`ResolverChain`] - Display name to site identifier
//! - [`RowRecord`] - One game's stat cells
//! - [`BatterSummary`] / [`PitcherSummary`] - Aggregated results
//! - [`StatsError`] - Error type with status classification

pub mod aggregate;
pub mod cache;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod flow;
pub mod models;
pub mod resolver;
pub mod service;

// Re-export all public types from models
pub use models::{
    AverageLeader, BatterSummary, BattingSide, HitsLeader, IdentifierTable, LeaderBoard,
    LeaderEntry, Leaderboards, LineupEntry, Lineups, MatchupLine, MatchupRecord, Matchups,
    PitcherSummary, RowRecord, SiteIdentifier, TeamCode,
};

pub use aggregate::{summarize_batter, summarize_pitcher, BATTER_WINDOW, PITCHER_WINDOW};
pub use cache::{CachedValue, Clock, DailyCache, ManualClock, SystemClock};
pub use errors::{ErrorKind, StatsError};
pub use extract::{GamelogScheme, HtmlExtractor, PageExtractor};
pub use fetch::{HttpPageFetcher, PageFetcher, SiteUrls};
pub use flow::{Flow, PolitenessDelay, Step};
pub use resolver::{candidate_prefix, ResolutionSource, ResolvedIdentifier, Resolver, ResolverChain};
pub use service::{StatsConfig, StatsService};
