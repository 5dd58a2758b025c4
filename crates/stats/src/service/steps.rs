//! Flow steps and contexts used by [`StatsService`](super::StatsService).

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::Shared;
use crate::aggregate::{summarize_batter, summarize_pitcher};
use crate::cache::{keys, CachedValue};
use crate::errors::StatsError;
use crate::extract::GamelogScheme;
use crate::flow::{PolitenessDelay, Step};
use crate::models::{
    IdentifierTable, LeaderBoard, Leaderboards, Lineups, Matchups, SiteIdentifier, TeamCode,
};
use crate::resolver::NOT_FOUND;

pub(crate) const ROSTER_UNAVAILABLE: &str = "Unable to get Baseball Reference keys for team.";
pub(crate) const LEADERS_UNAVAILABLE: &str = "Unable to get batters.";
pub(crate) const LINEUPS_UNAVAILABLE: &str = "Unable to get lineups.";

// ============================================================================
// Contexts
// ============================================================================

/// State of a batter or pitcher detail query.
pub(crate) struct DetailContext {
    pub name: String,
    pub team: TeamCode,
    pub scheme: GamelogScheme,
    pub identifier: Option<SiteIdentifier>,
    /// Whether the team table came from cache. Decides the politeness pause.
    pub roster_cached: bool,
    pub summary: Option<CachedValue>,
}

impl DetailContext {
    pub fn new(name: &str, team: &str, scheme: GamelogScheme) -> Self {
        Self {
            name: name.to_string(),
            team: Arc::from(team),
            scheme,
            identifier: None,
            roster_cached: false,
            summary: None,
        }
    }
}

#[derive(Default)]
pub(crate) struct LeadersContext {
    pub boards: Leaderboards,
}

#[derive(Default)]
pub(crate) struct LineupsContext {
    pub lineups: Option<Arc<Lineups>>,
}

#[derive(Default)]
pub(crate) struct MatchupsContext {
    pub matchups: Option<Arc<Matchups>>,
}

// ============================================================================
// Detail flow
// ============================================================================

/// Resolves the player identifier from the team table, fetching and caching
/// the roster page on a miss.
///
/// An unresolvable name is not an error here; the gamelog step reports it.
pub(crate) struct ResolveIdentifierStep {
    pub shared: Arc<Shared>,
}

impl ResolveIdentifierStep {
    async fn team_table(&self, team: &str) -> Result<(Arc<IdentifierTable>, bool), StatsError> {
        let key = keys::team(team);
        if let Some(table) = self.shared.cache.get(&key).as_ref().and_then(CachedValue::as_identifiers) {
            debug!("Using cached identifiers for team {}", team);
            return Ok((table.clone(), true));
        }

        let page = self.shared.fetcher.fetch_page(&self.shared.urls.team(team)).await?;
        let table = self.shared.extractor.identifier_table(&page);
        if table.is_empty() {
            return Err(StatsError::Extraction(ROSTER_UNAVAILABLE.to_string()));
        }

        let table = Arc::new(table);
        self.shared.cache.set(&key, CachedValue::Identifiers(table.clone()));
        Ok((table, false))
    }
}

#[async_trait]
impl Step<DetailContext> for ResolveIdentifierStep {
    fn name(&self) -> &'static str {
        "resolve_identifier"
    }

    async fn run(&self, ctx: &mut DetailContext) -> Result<(), StatsError> {
        let (table, cached) = self.team_table(&ctx.team).await?;
        ctx.roster_cached = cached;

        match self.shared.resolvers.resolve(&ctx.name, Some(&table)) {
            Ok(resolved) => {
                debug!(
                    "Resolved '{}' to {} ({:?})",
                    ctx.name, resolved.identifier, resolved.source
                );
                ctx.identifier = Some(resolved.identifier);
            }
            Err(e) => {
                debug!("No identifier for '{}' on {}: {}", ctx.name, ctx.team, e);
                ctx.identifier = None;
            }
        }
        Ok(())
    }
}

/// Waits before the gamelog request when the roster was just fetched.
pub(crate) struct PolitenessStep {
    pub delay: PolitenessDelay,
}

#[async_trait]
impl Step<DetailContext> for PolitenessStep {
    fn name(&self) -> &'static str {
        "politeness_delay"
    }

    async fn run(&self, ctx: &mut DetailContext) -> Result<(), StatsError> {
        self.delay.pause_after(ctx.roster_cached).await;
        Ok(())
    }
}

/// Serves the cached summary or fetches, aggregates and caches the gamelog.
pub(crate) struct GamelogStep {
    pub shared: Arc<Shared>,
}

#[async_trait]
impl Step<DetailContext> for GamelogStep {
    fn name(&self) -> &'static str {
        "gamelog"
    }

    async fn run(&self, ctx: &mut DetailContext) -> Result<(), StatsError> {
        let identifier = ctx
            .identifier
            .clone()
            .ok_or_else(|| StatsError::Resolution(NOT_FOUND.to_string()))?;

        let key = match ctx.scheme {
            GamelogScheme::Batting => keys::batting_gamelog(&ctx.name),
            GamelogScheme::Pitching => keys::pitching_gamelog(&ctx.name),
        };
        if let Some(summary) = self.shared.cache.get(&key) {
            debug!("Using cached gamelog summary for {}", ctx.name);
            ctx.summary = Some(summary);
            return Ok(());
        }

        let url = self.shared.urls.gamelog(&identifier, ctx.scheme);
        let page = self.shared.fetcher.fetch_page(&url).await?;
        let rows = self.shared.extractor.gamelog_rows(&page, ctx.scheme);
        if rows.is_empty() {
            return Err(StatsError::Extraction(format!(
                "Unable to get gamelog for {}.",
                ctx.name
            )));
        }

        let summary = match ctx.scheme {
            GamelogScheme::Batting => CachedValue::Batter(summarize_batter(&rows)),
            GamelogScheme::Pitching => CachedValue::Pitcher(summarize_pitcher(&rows)),
        };
        info!("Summarized {} games for {}", rows.len(), ctx.name);
        self.shared.cache.set(&key, summary.clone());
        ctx.summary = Some(summary);
        Ok(())
    }
}

// ============================================================================
// Leaderboards
// ============================================================================

/// Reads one board from the shared league leaders page.
///
/// The raw page is cached, so whichever board runs first pays for the fetch
/// and the other reads it from cache.
pub(crate) struct LeadersStep {
    pub shared: Arc<Shared>,
    pub board: LeaderBoard,
}

#[async_trait]
impl Step<LeadersContext> for LeadersStep {
    fn name(&self) -> &'static str {
        match self.board {
            LeaderBoard::BattingAverage => "average_leaders",
            LeaderBoard::Hits => "hits_leaders",
        }
    }

    async fn run(&self, ctx: &mut LeadersContext) -> Result<(), StatsError> {
        let cached = self
            .shared
            .cache
            .get(keys::BATTING_LEADERS)
            .as_ref()
            .and_then(CachedValue::as_page)
            .cloned();

        let (page, fresh) = match cached {
            Some(page) => {
                debug!("Using cached leaders page for {:?}", self.board);
                (page, false)
            }
            None => {
                let url = self.shared.urls.batting_leaders();
                let body = self.shared.fetcher.fetch_page(&url).await?;
                (Arc::<str>::from(body), true)
            }
        };

        let entries = self.shared.extractor.leaders(&page, self.board);
        if entries.is_empty() {
            return Err(StatsError::Extraction(LEADERS_UNAVAILABLE.to_string()));
        }
        if fresh {
            self.shared.cache.set(keys::BATTING_LEADERS, CachedValue::Page(page));
        }

        match self.board {
            LeaderBoard::BattingAverage => {
                ctx.boards.avg = entries.into_iter().map(Into::into).collect();
            }
            LeaderBoard::Hits => {
                ctx.boards.hits = entries.into_iter().map(Into::into).collect();
            }
        }
        Ok(())
    }
}

// ============================================================================
// Lineups and matchups
// ============================================================================

pub(crate) struct LineupsStep {
    pub shared: Arc<Shared>,
}

#[async_trait]
impl Step<LineupsContext> for LineupsStep {
    fn name(&self) -> &'static str {
        "lineups"
    }

    async fn run(&self, ctx: &mut LineupsContext) -> Result<(), StatsError> {
        if let Some(CachedValue::Lineups(lineups)) = self.shared.cache.get(keys::LINEUPS) {
            debug!("Using cached lineups");
            ctx.lineups = Some(lineups);
            return Ok(());
        }

        let page = self.shared.fetcher.fetch_page(&self.shared.urls.lineups()).await?;
        let lineups = self.shared.extractor.lineups(&page);
        if lineups.is_empty() {
            return Err(StatsError::Extraction(LINEUPS_UNAVAILABLE.to_string()));
        }

        let lineups = Arc::new(lineups);
        self.shared.cache.set(keys::LINEUPS, CachedValue::Lineups(lineups.clone()));
        ctx.lineups = Some(lineups);
        Ok(())
    }
}

pub(crate) struct MatchupsStep {
    pub shared: Arc<Shared>,
}

#[async_trait]
impl Step<MatchupsContext> for MatchupsStep {
    fn name(&self) -> &'static str {
        "batter_vs_pitcher"
    }

    async fn run(&self, ctx: &mut MatchupsContext) -> Result<(), StatsError> {
        if let Some(CachedValue::Matchups(matchups)) = self.shared.cache.get(keys::BATTER_VS_PITCHER) {
            debug!("Using cached batter vs pitcher lines");
            ctx.matchups = Some(matchups);
            return Ok(());
        }

        let url = self.shared.urls.batter_vs_pitcher();
        let page = self.shared.fetcher.fetch_page(&url).await?;
        let matchups = Arc::new(self.shared.extractor.matchups(&page)?);

        self.shared
            .cache
            .set(keys::BATTER_VS_PITCHER, CachedValue::Matchups(matchups.clone()));
        ctx.matchups = Some(matchups);
        Ok(())
    }
}
