//! Query façade over the pipeline.
//!
//! [`StatsService`] owns the daily cache, the page adapters and the resolver
//! chain, and wires them into one [`Flow`] per query:
//!
//! ```text
//! batter / pitcher   resolve_identifier ─▶ politeness_delay ─▶ gamelog
//! top batters        average_leaders ─▶ hits_leaders
//! lineups            lineups
//! batter vs pitcher  batter_vs_pitcher
//! ```

mod steps;

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Local};
use log::debug;

use crate::cache::{CachedValue, Clock, DailyCache, SystemClock};
use crate::errors::StatsError;
use crate::extract::{GamelogScheme, PageExtractor};
use crate::fetch::{PageFetcher, SiteUrls};
use crate::flow::{Flow, PolitenessDelay, DEFAULT_POLITENESS_DELAY};
use crate::models::{BatterSummary, LeaderBoard, Leaderboards, Lineups, Matchups, PitcherSummary};
use crate::resolver::ResolverChain;

use steps::{
    DetailContext, GamelogStep, LeadersContext, LeadersStep, LineupsContext, LineupsStep,
    MatchupsContext, MatchupsStep, PolitenessStep, ResolveIdentifierStep,
};

pub(crate) const BATTER_PARAMS_MISSING: &str = "Name or team of batter not found.";
pub(crate) const PITCHER_PARAMS_MISSING: &str = "Name or team of pitcher not found.";

/// Settings for [`StatsService`].
#[derive(Clone, Debug)]
pub struct StatsConfig {
    /// Season year used in every reference-site URL.
    pub season: i32,
    /// Pause between a fresh roster fetch and the gamelog fetch.
    pub politeness_delay: Duration,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            season: Local::now().year(),
            politeness_delay: DEFAULT_POLITENESS_DELAY,
        }
    }
}

/// State shared by every step.
pub(crate) struct Shared {
    pub cache: DailyCache<CachedValue>,
    pub fetcher: Arc<dyn PageFetcher>,
    pub extractor: Arc<dyn PageExtractor>,
    pub resolvers: ResolverChain,
    pub urls: SiteUrls,
}

/// Answers stats queries, caching every result for the rest of the day.
pub struct StatsService {
    shared: Arc<Shared>,
    detail_flow: Flow<DetailContext>,
    leaders_flow: Flow<LeadersContext>,
    lineups_flow: Flow<LineupsContext>,
    matchups_flow: Flow<MatchupsContext>,
}

impl StatsService {
    pub fn new(
        config: StatsConfig,
        fetcher: Arc<dyn PageFetcher>,
        extractor: Arc<dyn PageExtractor>,
    ) -> Self {
        Self::with_clock(config, fetcher, extractor, Arc::new(SystemClock))
    }

    /// Build a service whose cache reads dates from `clock`.
    pub fn with_clock(
        config: StatsConfig,
        fetcher: Arc<dyn PageFetcher>,
        extractor: Arc<dyn PageExtractor>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let shared = Arc::new(Shared {
            cache: DailyCache::with_clock(clock),
            fetcher,
            extractor,
            resolvers: ResolverChain::new(),
            urls: SiteUrls::new(config.season),
        });

        let detail_flow = Flow::new("player_details")
            .then(ResolveIdentifierStep {
                shared: shared.clone(),
            })
            .then(PolitenessStep {
                delay: PolitenessDelay::new(config.politeness_delay),
            })
            .then(GamelogStep {
                shared: shared.clone(),
            });

        let leaders_flow = Flow::new("top_batters")
            .then(LeadersStep {
                shared: shared.clone(),
                board: LeaderBoard::BattingAverage,
            })
            .then(LeadersStep {
                shared: shared.clone(),
                board: LeaderBoard::Hits,
            });

        let lineups_flow = Flow::new("lineups").then(LineupsStep {
            shared: shared.clone(),
        });
        let matchups_flow = Flow::new("batter_vs_pitcher").then(MatchupsStep {
            shared: shared.clone(),
        });

        Self {
            shared,
            detail_flow,
            leaders_flow,
            lineups_flow,
            matchups_flow,
        }
    }

    pub fn season(&self) -> i32 {
        self.shared.urls.season()
    }

    pub fn cache(&self) -> &DailyCache<CachedValue> {
        &self.shared.cache
    }

    /// Recent-form summary of a batter's last 31 games.
    pub async fn batter_details(
        &self,
        name: Option<&str>,
        team: Option<&str>,
    ) -> Result<BatterSummary, StatsError> {
        let (name, team) = required(name, team, BATTER_PARAMS_MISSING)?;
        let ctx = self
            .detail_flow
            .run(DetailContext::new(name, team, GamelogScheme::Batting))
            .await?;

        match ctx.summary {
            Some(CachedValue::Batter(summary)) => Ok(summary),
            _ => Err(StatsError::Internal(format!(
                "Unable to get gamelog for {}.",
                name
            ))),
        }
    }

    /// Recent-form summary of a pitcher's last 6 appearances.
    pub async fn pitcher_details(
        &self,
        name: Option<&str>,
        team: Option<&str>,
    ) -> Result<PitcherSummary, StatsError> {
        let (name, team) = required(name, team, PITCHER_PARAMS_MISSING)?;
        let ctx = self
            .detail_flow
            .run(DetailContext::new(name, team, GamelogScheme::Pitching))
            .await?;

        match ctx.summary {
            Some(CachedValue::Pitcher(summary)) => Ok(summary),
            _ => Err(StatsError::Internal(format!(
                "Unable to get gamelog for {}.",
                name
            ))),
        }
    }

    /// League batting average and hits leaders.
    pub async fn top_batters(&self) -> Result<Leaderboards, StatsError> {
        let ctx = self.leaders_flow.run(LeadersContext::default()).await?;
        Ok(ctx.boards)
    }

    pub async fn lineups(&self) -> Result<Arc<Lineups>, StatsError> {
        let ctx = self.lineups_flow.run(LineupsContext::default()).await?;
        ctx.lineups
            .ok_or_else(|| StatsError::Internal(steps::LINEUPS_UNAVAILABLE.to_string()))
    }

    pub async fn batter_vs_pitcher(&self) -> Result<Arc<Matchups>, StatsError> {
        let ctx = self.matchups_flow.run(MatchupsContext::default()).await?;
        ctx.matchups.ok_or_else(|| {
            StatsError::Internal(crate::extract::BLOB_MISSING.to_string())
        })
    }
}

/// Both query parameters, trimmed and non-empty.
fn required<'a>(
    name: Option<&'a str>,
    team: Option<&'a str>,
    message: &str,
) -> Result<(&'a str, &'a str), StatsError> {
    let name = name.map(str::trim).filter(|n| !n.is_empty());
    let team = team.map(str::trim).filter(|t| !t.is_empty());
    match (name, team) {
        (Some(name), Some(team)) => Ok((name, team)),
        _ => {
            debug!("Rejected detail query: {}", message);
            Err(StatsError::Validation(message.to_string()))
        }
    }
}
