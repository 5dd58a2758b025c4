use std::sync::Arc;

use crate::config::Config;
use dugout_stats::{HtmlExtractor, HttpPageFetcher, PageFetcher, StatsConfig, StatsService};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub stats: Arc<StatsService>,
}

pub fn init_tracing() {
    let log_format = std::env::var("DUGOUT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Build the application state with the HTTP page fetcher.
pub fn build_state(config: &Config) -> Arc<AppState> {
    let fetcher = Arc::new(HttpPageFetcher::new(config.fetch_timeout));
    build_state_with_fetcher(config, fetcher)
}

/// Build the application state around any page fetcher.
pub fn build_state_with_fetcher(config: &Config, fetcher: Arc<dyn PageFetcher>) -> Arc<AppState> {
    let stats_config = StatsConfig {
        season: config.season,
        politeness_delay: config.politeness_delay,
    };
    let delay = stats_config.politeness_delay;
    let stats = StatsService::new(stats_config, fetcher, Arc::new(HtmlExtractor::new()));
    tracing::info!(
        "Stats service for season {} (politeness delay {:?})",
        stats.season(),
        delay
    );

    Arc::new(AppState {
        stats: Arc::new(stats),
    })
}
