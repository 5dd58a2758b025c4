use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use chrono::{Datelike, Local};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Timeout of a single outbound page fetch.
    pub fetch_timeout: Duration,
    /// Pause between a fresh roster fetch and the gamelog fetch.
    pub politeness_delay: Duration,
    pub season: i32,
}

fn millis_from_env(key: &str, default: u64) -> Duration {
    let ms = std::env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default);
    Duration::from_millis(ms)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("DUGOUT_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:9876".to_string())
            .parse()
            .context("Invalid DUGOUT_LISTEN_ADDR")?;
        let cors_allow = std::env::var("DUGOUT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let season = match std::env::var("DUGOUT_SEASON") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid DUGOUT_SEASON '{}'", raw))?,
            Err(_) => Local::now().year(),
        };
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: millis_from_env("DUGOUT_REQUEST_TIMEOUT_MS", 30_000),
            fetch_timeout: millis_from_env("DUGOUT_FETCH_TIMEOUT_MS", 15_000),
            politeness_delay: millis_from_env("DUGOUT_POLITENESS_DELAY_MS", 3_000),
            season,
        })
    }
}
