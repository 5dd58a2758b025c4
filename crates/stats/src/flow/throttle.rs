//! Politeness delay between dependent requests to the same site.
//!
//! The reference site is hit twice for an uncached detail query: once for
//! the team roster and once for the player gamelog. The delay spaces those
//! two requests out. It is scheduling only; nothing is retried.

use std::time::Duration;

use log::debug;

/// Default pause after a fresh fetch.
pub const DEFAULT_POLITENESS_DELAY: Duration = Duration::from_millis(3000);

/// Fixed pause inserted only when the preceding step went to the network.
///
/// The pause suspends the calling flow (`tokio::time::sleep`), never the
/// runtime, so other flows keep running meanwhile.
#[derive(Clone, Copy, Debug)]
pub struct PolitenessDelay {
    delay: Duration,
}

impl PolitenessDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Wait before the next network call, unless the previous step was
    /// served from cache.
    pub async fn pause_after(&self, served_from_cache: bool) {
        if served_from_cache || self.delay.is_zero() {
            return;
        }
        debug!("Politeness delay: waiting {:?} before next request", self.delay);
        tokio::time::sleep(self.delay).await;
    }
}

impl Default for PolitenessDelay {
    fn default() -> Self {
        Self::new(DEFAULT_POLITENESS_DELAY)
    }
}
