//! Write-once key-value cache partitioned by calendar date.
//!
//! Entries live in the partition of the date they were written on. Reads
//! only ever look at today's partition, so anything from an earlier day is
//! invisible as soon as the date changes. The first write of a new day drops
//! every older partition. There is no timer and no TTL: the effective
//! freshness window is "since local midnight".

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use log::{debug, warn};

use super::clock::{Clock, SystemClock};

/// Date-scoped, first-write-wins cache.
///
/// Thread-safe. Concurrent flows for the same key may both miss and both
/// fetch; the first `set` wins and later ones are ignored.
pub struct DailyCache<V> {
    partitions: Mutex<HashMap<NaiveDate, HashMap<String, V>>>,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> DailyCache<V> {
    /// Create a cache backed by the local wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            partitions: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Lock the partitions, recovering from poison.
    ///
    /// A poisoned lock can at worst hold a partially written partition,
    /// which is still a valid cache state.
    fn lock_partitions(&self) -> MutexGuard<'_, HashMap<NaiveDate, HashMap<String, V>>> {
        self.partitions.lock().unwrap_or_else(|poisoned| {
            warn!("Daily cache mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Value stored for `key` today, if any.
    pub fn get(&self, key: &str) -> Option<V> {
        let today = self.clock.today();
        let partitions = self.lock_partitions();
        partitions.get(&today).and_then(|p| p.get(key)).cloned()
    }

    /// Store `value` under `key` unless today already has a value for it.
    ///
    /// Returns true if the value was stored. Entries from any other date are
    /// purged on every call.
    pub fn set(&self, key: &str, value: V) -> bool {
        let today = self.clock.today();
        let mut partitions = self.lock_partitions();

        let stale = partitions.len() - usize::from(partitions.contains_key(&today));
        if stale > 0 {
            debug!("Daily cache: purging {} stale partition(s)", stale);
            partitions.retain(|date, _| *date == today);
        }

        let partition = partitions.entry(today).or_default();
        if partition.contains_key(key) {
            debug!("Daily cache: '{}' already set for {}, keeping first value", key, today);
            return false;
        }
        partition.insert(key.to_string(), value);
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        let today = self.clock.today();
        self.lock_partitions()
            .get(&today)
            .is_some_and(|p| p.contains_key(key))
    }

    /// Number of entries held across all retained dates.
    pub fn len(&self) -> usize {
        self.lock_partitions().values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone> Default for DailyCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    fn opening_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 28).unwrap()
    }

    fn cache_with_clock() -> (DailyCache<String>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(opening_day()));
        (DailyCache::with_clock(clock.clone()), clock)
    }

    #[test]
    fn test_get_missing_key() {
        let (cache, _) = cache_with_clock();
        assert_eq!(cache.get("lineups"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_write_once_keeps_first_value() {
        let (cache, _) = cache_with_clock();

        assert!(cache.set("team-CIN", "v1".to_string()));
        assert!(!cache.set("team-CIN", "v2".to_string()));

        assert_eq!(cache.get("team-CIN").as_deref(), Some("v1"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_next_day_hides_and_purges_previous_entries() {
        let (cache, clock) = cache_with_clock();
        cache.set("team-NYM", "roster".to_string());
        cache.set("lineups", "cards".to_string());
        assert_eq!(cache.len(), 2);

        clock.advance_days(1);

        // Invisible before any write on the new day
        assert_eq!(cache.get("team-NYM"), None);
        assert_eq!(cache.get("lineups"), None);
        assert!(!cache.contains("team-NYM"));

        cache.set("battingLeaders", "page".to_string());

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("battingLeaders").as_deref(), Some("page"));
    }

    #[test]
    fn test_same_key_can_be_written_again_next_day() {
        let (cache, clock) = cache_with_clock();
        cache.set("lineups", "monday".to_string());

        clock.advance_days(1);
        assert!(cache.set("lineups", "tuesday".to_string()));
        assert_eq!(cache.get("lineups").as_deref(), Some("tuesday"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_going_back_in_time_also_purges() {
        let (cache, clock) = cache_with_clock();
        cache.set("lineups", "today".to_string());

        clock.advance_days(-1);
        cache.set("batterVsPitcher", "yesterday".to_string());

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("lineups"), None);
    }
}
