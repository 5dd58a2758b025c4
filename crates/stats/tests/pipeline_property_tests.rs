//! Property-based integration tests for the stats pipeline.
//!
//! These tests check the aggregation, cache and identifier invariants across
//! generated inputs, using the `proptest` crate for random test case generation.

use std::sync::Arc;

use chrono::NaiveDate;
use dugout_stats::{
    candidate_prefix, summarize_batter, summarize_pitcher, DailyCache, ManualClock, RowRecord,
    BATTER_WINDOW, PITCHER_WINDOW,
};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

/// A batting line: (hits, at-bats, walks, strikeouts) with hits <= at-bats.
fn arb_batting_line() -> impl Strategy<Value = (u32, u32, u32, u32)> {
    (0u32..6, 0u32..3, 0u32..4).prop_flat_map(|(ab, bb, so)| {
        (0..=ab).prop_map(move |h| (h, ab, bb, so.min(ab)))
    })
}

fn batting_row((h, ab, bb, so): (u32, u32, u32, u32)) -> RowRecord {
    RowRecord::new()
        .with("H", h.to_string())
        .with("AB", ab.to_string())
        .with("PA", (ab + bb).to_string())
        .with("BB", bb.to_string())
        .with("SO", so.to_string())
}

fn arb_gamelog(max_games: usize) -> impl Strategy<Value = Vec<(u32, u32, u32, u32)>> {
    proptest::collection::vec(arb_batting_line(), 0..=max_games)
}

fn arb_name_part() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,9}"
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()
}

/// Longest run of hit games and the run ending at the newest game.
fn reference_streaks(window: &[(u32, u32, u32, u32)]) -> (u32, u32) {
    let mut longest = 0;
    let mut run = 0;
    for &(h, ..) in window {
        if h > 0 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    let current = window.iter().rev().take_while(|&&(h, ..)| h > 0).count() as u32;
    (longest, current)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Batter sums only cover the newest 31 games.
    #[test]
    fn prop_batter_sums_cover_window(games in arb_gamelog(60)) {
        let rows: Vec<RowRecord> = games.iter().copied().map(batting_row).collect();
        let summary = summarize_batter(&rows);

        let window = &games[games.len().saturating_sub(BATTER_WINDOW)..];
        let hits: u32 = window.iter().map(|g| g.0).sum();
        let at_bats: u32 = window.iter().map(|g| g.1).sum();
        let walks: u32 = window.iter().map(|g| g.2).sum();

        prop_assert_eq!(summary.hits, hits);
        prop_assert_eq!(summary.at_bats, at_bats);
        prop_assert_eq!(summary.walks, walks);
        prop_assert_eq!(summary.plate_appearances, at_bats + walks);
    }

    /// Streaks match a straightforward scan of the window.
    #[test]
    fn prop_batter_streaks_match_reference(games in arb_gamelog(60)) {
        let rows: Vec<RowRecord> = games.iter().copied().map(batting_row).collect();
        let summary = summarize_batter(&rows);

        let window = &games[games.len().saturating_sub(BATTER_WINDOW)..];
        let (longest, current) = reference_streaks(window);

        prop_assert_eq!(summary.longest_streak, longest);
        prop_assert_eq!(summary.current_streak, current);
        prop_assert!(summary.current_streak <= summary.longest_streak);
        prop_assert!(summary.longest_streak as usize <= BATTER_WINDOW);
    }

    /// AVG is H / AB rounded to three decimals, or NaN without at-bats.
    #[test]
    fn prop_batter_average_format(games in arb_gamelog(40)) {
        let rows: Vec<RowRecord> = games.iter().copied().map(batting_row).collect();
        let summary = summarize_batter(&rows);

        if summary.at_bats == 0 {
            prop_assert_eq!(summary.average.as_str(), "NaN");
        } else {
            let (whole, decimals) = summary.average.split_once('.').unwrap();
            prop_assert_eq!(decimals.len(), 3);
            prop_assert!(whole == "0" || whole == "1");
            let exact = summary.hits as f64 / summary.at_bats as f64;
            let shown: f64 = summary.average.parse().unwrap();
            prop_assert!((shown - exact).abs() <= 0.0005 + 1e-9);
        }
    }

    /// Pitches per game averages the newest appearances actually counted.
    #[test]
    fn prop_pitches_per_game_over_counted_games(
        pitches in proptest::collection::vec(0u32..130, 1..15)
    ) {
        let rows: Vec<RowRecord> = pitches
            .iter()
            .map(|p| RowRecord::new().with("pitches", p.to_string()))
            .collect();
        let summary = summarize_pitcher(&rows);

        let window = &pitches[pitches.len().saturating_sub(PITCHER_WINDOW)..];
        let exact = window.iter().sum::<u32>() as f64 / window.len() as f64;
        let shown: f64 = summary.pitches_per_game.parse().unwrap();

        prop_assert_eq!(summary.pitches_per_game.split_once('.').unwrap().1.len(), 2);
        prop_assert!((shown - exact).abs() <= 0.005 + 1e-9);
    }

    /// The first write of a key on a day is the one every later read sees.
    #[test]
    fn prop_cache_first_write_wins(
        writes in proptest::collection::vec(("[a-d]", 0u32..100), 1..30)
    ) {
        let cache = DailyCache::with_clock(Arc::new(ManualClock::new(day())));
        let mut first = std::collections::HashMap::new();

        for (key, value) in &writes {
            let stored = cache.set(key, *value);
            prop_assert_eq!(stored, !first.contains_key(key));
            first.entry(key.clone()).or_insert(*value);
        }

        for (key, value) in &first {
            prop_assert_eq!(cache.get(key), Some(*value));
        }
        prop_assert_eq!(cache.len(), first.len());
    }

    /// Nothing written on one day is visible the next, and the first write of
    /// the new day drops the old partition.
    #[test]
    fn prop_cache_is_scoped_to_one_day(
        keys in proptest::collection::hash_set("[a-z]{1,6}", 1..20),
        days in 1i64..400
    ) {
        let clock = Arc::new(ManualClock::new(day()));
        let cache = DailyCache::with_clock(clock.clone());
        for key in &keys {
            cache.set(key, 1u8);
        }

        clock.advance_days(days);
        for key in &keys {
            prop_assert_eq!(cache.get(key), None);
        }

        cache.set("fresh", 2u8);
        prop_assert_eq!(cache.len(), 1);
        prop_assert_eq!(cache.get("fresh"), Some(2u8));
    }

    /// Candidate stems are the first five letters of the family name plus the
    /// first two of the given name, lowercased.
    #[test]
    fn prop_candidate_prefix_for_simple_names(
        given in arb_name_part(),
        family in arb_name_part()
    ) {
        let candidate = candidate_prefix(&format!("{} {}", given, family));
        let expected: String = family
            .chars()
            .take(5)
            .chain(given.chars().take(2))
            .collect::<String>()
            .to_lowercase();

        prop_assert_eq!(candidate, expected);
    }

    /// Punctuation and case never reach the candidate.
    #[test]
    fn prop_candidate_prefix_is_clean(name in "[A-Za-z.'\\-, ]{0,30}") {
        let candidate = candidate_prefix(&name);

        prop_assert!(candidate.chars().count() <= 7);
        prop_assert!(candidate
            .chars()
            .all(|c| c.is_ascii_lowercase()));
    }
}
