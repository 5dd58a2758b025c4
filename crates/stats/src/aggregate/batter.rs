use crate::models::{BatterSummary, RowRecord};

use super::fixed_ratio;

/// Number of most recent games summarized for a batter.
pub const BATTER_WINDOW: usize = 31;

/// Summarize a batter's most recent games.
///
/// Rows are walked newest first. Two counters track hits:
///
/// - the general counter grows on every game with a hit and is committed to
///   `longest_streak` (if larger) on every hitless game, then reset;
/// - the active counter only starts when the most recent game has a hit and
///   keeps growing while hits continue. The first hitless game freezes it
///   into `current_streak`; it never restarts.
///
/// Counters still running when the window runs out are committed the same
/// way, so a streak spanning the whole window is reported.
pub fn summarize_batter(rows: &[RowRecord]) -> BatterSummary {
    let mut summary = BatterSummary::default();
    let mut streak = 0u32;
    let mut active = 0u32;

    for (age, row) in rows.iter().rev().take(BATTER_WINDOW).enumerate() {
        let hits = row.count("H");
        summary.hits = summary.hits.saturating_add(hits);
        summary.plate_appearances = summary.plate_appearances.saturating_add(row.count("PA"));
        summary.at_bats = summary.at_bats.saturating_add(row.count("AB"));
        summary.walks = summary.walks.saturating_add(row.count("BB"));
        summary.strikeouts = summary.strikeouts.saturating_add(row.count("SO"));

        if hits > 0 {
            streak += 1;
            if age == 0 || active > 0 {
                active += 1;
            }
        } else {
            summary.longest_streak = summary.longest_streak.max(streak);
            if active > 0 {
                summary.current_streak = active;
                active = 0;
            }
            streak = 0;
        }
    }

    summary.longest_streak = summary.longest_streak.max(streak);
    if active > 0 {
        summary.current_streak = active;
    }

    summary.average = fixed_ratio(summary.hits as f64, summary.at_bats as f64, 3);
    summary
}
