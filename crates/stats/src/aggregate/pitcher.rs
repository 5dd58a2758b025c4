use crate::models::{PitcherSummary, RowRecord};

use super::fixed_ratio;

/// Number of most recent appearances summarized for a pitcher.
pub const PITCHER_WINDOW: usize = 6;

/// Summarize a pitcher's most recent appearances.
///
/// Pitch and strike totals are averaged over the appearances actually
/// counted, which is fewer than [`PITCHER_WINDOW`] early in the season.
pub fn summarize_pitcher(rows: &[RowRecord]) -> PitcherSummary {
    let mut summary = PitcherSummary::default();
    let mut pitches = 0u32;
    let mut strikes = 0u32;
    let mut games = 0u32;

    for row in rows.iter().rev().take(PITCHER_WINDOW) {
        games += 1;
        summary.innings_pitched += row.number("IP");
        summary.hits = summary.hits.saturating_add(row.count("H"));
        summary.walks = summary.walks.saturating_add(row.count("BB"));
        summary.strikeouts = summary.strikeouts.saturating_add(row.count("SO"));
        summary.batters_faced = summary.batters_faced.saturating_add(row.count("batters_faced"));
        summary.ground_balls = summary.ground_balls.saturating_add(row.count("inplay_gb_total"));
        summary.fly_balls = summary.fly_balls.saturating_add(row.count("inplay_fb_total"));
        summary.line_drives = summary.line_drives.saturating_add(row.count("inplay_ld"));
        summary.pop_ups = summary.pop_ups.saturating_add(row.count("inplay_pu"));
        pitches = pitches.saturating_add(row.count("pitches"));
        strikes = strikes.saturating_add(row.count("strikes_total"));
    }

    summary.pitches_per_game = fixed_ratio(pitches as f64, games as f64, 2);
    summary.strikes_per_game = fixed_ratio(strikes as f64, games as f64, 2);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(pitches: u32, strikes: u32) -> RowRecord {
        RowRecord::new()
            .with("IP", "6")
            .with("H", "5")
            .with("BB", "2")
            .with("SO", "7")
            .with("batters_faced", "25")
            .with("inplay_gb_total", "8")
            .with("inplay_fb_total", "5")
            .with("inplay_ld", "4")
            .with("inplay_pu", "1")
            .with("pitches", pitches.to_string())
            .with("strikes_total", strikes.to_string())
    }

    #[test]
    fn test_pitches_per_game_over_six_starts() {
        let rows: Vec<RowRecord> = [90, 85, 100, 95, 80, 92]
            .into_iter()
            .map(|p| start(p, 60))
            .collect();
        let summary = summarize_pitcher(&rows);

        assert_eq!(summary.pitches_per_game, "90.33");
        assert_eq!(summary.strikes_per_game, "60.00");
        assert_eq!(summary.innings_pitched, 36.0);
        assert_eq!(summary.strikeouts, 42);
        assert_eq!(summary.batters_faced, 150);
        assert_eq!(summary.ground_balls, 48);
        assert_eq!(summary.fly_balls, 30);
        assert_eq!(summary.line_drives, 24);
        assert_eq!(summary.pop_ups, 6);
    }

    #[test]
    fn test_only_latest_six_appearances() {
        let mut rows = vec![start(200, 150); 3];
        rows.extend((0..6).map(|_| start(100, 70)));
        let summary = summarize_pitcher(&rows);

        assert_eq!(summary.pitches_per_game, "100.00");
        assert_eq!(summary.strikes_per_game, "70.00");
        assert_eq!(summary.hits, 30);
    }

    #[test]
    fn test_fewer_appearances_average_over_counted_games() {
        let rows = vec![start(90, 55), start(100, 65)];
        let summary = summarize_pitcher(&rows);

        assert_eq!(summary.pitches_per_game, "95.00");
        assert_eq!(summary.strikes_per_game, "60.00");
        assert_eq!(summary.walks, 4);
    }

    #[test]
    fn test_partial_innings_are_summed_as_written() {
        let rows = vec![
            RowRecord::new().with("IP", "5.2"),
            RowRecord::new().with("IP", "0.1"),
        ];
        let summary = summarize_pitcher(&rows);
        assert!((summary.innings_pitched - 5.3).abs() < 1e-9);
    }

    #[test]
    fn test_no_appearances() {
        let summary = summarize_pitcher(&[]);
        assert_eq!(summary.pitches_per_game, "NaN");
        assert_eq!(summary.strikes_per_game, "NaN");
        assert_eq!(summary.innings_pitched, 0.0);
    }

    #[test]
    fn test_blank_cells_count_as_zero() {
        let rows = vec![RowRecord::new().with("pitches", "").with("IP", "")];
        let summary = summarize_pitcher(&rows);
        assert_eq!(summary.pitches_per_game, "0.00");
        assert_eq!(summary.hits, 0);
    }

    #[test]
    fn test_huge_cells_saturate() {
        let rows = vec![
            RowRecord::new().with("batters_faced", "4000000000").with("pitches", "4000000000"),
            RowRecord::new().with("batters_faced", "4000000000").with("pitches", "4000000000"),
        ];
        let summary = summarize_pitcher(&rows);
        assert_eq!(summary.batters_faced, u32::MAX);
        assert_eq!(summary.pitches_per_game, "2147483647.50");
    }
}
