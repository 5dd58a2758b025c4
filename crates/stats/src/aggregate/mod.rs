//! Windowed reductions over gamelog rows.
//!
//! Both variants take a date-ascending slice of [`RowRecord`](crate::models::RowRecord)s
//! (most recent game last) and look only at the newest rows:
//!
//! | Variant | Window | Output |
//! |---------|--------|--------|
//! | [`summarize_batter`] | 31 games | sums, hit streaks, AVG |
//! | [`summarize_pitcher`] | 6 appearances | sums, pitches/strikes per game |
//!
//! Windows are clamped to the rows available; nothing is padded.

mod batter;
mod pitcher;

pub use batter::{summarize_batter, BATTER_WINDOW};
pub use pitcher::{summarize_pitcher, PITCHER_WINDOW};

/// Format `numerator / denominator` with a fixed number of decimals.
///
/// Exact halves round away from zero. A zero denominator yields "NaN".
pub(crate) fn fixed_ratio(numerator: f64, denominator: f64, decimals: u32) -> String {
    if denominator == 0.0 {
        return "NaN".to_string();
    }
    let scale = 10f64.powi(decimals as i32);
    let rounded = (numerator / denominator * scale).round() / scale;
    format!("{:.*}", decimals as usize, rounded)
}
