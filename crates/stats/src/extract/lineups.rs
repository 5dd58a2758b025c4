use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::element_text;
use crate::models::{BattingSide, LineupEntry, Lineups};

lazy_static! {
    static ref GAME_CARDS: Selector =
        Selector::parse(r#".non-fantasy-data a[href*="/mlb/game"]"#).expect("Invalid selector");
    static ref TEAM_LOGOS: Selector =
        Selector::parse(".logo-account-title").expect("Invalid selector");
    static ref LEFT_ROWS: Selector =
        Selector::parse(".table.text-left #lineup-table-top").expect("Invalid selector");
    static ref RIGHT_ROWS: Selector =
        Selector::parse(".table.text-right #lineup-table-top").expect("Invalid selector");
    static ref TEAM_LOGO_SRC: Regex =
        Regex::new(r"/team-logos/(.+)\.png").expect("Invalid regex pattern");
    /// "1 Brandon Nimmo (L) CF"
    static ref LEFT_ROW: Regex =
        Regex::new(r"\d\s+(.+?)\s+\((\w)\)").expect("Invalid regex pattern");
    /// "(L) Brandon Nimmo 1", also with the order still wrapped in escaped
    /// markup: "(L) Brandon Nimmo <b class="order">1"
    static ref RIGHT_ROW: Regex =
        Regex::new(r"\((\w)\)\s+(.+?)\s+(?:<b class[^>]*>)?\d").expect("Invalid regex pattern");
}

/// Team code from a logo image's `src`.
fn team_code(logo: ElementRef<'_>) -> Option<String> {
    let src = logo.value().attr("src")?;
    TEAM_LOGO_SRC
        .captures(src)
        .map(|captures| captures[1].to_string())
}

fn left_entry(text: &str) -> Option<LineupEntry> {
    let captures = LEFT_ROW.captures(text)?;
    Some(LineupEntry {
        name: captures[1].trim().to_string(),
        batting_side: captures[2].parse().ok()?,
    })
}

fn right_entry(text: &str) -> Option<LineupEntry> {
    let captures = RIGHT_ROW.captures(text)?;
    Some(LineupEntry {
        name: captures[2].trim().to_string(),
        batting_side: captures[1].parse::<BattingSide>().ok()?,
    })
}

fn entries(
    card: ElementRef<'_>,
    rows: &Selector,
    parse: fn(&str) -> Option<LineupEntry>,
) -> Vec<LineupEntry> {
    card.select(rows)
        .filter_map(|row| {
            let text = element_text(row);
            let entry = parse(&text);
            if entry.is_none() {
                debug!("Skipping unreadable lineup row '{}'", text);
            }
            entry
        })
        .collect()
}

/// Posted batting orders keyed by team code.
///
/// Each game card names its two teams through the logo images, the away
/// side first. Cards whose logos cannot be read are skipped.
pub(super) fn extract_lineups(page: &str) -> Lineups {
    let document = Html::parse_document(page);
    let mut lineups = Lineups::new();

    for card in document.select(&GAME_CARDS) {
        let mut teams = card.select(&TEAM_LOGOS).filter_map(team_code);
        let (Some(left_team), Some(right_team)) = (teams.next(), teams.next()) else {
            debug!("Skipping game card without two team logos");
            continue;
        };

        lineups.insert(left_team, entries(card, &LEFT_ROWS, left_entry));
        lineups.insert(right_team, entries(card, &RIGHT_ROWS, right_entry));
    }

    lineups
}
