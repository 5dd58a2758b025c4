use lazy_static::lazy_static;
use log::debug;
use scraper::{ElementRef, Html, Selector};

use super::element_text;
use crate::models::IdentifierTable;

/// Rows read from each roster table.
const PLAYERS_PER_TABLE: usize = 16;

lazy_static! {
    /// Bold player cells mark players on the active roster.
    static ref ROSTER_TABLES: [Selector; 2] = [
        Selector::parse(r#"#team_batting tbody > tr:not(.thead) td[data-stat="player"] > strong"#)
            .expect("Invalid selector"),
        Selector::parse(r#"#team_pitching tbody > tr:not(.thead) td[data-stat="player"] > strong"#)
            .expect("Invalid selector"),
    ];
    static ref PLAYER_LINK: Selector = Selector::parse("a").expect("Invalid selector");
}

/// Name to identifier table of a team roster page.
///
/// Batting rows come first, then pitching rows. A player listed in both
/// tables keeps a single entry. The identifier is the player cell's
/// `data-append-csv` attribute, empty when the attribute is missing.
pub(super) fn extract_identifiers(page: &str) -> IdentifierTable {
    let document = Html::parse_document(page);
    let mut table = IdentifierTable::new();

    for selector in ROSTER_TABLES.iter() {
        for strong in document.select(selector).take(PLAYERS_PER_TABLE) {
            let name = strong
                .select(&PLAYER_LINK)
                .next()
                .map(element_text)
                .unwrap_or_default();
            let identifier = strong
                .parent()
                .and_then(ElementRef::wrap)
                .and_then(|cell| cell.value().attr("data-append-csv"))
                .unwrap_or_default();
            table.insert(name, identifier.trim());
        }
    }

    debug!("Extracted {} roster identifiers", table.len());
    table
}
