use lazy_static::lazy_static;
use log::debug;
use scraper::{Html, Selector};

use super::{element_text, GamelogScheme};
use crate::models::RowRecord;

lazy_static! {
    static ref BATTING_ROWS: Selector =
        Selector::parse("#batting_gamelogs tbody > tr[id^=batting_gamelogs]")
            .expect("Invalid selector");
    static ref PITCHING_ROWS: Selector =
        Selector::parse("#pitching_gamelogs tbody > tr[id^=pitching_gamelogs]")
            .expect("Invalid selector");
    static ref STAT_CELLS: Selector = Selector::parse("td[data-stat]").expect("Invalid selector");
}

fn row_selector(scheme: GamelogScheme) -> &'static Selector {
    match scheme {
        GamelogScheme::Batting => &BATTING_ROWS,
        GamelogScheme::Pitching => &PITCHING_ROWS,
    }
}

/// One [`RowRecord`] per game row, keyed by each cell's `data-stat`.
///
/// Repeated header rows and subtotal rows have no row id and are skipped by
/// the selector.
pub(super) fn extract_rows(page: &str, scheme: GamelogScheme) -> Vec<RowRecord> {
    let document = Html::parse_document(page);

    let rows: Vec<RowRecord> = document
        .select(row_selector(scheme))
        .map(|row| {
            row.select(&STAT_CELLS)
                .filter_map(|cell| {
                    let field = cell.value().attr("data-stat")?;
                    Some((field.to_string(), element_text(cell)))
                })
                .collect()
        })
        .collect();

    debug!("Extracted {} {} rows", rows.len(), scheme.table_id());
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATTING_PAGE: &str = r#"
        <html><body>
        <table id="batting_gamelogs">
          <thead><tr><th>Rk</th><th>Date</th></tr></thead>
          <tbody>
            <tr id="batting_gamelogs.1">
              <th data-stat="ranker">1</th>
              <td data-stat="date_game">Mar 28</td>
              <td data-stat="PA">4</td><td data-stat="AB">4</td>
              <td data-stat="H">2</td><td data-stat="BB">0</td><td data-stat="SO">1</td>
            </tr>
            <tr class="thead"><th>Rk</th></tr>
            <tr id="batting_gamelogs.2">
              <th data-stat="ranker">2</th>
              <td data-stat="date_game">Mar 30</td>
              <td data-stat="PA"> 5 </td><td data-stat="AB">3</td>
              <td data-stat="H"></td><td data-stat="BB">2</td><td data-stat="SO">0</td>
            </tr>
          </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_extracts_batting_rows_in_page_order() {
        let rows = extract_rows(BATTING_PAGE, GamelogScheme::Batting);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text("date_game"), Some("Mar 28"));
        assert_eq!(rows[0].count("H"), 2);
        assert_eq!(rows[1].count("PA"), 5);
        assert_eq!(rows[1].count("H"), 0);
        assert_eq!(rows[1].text("H"), Some(""));
    }

    #[test]
    fn test_header_cells_are_not_fields() {
        let rows = extract_rows(BATTING_PAGE, GamelogScheme::Batting);
        assert_eq!(rows[0].text("ranker"), None);
    }

    #[test]
    fn test_wrong_scheme_finds_nothing() {
        assert!(extract_rows(BATTING_PAGE, GamelogScheme::Pitching).is_empty());
    }

    #[test]
    fn test_pitching_rows() {
        let page = r#"
            <table id="pitching_gamelogs"><tbody>
              <tr id="pitching_gamelogs.1">
                <td data-stat="IP">6.1</td><td data-stat="pitches">97</td>
                <td data-stat="strikes_total">64</td>
              </tr>
            </tbody></table>
        "#;
        let rows = extract_rows(page, GamelogScheme::Pitching);

        assert_eq!(rows.len(), 1);
        assert!((rows[0].number("IP") - 6.1).abs() < 1e-9);
        assert_eq!(rows[0].count("pitches"), 97);
    }

    #[test]
    fn test_missing_table() {
        assert!(extract_rows("<html><body>Not found</body></html>", GamelogScheme::Batting).is_empty());
    }
}
