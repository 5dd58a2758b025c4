use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

use super::element_text;
use crate::models::{LeaderBoard, LeaderEntry};

lazy_static! {
    static ref AVERAGE_LEADERS: Selector = who_cells(LeaderBoard::BattingAverage);
    static ref HITS_LEADERS: Selector = who_cells(LeaderBoard::Hits);
    static ref TITLED_LINK: Selector = Selector::parse("a[title]").expect("Invalid selector");
    static ref TEAM: Selector = Selector::parse("span").expect("Invalid selector");
}

fn who_cells(board: LeaderBoard) -> Selector {
    Selector::parse(&format!("#{} .who", board.element_id())).expect("Invalid selector")
}

fn board_selector(board: LeaderBoard) -> &'static Selector {
    match board {
        LeaderBoard::BattingAverage => &AVERAGE_LEADERS,
        LeaderBoard::Hits => &HITS_LEADERS,
    }
}

/// Rows of one leaderboard, in page order.
///
/// The player name comes from the link title, the team from the `span` in
/// the same cell and the value from the next cell. Rows without a titled
/// link are skipped.
pub(super) fn extract_leaders(page: &str, board: LeaderBoard) -> Vec<LeaderEntry> {
    let document = Html::parse_document(page);

    document
        .select(board_selector(board))
        .filter_map(|who| {
            let name = who
                .select(&TITLED_LINK)
                .next()?
                .value()
                .attr("title")?
                .trim()
                .to_string();
            let team = who.select(&TEAM).next().map(element_text).unwrap_or_default();
            let value = who
                .next_siblings()
                .find_map(ElementRef::wrap)
                .map(element_text)
                .unwrap_or_default();
            Some(LeaderEntry { name, team, value })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEADERS_PAGE: &str = r#"
        <html><body>
        <div id="leaderboard_batting_batting_avg"><table>
          <tr><td class="rank">1.</td>
              <td class="who"><a title="Luis Arraez" href="/players/a/arraelu01.shtml">Luis Arraez</a> <span>MIA</span></td>
              <td class="value">.354</td></tr>
          <tr><td class="rank">2.</td>
              <td class="who"><a title="Ronald Acuna Jr." href="/players/a/acunaro01.shtml">Ronald Acuna</a> <span>ATL</span></td>
              <td class="value">.337</td></tr>
        </table></div>
        <div id="leaderboard_batting_H"><table>
          <tr><td class="rank">1.</td>
              <td class="who"><a title="Ronald Acuna Jr." href="/players/a/acunaro01.shtml">Ronald Acuna</a> <span>ATL</span></td>
              <td class="value">217</td></tr>
        </table></div>
        </body></html>
    "#;

    #[test]
    fn test_average_board() {
        let leaders = extract_leaders(LEADERS_PAGE, LeaderBoard::BattingAverage);

        assert_eq!(
            leaders,
            vec![
                LeaderEntry {
                    name: "Luis Arraez".into(),
                    team: "MIA".into(),
                    value: ".354".into(),
                },
                LeaderEntry {
                    name: "Ronald Acuna Jr.".into(),
                    team: "ATL".into(),
                    value: ".337".into(),
                },
            ]
        );
    }

    #[test]
    fn test_hits_board_is_separate() {
        let leaders = extract_leaders(LEADERS_PAGE, LeaderBoard::Hits);
        assert_eq!(leaders.len(), 1);
        assert_eq!(leaders[0].value, "217");
    }

    #[test]
    fn test_untitled_rows_are_skipped() {
        let page = r#"<div id="leaderboard_batting_H"><table><tr>
            <td class="who"><a href="/x">Nobody</a></td><td>1</td>
        </tr></table></div>"#;
        assert!(extract_leaders(page, LeaderBoard::Hits).is_empty());
    }
}
