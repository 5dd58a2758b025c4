use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::errors::StatsError;
use crate::models::{MatchupLine, MatchupRecord, Matchups};

pub(crate) const BLOB_MISSING: &str = "Unable to find players array.";
pub(crate) const BLOB_MALFORMED: &str = "Failed to parse players array.";

lazy_static! {
    /// The matchup page embeds its data as `this.playerArray = [...];` on one line.
    static ref PLAYER_ARRAY: Regex =
        Regex::new(r"this\.playerArray = (\[.+\]);\n").expect("Invalid regex pattern");
}

/// Matchup lines keyed by batter name. A batter listed twice keeps the last
/// line; records without a batter are skipped.
pub(super) fn extract_matchups(page: &str) -> Result<Matchups, StatsError> {
    let blob = PLAYER_ARRAY
        .captures(page)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| StatsError::Extraction(BLOB_MISSING.to_string()))?;

    let records: Vec<MatchupRecord> = serde_json::from_str(blob.as_str()).map_err(|e| {
        warn!("Matchup blob did not decode: {}", e);
        StatsError::Parse(BLOB_MALFORMED.to_string())
    })?;

    debug!("Decoded {} matchup records", records.len());
    Ok(records
        .into_iter()
        .filter_map(|mut record| match record.batter.take() {
            Some(batter) => Some((batter, MatchupLine::from(record))),
            None => {
                debug!("Skipping matchup record without a batter");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page_with(blob: &str) -> String {
        format!(
            "<html><script>\nvar app = {{}};\n    this.playerArray = {};\n    this.loaded = true;\n</script></html>",
            blob
        )
    }

    #[test]
    fn test_decodes_player_array() {
        let page = page_with(
            r#"[{"batter":"Pete Alonso","batter_team":"NYM","pitcher":"Max Fried","pitcher_team":"ATL","pa":12,"ab":11,"h":3,"bb":1,"batting_avg":".273"}]"#,
        );
        let matchups = extract_matchups(&page).unwrap();

        let line = &matchups["Pete Alonso"];
        assert_eq!(line.pitcher, json!("Max Fried"));
        assert_eq!(line.at_bats, json!(11));
        assert_eq!(line.average, json!(".273"));
    }

    #[test]
    fn test_serializes_with_display_names() {
        let page = page_with(r#"[{"batter":"A","pa":"2","batting_avg":"0.500"}]"#);
        let matchups = extract_matchups(&page).unwrap();
        let value = serde_json::to_value(&matchups).unwrap();

        assert_eq!(value["A"]["PA"], json!("2"));
        assert_eq!(value["A"]["AVG"], json!("0.500"));
        assert_eq!(value["A"]["Pitcher Team"], json!(null));
    }

    #[test]
    fn test_records_without_batter_are_skipped() {
        let page = page_with(
            r#"[{"batter":null,"pitcher":"Max Fried"},{"pitcher":"Chris Sale"},{"batter":"Pete Alonso","ab":11}]"#,
        );
        let matchups = extract_matchups(&page).unwrap();

        assert_eq!(matchups.len(), 1);
        assert_eq!(matchups["Pete Alonso"].at_bats, json!(11));
    }

    #[test]
    fn test_missing_blob_is_extraction_error() {
        let err = extract_matchups("<html><body>maintenance</body></html>").unwrap_err();
        assert_eq!(err, StatsError::Extraction(BLOB_MISSING.to_string()));
    }

    #[test]
    fn test_malformed_blob_is_parse_error() {
        let err = extract_matchups(&page_with(r#"[{"batter": "A",]"#)).unwrap_err();
        assert_eq!(err, StatsError::Parse(BLOB_MALFORMED.to_string()));
    }
}
