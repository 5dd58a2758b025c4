//! Prefix resolver - rebuilds the identifier stem from the display name.
//!
//! The reference site spells names with accents ("Tomás Nido") while the
//! lineup site does not ("Tomas Nido"), so exact lookups miss. Identifiers
//! mostly follow `first 5 of family name + first 2 of given name + NN`:
//!
//! ```text
//! Joey Votto   -> vottojo01
//! Chris Okey   -> okeych01
//! Tommy Pham   -> phamth01   (does not follow the rule)
//! ```
//!
//! The stem is matched as a prefix against every identifier in the team
//! table. This can miss (Pham) and can pick the wrong player when two share
//! a stem; the first identifier in table order wins.

use crate::errors::StatsError;
use crate::models::IdentifierTable;

use super::traits::{ResolutionSource, ResolvedIdentifier, Resolver};

const FAMILY_LEN: usize = 5;
const GIVEN_LEN: usize = 2;

pub struct PrefixResolver;

fn strip_punctuation(token: &str) -> String {
    token
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | ',' | '\'') && !c.is_whitespace())
        .collect()
}

/// Build the identifier stem for a display name.
///
/// The first whitespace-separated token is the given name, everything after
/// it is the family name.
///
/// ```
/// use dugout_stats::resolver::candidate_prefix;
///
/// assert_eq!(candidate_prefix("Joey Votto"), "vottojo");
/// assert_eq!(candidate_prefix("Tomas Nido"), "nidoto");
/// ```
pub fn candidate_prefix(name: &str) -> String {
    let mut tokens = name.split_whitespace();
    let given = tokens.next().map(strip_punctuation).unwrap_or_default();
    let family = strip_punctuation(&tokens.collect::<Vec<_>>().join(" "));

    family
        .chars()
        .take(FAMILY_LEN)
        .chain(given.chars().take(GIVEN_LEN))
        .collect::<String>()
        .to_lowercase()
}

impl Resolver for PrefixResolver {
    fn resolve(
        &self,
        name: &str,
        table: &IdentifierTable,
    ) -> Option<Result<ResolvedIdentifier, StatsError>> {
        let candidate = candidate_prefix(name);
        if candidate.is_empty() {
            return None;
        }
        log::debug!("Prefix resolver: candidate '{}' for '{}'", candidate, name);

        table
            .identifiers()
            .find(|id| !id.is_empty() && id.starts_with(candidate.as_str()))
            .map(|id| {
                Ok(ResolvedIdentifier {
                    identifier: id.clone(),
                    source: ResolutionSource::Prefix,
                })
            })
    }
}
