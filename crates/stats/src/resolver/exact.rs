//! Exact resolver - looks the display name up verbatim.
//!
//! First in the chain. Works whenever both sources spell the name the same
//! way, which is most of the time.

use crate::errors::StatsError;
use crate::models::IdentifierTable;

use super::traits::{ResolutionSource, ResolvedIdentifier, Resolver};
use super::NOT_FOUND;

pub struct ExactResolver;

impl Resolver for ExactResolver {
    fn resolve(
        &self,
        name: &str,
        table: &IdentifierTable,
    ) -> Option<Result<ResolvedIdentifier, StatsError>> {
        let identifier = table.get(name)?;

        // A listed player without an identifier ends the chain: the prefix
        // scan must not guess a different player for a known name.
        if identifier.is_empty() {
            return Some(Err(StatsError::Resolution(NOT_FOUND.to_string())));
        }

        Some(Ok(ResolvedIdentifier {
            identifier: identifier.clone(),
            source: ResolutionSource::Exact,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_hit() {
        let table: IdentifierTable = [("Joey Votto", "vottojo01")].into_iter().collect();
        let resolved = ExactResolver.resolve("Joey Votto", &table).unwrap().unwrap();
        assert_eq!(resolved.identifier.as_ref(), "vottojo01");
        assert_eq!(resolved.source, ResolutionSource::Exact);
    }

    #[test]
    fn test_exact_miss_passes() {
        let table: IdentifierTable = [("Joey Votto", "vottojo01")].into_iter().collect();
        assert!(ExactResolver.resolve("Tomas Nido", &table).is_none());
    }

    #[test]
    fn test_empty_identifier_stops_chain() {
        let table: IdentifierTable = [("Chris Okey", "")].into_iter().collect();
        let result = ExactResolver.resolve("Chris Okey", &table).unwrap();
        assert!(matches!(result, Err(StatsError::Resolution(_))));
    }
}
