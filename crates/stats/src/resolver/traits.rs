//! Resolution traits for the stats crate.

use crate::errors::StatsError;
use crate::models::{IdentifierTable, SiteIdentifier};

/// Resolution result containing the identifier and how it was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedIdentifier {
    pub identifier: SiteIdentifier,
    pub source: ResolutionSource,
}

/// Indicates how an identifier was resolved.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionSource {
    /// Display name found verbatim in the team table.
    Exact,
    /// Constructed candidate prefix matched an identifier.
    Prefix,
}

/// Individual resolver in the resolution chain.
///
/// Returning `None` means this resolver cannot handle the name and the
/// chain should try the next one. `Some(Err(_))` stops the chain.
pub trait Resolver: Send + Sync {
    fn resolve(
        &self,
        name: &str,
        table: &IdentifierTable,
    ) -> Option<Result<ResolvedIdentifier, StatsError>>;
}
