//! Resolver chain - tries resolvers in order until one answers.

use crate::errors::StatsError;
use crate::models::IdentifierTable;

use super::exact::ExactResolver;
use super::prefix::PrefixResolver;
use super::traits::{ResolvedIdentifier, Resolver};
use super::NOT_FOUND;

/// Composite resolver for player identifiers.
///
/// Default order:
/// 1. ExactResolver (display name lookup)
/// 2. PrefixResolver (constructed stem, always last)
pub struct ResolverChain {
    resolvers: Vec<Box<dyn Resolver>>,
    prefix_resolver: PrefixResolver,
}

impl ResolverChain {
    pub fn new() -> Self {
        Self {
            resolvers: vec![Box::new(ExactResolver)],
            prefix_resolver: PrefixResolver,
        }
    }

    /// Add a custom resolver. It runs before the prefix resolver.
    pub fn add_resolver(&mut self, resolver: Box<dyn Resolver>) {
        self.resolvers.push(resolver);
    }

    /// Resolve `name` against a team table.
    ///
    /// Without a table there is nothing to scan, so resolution fails
    /// immediately.
    pub fn resolve(
        &self,
        name: &str,
        table: Option<&IdentifierTable>,
    ) -> Result<ResolvedIdentifier, StatsError> {
        let table = table.ok_or_else(|| StatsError::Resolution(NOT_FOUND.to_string()))?;

        for resolver in &self.resolvers {
            if let Some(result) = resolver.resolve(name, table) {
                return result;
            }
        }

        if let Some(result) = self.prefix_resolver.resolve(name, table) {
            return result;
        }

        Err(StatsError::Resolution(NOT_FOUND.to_string()))
    }
}

impl Default for ResolverChain {
    fn default() -> Self {
        Self::new()
    }
}
