use std::sync::Arc;

use serde::{Serialize, Serializer};

use super::types::SiteIdentifier;

/// Display name to site identifier mapping for one team.
///
/// Entries keep the order in which they were inserted, which makes the
/// prefix fallback scan deterministic. A display name appears at most once;
/// inserting an existing name replaces its identifier in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentifierTable {
    entries: Vec<(String, SiteIdentifier)>,
}

impl IdentifierTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, identifier: &str) {
        let name = name.into();
        let identifier: SiteIdentifier = Arc::from(identifier);
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = identifier,
            None => self.entries.push((name, identifier)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SiteIdentifier> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, id)| id)
    }

    /// Identifiers in insertion order.
    pub fn identifiers(&self) -> impl Iterator<Item = &SiteIdentifier> {
        self.entries.iter().map(|(_, id)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SiteIdentifier)> {
        self.entries.iter().map(|(n, id)| (n.as_str(), id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, I: AsRef<str>> FromIterator<(N, I)> for IdentifierTable {
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (name, identifier) in iter {
            table.insert(name, identifier.as_ref());
        }
        table
    }
}

impl Serialize for IdentifierTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(n, id)| (n, id.as_ref())))
    }
}
