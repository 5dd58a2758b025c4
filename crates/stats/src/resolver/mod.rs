//! Player identifier resolution.
//!
//! Converts a display name plus the team's identifier table into the
//! reference site's player identifier.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    ResolverChain                      │
//! │                                                       │
//! │  1. ExactResolver   display name lookup               │
//! │           │ miss                                      │
//! │           ▼                                           │
//! │  2. PrefixResolver  family[0..5] + given[0..2] stem   │
//! │                     matched against identifiers       │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! A missing table, an empty exact entry or an unmatched stem all resolve
//! to [`StatsError::Resolution`](crate::errors::StatsError::Resolution).

mod chain;
mod exact;
mod prefix;
mod traits;

pub use chain::ResolverChain;
pub use exact::ExactResolver;
pub use prefix::{candidate_prefix, PrefixResolver};
pub use traits::{ResolutionSource, ResolvedIdentifier, Resolver};

pub(crate) const NOT_FOUND: &str = "Baseball Reference Key not found.";
