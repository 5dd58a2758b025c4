use std::sync::Arc;

/// Team code as used in page URLs (e.g. "NYM", "CIN")
pub type TeamCode = Arc<str>;

/// Site-specific player identifier (e.g. "vottojo01")
pub type SiteIdentifier = Arc<str>;
