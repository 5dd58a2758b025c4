//! Daily cache module.
//!
//! - [`DailyCache`]: write-once store partitioned by calendar date
//! - [`Clock`]: injected date source ([`SystemClock`], [`ManualClock`])
//! - [`CachedValue`]: the payloads the stats service caches

mod clock;
mod daily;
mod value;

pub use clock::{Clock, ManualClock, SystemClock};
pub use daily::DailyCache;
pub use value::{keys, CachedValue};
