//! TTL caching.
//!
//! Caches are ordinary values passed to whoever needs them; there is no
//! process-wide cache. Expiry reads time from an injected [`Clock`] so tests
//! can drive it with a [`ManualClock`].
//!
//! # Example
//!
//! ```
//! use runetrack::cache::{CacheService, MemoryCache};
//! use std::time::Duration;
//!
//! let mut cache = MemoryCache::new();
//! cache.set("bundle:quests.json", 42, Duration::from_secs(300));
//! assert_eq!(cache.get("bundle:quests.json"), Some(42));
//! ```

pub mod clock;
pub mod duration;
pub mod entry;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use duration::{format_duration, parse_duration};
pub use entry::{CacheEntry, CacheMetadata};
pub use store::{CacheService, MemoryCache};
