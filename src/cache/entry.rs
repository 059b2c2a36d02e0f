//! Cache entry and metadata types.

use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

/// A cached value with its expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub metadata: CacheMetadata,
}

/// When an entry was stored and when it stops being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheMetadata {
    pub cached_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    /// Create an entry stored at `now` that lives for `ttl`.
    ///
    /// TTLs too large to represent saturate to the maximum timestamp.
    pub fn new(value: V, now: DateTime<Utc>, ttl: Duration) -> Self {
        let expires_at = TimeDelta::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            value,
            metadata: CacheMetadata {
                cached_at: now,
                expires_at,
            },
        }
    }

    /// An entry is expired once `now` reaches its expiry time.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.metadata.expires_at
    }

    /// Time left before expiry, zero if already expired.
    pub fn remaining_ttl(&self, now: DateTime<Utc>) -> TimeDelta {
        let remaining = self.metadata.expires_at.signed_duration_since(now);
        remaining.max(TimeDelta::zero())
    }

    /// How long ago the entry was stored.
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now.signed_duration_since(self.metadata.cached_at)
    }
}
