//! Cache Entry Module
//!
//! Defines a single cached post with its expiry deadline.

use std::time::{Duration, Instant};

/// Longest lifetime an entry can get (about a century). Larger TTLs are
/// clamped so the deadline stays representable as an `Instant`.
pub const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

// == Cache Entry ==
/// A stored post body together with its deadline.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored post text
    pub value: String,
    /// Instant at which the entry stops being live
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry that expires `ttl` from now, capped at [`MAX_TTL`].
    pub fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl.min(MAX_TTL),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its deadline, so an
    /// entry written at T with a TTL of `ttl` is gone at exactly T + ttl.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Same as [`is_expired`](Self::is_expired) against a caller-supplied instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
