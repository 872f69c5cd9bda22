use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A cached payload and the instant it was captured (Unix epoch millis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: T,
    pub timestamp: i64,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T, timestamp: i64) -> Self {
        Self { data, timestamp }
    }

    /// Strict comparison: an entry exactly `ttl` old is expired. A timestamp
    /// too far from `now_millis` to compute an age is never fresh.
    pub fn is_fresh(&self, now_millis: i64, ttl: Duration) -> bool {
        now_millis
            .checked_sub(self.timestamp)
            .is_some_and(|age| age < ttl.num_milliseconds())
    }
}

/// Outcome of a cache lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup<T> {
    Fresh(T),
    /// Present but too old; evicted by the lookup.
    Expired,
    /// Present but unreadable; evicted by the lookup.
    Malformed,
    Missing,
}

impl<T> CacheLookup<T> {
    pub fn into_fresh(self) -> Option<T> {
        match self {
            CacheLookup::Fresh(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self, CacheLookup::Fresh(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freshness_boundary_is_strict() {
        let entry = CacheEntry::new("x", 0);
        let ttl = Duration::seconds(3600);
        assert!(entry.is_fresh(3_599_999, ttl));
        assert!(!entry.is_fresh(3_600_000, ttl));
        assert!(!entry.is_fresh(7_200_000, ttl));
    }

    #[test]
    fn test_out_of_range_timestamp_is_stale() {
        let ttl = Duration::seconds(3600);
        assert!(!CacheEntry::new("x", i64::MIN).is_fresh(86_400_000, ttl));
        assert!(!CacheEntry::new("x", i64::MAX).is_fresh(-1, ttl));
    }

    #[test]
    fn test_entry_wire_shape() {
        let entry = CacheEntry::new(vec![1, 2], 1_700_000_000_000);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"data":[1,2],"timestamp":1700000000000}"#);
    }
}
