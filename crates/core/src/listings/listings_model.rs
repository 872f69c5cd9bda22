use serde::{Deserialize, Serialize};

/// A payload together with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fetched<T> {
    pub payload: T,
    /// True when served from the cache without contacting the upstream.
    pub from_cache: bool,
}

impl<T> Fetched<T> {
    pub fn cached(payload: T) -> Self {
        Self {
            payload,
            from_cache: true,
        }
    }

    pub fn fresh(payload: T) -> Self {
        Self {
            payload,
            from_cache: false,
        }
    }
}
