//! Search result models for symbol lookup.

use serde::{Deserialize, Serialize};

/// Result from a ticker/symbol search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Symbol/ticker (e.g., "AAPL")
    pub symbol: String,

    /// Display name (e.g., "APPLE INC")
    pub name: String,

    /// Security type (e.g., "Common Stock", "ETP"). Empty when unknown.
    #[serde(default)]
    pub asset_type: String,
}

impl SearchResult {
    /// Create a new search result.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        asset_type: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            asset_type: asset_type.into(),
        }
    }
}
