//! IPO listing models.
//!
//! Listings are treated as mostly opaque payloads: the fields the dashboard
//! renders are typed, everything else the upstream sends is kept in `extra`
//! so a cached page serializes back exactly as it was received.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The IPO Alerts free plan returns a single listing per page.
pub const DEFAULT_IPO_PAGE_LIMIT: u32 = 1;

/// Lifecycle stage used to group IPO listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpoStatus {
    #[default]
    Upcoming,
    Open,
    Closed,
    Listed,
}

impl IpoStatus {
    pub const ALL: [IpoStatus; 4] = [
        IpoStatus::Upcoming,
        IpoStatus::Open,
        IpoStatus::Closed,
        IpoStatus::Listed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IpoStatus::Upcoming => "upcoming",
            IpoStatus::Open => "open",
            IpoStatus::Closed => "closed",
            IpoStatus::Listed => "listed",
        }
    }
}

impl fmt::Display for IpoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IpoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(IpoStatus::Upcoming),
            "open" => Ok(IpoStatus::Open),
            "closed" => Ok(IpoStatus::Closed),
            "listed" => Ok(IpoStatus::Listed),
            other => Err(format!("Unknown IPO status: {}", other)),
        }
    }
}

/// Query parameters for the IPO listing endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IpoQuery {
    pub status: Option<IpoStatus>,
    /// Offering type filter (e.g. "EQ", "SME"); passed through verbatim.
    pub kind: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl IpoQuery {
    pub fn for_status(status: IpoStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Default for IpoQuery {
    fn default() -> Self {
        Self {
            status: None,
            kind: None,
            page: 1,
            limit: DEFAULT_IPO_PAGE_LIMIT,
        }
    }
}

/// A single IPO listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpoListing {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub issue_size: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub min_amount: Option<serde_json::Number>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub listing_date: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One page of IPO listings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IpoPage {
    #[serde(default)]
    pub ipos: Vec<IpoListing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl IpoPage {
    pub fn is_empty(&self) -> bool {
        self.ipos.is_empty()
    }
}
