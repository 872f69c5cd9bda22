//! Data models returned by upstream providers.

mod listing;
mod movers;
mod search;

pub use listing::{IpoListing, IpoPage, IpoQuery, IpoStatus, DEFAULT_IPO_PAGE_LIMIT};
pub use movers::{MarketMover, MarketMovers};
pub use search::SearchResult;
