use std::sync::Arc;

use chrono::Duration;
use galaxy_market_data::{
    IpoListing, IpoPage, IpoQuery, IpoStatus, ListingProvider, MarketMovers, MoversProvider,
};
use log::{debug, info};

use super::Fetched;
use crate::cache::TtlCache;
use crate::constants::{IPO_CACHE_NAMESPACE, MARKET_CACHE_NAMESPACE, MARKET_MOVERS_CATEGORY};
use crate::errors::Result;
use crate::store::KeyValueStore;
use crate::utils::Clock;

/// Cache-first access to IPO listings and market movers.
///
/// IPO pages are cached per status (`ipo_upcoming`, `ipo_open`, ...), the
/// movers under `market_movers`. Upstream failures are returned to the caller
/// and leave the cache as it was.
pub struct ListingService {
    listing_provider: Arc<dyn ListingProvider>,
    movers_provider: Arc<dyn MoversProvider>,
    ipo_cache: TtlCache,
    market_cache: TtlCache,
}

impl ListingService {
    pub fn new(
        listing_provider: Arc<dyn ListingProvider>,
        movers_provider: Arc<dyn MoversProvider>,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
    ) -> Self {
        Self {
            listing_provider,
            movers_provider,
            ipo_cache: TtlCache::new(store.clone(), clock.clone(), IPO_CACHE_NAMESPACE, ttl),
            market_cache: TtlCache::new(store, clock, MARKET_CACHE_NAMESPACE, ttl),
        }
    }

    pub async fn load_ipos(&self, status: IpoStatus, force_refresh: bool) -> Result<Fetched<IpoPage>> {
        let category = status.as_str();

        if !force_refresh {
            if let Some(page) = self.ipo_cache.get::<IpoPage>(category) {
                debug!("Serving {} IPOs from cache", category);
                return Ok(Fetched::cached(page));
            }
        }

        let page = self
            .listing_provider
            .ipos(&IpoQuery::for_status(status))
            .await?;
        info!(
            "Fetched {} {} IPOs from {}",
            page.ipos.len(),
            category,
            self.listing_provider.id()
        );

        self.ipo_cache.put(category, &page);
        Ok(Fetched::fresh(page))
    }

    /// Drop the cached page for `status` and fetch it again.
    pub async fn refresh_ipos(&self, status: IpoStatus) -> Result<Fetched<IpoPage>> {
        self.ipo_cache.invalidate(status.as_str());
        self.load_ipos(status, true).await
    }

    /// Details of one listing. Not cached.
    pub async fn ipo_details(&self, identifier: &str) -> Result<IpoListing> {
        Ok(self.listing_provider.ipo_details(identifier).await?)
    }

    pub async fn load_market_movers(&self, force_refresh: bool) -> Result<Fetched<MarketMovers>> {
        if !force_refresh {
            if let Some(movers) = self.market_cache.get::<MarketMovers>(MARKET_MOVERS_CATEGORY) {
                debug!("Serving market movers from cache");
                return Ok(Fetched::cached(movers));
            }
        }

        let movers = self.movers_provider.market_movers().await?;
        info!(
            "Fetched market movers from {} (last updated {})",
            self.movers_provider.id(),
            movers.last_updated.as_deref().unwrap_or("unknown")
        );

        self.market_cache.put(MARKET_MOVERS_CATEGORY, &movers);
        Ok(Fetched::fresh(movers))
    }
}
