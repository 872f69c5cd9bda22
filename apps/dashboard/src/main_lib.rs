use std::sync::Arc;

use galaxy_core::{
    holdings::{HoldingsService, HoldingsServiceTrait},
    ledger::RealizedProfitLedger,
    listings::ListingService,
    portfolio::snapshot::{SnapshotService, SnapshotServiceTrait},
    portfolio::PortfolioService,
    quotes::{QuoteService, QuoteServiceTrait},
    store::KeyValueStore,
    utils::{Clock, SystemClock},
};
use galaxy_market_data::{AlphaVantageProvider, FinnhubProvider, IpoAlertsProvider};
use galaxy_storage_sqlite::{
    create_pool, init, run_migrations, spawn_writer, HoldingsRepository, SnapshotRepository,
    SqliteKeyValueStore,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub holdings_service: Arc<dyn HoldingsServiceTrait>,
    pub quote_service: Arc<dyn QuoteServiceTrait>,
    pub portfolio_service: Arc<PortfolioService>,
    pub snapshot_service: Arc<dyn SnapshotServiceTrait>,
    pub listing_service: Arc<ListingService>,
    pub ledger: Arc<RealizedProfitLedger>,
}

/// Logs go to stderr in both formats; stdout carries the command output.
pub fn init_tracing() {
    let log_format = std::env::var("GALAXY_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let db_path = init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = create_pool(&db_path)?;
    run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    let store: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::new(pool.clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let holdings_repository = Arc::new(HoldingsRepository::new(pool.clone(), writer.clone()));
    let holdings_service: Arc<dyn HoldingsServiceTrait> =
        Arc::new(HoldingsService::new(holdings_repository));

    let quote_provider = Arc::new(FinnhubProvider::new(config.finnhub_api_key.clone()));
    let quote_service: Arc<dyn QuoteServiceTrait> = Arc::new(QuoteService::new(quote_provider));

    let ledger = Arc::new(RealizedProfitLedger::new(store.clone()));
    let portfolio_service = Arc::new(PortfolioService::new(
        holdings_service.clone(),
        quote_service.clone(),
        ledger.clone(),
    ));

    let snapshot_repository = Arc::new(SnapshotRepository::new(pool.clone(), writer));
    let snapshot_service: Arc<dyn SnapshotServiceTrait> = Arc::new(SnapshotService::new(
        holdings_service.clone(),
        snapshot_repository,
    ));

    let listing_service = Arc::new(ListingService::new(
        Arc::new(IpoAlertsProvider::new(config.ipo_alerts_api_key.clone())),
        Arc::new(AlphaVantageProvider::new(
            config.alpha_vantage_api_key.clone(),
        )),
        store,
        clock.clone(),
        config.cache_ttl,
    ));

    Ok(AppState {
        clock,
        holdings_service,
        quote_service,
        portfolio_service,
        snapshot_service,
        listing_service,
        ledger,
    })
}
