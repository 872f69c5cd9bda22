//! Galaxy portfolio dashboard CLI.
//!
//! ```bash
//! galaxy portfolio
//! galaxy buy AAPL 10 150.25 --name "Apple Inc."
//! galaxy sell AAPL 5
//! galaxy ipos --status listed --refresh
//! galaxy movers
//! galaxy summary
//! ```

mod config;
mod main_lib;
mod report;

use clap::{Parser, Subcommand};
use galaxy_core::holdings::Holding;
use galaxy_market_data::IpoStatus;
use rust_decimal::Decimal;

use config::Config;
use main_lib::{build_state, init_tracing, AppState};

#[derive(Parser)]
#[command(name = "galaxy")]
#[command(about = "Portfolio dashboard: holdings, P/L, IPO listings and market movers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Value all holdings at live prices (default)
    Portfolio,

    /// Buy shares; merges into an existing position at the averaged cost
    Buy {
        symbol: String,
        quantity: i64,
        /// Price paid per share
        price: Decimal,
        /// Company name shown in the portfolio
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Sell shares at the live price and record the realized P/L
    Sell { symbol: String, quantity: i64 },

    /// Overwrite the quantity of a holding
    SetQuantity { symbol: String, quantity: i64 },

    /// Delete a holding without recording a sale
    Remove { symbol: String },

    /// Search symbols
    Search { query: String },

    /// IPO listings by status
    Ipos {
        /// upcoming, open, closed or listed (defaults to GALAXY_IPO_STATUS)
        #[arg(short, long)]
        status: Option<IpoStatus>,

        /// Drop the cached page and fetch again
        #[arg(short, long, default_value = "false")]
        refresh: bool,
    },

    /// Details of a single IPO
    Ipo { identifier: String },

    /// Top gainers, losers and most active tickers
    Movers {
        #[arg(short, long, default_value = "false")]
        refresh: bool,
    },

    /// Record today's snapshot and compare with yesterday
    Summary,

    /// Forget all recorded realized profit
    ResetRealized,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();
    let cli = Cli::parse();
    let state = build_state(&config).await?;

    let output = run(cli.command.unwrap_or(Commands::Portfolio), &state, &config).await?;
    print!("{}", output);
    Ok(())
}

async fn run(command: Commands, state: &AppState, config: &Config) -> anyhow::Result<String> {
    let output = match command {
        Commands::Portfolio => {
            let valuation = state.portfolio_service.refresh().await?;
            report::render_portfolio(&valuation)
        }
        Commands::Buy {
            symbol,
            quantity,
            price,
            name,
        } => {
            // Symbols are case-sensitive and stored exactly as typed
            let mut holding = Holding::new(symbol, quantity, price);
            if let Some(name) = name {
                holding = holding.with_company_name(name);
            }
            let saved = state.holdings_service.add_or_update_holding(holding).await?;
            format!(
                "Holding {}: {} units at {} average cost\n",
                saved.symbol,
                saved.quantity,
                galaxy_core::utils::decimal_utils::format_amount(saved.cost_basis)
            )
        }
        Commands::Sell { symbol, quantity } => {
            let outcome = state.portfolio_service.sell(&symbol, quantity).await?;
            report::render_sale(&outcome)
        }
        Commands::SetQuantity { symbol, quantity } => {
            let saved = state.holdings_service.update_quantity(&symbol, quantity).await?;
            format!("Holding {}: {} units\n", saved.symbol, saved.quantity)
        }
        Commands::Remove { symbol } => {
            state.holdings_service.remove_holding(&symbol).await?;
            format!("Removed {}\n", symbol)
        }
        Commands::Search { query } => match state.quote_service.search_symbols(&query).await {
            Ok(results) => report::render_search(&results),
            Err(e) => {
                tracing::warn!("Search for '{}' failed: {}", query, e);
                "Search failed. Please try again.\n".to_string()
            }
        },
        Commands::Ipos { status, refresh } => {
            let status = status.unwrap_or(config.ipo_status);
            let result = if refresh {
                state.listing_service.refresh_ipos(status).await
            } else {
                state
                    .listing_service
                    .load_ipos(status, config.force_refresh)
                    .await
            };
            match result {
                Ok(fetched) => report::render_ipos(&fetched, status),
                Err(e) => {
                    tracing::error!("IPO load error: {}", e);
                    format!("{}\n", report::render_upstream_error("IPO data", &e))
                }
            }
        }
        Commands::Ipo { identifier } => match state.listing_service.ipo_details(&identifier).await {
            Ok(ipo) => report::render_ipo(&ipo),
            Err(e) => {
                tracing::error!("IPO details error for {}: {}", identifier, e);
                format!("{}\n", report::render_upstream_error("IPO details", &e))
            }
        },
        Commands::Movers { refresh } => {
            match state
                .listing_service
                .load_market_movers(refresh || config.force_refresh)
                .await
            {
                Ok(fetched) => report::render_movers(&fetched),
                Err(e) => {
                    tracing::error!("Market data error: {}", e);
                    format!("{}\n", report::render_upstream_error("market movers", &e))
                }
            }
        }
        Commands::Summary => {
            let summary = state
                .snapshot_service
                .generate_daily_summary(state.clock.today())
                .await?;
            report::render_summary(&summary)
        }
        Commands::ResetRealized => {
            state.ledger.reset();
            "Realized profit cleared\n".to_string()
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    async fn temp_state() -> (AppState, Config, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("galaxy.db").to_string_lossy().into_owned();
        let config = Config::from_lookup(|key| (key == "GALAXY_DB_PATH").then(|| db_path.clone()));
        let state = build_state(&config).await.unwrap();
        (state, config, dir)
    }

    #[tokio::test]
    async fn test_symbol_is_kept_as_typed_across_commands() {
        let (state, config, _dir) = temp_state().await;

        let buy = Commands::Buy {
            symbol: "aapl".to_string(),
            quantity: 2,
            price: dec!(10),
            name: None,
        };
        let out = run(buy, &state, &config).await.unwrap();
        assert!(out.starts_with("Holding aapl: 2 units"));

        // No API key is configured, so the sale is priced at cost basis
        let sell = Commands::Sell {
            symbol: "aapl".to_string(),
            quantity: 1,
        };
        let out = run(sell, &state, &config).await.unwrap();
        assert!(out.starts_with("Sold 1 aapl"));
        assert_eq!(state.holdings_service.get_holding("aapl").unwrap().quantity, 1);
        assert!(state.holdings_service.get_holding("AAPL").is_err());

        let remove = Commands::Remove {
            symbol: "aapl".to_string(),
        };
        run(remove, &state, &config).await.unwrap();
        assert!(state.holdings_service.get_holdings().unwrap().is_empty());
    }
}
