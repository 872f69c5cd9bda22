//! Plain-text rendering of dashboard views.
//!
//! Every amount is rounded here and nowhere else.

use std::fmt::Write;

use galaxy_core::listings::Fetched;
use galaxy_core::portfolio::snapshot::DailySummary;
use galaxy_core::portfolio::valuation::{PortfolioValuation, PriceSource};
use galaxy_core::portfolio::SaleOutcome;
use galaxy_core::utils::decimal_utils::{format_amount, format_signed_amount, format_signed_percent};
use galaxy_core::Error;
use galaxy_market_data::{
    IpoListing, IpoPage, IpoStatus, MarketDataError, MarketMover, MarketMovers, RetryClass,
    SearchResult,
};

const ABOUT_MAX_CHARS: usize = 300;
const MOVERS_SHOWN: usize = 5;

pub fn render_portfolio(valuation: &PortfolioValuation) -> String {
    let mut out = String::new();

    if valuation.holdings.is_empty() {
        out.push_str("No holdings yet. Add your first stock!\n");
    } else {
        let _ = writeln!(
            out,
            "{:<8} {:<24} {:>6} {:>12} {:>12} {:>14} {:>14} {:>9}",
            "SYMBOL", "NAME", "QTY", "COST", "PRICE", "VALUE", "P/L", "P/L %"
        );
        for row in &valuation.holdings {
            let marker = match row.price_source {
                PriceSource::Live => "",
                PriceSource::CostBasisFallback => "*",
            };
            let _ = writeln!(
                out,
                "{:<8} {:<24} {:>6} {:>12} {:>12} {:>14} {:>14} {:>9}",
                row.symbol,
                truncate(row.company_name.as_deref().unwrap_or("-"), 24),
                row.quantity,
                format_amount(row.cost_basis),
                format!("{}{}", format_amount(row.current_price), marker),
                format_amount(row.market_value),
                format_signed_amount(row.unrealized_profit),
                format_signed_percent(row.unrealized_profit_percent),
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Total value:     {}", format_amount(valuation.total_value));
    let _ = writeln!(out, "Total cost:      {}", format_amount(valuation.total_cost));
    let _ = writeln!(
        out,
        "Total return:    {} ({})",
        format_signed_amount(valuation.total_return),
        format_signed_percent(valuation.total_return_percent)
    );
    let _ = writeln!(
        out,
        "Unrealized P/L:  {}",
        format_signed_amount(valuation.unrealized_profit)
    );
    let _ = writeln!(
        out,
        "Realized P/L:    {}",
        format_signed_amount(valuation.realized_profit)
    );

    if valuation.has_fallback_prices() {
        out.push_str("\n* no live quote, valued at cost basis\n");
    }
    out
}

pub fn render_sale(outcome: &SaleOutcome) -> String {
    let mut out = format!(
        "Sold {} {} at {}: realized {}\n",
        outcome.quantity,
        outcome.symbol,
        format_amount(outcome.sale_price),
        format_signed_amount(outcome.realized_profit)
    );
    if outcome.price_source == PriceSource::CostBasisFallback {
        out.push_str("No live quote was available; the sale was priced at cost basis.\n");
    }
    if outcome.remaining_quantity == 0 {
        let _ = writeln!(out, "Position in {} closed.", outcome.symbol);
    } else {
        let _ = writeln!(out, "{} units remaining.", outcome.remaining_quantity);
    }
    out
}

pub fn render_ipos(fetched: &Fetched<IpoPage>, status: IpoStatus) -> String {
    let mut out = String::new();

    if fetched.payload.is_empty() {
        let _ = writeln!(out, "No {} IPOs found", status);
    } else {
        for ipo in &fetched.payload.ipos {
            out.push_str(&render_ipo(ipo));
            out.push('\n');
        }
    }

    out.push_str(if fetched.from_cache {
        "Loaded from cache (updates every hour)\n"
    } else {
        "Fresh data loaded\n"
    });
    out
}

pub fn render_ipo(ipo: &IpoListing) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} • {})",
        ipo.name,
        ipo.symbol.as_deref().unwrap_or("-"),
        ipo.kind.as_deref().unwrap_or("IPO")
    );
    let _ = writeln!(out, "  Issue size:   {}", or_na(ipo.issue_size.as_deref()));
    let _ = writeln!(out, "  Price range:  {}", or_na(ipo.price_range.as_deref()));
    let _ = writeln!(
        out,
        "  Min amount:   {}",
        ipo.min_amount
            .as_ref()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    );
    let _ = writeln!(
        out,
        "  Issue dates:  {} - {}",
        or_na(ipo.start_date.as_deref()),
        or_na(ipo.end_date.as_deref())
    );
    let _ = writeln!(out, "  Listing date: {}", or_na(ipo.listing_date.as_deref()));
    if let Some(about) = ipo.about.as_deref().filter(|a| !a.trim().is_empty()) {
        let _ = writeln!(out, "  About: {}", truncate(about, ABOUT_MAX_CHARS));
    }
    out
}

pub fn render_movers(fetched: &Fetched<MarketMovers>) -> String {
    let movers = &fetched.payload;
    let mut out = String::new();

    render_mover_list(&mut out, "Top gainers", &movers.top_gainers, "No strong gainers today");
    render_mover_list(&mut out, "Top losers", &movers.top_losers, "No strong losers today");
    render_mover_list(
        &mut out,
        "Most active",
        &movers.most_actively_traded,
        "No trading activity reported",
    );

    if let Some(updated) = &movers.last_updated {
        let _ = writeln!(out, "Last updated: {}", updated);
    }
    if fetched.from_cache {
        out.push_str("Loaded from cache\n");
    }
    out
}

fn render_mover_list(out: &mut String, title: &str, movers: &[MarketMover], empty: &str) {
    let _ = writeln!(out, "{}:", title);
    if movers.is_empty() {
        let _ = writeln!(out, "  {}", empty);
    }
    for m in movers.iter().take(MOVERS_SHOWN) {
        let _ = writeln!(
            out,
            "  {:<8} {:>12} {:>12} {:>10} vol {}",
            m.ticker,
            format_amount(m.price),
            format_signed_amount(m.change_amount),
            m.change_percentage,
            m.volume()
        );
    }
}

pub fn render_summary(summary: &DailySummary) -> String {
    format!(
        "{}\n{}: total {} ({})\n",
        summary.message,
        summary.date,
        format_amount(summary.total_value),
        format_signed_amount(summary.profit_or_loss)
    )
}

pub fn render_search(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No results found\n".to_string();
    }
    let mut out = String::new();
    for r in results {
        let _ = writeln!(out, "{:<10} {:<40} {}", r.symbol, truncate(&r.name, 40), r.asset_type);
    }
    out
}

/// User-facing message for a failed upstream call. Errors worth repeating
/// tell the user to try again; the rest are final.
pub fn render_upstream_error(what: &str, err: &Error) -> String {
    let Error::MarketData(err) = err else {
        return format!("Unable to load {}", what);
    };
    if let MarketDataError::NotConfigured(provider) = err {
        return format!("Unable to load {}: no API key configured for {}", what, provider);
    }
    match err.retry_class() {
        RetryClass::WithBackoff => format!(
            "Unable to load {}: rate limit reached or provider busy, try again later",
            what
        ),
        RetryClass::Transient => format!("Unable to load {}, please try again", what),
        RetryClass::Never => format!("Unable to load {}: {}", what, err),
    }
}

fn or_na(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or("N/A")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use galaxy_core::holdings::Holding;
    use galaxy_core::portfolio::valuation::value_portfolio;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    #[test]
    fn test_portfolio_marks_fallback_rows() {
        let holdings = vec![
            Holding::new("AAPL", 10, dec!(100)).with_company_name("Apple Inc."),
            Holding::new("ACME", 1, dec!(5)),
        ];
        let prices: HashMap<String, _> = [("AAPL".to_string(), dec!(110))].into_iter().collect();
        let text = render_portfolio(&value_portfolio(&holdings, &prices, dec!(450)));

        assert!(text.contains("$5.00*"));
        assert!(text.contains("Realized P/L:    +$450.00"));
        assert!(text.contains("Unrealized P/L:  +$100.00"));
        assert!(text.contains("valued at cost basis"));
    }

    #[test]
    fn test_empty_portfolio() {
        let text = render_portfolio(&value_portfolio(&[], &HashMap::new(), dec!(0)));
        assert!(text.starts_with("No holdings yet"));
        assert!(text.contains("Total value:     $0.00"));
    }

    #[test]
    fn test_sale_rendering() {
        let outcome = SaleOutcome {
            symbol: "AAPL".to_string(),
            quantity: 5,
            sale_price: dec!(90),
            price_source: PriceSource::Live,
            realized_profit: dec!(-50),
            remaining_quantity: 0,
        };
        let text = render_sale(&outcome);
        assert!(text.contains("realized -$50.00"));
        assert!(text.contains("Position in AAPL closed."));
    }

    #[test]
    fn test_empty_ipo_page() {
        let fetched = Fetched::fresh(IpoPage::default());
        let text = render_ipos(&fetched, IpoStatus::Listed);
        assert!(text.contains("No listed IPOs found"));
        assert!(text.contains("Fresh data loaded"));
    }

    #[test]
    fn test_summary_rendering() {
        let summary = DailySummary::new(
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            dec!(1300),
            dec!(-200),
        );
        let text = render_summary(&summary);
        assert!(text.starts_with("Your portfolio incurred a loss today"));
        assert!(text.contains("-$200.00"));
    }

    #[test]
    fn test_upstream_error_messages() {
        let err = Error::MarketData(MarketDataError::RateLimited {
            provider: "ALPHA_VANTAGE".to_string(),
        });
        let text = render_upstream_error("market movers", &err);
        assert!(text.contains("rate limit"));
        assert!(text.contains("try again later"));

        let err = Error::MarketData(MarketDataError::ProviderError {
            provider: "IPO_ALERTS".to_string(),
            message: "Internal server error".to_string(),
        });
        assert_eq!(
            render_upstream_error("IPO data", &err),
            "Unable to load IPO data, please try again"
        );

        let err = Error::MarketData(MarketDataError::NotFound("ACME-IPO".to_string()));
        assert_eq!(
            render_upstream_error("IPO details", &err),
            "Unable to load IPO details: Not found: ACME-IPO"
        );

        let err = Error::MarketData(MarketDataError::NotConfigured("FINNHUB".to_string()));
        assert!(render_upstream_error("quotes", &err).contains("no API key configured for FINNHUB"));

        let err = Error::Unexpected("boom".to_string());
        assert_eq!(render_upstream_error("IPO data", &err), "Unable to load IPO data");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("₹₹₹₹", 2), "₹₹...");
        assert_eq!(truncate("short", 10), "short");
    }
}
