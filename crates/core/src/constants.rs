/// Store key holding the realized profit mapping (symbol -> amount).
pub const REALIZED_PROFITS_KEY: &str = "realizedProfits";

/// Cache namespace for IPO listings (`ipo_upcoming`, `ipo_listed`, ...).
pub const IPO_CACHE_NAMESPACE: &str = "ipo";

/// Cache namespace for market-wide data such as the daily movers.
pub const MARKET_CACHE_NAMESPACE: &str = "market";

/// Cache category for the top gainers / losers lists.
pub const MARKET_MOVERS_CATEGORY: &str = "movers";

/// Default time-to-live for cached listings, in seconds (one hour).
pub const DEFAULT_CACHE_TTL_SECS: i64 = 60 * 60;

/// Decimal precision for stored cost basis after averaging
pub const COST_BASIS_PRECISION: u32 = 2;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for display percentages
pub const DISPLAY_PERCENT_PRECISION: u32 = 2;
