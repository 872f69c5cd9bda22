use chrono::Duration;
use galaxy_core::constants::DEFAULT_CACHE_TTL_SECS;
use galaxy_market_data::IpoStatus;

const DEFAULT_DB_PATH: &str = "./db/galaxy.db";
const DEFAULT_ALPHA_VANTAGE_KEY: &str = "demo";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: String,
    pub cache_ttl: Duration,
    pub ipo_status: IpoStatus,
    pub force_refresh: bool,
    pub finnhub_api_key: String,
    pub ipo_alerts_api_key: String,
    pub alpha_vantage_api_key: String,
}

impl Config {
    /// Read the configuration from the process environment (after `.env`).
    pub fn from_env() -> Self {
        // A missing .env file is normal
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Unparseable values fall
    /// back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let cache_ttl = get("GALAXY_CACHE_TTL_SECS")
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|secs| *secs > 0)
            .and_then(Duration::try_seconds)
            .unwrap_or_else(|| Duration::seconds(DEFAULT_CACHE_TTL_SECS));

        let ipo_status = get("GALAXY_IPO_STATUS")
            .and_then(|v| v.parse::<IpoStatus>().ok())
            .unwrap_or_default();

        let force_refresh = get("GALAXY_FORCE_REFRESH")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            db_path: get("GALAXY_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            cache_ttl,
            ipo_status,
            force_refresh,
            finnhub_api_key: get("FINNHUB_API_KEY").unwrap_or_default(),
            ipo_alerts_api_key: get("IPO_ALERTS_API_KEY").unwrap_or_default(),
            alpha_vantage_api_key: get("ALPHA_VANTAGE_API_KEY")
                .unwrap_or_else(|| DEFAULT_ALPHA_VANTAGE_KEY.to_string()),
        }
    }
}
