use crate::constants::*;
use std::env;
use time::macros::format_description;
use time::UtcOffset;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origin for the web client. `None` allows any origin.
    pub client_url: Option<String>,
    pub route_cache_enabled: bool,
    pub route_cache_ttl: u64,
    pub route_cache_max_entries: u64,
    /// Offset used for ETA clock times, e.g. "+05:30". `None` uses the host's
    /// local offset.
    pub eta_utc_offset: Option<UtcOffset>,
    pub pricing: PricingConfig,
}

/// Cost model used for fuel and toll estimates.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    /// Exchange rate applied to every USD figure before it is shown
    pub usd_to_inr: f64,

    /// Fuel cost per kilometre, in USD
    pub fuel_price_per_km_usd: f64,

    /// Distance (km) between two toll plazas
    pub toll_interval_km: f64,

    /// Charge per toll plaza, in USD
    pub toll_charge_usd: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            usd_to_inr: DEFAULT_USD_TO_INR,
            fuel_price_per_km_usd: DEFAULT_FUEL_PRICE_PER_KM_USD,
            toll_interval_km: DEFAULT_TOLL_INTERVAL_KM,
            toll_charge_usd: DEFAULT_TOLL_CHARGE_USD,
        }
    }
}

fn positive_f64(var: &str, default: f64) -> Result<f64, String> {
    let value: f64 = env::var(var)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| format!("Invalid {}", var))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{} must be a positive number", var));
    }
    Ok(value)
}

impl PricingConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        Ok(Self {
            usd_to_inr: positive_f64("USD_TO_INR", defaults.usd_to_inr)?,
            fuel_price_per_km_usd: positive_f64(
                "FUEL_PRICE_PER_KM_USD",
                defaults.fuel_price_per_km_usd,
            )?,
            toll_interval_km: positive_f64("TOLL_INTERVAL_KM", defaults.toll_interval_km)?,
            toll_charge_usd: positive_f64("TOLL_CHARGE_USD", defaults.toll_charge_usd)?,
        })
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let route_cache_enabled = match env::var("ROUTE_CACHE_ENABLED") {
            Ok(v) => match v.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err("Invalid ROUTE_CACHE_ENABLED".to_string()),
            },
            Err(_) => true,
        };

        let eta_utc_offset = match env::var("ETA_UTC_OFFSET") {
            Ok(v) => Some(
                UtcOffset::parse(
                    v.trim(),
                    format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
                )
                .map_err(|_| "Invalid ETA_UTC_OFFSET (expected e.g. +05:30)")?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            client_url: env::var("CLIENT_URL").ok().filter(|s| !s.trim().is_empty()),
            route_cache_enabled,
            route_cache_ttl: env::var("ROUTE_CACHE_TTL")
                .unwrap_or_else(|_| DEFAULT_ROUTE_CACHE_TTL_SECONDS.to_string())
                .parse()
                .map_err(|_| "Invalid ROUTE_CACHE_TTL")?,
            route_cache_max_entries: env::var("ROUTE_CACHE_MAX_ENTRIES")
                .unwrap_or_else(|_| DEFAULT_ROUTE_CACHE_MAX_ENTRIES.to_string())
                .parse()
                .map_err(|_| "Invalid ROUTE_CACHE_MAX_ENTRIES")?,
            eta_utc_offset,
            pricing: PricingConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
