use anyhow::{bail, Context, Result};

use crate::pricing::RateConfig;

const DEFAULT_PORT: &str = "8080";
const DEFAULT_EXCHANGE_RATE: f64 = 0.9;
const DEFAULT_TAX_RATE: f64 = 0.11;
const DEFAULT_SERVICE_FEE_RATE: f64 = 0.03;

/// Application configuration loaded from environment variables.
/// Every key is optional; the demo runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw `PORT`; only `serve` needs it, so it is parsed there.
    pub port: String,
    pub rust_log: String,
    /// Fallback rate, also used directly when no rate URL is configured.
    pub exchange_rate: f64,
    pub exchange_rate_url: Option<String>,
    pub tax_rate: f64,
    pub service_fee_rate: f64,
    pub anthropic_api_key: Option<String>,
    /// Overrides the Messages API endpoint, e.g. for a proxy.
    pub anthropic_api_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: optional_env("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            exchange_rate: rate_env("EXCHANGE_RATE", DEFAULT_EXCHANGE_RATE)?,
            exchange_rate_url: optional_env("EXCHANGE_RATE_URL"),
            tax_rate: rate_env("TAX_RATE", DEFAULT_TAX_RATE)?,
            service_fee_rate: rate_env("SERVICE_FEE_RATE", DEFAULT_SERVICE_FEE_RATE)?,
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            anthropic_api_url: optional_env("ANTHROPIC_API_URL"),
        })
    }

    pub fn listen_port(&self) -> Result<u16> {
        self.port
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got '{}'", self.port))
    }

    /// The rate set handed to the price calculator.
    pub fn rates(&self) -> RateConfig {
        RateConfig {
            default_exchange_rate: self.exchange_rate,
            tax_rate: self.tax_rate,
            service_fee_rate: self.service_fee_rate,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            rust_log: "info".to_string(),
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            exchange_rate_url: None,
            tax_rate: DEFAULT_TAX_RATE,
            service_fee_rate: DEFAULT_SERVICE_FEE_RATE,
            anthropic_api_key: None,
            anthropic_api_url: None,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn rate_env(key: &str, default: f64) -> Result<f64> {
    match optional_env(key) {
        Some(raw) => parse_rate(key, &raw),
        None => Ok(default),
    }
}

fn parse_rate(key: &str, raw: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("{key} must be a number, got '{raw}'"))?;
    if !value.is_finite() || value < 0.0 {
        bail!("{key} must be a finite, non-negative number, got {value}");
    }
    Ok(value)
}
