//! Exchange-rate sources.
//!
//! The calculator asks its source once at startup. Any failure here is
//! swallowed by the caller and replaced with the configured default.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum RateFetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate endpoint returned status {0}")]
    Status(u16),

    #[error("rate endpoint returned no rate")]
    MissingRate,

    #[error("rate endpoint returned an unusable rate: {0}")]
    InvalidRate(f64),
}

/// Somewhere to get the foreign-to-domestic conversion rate from.
#[async_trait]
pub trait ExchangeRateSource: Send + Sync {
    async fn fetch_rate(&self) -> Result<f64, RateFetchError>;
}

/// Returns a constant rate. Used when no rate endpoint is configured.
pub struct FixedRateSource(pub f64);

#[async_trait]
impl ExchangeRateSource for FixedRateSource {
    async fn fetch_rate(&self) -> Result<f64, RateFetchError> {
        Ok(self.0)
    }
}

#[derive(Debug, Deserialize)]
struct RateResponse {
    rate: Option<f64>,
}

/// Fetches `{"rate": <number>}` from an HTTP endpoint.
pub struct HttpRateSource {
    client: Client,
    url: String,
}

impl HttpRateSource {
    pub fn new(url: String) -> Result<Self, RateFetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl ExchangeRateSource for HttpRateSource {
    async fn fetch_rate(&self) -> Result<f64, RateFetchError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RateFetchError::Status(status.as_u16()));
        }

        let body: RateResponse = response.json().await?;
        let rate = body.rate.ok_or(RateFetchError::MissingRate)?;
        debug!("Fetched exchange rate {rate} from {}", self.url);
        check_rate(rate)
    }
}

/// A usable rate is finite and strictly positive.
pub fn check_rate(rate: f64) -> Result<f64, RateFetchError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(RateFetchError::InvalidRate(rate))
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    use super::*;
    use crate::pricing::{PriceCalculator, RateConfig};
    use crate::test_support::spawn_stub;

    async fn rate_stub() -> String {
        let router = Router::new()
            .route("/rate", get(|| async { Json(json!({"rate": 0.92})) }))
            .route("/zero", get(|| async { Json(json!({"rate": 0})) }))
            .route("/empty", get(|| async { Json(json!({"base": "JPY"})) }))
            .route(
                "/down",
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
            );
        spawn_stub(router).await
    }

    #[tokio::test]
    async fn test_fixed_source_returns_its_rate() {
        let source = FixedRateSource(0.9);
        assert_eq!(source.fetch_rate().await.unwrap(), 0.9);
    }

    #[test]
    fn test_check_rate_rejects_zero_negative_and_nan() {
        assert!(check_rate(0.0).is_err());
        assert!(check_rate(-0.9).is_err());
        assert!(check_rate(f64::NAN).is_err());
        assert!(check_rate(f64::INFINITY).is_err());
        assert_eq!(check_rate(0.92).unwrap(), 0.92);
    }

    #[test]
    fn test_rate_response_without_rate_field() {
        let body: RateResponse = serde_json::from_str(r#"{"base": "JPY"}"#).unwrap();
        assert!(body.rate.is_none());
    }

    #[tokio::test]
    async fn test_http_source_unreachable_host_errors() {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        let source = HttpRateSource::new("http://127.0.0.1:9/rate".to_string()).unwrap();
        assert!(source.fetch_rate().await.is_err());
    }

    #[tokio::test]
    async fn test_http_source_reads_rate() {
        let base = rate_stub().await;
        let source = HttpRateSource::new(format!("{base}/rate")).unwrap();
        assert_eq!(source.fetch_rate().await.unwrap(), 0.92);
    }

    #[tokio::test]
    async fn test_http_source_rejects_bad_responses() {
        let base = rate_stub().await;

        let down = HttpRateSource::new(format!("{base}/down")).unwrap();
        assert!(matches!(down.fetch_rate().await, Err(RateFetchError::Status(503))));

        let zero = HttpRateSource::new(format!("{base}/zero")).unwrap();
        assert!(matches!(zero.fetch_rate().await, Err(RateFetchError::InvalidRate(_))));

        let empty = HttpRateSource::new(format!("{base}/empty")).unwrap();
        assert!(matches!(empty.fetch_rate().await, Err(RateFetchError::MissingRate)));
    }

    #[tokio::test]
    async fn test_calculator_uses_fetched_rate_or_default() {
        let base = rate_stub().await;

        let fetched = HttpRateSource::new(format!("{base}/rate")).unwrap();
        let calc = PriceCalculator::initialize(&fetched, RateConfig::default()).await;
        assert_eq!(calc.exchange_rate(), 0.92);

        let zero = HttpRateSource::new(format!("{base}/zero")).unwrap();
        let calc = PriceCalculator::initialize(&zero, RateConfig::default()).await;
        assert_eq!(calc.exchange_rate(), 0.9);
    }
}
