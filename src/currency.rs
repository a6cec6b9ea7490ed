//! Exchange-rate client for Frankfurter integration
//!
//! Looks up the USD-to-target conversion factor used to normalize the
//! user's budget. One best-effort attempt per submission; on any failure
//! the planner degrades to a 1:1 rate and surfaces a warning.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::config::CurrencyConfig;
use crate::models::CurrencyCode;
use crate::{Result, WanderMateError};

/// Resolves a currency code to a USD conversion rate
#[async_trait]
pub trait RateService: Send + Sync {
    /// USD-to-target conversion factor for the given currency, > 0
    async fn usd_rate(&self, currency: CurrencyCode) -> Result<f64>;
}

/// Exchange-rate client backed by the Frankfurter API (no API key)
pub struct CurrencyClient {
    client: Client,
    config: CurrencyConfig,
}

impl CurrencyClient {
    /// Create a new exchange-rate client
    pub fn new(config: CurrencyConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("WanderMate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WanderMateError::currency(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl RateService for CurrencyClient {
    #[instrument(skip(self))]
    async fn usd_rate(&self, currency: CurrencyCode) -> Result<f64> {
        // The upstream API rejects identical from/to pairs
        if currency == CurrencyCode::Usd {
            return Ok(1.0);
        }

        let url = format!(
            "{}/latest?from=USD&to={}",
            self.config.base_url,
            currency.as_str()
        );
        debug!("Exchange-rate request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WanderMateError::currency(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(WanderMateError::currency(format!(
                "Exchange-rate API returned status {}",
                response.status()
            )));
        }

        let body: frankfurter::RatesResponse = response.json().await.map_err(|e| {
            WanderMateError::currency(format!("Invalid exchange-rate response: {e}"))
        })?;

        let rate = body.rates.get(currency.as_str()).copied().ok_or_else(|| {
            WanderMateError::currency(format!("No rate for {} in response", currency))
        })?;

        if !rate.is_finite() || rate <= 0.0 {
            return Err(WanderMateError::currency(format!(
                "Invalid rate {rate} for {currency}"
            )));
        }

        info!("Resolved USD->{} rate: {}", currency, rate);
        Ok(rate)
    }
}

/// Frankfurter API response structures
mod frankfurter {
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Deserialize)]
    pub struct RatesResponse {
        pub base: String,
        pub rates: HashMap<String, f64>,
    }
}

#[cfg(test)]
mod tests {
    use super::frankfurter::RatesResponse;
    use super::*;

    #[test]
    fn test_parse_rates_response() {
        let json = r#"{
            "amount": 1.0,
            "base": "USD",
            "date": "2026-08-05",
            "rates": {"EUR": 0.9215}
        }"#;

        let parsed: RatesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.base, "USD");
        assert_eq!(parsed.rates.get("EUR"), Some(&0.9215));
    }

    #[tokio::test]
    async fn test_usd_short_circuits_without_network() {
        // Unroutable base URL proves no request is made for USD
        let config = CurrencyConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_seconds: 1,
        };
        let client = CurrencyClient::new(config).unwrap();
        let rate = client.usd_rate(CurrencyCode::Usd).await.unwrap();
        assert_eq!(rate, 1.0);
    }

    #[test]
    fn test_client_construction() {
        let client = CurrencyClient::new(CurrencyConfig::default());
        assert!(client.is_ok());
    }
}
