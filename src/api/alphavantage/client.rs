use reqwest::Client as HttpClient;
use tracing::{info, warn};

use super::models::DailySeriesResponse;
use crate::models::PricePoint;
use crate::services::series_service;
use crate::utils::errors::DashboardError;

/// Alpha Vantage quote API client
#[derive(Debug)]
pub struct AlphaVantageClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
}

impl AlphaVantageClient {
    const DEFAULT_BASE_URL: &'static str = "https://www.alphavantage.co";

    /// Create a new client. An empty key fails up front with
    /// `MissingCredential` rather than on the first request.
    pub fn new(api_key: String) -> Result<Self, DashboardError> {
        if api_key.trim().is_empty() {
            return Err(DashboardError::MissingCredential);
        }
        Ok(Self {
            http_client: HttpClient::new(),
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, DashboardError> {
        let mut client = Self::new(api_key)?;
        client.base_url = base_url;
        Ok(client)
    }

    /// GET /query?function=TIME_SERIES_DAILY_ADJUSTED
    ///
    /// Fetch the full daily history for `symbol` and normalize it into an
    /// ascending series. Failure markers embedded in a 200 body (throttling
    /// notice, error message) are treated as fetch failures.
    pub async fn get_daily_series(
        &self,
        symbol: &str,
    ) -> Result<Vec<PricePoint>, DashboardError> {
        let url = format!("{}/query", self.base_url);
        info!("Fetching daily series for {} from {}", symbol, url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("function", "TIME_SERIES_DAILY_ADJUSTED"),
                ("symbol", symbol),
                ("outputsize", "full"),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Quote endpoint returned {} for {}", status, symbol);
            return Err(DashboardError::HttpStatus(status));
        }

        let body: DailySeriesResponse = response.json().await?;
        if let Some(marker) = body.failure_marker() {
            warn!("Quote endpoint rejected {}: {}", symbol, marker);
            return Err(DashboardError::ThrottledOrMalformed(marker.to_string()));
        }

        let series = series_service::normalize_daily_series(&body)?;
        info!("✓ Normalized {} points for {}", series.len(), symbol);
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_missing_credential() {
        let err = AlphaVantageClient::new("  ".to_string()).unwrap_err();
        assert!(matches!(err, DashboardError::MissingCredential));
    }

    #[test]
    fn base_url_override_keeps_the_key_check() {
        let err =
            AlphaVantageClient::with_base_url(String::new(), "http://localhost:1".to_string())
                .unwrap_err();
        assert!(matches!(err, DashboardError::MissingCredential));

        let client = AlphaVantageClient::with_base_url(
            "demo".to_string(),
            "http://localhost:1".to_string(),
        )
        .unwrap();
        assert_eq!(client.base_url, "http://localhost:1");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_failure() {
        // nothing listens on this port; the request itself must fail
        let client = AlphaVantageClient::with_base_url(
            "demo".to_string(),
            "http://127.0.0.1:9".to_string(),
        )
        .unwrap();
        let err = client.get_daily_series("VOO").await.unwrap_err();
        assert!(matches!(err, DashboardError::Transport(_)));
    }
}
