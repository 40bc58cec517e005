//! Client for the weather upstream's current-conditions endpoint.

use reqwest::Client;
use std::time::Duration;
use tracing::instrument;

use crate::error::WeatherError;
use crate::types::Units;

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    units: Units,
}

impl WeatherClient {
    /// Create a client against the given upstream base URL.
    ///
    /// The base URL is injectable so tests can point the client at a mock
    /// server.
    pub fn new(base_url: &str, api_key: &str, units: Units) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            units,
        })
    }

    /// Fetch current conditions for a city.
    ///
    /// On success the upstream body is returned as-is; callers forward it
    /// without reshaping.
    #[instrument(skip(self), level = "info")]
    pub async fn current_by_city(&self, city: &str) -> Result<serde_json::Value, WeatherError> {
        let url = format!(
            "{}/data/2.5/weather?q={}&appid={}&units={}",
            self.base_url,
            urlencoding::encode(city),
            self.api_key,
            self.units.as_query_value(),
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!(%status, city, "weather upstream returned non-success");
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::InvalidResponse(e.to_string()))
    }
}
