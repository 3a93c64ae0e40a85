//! Carbon-accounting API client
//!
//! POSTs the answer set as JSON with a bearer token and reads a numeric
//! `total` (kg CO2e per year) from the response body.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{CarbonAccounting, ProviderError};
use crate::answers::AnswerSet;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct CarbonApiClient {
    client: Client,
    url: String,
    api_key: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct CarbonTotal {
    total: f64,
}

impl CarbonApiClient {
    pub fn new(url: &str, api_key: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
            api_key: api_key.to_string(),
            timeout,
        })
    }
}

fn validate_total(body: CarbonTotal) -> Result<f64, ProviderError> {
    if !body.total.is_finite() || body.total < 0.0 {
        return Err(ProviderError::Malformed(format!("invalid total {}", body.total)));
    }
    Ok(body.total)
}

#[async_trait]
impl CarbonAccounting for CarbonApiClient {
    async fn total_kg(&self, answers: &AnswerSet) -> Result<f64, ProviderError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(answers)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status, body));
        }

        let body: CarbonTotal = response
            .json()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, self.timeout))?;

        validate_total(body)
    }
}
