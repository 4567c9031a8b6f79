//! HTTP client for the beer API.
//!
//! Every endpoint answers the `{success, data?, error?, message?}`
//! envelope; this client unwraps it and surfaces failures as
//! [`ApiError`] values carrying the server's own message.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

use cellar_core::{Beer, BeerInput, BeerStats};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Payload of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub timestamp: String,
    pub uptime: f64,
    pub environment: String,
}

/// A record plus the server's human-readable confirmation message.
pub struct Confirmed<T> {
    pub data: T,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[instrument(skip(self))]
    pub async fn list_beers(&self) -> Result<Vec<Beer>, ApiError> {
        let response = self.http.get(self.url("/beers")).send().await?;
        Ok(unwrap_envelope(response).await?.data)
    }

    #[instrument(skip(self))]
    pub async fn get_beer(&self, id: &str) -> Result<Beer, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/beers/{id}")))
            .send()
            .await?;
        Ok(unwrap_envelope(response).await?.data)
    }

    #[instrument(skip(self, input))]
    pub async fn create_beer(&self, input: &BeerInput) -> Result<Confirmed<Beer>, ApiError> {
        let response = self
            .http
            .post(self.url("/beers"))
            .json(input)
            .send()
            .await?;
        unwrap_envelope(response).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_beer(
        &self,
        id: &str,
        input: &BeerInput,
    ) -> Result<Confirmed<Beer>, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/beers/{id}")))
            .json(input)
            .send()
            .await?;
        unwrap_envelope(response).await
    }

    /// Returns the server's confirmation message.
    #[instrument(skip(self))]
    pub async fn delete_beer(&self, id: &str) -> Result<String, ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/beers/{id}")))
            .send()
            .await?;

        let confirmed: Confirmed<Option<Value>> = unwrap_envelope(response).await?;
        Ok(confirmed
            .message
            .unwrap_or_else(|| "Deleted".to_string()))
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<BeerStats, ApiError> {
        let response = self.http.get(self.url("/beers/stats")).send().await?;
        Ok(unwrap_envelope(response).await?.data)
    }

    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self.http.get(self.url("/health")).send().await?;
        Ok(unwrap_envelope(response).await?.data)
    }
}

/// Check the envelope and pull out `data` and `message`.
async fn unwrap_envelope<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Confirmed<T>, ApiError> {
    let status = response.status();
    let body: Value = response.json().await?;

    debug!(%status, "API response received");

    let success = body
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !status.is_success() || !success {
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: failure_message(&body, status),
        });
    }

    let data = serde_json::from_value(body.get("data").cloned().unwrap_or(Value::Null))?;
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(Confirmed { data, message })
}

/// The server's error text, with field details appended when present.
fn failure_message(body: &Value, status: StatusCode) -> String {
    let mut message = body
        .get("error")
        .and_then(Value::as_str)
        .or_else(|| body.get("message").and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| format!("server answered {status}"));

    if let Some(details) = body.get("details").and_then(Value::as_array) {
        for detail in details {
            if let Some(text) = detail.get("message").and_then(Value::as_str) {
                message.push_str("\n  ");
                message.push_str(text);
            }
        }
    }

    message
}
