// src/client.rs - Thin typed client over the item service endpoints

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::{ProbeError, Result};
use crate::model::{Item, ItemDraft, Statistic};

/// A captured HTTP response: the status code plus the raw body, with lazy
/// JSON accessors. Negative-path tests inspect the status directly; positive
/// paths parse the body into typed models.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    /// Require the status to be one of the accepted codes.
    pub fn require_status(&self, accepted: &[u16]) -> Result<&Self> {
        if accepted.contains(&self.status.as_u16()) {
            Ok(self)
        } else {
            Err(ProbeError::UnexpectedStatus {
                accepted: accepted.to_vec(),
                actual: self.status.as_u16(),
                body: self.body.clone(),
            })
        }
    }

    /// Parse the body as arbitrary JSON.
    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.body).map_err(|_| ProbeError::NonJsonBody {
            body: self.body.clone(),
        })
    }

    /// Parse the body as a single item.
    pub fn item(&self) -> Result<Item> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Parse the body as a sequence of items.
    pub fn items(&self) -> Result<Vec<Item>> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Parse the body as a sequence of statistic entries.
    pub fn statistics(&self) -> Result<Vec<Statistic>> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Client for the item service under test.
///
/// # Example
/// ```no_run
/// use itemprobe::{Config, ItemClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::from_env()?;
/// let client = ItemClient::new(&config)?;
/// let response = client.get_item("some-item-id").await?;
/// println!("status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ItemClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ItemClient {
    /// Create a client from the suite configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        let base_url = config.base_url()?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn capture(&self, response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status();
        let body = response.text().await?;
        debug!("← {} ({} bytes)", status, body.len());
        Ok(ApiResponse { status, body })
    }

    /// Create an item via the v1 endpoint (`POST /api/1/item`).
    pub async fn create_item(&self, draft: &ItemDraft) -> Result<ApiResponse> {
        self.post_json("api/1/item", &serde_json::to_value(draft)?)
            .await
    }

    /// Create an item via the v2 endpoint (`POST /api/2/item`).
    pub async fn create_item_v2(&self, draft: &ItemDraft) -> Result<ApiResponse> {
        self.post_json("api/2/item", &serde_json::to_value(draft)?)
            .await
    }

    /// Create an item from an arbitrary JSON body (`POST /api/1/item`).
    /// Used by negative tests to submit payloads a typed draft cannot
    /// express, such as a string-valued price.
    pub async fn create_item_raw(&self, body: &Value) -> Result<ApiResponse> {
        self.post_json("api/1/item", body).await
    }

    /// Fetch an item by id (`GET /api/1/item/{id}`).
    pub async fn get_item(&self, id: &str) -> Result<ApiResponse> {
        let url = self.endpoint(&format!("api/1/item/{}", id))?;
        debug!("→ GET {}", url);
        let response = self.http.get(url).send().await?;
        self.capture(response).await
    }

    /// List all items of one seller (`GET /api/1/{sellerID}/item`).
    pub async fn items_by_seller(&self, seller_id: u64) -> Result<ApiResponse> {
        let url = self.endpoint(&format!("api/1/{}/item", seller_id))?;
        debug!("→ GET {}", url);
        let response = self.http.get(url).send().await?;
        self.capture(response).await
    }

    /// Fetch the statistics sequence for an item (`GET /api/2/statistic/{id}`).
    pub async fn statistics(&self, id: &str) -> Result<ApiResponse> {
        let url = self.endpoint(&format!("api/2/statistic/{}", id))?;
        debug!("→ GET {}", url);
        let response = self.http.get(url).send().await?;
        self.capture(response).await
    }

    /// Delete an item via the v2 endpoint (`DELETE /api/2/item/{id}`).
    pub async fn delete_item_v2(&self, id: &str) -> Result<ApiResponse> {
        let url = self.endpoint(&format!("api/2/item/{}", id))?;
        debug!("→ DELETE {}", url);
        let response = self.http.delete(url).send().await?;
        self.capture(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        let url = self.endpoint(path)?;
        debug!("→ POST {}", url);
        let response = self.http.post(url).json(body).send().await?;
        self.capture(response).await
    }
}
