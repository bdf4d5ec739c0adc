//! API client for communicating with the Meetup REST API.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{AttendanceResponse, EventsResponse};

use super::{FetchError, RemoteEventService};

/// Base URL for the Meetup API
const API_BASE_URL: &str = "https://api.meetup.com";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while still failing fast.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for Meetup.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    /// Create a new API client with the given API key
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: API_BASE_URL.to_string(),
            api_key,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(url, status = %status, "response received");

        if !status.is_success() {
            return Err(FetchError::from_status(status, &text));
        }

        serde_json::from_str(&text)
            .map_err(|e| FetchError::Transport(format!("invalid response from {}: {}", url, e)))
    }
}

#[async_trait]
impl RemoteEventService for ApiClient {
    async fn events(&self, group: &str, status: &str) -> Result<EventsResponse, FetchError> {
        let url = format!("{}/2/events", self.base_url);
        self.get_json(&url, &[("group_urlname", group), ("status", status)])
            .await
    }

    async fn event_attendance(
        &self,
        group: &str,
        event_id: &str,
    ) -> Result<AttendanceResponse, FetchError> {
        let url = format!("{}/{}/events/{}/attendance", self.base_url, group, event_id);
        self.get_json(&url, &[]).await
    }
}
