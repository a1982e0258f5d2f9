//! HTTP API client for the MyRSS server.

use myrss_shared::{
    AddFeedRequest, ApiError, ItemsPage, Label, MarkReadRequest, SubscriptionWithLabels,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

/// HTTP client for the MyRSS server.
///
/// With an empty base URL all paths are issued relative to the current
/// origin, which is the normal mode in the browser; desktop builds set
/// an absolute base URL instead. Authentication is a same-origin session
/// cookie handled by the transport, not by this client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
        }
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// Make a GET request expecting a JSON response
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let url = self.url(path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    /// Make a POST request with a JSON body, ignoring the response body.
    ///
    /// The server indicates success purely by status on these endpoints.
    pub async fn post_json<TReq: Serialize>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<(), ApiError> {
        let url = self.url(path);
        let body_bytes =
            serde_json::to_vec(body).map_err(|e| ApiError::Deserialize(e.to_string()))?;

        let resp = self
            .client
            .post(&url)
            .body(body_bytes)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        Ok(())
    }

    /// Make a POST request with a form-encoded body.
    ///
    /// Fields are encoded in order and a key may repeat (the labels
    /// endpoints take one `labels` field per label), which is why the
    /// body is built by hand rather than from a map.
    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(String, String)],
    ) -> Result<(), ApiError> {
        let url = self.url(path);
        let body = encode_form(fields);

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        Ok(())
    }

    // --- MyRSS endpoints ---

    /// Fetch one page of the item timeline
    pub async fn items_page(&self, page: i64) -> Result<ItemsPage, ApiError> {
        self.get_json(&format!("/api/items?page={page}")).await
    }

    /// Fetch the user's subscriptions with their labels
    pub async fn subscriptions(&self) -> Result<Vec<SubscriptionWithLabels>, ApiError> {
        self.get_json("/api/subscriptions").await
    }

    /// Fetch all of the user's labels
    pub async fn labels(&self) -> Result<Vec<Label>, ApiError> {
        self.get_json("/api/labels").await
    }

    /// Mark items as read on the server
    pub async fn mark_read(&self, request: &MarkReadRequest) -> Result<(), ApiError> {
        self.post_json("/api/items/mark-read", request).await
    }

    /// Submit the add-feed form
    pub async fn add_feed(&self, request: &AddFeedRequest) -> Result<(), ApiError> {
        self.post_form("/feeds/add", &request.form_fields()).await
    }

    /// Replace a subscription's labels
    pub async fn update_labels(
        &self,
        subscription_id: Uuid,
        labels: &[String],
    ) -> Result<(), ApiError> {
        let fields: Vec<(String, String)> = labels
            .iter()
            .map(|label| ("labels".to_string(), label.clone()))
            .collect();
        self.post_form(&format!("/feeds/{subscription_id}/labels"), &fields)
            .await
    }

    /// Unsubscribe from a feed
    pub async fn unsubscribe(&self, feed_id: Uuid) -> Result<(), ApiError> {
        self.post_form(&format!("/feeds/{feed_id}/unsubscribe"), &[])
            .await
    }

    /// Ask the server to re-fetch all of the user's feeds
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let url = self.url("/refresh");
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Http { status, body });
        }

        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn encode_form(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_relative_without_base() {
        let client = ApiClient::new();
        assert_eq!(client.url("/api/items"), "/api/items");
        assert_eq!(client.url("api/items"), "/api/items");
    }

    #[test]
    fn url_joins_base_without_double_slashes() {
        let client = ApiClient::new().with_base_url("http://localhost:8080/");
        assert_eq!(client.url("/refresh"), "http://localhost:8080/refresh");
        assert_eq!(
            client.url("api/items?page=2"),
            "http://localhost:8080/api/items?page=2"
        );
    }

    #[test]
    fn url_passes_absolute_urls_through() {
        let client = ApiClient::new().with_base_url("http://localhost:8080");
        assert_eq!(
            client.url("https://other.example/feed"),
            "https://other.example/feed"
        );
    }

    #[test]
    fn encode_form_repeats_keys_and_escapes_values() {
        let fields = vec![
            ("labels".to_string(), "rust lang".to_string()),
            ("labels".to_string(), "c&c".to_string()),
        ];
        assert_eq!(encode_form(&fields), "labels=rust%20lang&labels=c%26c");
    }

    #[test]
    fn encode_form_handles_empty_field_list() {
        assert_eq!(encode_form(&[]), "");
    }
}
