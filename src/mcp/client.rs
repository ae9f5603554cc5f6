use std::env;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::{Value, json};

use super::error::{ProxyError, ProxyResult};

/// Used when neither an explicit URL nor `TODO_API_URL` is given.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Per-request timeout applied by [`ApiClient::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Body reported for calls the API answers with 204 No Content.
pub fn success_envelope() -> Value {
    json!({"message": "operation successful", "status": "success"})
}

/// HTTP client for the TodoList REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client with the default timeout
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. TODO_API_URL environment variable
    /// 3. Default: http://localhost:8000
    pub fn new(api_url: Option<String>) -> ProxyResult<Self> {
        Self::with_timeout(api_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(api_url: Option<String>, timeout: Duration) -> ProxyResult<Self> {
        let base_url = api_url
            .or_else(|| env::var("TODO_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ProxyError::ClientBuild { source })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.client.put(self.url(path))
    }

    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.client.patch(self.url(path))
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.client.delete(self.url(path))
    }

    /// Send a request and decode the reply.
    pub async fn send(request: RequestBuilder) -> ProxyResult<Value> {
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle API response with standardized error handling
    ///
    /// 204 becomes [`success_envelope`], any other 2xx must carry JSON.
    /// Non-success statuses become `ProxyError::Api` with the raw body text.
    pub async fn handle_response(response: Response) -> ProxyResult<Value> {
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(success_envelope());
        }

        if status.is_success() {
            let text = response.text().await?;
            Ok(serde_json::from_str(&text)?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ProxyError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
