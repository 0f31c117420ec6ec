//! HTTP client for making requests to the marketplace API

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Response wrapper used by every marketplace API endpoint
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,
    pub error: Option<ApiErrorBody>,
}

/// Server-provided error payload
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<String>,
    pub message: String,
}

/// Error type for API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("No data returned")]
    NoData,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// REST client for making requests
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    /// Create a client with authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Execute a GET request
    pub async fn get<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let req = self.authorize(self.client.get(self.url(path)));
        Self::decode(req.send().await?).await
    }

    /// Execute a POST request with a JSON body
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let req = self.authorize(self.client.post(self.url(path)).json(body));
        Self::decode(req.send().await?).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = &self.auth_token {
            req.header("Authorization", format!("Bearer {}", token))
        } else {
            req
        }
    }

    async fn decode<R>(response: reqwest::Response) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let status = response.status();

        let envelope: ApiEnvelope<R> = match response.json().await {
            Ok(envelope) => envelope,
            // Non-JSON error bodies (proxies, 502s) still need a message.
            Err(_) if !status.is_success() => {
                return Err(ApiError::Api(format!("server returned {}", status)))
            }
            Err(err) => return Err(ApiError::Network(err)),
        };

        if let Some(error) = envelope.error {
            return Err(ApiError::Api(error.message));
        }

        envelope.data.ok_or(ApiError::NoData)
    }
}

/// Create a client for server-side requests (direct to the marketplace API)
#[cfg(feature = "server")]
pub fn server_client() -> ApiClient {
    let url =
        std::env::var("AUCTION_API_URL").unwrap_or_else(|_| "http://localhost:8080/api".to_string());
    ApiClient::new(url)
}
