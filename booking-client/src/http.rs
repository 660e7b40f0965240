// booking-client/src/http.rs
// HTTP client - read-only access to the booking API

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Error body produced by the backend for 400/409 responses
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    error: String,
}

/// HTTP client trait
///
/// Only GET is needed: the back office never writes through this client.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `path` (absolute, starting with `/`) and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;

    fn base_url(&self) -> &str;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        if config.base_url.is_empty() {
            return Err(ClientError::Config("base_url must not be empty".into()));
        }
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            return Err(match status {
                StatusCode::NOT_FOUND => ClientError::NotFound(message),
                StatusCode::BAD_REQUEST => ClientError::Validation(message),
                StatusCode::CONFLICT => ClientError::Conflict(message),
                _ => ClientError::Api {
                    status: status.as_u16(),
                    message,
                },
            });
        }
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("{} ({})", e, status)))
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::trace!(url = %url, "GET");
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = NetworkHttpClient::new(&ClientConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.url("/api/restaurants"),
            "http://localhost:8080/api/restaurants"
        );
        assert_eq!(
            client.url("api/tables/restaurant/3"),
            "http://localhost:8080/api/tables/restaurant/3"
        );
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let err = NetworkHttpClient::new(&ClientConfig::new("")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
