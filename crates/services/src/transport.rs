use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::ApiError;

/// The injected HTTP boundary.
///
/// Services speak to the backend only through this trait; the reqwest-backed
/// implementation below is the single place real networking happens, and
/// tests substitute [`crate::testing::FakeTransport`].
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Perform an authenticated GET and return the parsed JSON body.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError>;

    /// Perform an authenticated PATCH with an empty body.
    async fn patch(&self, path: &str) -> Result<Value, ApiError>;
}

/// reqwest-backed transport carrying session credentials in a cookie store.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Build a transport rooted at the given base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` when the underlying client cannot be built.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");
        let response = self.client.get(url.clone()).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "GET failed");
            return Err(ApiError::Status(status));
        }
        Ok(response.json().await?)
    }

    async fn patch(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.endpoint(path)?;
        debug!(%url, "PATCH");
        let response = self.client.patch(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "PATCH failed");
            return Err(ApiError::Status(status));
        }
        // Mutation endpoints report success/failure only; an empty body is fine.
        Ok(response.json().await.unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_relative_paths() {
        let transport =
            HttpTransport::new(Url::parse("https://api.example.com/v1/").unwrap()).unwrap();
        let url = transport.endpoint("/projects/3/progress").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/projects/3/progress");
    }
}
