//! HTTP Check Item Source

use async_trait::async_trait;
use checkform_core::{CheckSource, SourceError};
use checkform_types::{CheckItem, CheckResult};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Path serving the list of check items
pub const CHECKS_PATH: &str = "/checks";
/// Path accepting check results
pub const RESULTS_PATH: &str = "/checks/results";

/// HTTP client for a remote Check Item Source
#[derive(Debug, Clone)]
pub struct HttpCheckSource {
    client: Client,
    base_url: String,
}

impl HttpCheckSource {
    /// Create a client for `endpoint`.
    ///
    /// Without a timeout, a hung request waits indefinitely.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        let base_url = endpoint.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidEndpoint(endpoint.to_string()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl CheckSource for HttpCheckSource {
    async fn fetch_checks(&self) -> Result<Vec<CheckItem>, SourceError> {
        Ok(self.get::<Vec<CheckItem>>(CHECKS_PATH).await?)
    }

    async fn submit_check_results(
        &self,
        results: &[CheckResult],
    ) -> Result<Vec<CheckResult>, SourceError> {
        Ok(self.post::<_, Vec<CheckResult>>(RESULTS_PATH, results).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_normalization() {
        let source = HttpCheckSource::new("http://localhost:8080/", None).unwrap();
        assert_eq!(source.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        assert!(matches!(
            HttpCheckSource::new("localhost:8080", None),
            Err(ClientError::InvalidEndpoint(_))
        ));
    }
}
