//! HTTP client for the client REST operations
//!
//! Thin wrapper over reqwest that resolves operation names to URLs through
//! the injected [`EndpointsConfig`]. The error split mirrors the form's
//! failure taxonomy: a non-ok status becomes [`RequestError::Rejected`]
//! carrying the raw response body, everything else becomes
//! [`RequestError::Transport`].

use crate::config::EndpointsConfig;
use crate::core::client::{ClientId, ClientRecord};
use crate::core::error::RequestError;

/// Client for the REST operations consumed by the form controller
#[derive(Clone)]
pub struct ClientApi {
    http: reqwest::Client,
    endpoints: EndpointsConfig,
}

impl ClientApi {
    pub fn new(endpoints: EndpointsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints,
        }
    }

    /// Share an existing reqwest client (connection pool) across consumers
    pub fn with_http(http: reqwest::Client, endpoints: EndpointsConfig) -> Self {
        Self { http, endpoints }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Fetch all stored client records
    pub async fn fetch_all(&self) -> Result<Vec<ClientRecord>, RequestError> {
        let response = self.http.get(&self.endpoints.get_all_clients).send().await?;
        Self::decode(response).await
    }

    /// Create a new client record; returns the stored record with the
    /// server-assigned identifier
    pub async fn create(&self, record: &ClientRecord) -> Result<ClientRecord, RequestError> {
        let response = self
            .http
            .post(&self.endpoints.create_client)
            .json(record)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Overwrite the record stored under `id`
    pub async fn update(
        &self,
        id: &ClientId,
        record: &ClientRecord,
    ) -> Result<ClientRecord, RequestError> {
        let url = self.endpoints.update_url(id.as_str());
        let response = self.http.put(&url).json(record).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, RequestError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::Rejected { status, body });
        }

        Ok(response.json().await?)
    }
}
