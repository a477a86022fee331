// src/infrastructure/store/client.rs
//
// Thin client for the upstream data store's REST interface (PostgREST
// dialect). Every call is an independent network round trip; the store's
// constraints are the final arbiter for uniqueness.
use crate::domain::errors::{DomainError, DomainResult};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl StoreClient {
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        }
    }

    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> DomainResult<Vec<T>> {
        let response = self
            .http
            .get(self.table_url(table))
            .query(query)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(transport)?;

        Self::read_rows(response).await
    }

    pub async fn insert<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> DomainResult<T> {
        let response = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        let mut rows: Vec<T> = Self::read_rows(response).await?;
        rows.pop()
            .ok_or_else(|| DomainError::Upstream("insert returned no representation".into()))
    }

    /// PATCH matching rows; returns the updated representations (possibly
    /// empty when the filter matched nothing).
    pub async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> DomainResult<Vec<T>> {
        let response = self
            .http
            .patch(self.table_url(table))
            .query(query)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        Self::read_rows(response).await
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{table}", self.base_url)
    }

    async fn read_rows<T: DeserializeOwned>(response: reqwest::Response) -> DomainResult<Vec<T>> {
        let status = response.status();
        if status.is_success() {
            return response.json::<Vec<T>>().await.map_err(transport);
        }

        let detail = response.text().await.unwrap_or_default();
        if status == StatusCode::CONFLICT || detail.contains("23505") {
            // Unique-constraint violation.
            Err(DomainError::Conflict(format!("store rejected write: {detail}")))
        } else {
            Err(DomainError::Upstream(format!("store returned {status}: {detail}")))
        }
    }
}

fn transport(err: reqwest::Error) -> DomainError {
    DomainError::Upstream(format!("store request failed: {err}"))
}
