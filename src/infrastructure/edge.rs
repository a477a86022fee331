// src/infrastructure/edge.rs
//
// Purge client for the edge cache tier's invalidation API.
use crate::application::ports::cache::EdgeCache;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use serde_json::json;

pub struct HttpEdgeCache {
    http: reqwest::Client,
    purge_url: String,
    token: String,
}

impl HttpEdgeCache {
    pub fn new(purge_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            purge_url: purge_url.into(),
            token: token.into(),
        }
    }

    async fn purge(&self, body: serde_json::Value) -> DomainResult<()> {
        let response = self
            .http
            .post(&self.purge_url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|err| DomainError::Upstream(format!("edge purge failed: {err}")))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(DomainError::Upstream(format!(
                "edge purge returned {status}"
            )))
        }
    }
}

#[async_trait]
impl EdgeCache for HttpEdgeCache {
    async fn purge_tags(&self, tags: &[String]) -> DomainResult<()> {
        self.purge(json!({ "tags": tags })).await
    }

    async fn purge_path(&self, path: &str) -> DomainResult<()> {
        self.purge(json!({ "paths": [path] })).await
    }
}
