// src/infrastructure/store/redirects.rs
use super::client::StoreClient;
use crate::domain::errors::DomainResult;
use crate::domain::redirect::{RedirectRule, RedirectRuleSource};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

const TABLE: &str = "redirect_rules";

#[derive(Clone)]
pub struct HttpRedirectRuleSource {
    client: Arc<StoreClient>,
}

impl HttpRedirectRuleSource {
    pub fn new(client: Arc<StoreClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct RedirectRuleRow {
    source: String,
    destination: String,
}

#[async_trait]
impl RedirectRuleSource for HttpRedirectRuleSource {
    async fn find_by_source(&self, path: &str) -> DomainResult<Option<RedirectRule>> {
        let rows: Vec<RedirectRuleRow> = self
            .client
            .select(
                TABLE,
                &[
                    ("select", "source,destination".to_string()),
                    ("source", format!("eq.{path}")),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next().map(|row| RedirectRule {
            source: row.source,
            destination: row.destination,
        }))
    }
}
