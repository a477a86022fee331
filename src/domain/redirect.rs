// src/domain/redirect.rs
//
// Redirect rules live in an external table; this core only reads them.
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRule {
    pub source: String,
    pub destination: String,
}

#[async_trait]
pub trait RedirectRuleSource: Send + Sync {
    /// Exact-match lookup by source path.
    async fn find_by_source(&self, path: &str) -> DomainResult<Option<RedirectRule>>;
}
