// src/application/ports/cache.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Invalidation primitives of the edge cache tier. The edge is a derived,
/// disposable view; callers treat purge failures as a degraded state.
#[async_trait]
pub trait EdgeCache: Send + Sync {
    async fn purge_tags(&self, tags: &[String]) -> DomainResult<()>;
    async fn purge_path(&self, path: &str) -> DomainResult<()>;
}
