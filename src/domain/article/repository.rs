use crate::domain::article::entity::{Article, ArticleListFilter, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ShortCode};
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn find_by_short_code(&self, code: &ShortCode) -> DomainResult<Option<Article>>;
    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool>;
    async fn short_code_exists(&self, code: &ShortCode) -> DomainResult<bool>;
    /// Published articles, newest first. Callers pass `limit + 1` to detect
    /// a following page without a count query.
    async fn list_published(
        &self,
        filter: ArticleListFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>>;
    async fn list_related(
        &self,
        exclude: ArticleId,
        category: CategoryId,
        limit: u32,
    ) -> DomainResult<Vec<Article>>;
    async fn list_popular(&self, limit: u32) -> DomainResult<Vec<Article>>;
    async fn search_published(&self, query: &str, limit: u32) -> DomainResult<Vec<Article>>;
    async fn list_due_scheduled(&self, now: DateTime<Utc>) -> DomainResult<Vec<Article>>;
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Assign a short code. The store's unique constraint on the code column
    /// is the final arbiter: a violation must surface as `Conflict`.
    async fn set_short_code(&self, id: ArticleId, code: &ShortCode) -> DomainResult<()>;
    /// Transition `scheduled -> published`. Returns `false` when the row was
    /// no longer scheduled (already swept or manually published).
    async fn mark_published(&self, id: ArticleId, now: DateTime<Utc>) -> DomainResult<bool>;
    async fn increment_views(&self, id: ArticleId) -> DomainResult<()>;
}
