// src/application/cache/invalidation.rs
use crate::application::ports::cache::EdgeCache;
use crate::domain::article::ArticleId;
use crate::domain::category::CategoryId;
use std::sync::Arc;

/// Aggregate tag attached to every cached list view.
pub const TAG_ALL_ARTICLES: &str = "articles:all";

pub fn article_tag(id: ArticleId) -> String {
    format!("article:{id}")
}

pub fn category_tag(id: CategoryId) -> String {
    format!("category:{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    Article(ArticleId),
    Path(String),
    Home,
    Category(CategoryId),
}

/// Expands an invalidation into edge purges and applies them.
///
/// Purge failures are logged and swallowed: a stale cache is a tolerable
/// degraded state, and a successful write must not be reported as failed
/// because cache clearing failed.
pub struct CacheInvalidator {
    edge: Arc<dyn EdgeCache>,
}

impl CacheInvalidator {
    pub fn new(edge: Arc<dyn EdgeCache>) -> Self {
        Self { edge }
    }

    pub async fn invalidate(&self, invalidation: Invalidation) {
        match invalidation {
            // List views embed individual articles, so a single-article
            // change also clears the aggregate tag.
            Invalidation::Article(id) => {
                self.purge_tags(vec![article_tag(id), TAG_ALL_ARTICLES.to_string()])
                    .await;
            }
            Invalidation::Path(path) => {
                self.purge_path(&path).await;
            }
            Invalidation::Home => {
                self.purge_path("/").await;
                self.purge_tags(vec![TAG_ALL_ARTICLES.to_string()]).await;
            }
            Invalidation::Category(id) => {
                self.purge_tags(vec![category_tag(id), TAG_ALL_ARTICLES.to_string()])
                    .await;
            }
        }
    }

    /// Standard purge set after any article write or publish transition.
    pub async fn after_article_write(&self, id: ArticleId) {
        self.invalidate(Invalidation::Article(id)).await;
        self.invalidate(Invalidation::Home).await;
    }

    async fn purge_tags(&self, tags: Vec<String>) {
        if let Err(err) = self.edge.purge_tags(&tags).await {
            tracing::warn!(error = %err, ?tags, "edge tag purge failed");
        }
    }

    async fn purge_path(&self, path: &str) {
        if let Err(err) = self.edge.purge_path(path).await {
            tracing::warn!(error = %err, path, "edge path purge failed");
        }
    }
}
