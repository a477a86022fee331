// src/application/scheduler.rs
//
// Time-based `scheduled -> published` transition, driven by an external
// timer hitting the trigger endpoint. A swept publish must run the same
// invalidation path as a manual publish, or the new content stays invisible
// behind a stale cached response until natural expiry.
use crate::application::cache::{CacheInvalidator, Invalidation};
use crate::application::dto::SweepReport;
use crate::application::error::ApplicationResult;
use crate::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct PublishScheduler {
    read_repo: Arc<dyn ArticleReadRepository>,
    write_repo: Arc<dyn ArticleWriteRepository>,
    cache: Arc<CacheInvalidator>,
}

impl PublishScheduler {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        cache: Arc<CacheInvalidator>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            cache,
        }
    }

    /// Transition every past-due scheduled article. Idempotent: the
    /// `scheduled` filter excludes already-published rows on a re-run, and
    /// the store-side status guard covers a concurrent manual publish.
    pub async fn sweep_due(&self, now: DateTime<Utc>) -> ApplicationResult<SweepReport> {
        let due = self.read_repo.list_due_scheduled(now).await?;

        let mut ids = Vec::new();
        for article in due {
            if self.write_repo.mark_published(article.id, now).await? {
                self.cache.invalidate(Invalidation::Article(article.id)).await;
                ids.push(i64::from(article.id));
            }
        }

        if !ids.is_empty() {
            self.cache.invalidate(Invalidation::Home).await;
        }

        tracing::info!(count = ids.len(), "publish sweep complete");
        Ok(SweepReport {
            count: ids.len(),
            ids,
        })
    }
}
