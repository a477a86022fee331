// src/application/commands/articles/update.rs
use super::{ArticleCommandService, capability::ensure_write_capability};
use crate::application::{dto::ArticleDto, error::{ApplicationError, ApplicationResult}};
use crate::domain::article::{
    ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, ArticleUpdate,
};
use chrono::{DateTime, Utc};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub slug: Option<String>,
    pub category_id: Option<i64>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        credential: Option<&str>,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_write_capability(self.capability.as_ref(), credential)?;

        let id = ArticleId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id}")))?;

        let now = self.clock.now();
        let mut update = ArticleUpdate::new(id, now);

        if let Some(title) = command.title {
            update.title = Some(ArticleTitle::new(title)?);
        }
        if let Some(body) = command.body {
            update.body = Some(ArticleBody::new(body)?);
        }

        if let Some(slug) = command.slug {
            let slug = ArticleSlug::new(slug)?;
            if slug != existing.slug && self.read_repo.slug_exists(&slug).await? {
                return Err(ApplicationError::conflict(format!(
                    "slug already in use: {slug}"
                )));
            }
            update.slug = Some(slug);
        }

        if command.category_id.is_some() || command.category.is_some() {
            let category_id = self
                .resolve_category(command.category_id, command.category.as_deref())
                .await?;
            update.category_id = Some(category_id);
        }

        if let Some(status) = command.status.as_deref() {
            let status = status.parse::<ArticleStatus>()?;
            match status {
                ArticleStatus::Draft => {
                    update.published_at = Some(None);
                }
                ArticleStatus::Published => {
                    let at = match command.published_at {
                        Some(at) if at > now => {
                            return Err(ApplicationError::validation(
                                "published_at cannot be in the future for a published article",
                            ));
                        }
                        Some(at) => at,
                        // Publishing a scheduled article early stamps the
                        // request moment, not the future scheduled time.
                        None => existing.published_at.filter(|at| *at <= now).unwrap_or(now),
                    };
                    update.published_at = Some(Some(at));
                }
                ArticleStatus::Scheduled => {
                    let at = command.published_at.ok_or_else(|| {
                        ApplicationError::validation(
                            "scheduled articles require a publish timestamp",
                        )
                    })?;
                    if at <= now {
                        return Err(ApplicationError::validation(
                            "scheduled publish timestamp must be in the future",
                        ));
                    }
                    update.published_at = Some(Some(at));
                }
            }
            update.status = Some(status);
        }

        if update.is_empty() {
            return Err(ApplicationError::validation("no fields to update"));
        }

        let updated = self.write_repo.update(update).await?;
        self.cache.after_article_write(updated.id).await;

        Ok(updated.into())
    }
}
